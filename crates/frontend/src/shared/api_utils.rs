//! HTTP helpers for talking to the Order Store
//!
//! Every request is raced against a client-side deadline; non-2xx responses
//! are turned into [`StoreError::Rejected`] carrying the store's own message
//! when it sent one.

use contracts::shared::store::StoreError;
use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::Response;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;

/// Join the configured store base with an API path
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("https://store.example", "/api/order");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// `/api/{collection}`
pub fn collection_path(collection: &str) -> String {
    format!("/api/{}", collection)
}

/// Path of a single record; the id is percent-encoded
pub fn item_path(collection: &str, id: &str) -> String {
    format!("/api/{}/{}", collection, urlencoding::encode(id))
}

/// Runs `request` to completion or fails with a timeout after `timeout_ms`.
///
/// The losing future is dropped; the browser request itself is not aborted.
pub async fn with_timeout<T, F>(timeout_ms: u32, request: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    let deadline = TimeoutFuture::new(timeout_ms);
    pin_mut!(request, deadline);
    match select(request, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(StoreError::Timeout {
            after_ms: timeout_ms,
        }),
    }
}

pub fn transport_error(error: gloo_net::Error) -> StoreError {
    StoreError::Transport(error.to_string())
}

/// Passes 2xx responses through, otherwise reads the body for a reason
pub async fn ensure_ok(response: Response) -> Result<Response, StoreError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Rejected {
        status,
        message: error_message(&body),
    })
}

/// Достаёт текст ошибки из тела вида `{"message": "..."}` или `{"error": "..."}`
pub fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(
            api_url("https://store.example/", "/api/order"),
            "https://store.example/api/order"
        );
    }

    #[test]
    fn test_paths() {
        assert_eq!(collection_path("order"), "/api/order");
        assert_eq!(item_path("order", "65f0a1"), "/api/order/65f0a1");
        assert_eq!(item_path("order", "a b/c"), "/api/order/a%20b%2Fc");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"message":"Order not found"}"#),
            Some("Order not found".to_string())
        );
        assert_eq!(
            error_message(r#"{"error":"bad request"}"#),
            Some("bad request".to_string())
        );
        assert_eq!(error_message(r#"{"message":"  "}"#), None);
        assert_eq!(error_message("<html>502 Bad Gateway</html>"), None);
        assert_eq!(error_message(""), None);
    }
}
