//! HTTP implementation of the Order Store port (`/api/order`)

use crate::shared::api_utils::{
    api_url, collection_path, ensure_ok, item_path, transport_error, with_timeout,
};
use async_trait::async_trait;
use contracts::domain::a001_order::aggregate::{decode_orders, NewOrder, Order, OrderId, OrderPatch};
use contracts::domain::common::AggregateRoot;
use contracts::shared::config::StoreConfig;
use contracts::shared::store::{OrderStore, StoreError};
use gloo_net::http::Request;

#[derive(Debug, Clone)]
pub struct HttpOrderStore {
    base_url: String,
    timeout_ms: u32,
}

impl HttpOrderStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            timeout_ms: config.timeout_ms,
        }
    }

    fn url(&self, path: &str) -> String {
        api_url(&self.base_url, path)
    }
}

#[async_trait(?Send)]
impl OrderStore for HttpOrderStore {
    async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        let url = self.url(&collection_path(Order::collection_name()));
        log::debug!("GET {}", url);
        with_timeout(self.timeout_ms, async {
            let response = Request::get(&url)
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(transport_error)?;
            let docs = ensure_ok(response)
                .await?
                .json::<Vec<serde_json::Value>>()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))?;
            let (orders, skipped) = decode_orders(docs);
            for reason in &skipped {
                log::warn!("Skipping undecodable order: {}", reason);
            }
            Ok(orders)
        })
        .await
    }

    async fn create_order(&self, order: &NewOrder) -> Result<(), StoreError> {
        let url = self.url(&collection_path(Order::collection_name()));
        log::debug!("POST {}", url);
        with_timeout(self.timeout_ms, async {
            let response = Request::post(&url)
                .header("Accept", "application/json")
                .header("Content-Type", "application/json")
                .json(order)
                .map_err(|e| StoreError::Decode(format!("failed to serialize order: {}", e)))?
                .send()
                .await
                .map_err(transport_error)?;
            ensure_ok(response).await.map(|_| ())
        })
        .await
    }

    async fn patch_order(&self, id: &OrderId, patch: &OrderPatch) -> Result<(), StoreError> {
        let url = self.url(&item_path(Order::collection_name(), id.value()));
        log::debug!("PATCH {}", url);
        with_timeout(self.timeout_ms, async {
            let response = Request::patch(&url)
                .header("Accept", "application/json")
                .header("Content-Type", "application/json")
                .json(patch)
                .map_err(|e| StoreError::Decode(format!("failed to serialize patch: {}", e)))?
                .send()
                .await
                .map_err(transport_error)?;
            ensure_ok(response).await.map(|_| ())
        })
        .await
    }
}
