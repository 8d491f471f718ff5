//! Port to the external Order Store and the error taxonomy of every call made
//! through it.

use crate::domain::a001_order::aggregate::{NewOrder, Order, OrderId, OrderPatch};
use async_trait::async_trait;
use thiserror::Error;

/// Ошибка обращения к хранилищу заказов.
///
/// Only two categories matter to the user: [`StoreError::is_timeout`] and
/// everything else.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("request timed out after {after_ms} ms")]
    Timeout { after_ms: u32 },
    #[error("store rejected the request (HTTP {status})")]
    Rejected { status: u16, message: Option<String> },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, StoreError::Timeout { .. })
    }

    /// Причина для пользователя: сообщение хранилища, если оно есть
    pub fn reason(&self) -> String {
        match self {
            StoreError::Timeout { .. } => "request timed out".to_string(),
            StoreError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            StoreError::Rejected { status, .. } => format!("HTTP {}", status),
            StoreError::Transport(message) => message.clone(),
            StoreError::Decode(message) => format!("unexpected response: {}", message),
        }
    }
}

/// Какое действие пользователя выполнялось, когда случилась ошибка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    LoadOrders,
    SubmitOrder,
    UpdateStatus,
    UpdateQuantities,
    UpdateReceived,
}

impl StoreAction {
    pub fn failure_prefix(&self) -> &'static str {
        match self {
            StoreAction::LoadOrders => "Failed to load orders",
            StoreAction::SubmitOrder => "Failed to submit order",
            StoreAction::UpdateStatus => "Failed to update order status",
            StoreAction::UpdateQuantities => "Failed to update order quantities",
            StoreAction::UpdateReceived => "Failed to update received quantities",
        }
    }

    pub fn timeout_message(&self) -> &'static str {
        match self {
            StoreAction::SubmitOrder => {
                "The server is taking longer than usual to respond. Please try again in a few moments."
            }
            _ => "Request timed out. Please try again.",
        }
    }
}

impl std::fmt::Display for StoreAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StoreAction::LoadOrders => "load orders",
            StoreAction::SubmitOrder => "submit order",
            StoreAction::UpdateStatus => "update status",
            StoreAction::UpdateQuantities => "update quantities",
            StoreAction::UpdateReceived => "update received quantities",
        };
        f.write_str(name)
    }
}

/// Store failure tagged with the action that triggered it
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{action}: {source}")]
pub struct ActionError {
    pub action: StoreAction,
    #[source]
    pub source: StoreError,
}

impl ActionError {
    pub fn new(action: StoreAction, source: StoreError) -> Self {
        Self { action, source }
    }

    pub fn is_timeout(&self) -> bool {
        self.source.is_timeout()
    }

    /// Текст, который видит пользователь
    pub fn user_message(&self) -> String {
        if self.source.is_timeout() {
            self.action.timeout_message().to_string()
        } else {
            format!("{}: {}", self.action.failure_prefix(), self.source.reason())
        }
    }
}

/// REST contract of the Order Store (`/api/order`).
///
/// Writes report success only: callers never keep what the store echoes back
/// and re-read the full list instead.
#[async_trait(?Send)]
pub trait OrderStore {
    /// `GET /api/order`
    async fn list_orders(&self) -> Result<Vec<Order>, StoreError>;

    /// `POST /api/order`
    async fn create_order(&self, order: &NewOrder) -> Result<(), StoreError>;

    /// `PATCH /api/order/:id`
    async fn patch_order(&self, id: &OrderId, patch: &OrderPatch) -> Result<(), StoreError>;
}
