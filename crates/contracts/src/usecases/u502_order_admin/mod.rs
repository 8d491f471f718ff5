//! u502: действия администратора над заказами.
//!
//! Every write is followed by a full re-read; the returned list is the only
//! state the board keeps.

pub mod drafts;

use self::drafts::{QuantityDraft, ReceivedDraft};
use crate::domain::a001_order::aggregate::{Order, OrderId, OrderPatch};
use crate::enums::order_status::OrderStatus;
use crate::shared::store::{ActionError, OrderStore, StoreAction};

pub async fn load_orders<S>(store: &S) -> Result<Vec<Order>, ActionError>
where
    S: OrderStore + ?Sized,
{
    store
        .list_orders()
        .await
        .map_err(|e| ActionError::new(StoreAction::LoadOrders, e))
}

/// Patch, then reload. A failed reload is reported as a load failure.
async fn patch_then_reload<S>(
    store: &S,
    action: StoreAction,
    id: &OrderId,
    patch: &OrderPatch,
) -> Result<Vec<Order>, ActionError>
where
    S: OrderStore + ?Sized,
{
    store
        .patch_order(id, patch)
        .await
        .map_err(|e| ActionError::new(action, e))?;
    load_orders(store).await
}

/// Only the status travels; lines are left untouched
pub async fn mark_completed<S>(store: &S, id: &OrderId) -> Result<Vec<Order>, ActionError>
where
    S: OrderStore + ?Sized,
{
    let patch = OrderPatch::status(OrderStatus::Completed);
    patch_then_reload(store, StoreAction::UpdateStatus, id, &patch).await
}

pub async fn save_quantities<S>(store: &S, draft: &QuantityDraft) -> Result<Vec<Order>, ActionError>
where
    S: OrderStore + ?Sized,
{
    patch_then_reload(
        store,
        StoreAction::UpdateQuantities,
        &draft.order_id,
        &draft.to_patch(),
    )
    .await
}

pub async fn save_received<S>(store: &S, draft: &ReceivedDraft) -> Result<Vec<Order>, ActionError>
where
    S: OrderStore + ?Sized,
{
    patch_then_reload(
        store,
        StoreAction::UpdateReceived,
        &draft.order_id,
        &draft.to_patch(),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::aggregate::OrderLine;
    use crate::shared::store::StoreError;
    use crate::test_support::{order, Call, MemoryStore};

    fn store() -> MemoryStore {
        MemoryStore::with_orders(vec![
            order("a", "Ravi", OrderStatus::Pending, 500.0, "2025-01-10"),
            order("b", "Lakshmi", OrderStatus::Completed, 700.0, "2025-01-12"),
        ])
    }

    #[tokio::test]
    async fn test_mark_completed_patches_status_then_reloads() {
        let store = store();
        let orders = mark_completed(&store, &OrderId::new("a")).await.unwrap();

        assert_eq!(
            store.calls(),
            vec![
                Call::Patch(OrderId::new("a"), OrderPatch::status(OrderStatus::Completed)),
                Call::List,
            ]
        );
        assert!(orders.iter().all(|o| o.is_completed()));
        assert_eq!(orders[0].products, vec![OrderLine::new("బల్లలు", 10)]);
    }

    #[tokio::test]
    async fn test_failed_patch_skips_reload() {
        let store = store();
        store.fail_next(StoreError::Rejected {
            status: 500,
            message: None,
        });
        let err = mark_completed(&store, &OrderId::new("a")).await.unwrap_err();

        assert_eq!(err.action, StoreAction::UpdateStatus);
        assert_eq!(err.user_message(), "Failed to update order status: HTTP 500");
        assert_eq!(store.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_reload_is_a_load_failure() {
        let store = store();
        let draft = {
            let orders = store.orders.borrow();
            let mut draft = QuantityDraft::open(&orders[0]).unwrap();
            draft.set_quantity(0, "4");
            draft
        };
        store.fail_next_list(StoreError::Timeout { after_ms: 30_000 });

        let err = save_quantities(&store, &draft).await.unwrap_err();
        assert_eq!(err.action, StoreAction::LoadOrders);
        assert_eq!(err.user_message(), "Request timed out. Please try again.");
        // запись при этом уже применена
        assert_eq!(store.orders.borrow()[0].products[0].quantity, 4);
    }

    #[tokio::test]
    async fn test_save_received_sends_lines_and_status_together() {
        let store = store();
        let draft = {
            let orders = store.orders.borrow();
            let mut draft = ReceivedDraft::open(&orders[0]).unwrap();
            draft.set_received(0, "10");
            draft
        };
        let orders = save_received(&store, &draft).await.unwrap();

        assert_eq!(
            store.calls(),
            vec![
                Call::Patch(
                    OrderId::new("a"),
                    OrderPatch::products_and_status(
                        vec![OrderLine::new("బల్లలు", 10).with_received(10)],
                        OrderStatus::Completed,
                    ),
                ),
                Call::List,
            ]
        );
        assert_eq!(orders[0].status, OrderStatus::Completed);
        assert_eq!(orders[0].products[0].received_quantity, 10);
    }

    #[tokio::test]
    async fn test_unknown_order_is_rejected() {
        let store = store();
        let err = mark_completed(&store, &OrderId::new("zzz")).await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to update order status: Order not found");
    }

    #[tokio::test]
    async fn test_load_failure_is_tagged() {
        let store = store();
        store.fail_next(StoreError::Timeout { after_ms: 10 });
        let err = load_orders(&store).await.unwrap_err();
        assert_eq!(err.action, StoreAction::LoadOrders);
        assert_eq!(err.user_message(), "Request timed out. Please try again.");
    }
}
