//! Рабочие копии строк заказа для модальных окон администратора

use crate::domain::a001_order::aggregate::{Order, OrderId, OrderLine, OrderPatch};
use crate::domain::a001_order::quantity::{clamp_received, parse_quantity, pending_quantity};
use crate::enums::order_status::OrderStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityDraftLine {
    pub item: String,
    /// Free-form text, normalized only when the patch is built
    pub quantity: String,
    pub received_quantity: u32,
}

/// Правка заказанных количеств до выдачи
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityDraft {
    pub order_id: OrderId,
    pub lines: Vec<QuantityDraftLine>,
}

impl QuantityDraft {
    /// Only pending orders can be edited
    pub fn open(order: &Order) -> Option<Self> {
        if order.status != OrderStatus::Pending {
            return None;
        }
        Some(Self {
            order_id: order.id.clone(),
            lines: order
                .products
                .iter()
                .map(|line| QuantityDraftLine {
                    item: line.item.clone(),
                    quantity: line.quantity.to_string(),
                    received_quantity: line.received_quantity,
                })
                .collect(),
        })
    }

    pub fn set_quantity(&mut self, index: usize, text: &str) {
        if let Some(line) = self.lines.get_mut(index) {
            line.quantity = text.to_string();
        }
    }

    /// Replaces the whole line list; status is left alone
    pub fn to_patch(&self) -> OrderPatch {
        OrderPatch::products(
            self.lines
                .iter()
                .map(|line| {
                    let quantity = parse_quantity(&line.quantity);
                    OrderLine::new(line.item.clone(), quantity)
                        .with_received(line.received_quantity.min(quantity))
                })
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedDraftLine {
    pub item: String,
    pub ordered: u32,
    pub received: u32,
}

impl ReceivedDraftLine {
    pub fn pending(&self) -> u32 {
        pending_quantity(self.ordered, self.received)
    }
}

/// Сверка фактически возвращённых количеств
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedDraft {
    pub order_id: OrderId,
    pub lines: Vec<ReceivedDraftLine>,
}

impl ReceivedDraft {
    /// Completed orders are closed for reconciliation
    pub fn open(order: &Order) -> Option<Self> {
        if order.is_completed() {
            return None;
        }
        Some(Self {
            order_id: order.id.clone(),
            lines: order
                .products
                .iter()
                .map(|line| ReceivedDraftLine {
                    item: line.item.clone(),
                    ordered: line.quantity,
                    received: line.received_quantity.min(line.quantity),
                })
                .collect(),
        })
    }

    /// Clamps the typed value to `0..=ordered` and returns what was stored
    pub fn set_received(&mut self, index: usize, raw: &str) -> Option<u32> {
        let line = self.lines.get_mut(index)?;
        line.received = clamp_received(raw, line.ordered);
        Some(line.received)
    }

    /// `completed` exactly when nothing is pending on any line
    pub fn resulting_status(&self) -> OrderStatus {
        if self.lines.iter().all(|line| line.pending() == 0) {
            OrderStatus::Completed
        } else {
            OrderStatus::Pending
        }
    }

    /// Lines and status travel together in one partial update
    pub fn to_patch(&self) -> OrderPatch {
        OrderPatch::products_and_status(
            self.lines
                .iter()
                .map(|line| OrderLine::new(line.item.clone(), line.ordered).with_received(line.received))
                .collect(),
            self.resulting_status(),
        )
    }
}
