use super::query::OrderQuery;
use super::stats::OrderStats;
use crate::domain::a001_order::aggregate::{Order, OrderId};
use crate::domain::common::AggregateRoot;
use crate::shared::store::ActionError;

/// Состояние панели администратора.
///
/// Only the identity of the selected order is stored. Lookups always go
/// through the current list, so a re-fetch is immediately visible in the
/// detail view and an order that disappeared simply deselects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBoard {
    orders: Vec<Order>,
    error: Option<ActionError>,
    selected: Option<OrderId>,
}

impl OrderBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Takes the outcome of a load or a mutate-then-reload flow.
    /// A failure keeps the previously loaded list.
    pub fn apply(&mut self, result: Result<Vec<Order>, ActionError>) {
        match result {
            Ok(orders) => {
                self.orders = orders;
                self.error = None;
            }
            Err(error) => self.error = Some(error),
        }
    }

    pub fn error(&self) -> Option<&ActionError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ActionError::user_message)
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn select(&mut self, id: OrderId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&OrderId> {
        self.selected.as_ref()
    }

    pub fn selected_order(&self) -> Option<&Order> {
        let id = self.selected.as_ref()?;
        self.find(id)
    }

    pub fn find(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id() == id)
    }

    pub fn visible(&self, query: &OrderQuery) -> Vec<&Order> {
        query.apply(&self.orders)
    }

    pub fn stats(&self) -> OrderStats {
        OrderStats::compute(&self.orders)
    }
}
