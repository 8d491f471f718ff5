//! In-memory Order Store and fixtures shared by the unit tests.

use crate::domain::a001_order::aggregate::{NewOrder, Order, OrderId, OrderLine, OrderPatch};
use crate::domain::a001_order::quantity::wire::parse_event_date;
use crate::enums::order_status::OrderStatus;
use crate::shared::store::{OrderStore, StoreError};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;

pub fn order(id: &str, name: &str, status: OrderStatus, total_bill: f64, date: &str) -> Order {
    Order {
        id: OrderId::new(id),
        name: name.to_string(),
        mobile: format!("98480{:05}", id.len() * 7),
        village: "Mangapet".to_string(),
        date: parse_event_date(date).expect("fixture date"),
        products: vec![OrderLine::new("బల్లలు", 10)],
        total_bill,
        status,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(NewOrder),
    Patch(OrderId, OrderPatch),
}

/// Хранилище в памяти: применяет записи как настоящий сервер и
/// запоминает каждый вызов.
#[derive(Default)]
pub struct MemoryStore {
    pub orders: RefCell<Vec<Order>>,
    pub calls: RefCell<Vec<Call>>,
    failures: RefCell<VecDeque<StoreError>>,
    list_failures: RefCell<VecDeque<StoreError>>,
}

impl MemoryStore {
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: RefCell::new(orders),
            ..Self::default()
        }
    }

    /// The next call of any kind fails with `error`
    pub fn fail_next(&self, error: StoreError) {
        self.failures.borrow_mut().push_back(error);
    }

    /// Only the next `list_orders` fails; writes go through
    pub fn fail_next_list(&self, error: StoreError) {
        self.list_failures.borrow_mut().push_back(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn take_failure(&self) -> Result<(), StoreError> {
        match self.failures.borrow_mut().pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl OrderStore for MemoryStore {
    async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        self.calls.borrow_mut().push(Call::List);
        self.take_failure()?;
        if let Some(error) = self.list_failures.borrow_mut().pop_front() {
            return Err(error);
        }
        Ok(self.orders.borrow().clone())
    }

    async fn create_order(&self, order: &NewOrder) -> Result<(), StoreError> {
        self.calls.borrow_mut().push(Call::Create(order.clone()));
        self.take_failure()?;
        let mut orders = self.orders.borrow_mut();
        let id = OrderId::new(format!("new-{}", orders.len() + 1));
        orders.push(Order {
            id,
            name: order.name.clone(),
            mobile: order.mobile.clone(),
            village: order.village.clone(),
            date: order.date,
            products: order.products.clone(),
            total_bill: order.total_bill,
            status: order.status,
        });
        Ok(())
    }

    async fn patch_order(&self, id: &OrderId, patch: &OrderPatch) -> Result<(), StoreError> {
        self.calls
            .borrow_mut()
            .push(Call::Patch(id.clone(), patch.clone()));
        self.take_failure()?;
        let mut orders = self.orders.borrow_mut();
        match orders.iter_mut().find(|o| &o.id == id) {
            Some(order) => {
                patch.apply_to(order);
                Ok(())
            }
            None => Err(StoreError::Rejected {
                status: 404,
                message: Some("Order not found".into()),
            }),
        }
    }
}
