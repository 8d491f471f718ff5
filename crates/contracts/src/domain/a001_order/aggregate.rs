use super::quantity::{pending_quantity, wire};
use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::order_status::OrderStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор заказа, выданный хранилищем (`_id`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.clone()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Line item
// ============================================================================

/// Строка заказа: позиция каталога и её количества
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Название позиции из каталога
    pub item: String,
    /// Заказанное количество
    #[serde(default, deserialize_with = "wire::quantity")]
    pub quantity: u32,
    /// Фактически полученное обратно количество
    #[serde(
        rename = "receivedQuantity",
        default,
        deserialize_with = "wire::quantity"
    )]
    pub received_quantity: u32,
}

impl OrderLine {
    pub fn new(item: impl Into<String>, quantity: u32) -> Self {
        Self {
            item: item.into(),
            quantity,
            received_quantity: 0,
        }
    }

    pub fn with_received(mut self, received_quantity: u32) -> Self {
        self.received_quantity = received_quantity;
        self
    }

    pub fn pending(&self) -> u32 {
        pending_quantity(self.quantity, self.received_quantity)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Заказ клиента в том виде, в каком его отдаёт хранилище
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub mobile: String,

    #[serde(default)]
    pub village: String,

    /// Дата мероприятия
    #[serde(default, deserialize_with = "wire::event_date")]
    pub date: DateTime<Utc>,

    #[serde(default, deserialize_with = "wire::list_or_null")]
    pub products: Vec<OrderLine>,

    #[serde(rename = "totalBill", default, deserialize_with = "wire::amount")]
    pub total_bill: f64,

    #[serde(default, deserialize_with = "wire::status")]
    pub status: OrderStatus,
}

/// Decodes a store listing document by document.
///
/// Returns the orders that decoded and one message per document that did not.
pub fn decode_orders(docs: Vec<Value>) -> (Vec<Order>, Vec<String>) {
    let mut orders = Vec::with_capacity(docs.len());
    let mut skipped = Vec::new();
    for (index, doc) in docs.into_iter().enumerate() {
        let id = doc.get("_id").and_then(Value::as_str).map(str::to_string);
        match serde_json::from_value::<Order>(doc) {
            Ok(order) => orders.push(order),
            Err(e) => skipped.push(match id {
                Some(id) => format!("order {id}: {e}"),
                None => format!("document #{index}: {e}"),
            }),
        }
    }
    (orders, skipped)
}

impl Order {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Сумма недополученного по всем строкам
    pub fn pending_total(&self) -> u32 {
        self.products.iter().map(OrderLine::pending).sum()
    }

    /// Строки с ненулевым заказанным количеством (для чека)
    pub fn ordered_lines(&self) -> impl Iterator<Item = &OrderLine> {
        self.products.iter().filter(|line| line.quantity > 0)
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn collection_name() -> &'static str {
        "order"
    }

    fn element_name() -> &'static str {
        "Order"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Тело `POST /api/order`: полный документ без `_id`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    pub name: String,
    pub mobile: String,
    pub village: String,
    pub date: DateTime<Utc>,
    pub products: Vec<OrderLine>,
    #[serde(rename = "totalBill")]
    pub total_bill: f64,
    pub status: OrderStatus,
}

/// Тело `PATCH /api/order/:id`: только изменённые поля
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OrderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<OrderLine>>,
}

impl OrderPatch {
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            products: None,
        }
    }

    pub fn products(products: Vec<OrderLine>) -> Self {
        Self {
            status: None,
            products: Some(products),
        }
    }

    pub fn products_and_status(products: Vec<OrderLine>, status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            products: Some(products),
        }
    }

    /// Applies the patch the way the store does: present fields replace,
    /// absent fields stay.
    pub fn apply_to(&self, order: &mut Order) {
        if let Some(status) = self.status {
            order.status = status;
        }
        if let Some(products) = &self.products {
            order.products = products.clone();
        }
    }
}
