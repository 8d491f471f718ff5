use super::aggregate::{Order, OrderId};
use crate::shared::config::BusinessProfile;
use chrono::NaiveDate;

/// Строка чека: только позиция и заказанное количество
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub item: String,
    pub quantity: u32,
}

/// Данные печатного чека по одному заказу
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub business: BusinessProfile,
    pub order_id: OrderId,
    pub customer_name: String,
    pub mobile: String,
    pub village: String,
    pub event_date: NaiveDate,
    pub lines: Vec<ReceiptLine>,
    pub total_bill: f64,
}

impl Receipt {
    /// Lines with a zero ordered quantity are left off; received and pending
    /// quantities never appear on a receipt.
    pub fn for_order(order: &Order, business: &BusinessProfile) -> Self {
        Self {
            business: business.clone(),
            order_id: order.id.clone(),
            customer_name: order.name.clone(),
            mobile: order.mobile.clone(),
            village: order.village.clone(),
            event_date: order.date.date_naive(),
            lines: order
                .ordered_lines()
                .map(|line| ReceiptLine {
                    item: line.item.clone(),
                    quantity: line.quantity,
                })
                .collect(),
            total_bill: order.total_bill,
        }
    }
}
