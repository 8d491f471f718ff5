use crate::domain::a001_order::aggregate::{NewOrder, OrderLine};
use crate::domain::a001_order::quantity::{is_digits_only, parse_quantity, wire};
use crate::enums::order_status::OrderStatus;
use crate::shared::catalog::Catalog;
use chrono::NaiveDate;
use thiserror::Error;

/// Обязательные поля формы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Mobile,
    Village,
    TotalBill,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Name => "Customer name",
            RequiredField::Mobile => "Mobile number",
            RequiredField::Village => "Village",
            RequiredField::TotalBill => "Total bill amount",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    MissingField(RequiredField),
    #[error("Event date '{0}' is not a valid date")]
    InvalidDate(String),
    #[error("Total bill '{0}' is not a valid amount")]
    InvalidTotal(String),
}

/// Строка таблицы позиций: название из каталога и введённый текст количества
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityEntry {
    pub item: String,
    pub quantity: String,
}

/// Состояние формы заказа.
///
/// Values are kept as the text the inputs hold; conversion happens once, in
/// [`OrderForm::to_new_order`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    pub name: String,
    pub mobile: String,
    pub village: String,
    /// `YYYY-MM-DD`, the value format of `<input type="date">`
    pub date: String,
    pub lines: Vec<QuantityEntry>,
    pub total_bill: String,
}

impl OrderForm {
    /// One empty row per catalog item, in catalog order
    pub fn new(catalog: &Catalog, today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            mobile: String::new(),
            village: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            lines: catalog
                .items()
                .iter()
                .map(|item| QuantityEntry {
                    item: item.clone(),
                    quantity: String::new(),
                })
                .collect(),
            total_bill: String::new(),
        }
    }

    /// Back to the empty state, keeping the catalog rows
    pub fn reset(&mut self, today: NaiveDate) {
        self.name.clear();
        self.mobile.clear();
        self.village.clear();
        self.date = today.format("%Y-%m-%d").to_string();
        self.total_bill.clear();
        for line in &mut self.lines {
            line.quantity.clear();
        }
    }

    /// Accepts digits only; anything else leaves the previous text in place.
    /// Returns whether the value was taken.
    pub fn set_quantity(&mut self, index: usize, value: &str) -> bool {
        if !is_digits_only(value) {
            return false;
        }
        match self.lines.get_mut(index) {
            Some(line) => {
                line.quantity = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let required = [
            (RequiredField::Name, &self.name),
            (RequiredField::Mobile, &self.mobile),
            (RequiredField::Village, &self.village),
            (RequiredField::TotalBill, &self.total_bill),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(field));
            }
        }
        self.event_date()?;
        self.total_amount()?;
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Rows the customer actually filled in, in catalog order
    pub fn entered_lines(&self) -> Vec<OrderLine> {
        self.lines
            .iter()
            .filter(|line| !line.quantity.is_empty())
            .map(|line| OrderLine::new(line.item.clone(), parse_quantity(&line.quantity)))
            .collect()
    }

    /// Документ для `POST /api/order`, всегда со статусом `pending`
    pub fn to_new_order(&self) -> Result<NewOrder, FormError> {
        self.validate()?;
        let date = wire::parse_event_date(&self.date)
            .ok_or_else(|| FormError::InvalidDate(self.date.clone()))?;
        Ok(NewOrder {
            name: self.name.trim().to_string(),
            mobile: self.mobile.trim().to_string(),
            village: self.village.trim().to_string(),
            date,
            products: self.entered_lines(),
            total_bill: self.total_amount()?,
            status: OrderStatus::Pending,
        })
    }

    fn event_date(&self) -> Result<NaiveDate, FormError> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate(self.date.clone()))
    }

    fn total_amount(&self) -> Result<f64, FormError> {
        match self.total_bill.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
            _ => Err(FormError::InvalidTotal(self.total_bill.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    fn filled_form() -> OrderForm {
        let mut form = OrderForm::new(&Catalog::default(), today());
        form.name = "Srinivas".into();
        form.mobile = "9848012345".into();
        form.village = "Cherupalle".into();
        form.total_bill = "2500".into();
        form
    }

    #[test]
    fn test_new_form_has_one_row_per_catalog_item() {
        let catalog = Catalog::default();
        let form = OrderForm::new(&catalog, today());
        assert_eq!(form.lines.len(), catalog.items().len());
        assert_eq!(form.lines[0].item, "100kgs");
        assert!(form.lines.iter().all(|l| l.quantity.is_empty()));
        assert_eq!(form.date, "2025-05-20");
    }

    #[test]
    fn test_non_digit_keystroke_is_rejected() {
        let mut form = filled_form();
        assert!(form.set_quantity(3, "12"));
        assert!(!form.set_quantity(3, "12a"));
        assert!(!form.set_quantity(3, "-1"));
        assert_eq!(form.lines[3].quantity, "12");
        assert!(form.set_quantity(3, ""));
        assert_eq!(form.lines[3].quantity, "");
        assert!(!form.set_quantity(999, "1"));
    }

    #[test]
    fn test_only_entered_lines_are_submitted() {
        let mut form = filled_form();
        form.set_quantity(4, "3");
        form.set_quantity(20, "15");

        let order = form.to_new_order().unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.products.len(), 2);
        assert_eq!(order.products[0], OrderLine::new("50kgs", 3));
        assert_eq!(order.products[1], OrderLine::new("కార్పెట్స్", 15));
        assert_eq!(order.total_bill, 2500.0);
        assert_eq!(order.date.to_rfc3339(), "2025-05-20T00:00:00+00:00");
    }

    #[test]
    fn test_zero_is_an_entered_quantity() {
        let mut form = filled_form();
        form.set_quantity(0, "0");
        assert_eq!(form.entered_lines(), vec![OrderLine::new("100kgs", 0)]);
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled_form();
        form.village = "   ".into();
        assert_eq!(
            form.validate(),
            Err(FormError::MissingField(RequiredField::Village))
        );
        assert!(!form.is_valid());

        let mut form = filled_form();
        form.total_bill.clear();
        assert_eq!(
            form.to_new_order(),
            Err(FormError::MissingField(RequiredField::TotalBill))
        );
    }

    #[test]
    fn test_invalid_date_and_total() {
        let mut form = filled_form();
        form.date = "20/05/2025".into();
        assert!(matches!(form.validate(), Err(FormError::InvalidDate(_))));

        let mut form = filled_form();
        form.total_bill = "-10".into();
        assert!(matches!(form.validate(), Err(FormError::InvalidTotal(_))));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = filled_form();
        form.set_quantity(1, "9");
        form.reset(today());
        assert_eq!(form, OrderForm::new(&Catalog::default(), today()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FormError::MissingField(RequiredField::Mobile).to_string(),
            "Mobile number is required"
        );
    }
}
