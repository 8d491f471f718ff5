use crate::domain::a001_order::aggregate::Order;
use crate::enums::order_status::StatusFilter;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Date,
    TotalBill,
}

impl SortField {
    pub fn code(&self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::TotalBill => "totalBill",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Date => "Sort by Date",
            SortField::TotalBill => "Sort by Amount",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "date" => Some(SortField::Date),
            "totalBill" => Some(SortField::TotalBill),
            _ => None,
        }
    }

    pub fn all() -> Vec<SortField> {
        vec![SortField::Date, SortField::TotalBill]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Параметры отображения списка заказов.
///
/// The query never owns orders: [`OrderQuery::apply`] borrows the fetched
/// list and returns a new ordering of references into it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderQuery {
    pub search: String,
    pub status: StatusFilter,
    pub sort_field: SortField,
    pub direction: SortDirection,
}

impl OrderQuery {
    /// Case-insensitive substring match on name, mobile or village
    pub fn matches_search(&self, order: &Order) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        [&order.name, &order.mobile, &order.village]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    pub fn matches(&self, order: &Order) -> bool {
        self.matches_search(order) && self.status.matches(order.status)
    }

    fn compare(&self, a: &Order, b: &Order) -> Ordering {
        match self.sort_field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::TotalBill => a.total_bill.total_cmp(&b.total_bill),
        }
    }

    /// Search, then status filter, then a stable sort
    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        let mut visible: Vec<&Order> = orders.iter().filter(|o| self.matches(o)).collect();
        visible.sort_by(|a, b| {
            let cmp = self.compare(a, b);
            match self.direction {
                SortDirection::Ascending => cmp,
                SortDirection::Descending => cmp.reverse(),
            }
        });
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::order_status::OrderStatus;
    use crate::test_support::order;

    fn ids(list: &[&Order]) -> Vec<String> {
        list.iter().map(|o| o.to_string_id()).collect()
    }

    #[test]
    fn test_defaults() {
        let query = OrderQuery::default();
        assert_eq!(query.sort_field, SortField::Date);
        assert_eq!(query.direction, SortDirection::Descending);
        assert_eq!(query.status, StatusFilter::All);
        assert_eq!(query.direction.arrow(), "↓");
        assert_eq!(query.direction.toggled().arrow(), "↑");
    }

    #[test]
    fn test_search_any_field_case_insensitive() {
        let mut a = order("a", "Venkat Rao", OrderStatus::Pending, 1.0, "2025-01-01");
        a.village = "Eturnagaram".into();
        let mut b = order("b", "Suresh", OrderStatus::Pending, 1.0, "2025-01-01");
        b.mobile = "9440011223".into();
        let orders = vec![a, b];

        let mut query = OrderQuery::default();
        query.search = "VENKAT".into();
        assert_eq!(ids(&query.apply(&orders)), vec!["a"]);

        query.search = "turna".into();
        assert_eq!(ids(&query.apply(&orders)), vec!["a"]);

        query.search = "94400".into();
        assert_eq!(ids(&query.apply(&orders)), vec!["b"]);

        query.search = String::new();
        assert_eq!(query.apply(&orders).len(), 2);
    }

    #[test]
    fn test_search_term_is_matched_verbatim() {
        let a = order("a", "Venkat Rao", OrderStatus::Pending, 1.0, "2025-01-01");
        let b = order("b", "Suresh", OrderStatus::Pending, 1.0, "2025-01-01");
        let orders = vec![a, b];

        let mut query = OrderQuery::default();
        query.search = " ".into();
        assert_eq!(ids(&query.apply(&orders)), vec!["a"]);

        query.search = " suresh".into();
        assert!(query.apply(&orders).is_empty());
    }

    #[test]
    fn test_status_filter() {
        let orders = vec![
            order("a", "A", OrderStatus::Pending, 1.0, "2025-01-01"),
            order("b", "B", OrderStatus::Completed, 1.0, "2025-01-02"),
        ];
        let query = OrderQuery {
            status: StatusFilter::Only(OrderStatus::Completed),
            ..OrderQuery::default()
        };
        assert_eq!(ids(&query.apply(&orders)), vec!["b"]);
    }

    #[test]
    fn test_sort_by_total_bill() {
        let orders = vec![
            order("a", "A", OrderStatus::Pending, 100.0, "2025-01-01"),
            order("b", "B", OrderStatus::Pending, 50.0, "2025-01-01"),
            order("c", "C", OrderStatus::Pending, 200.0, "2025-01-01"),
        ];
        let mut query = OrderQuery {
            sort_field: SortField::TotalBill,
            ..OrderQuery::default()
        };
        let bills: Vec<f64> = query.apply(&orders).iter().map(|o| o.total_bill).collect();
        assert_eq!(bills, vec![200.0, 100.0, 50.0]);

        query.direction = SortDirection::Ascending;
        let bills: Vec<f64> = query.apply(&orders).iter().map(|o| o.total_bill).collect();
        assert_eq!(bills, vec![50.0, 100.0, 200.0]);
    }

    #[test]
    fn test_sort_by_date_ascending_and_stable_ties() {
        let orders = vec![
            order("late", "A", OrderStatus::Pending, 1.0, "2025-03-01"),
            order("tie1", "B", OrderStatus::Pending, 1.0, "2025-01-15"),
            order("early", "C", OrderStatus::Pending, 1.0, "2024-12-31"),
            order("tie2", "D", OrderStatus::Pending, 1.0, "2025-01-15"),
        ];
        let mut query = OrderQuery {
            direction: SortDirection::Ascending,
            ..OrderQuery::default()
        };
        assert_eq!(ids(&query.apply(&orders)), vec!["early", "tie1", "tie2", "late"]);

        query.direction = SortDirection::Descending;
        assert_eq!(ids(&query.apply(&orders)), vec!["late", "tie1", "tie2", "early"]);
    }

    #[test]
    fn test_apply_leaves_source_untouched() {
        let orders = vec![
            order("a", "A", OrderStatus::Pending, 1.0, "2025-01-01"),
            order("b", "B", OrderStatus::Pending, 2.0, "2025-01-02"),
        ];
        let before = orders.clone();
        let _ = OrderQuery::default().apply(&orders);
        assert_eq!(orders, before);
    }

    #[test]
    fn test_sort_field_codes() {
        for field in SortField::all() {
            assert_eq!(SortField::from_code(field.code()), Some(field));
        }
    }
}
