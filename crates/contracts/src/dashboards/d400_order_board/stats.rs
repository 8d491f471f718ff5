use crate::domain::a001_order::aggregate::Order;
use crate::enums::order_status::OrderStatus;

/// Сводка по всем загруженным заказам, без учёта фильтров
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub total_revenue: f64,
}

impl OrderStats {
    pub fn compute(orders: &[Order]) -> Self {
        orders.iter().fold(Self::default(), |mut stats, order| {
            stats.total += 1;
            match order.status {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::Completed => stats.completed += 1,
            }
            stats.total_revenue += order.total_bill;
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::order;

    #[test]
    fn test_stats_over_full_set() {
        let orders = vec![
            order("1", "A", OrderStatus::Pending, 100.0, "2025-01-01"),
            order("2", "B", OrderStatus::Completed, 200.0, "2025-01-02"),
            order("3", "C", OrderStatus::Pending, 300.0, "2025-01-03"),
            order("4", "D", OrderStatus::Completed, 400.0, "2025-01-04"),
            order("5", "E", OrderStatus::Completed, 500.0, "2025-01-05"),
        ];
        let stats = OrderStats::compute(&orders);
        assert_eq!(
            stats,
            OrderStats {
                total: 5,
                pending: 2,
                completed: 3,
                total_revenue: 1500.0,
            }
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(OrderStats::compute(&[]), OrderStats::default());
    }
}
