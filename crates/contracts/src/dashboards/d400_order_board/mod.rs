//! d400: доска заказов администратора (поиск, фильтр, сортировка, сводка)

pub mod board;
pub mod query;
pub mod stats;

pub use board::OrderBoard;
pub use query::{OrderQuery, SortDirection, SortField};
pub use stats::OrderStats;
