//! Shared contracts of the order desk: the order document as the Order Store
//! sees it, the quantity arithmetic, form and draft state, and the async flows
//! the UI drives against an [`shared::store::OrderStore`].
//!
//! Nothing here touches the browser, so everything is unit-tested natively.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;

#[cfg(test)]
pub(crate) mod test_support;
