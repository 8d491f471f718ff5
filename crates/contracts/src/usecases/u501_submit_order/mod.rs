//! u501: отправка нового заказа из формы клиента

pub mod form;
pub mod notice;

use self::form::{FormError, OrderForm};
use crate::domain::a001_order::aggregate::NewOrder;
use crate::shared::store::{ActionError, OrderStore, StoreAction};
use thiserror::Error;

/// Подтверждение, которое форма показывает после успешной отправки
pub const SUCCESS_MESSAGE: &str = "Order submitted successfully!";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error(transparent)]
    Store(#[from] ActionError),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(e) => e.to_string(),
            SubmitError::Store(e) => e.user_message(),
        }
    }
}

/// Validates the form and performs exactly one create call.
///
/// An invalid form never reaches the store. Nothing is cached locally: the
/// returned document is what was sent.
pub async fn submit_order<S>(store: &S, form: &OrderForm) -> Result<NewOrder, SubmitError>
where
    S: OrderStore + ?Sized,
{
    let order = form.to_new_order()?;
    store
        .create_order(&order)
        .await
        .map_err(|e| ActionError::new(StoreAction::SubmitOrder, e))?;
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::form::RequiredField;
    use super::*;
    use crate::shared::catalog::Catalog;
    use crate::shared::store::StoreError;
    use crate::test_support::{Call, MemoryStore};
    use chrono::NaiveDate;

    fn form() -> OrderForm {
        let mut form = OrderForm::new(
            &Catalog::default(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        );
        form.name = "Ramesh".into();
        form.mobile = "9000000001".into();
        form.village = "Mulugu".into();
        form.total_bill = "1800".into();
        form.set_quantity(13, "20");
        form.set_quantity(14, "1");
        form
    }

    #[tokio::test]
    async fn test_submit_performs_one_write() {
        let store = MemoryStore::default();
        let sent = submit_order(&store, &form()).await.unwrap();

        assert_eq!(sent.products.len(), 2);
        assert_eq!(store.calls(), vec![Call::Create(sent)]);
        assert_eq!(store.orders.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_store() {
        let store = MemoryStore::default();
        let mut form = form();
        form.name.clear();

        let err = submit_order(&store, &form).await.unwrap_err();
        assert_eq!(
            err,
            SubmitError::Invalid(FormError::MissingField(RequiredField::Name))
        );
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_timeout_reported_separately() {
        let store = MemoryStore::default();
        store.fail_next(StoreError::Timeout { after_ms: 30_000 });
        let err = submit_order(&store, &form()).await.unwrap_err();
        assert!(err
            .user_message()
            .starts_with("The server is taking longer than usual"));

        store.fail_next(StoreError::Rejected {
            status: 422,
            message: Some("mobile is invalid".into()),
        });
        let err = submit_order(&store, &form()).await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to submit order: mobile is invalid");
        assert!(store.orders.borrow().is_empty());
    }
}
