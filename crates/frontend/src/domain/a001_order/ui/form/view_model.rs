use crate::domain::a001_order::api::HttpOrderStore;
use crate::shared::date_utils::today;
use contracts::shared::config::AppConfig;
use contracts::usecases::u501_submit_order::form::OrderForm;
use contracts::usecases::u501_submit_order::notice::Notice;
use contracts::usecases::u501_submit_order::{submit_order, SUCCESS_MESSAGE};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// ViewModel формы заказа клиента
#[derive(Clone, Copy)]
pub struct OrderFormViewModel {
    pub form: RwSignal<OrderForm>,
    pub is_submitting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Notice>,
    store: StoredValue<HttpOrderStore>,
    notice_ms: u32,
}

impl OrderFormViewModel {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            form: RwSignal::new(OrderForm::new(&config.catalog, today())),
            is_submitting: RwSignal::new(false),
            error: RwSignal::new(None),
            notice: RwSignal::new(Notice::default()),
            store: StoredValue::new(HttpOrderStore::new(&config.store)),
            notice_ms: config.form.notice_ms,
        }
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + Copy + 'static {
        let form = self.form;
        move || form.with(|f| f.is_valid())
    }

    /// Always notifies, so a rejected keystroke re-renders the previous text
    pub fn set_quantity(&self, index: usize, value: String) {
        self.form.update(|f| {
            f.set_quantity(index, &value);
        });
    }

    pub fn submit(&self) {
        if self.is_submitting.get_untracked() {
            return;
        }
        let form = self.form.get_untracked();
        if let Err(e) = form.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        self.is_submitting.set(true);
        self.error.set(None);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let store = vm.store.get_value();
            match submit_order(&store, &form).await {
                Ok(order) => {
                    log::info!(
                        "Order submitted for {} ({} lines)",
                        order.name,
                        order.products.len()
                    );
                    vm.form.update(|f| f.reset(today()));
                    vm.show_notice(SUCCESS_MESSAGE);
                }
                Err(e) => {
                    log::warn!("Order submission failed: {}", e);
                    vm.error.set(Some(e.user_message()));
                }
            }
            vm.is_submitting.set(false);
        });
    }

    fn show_notice(&self, text: &str) {
        let mut ticket = 0;
        self.notice.update(|n| ticket = n.show(text));
        let notice = self.notice;
        let delay = self.notice_ms;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(delay).await;
            notice.try_update(|n| n.expire(ticket));
        });
    }
}
