use crate::domain::a001_order::api::HttpOrderStore;
use crate::domain::a001_order::ui::receipt::print_receipt;
use contracts::dashboards::d400_order_board::{OrderBoard, OrderQuery, SortDirection, SortField};
use contracts::domain::a001_order::aggregate::{Order, OrderId};
use contracts::domain::a001_order::receipt::Receipt;
use contracts::enums::order_status::StatusFilter;
use contracts::shared::config::{AppConfig, BusinessProfile};
use contracts::shared::store::{ActionError, StoreAction};
use contracts::usecases::u502_order_admin::drafts::{QuantityDraft, ReceivedDraft};
use contracts::usecases::u502_order_admin::{
    load_orders, mark_completed, save_quantities, save_received,
};
use leptos::prelude::*;

/// ViewModel панели администратора.
///
/// Every mutation is "write, then re-read everything"; the board signal only
/// ever receives what the store returned.
#[derive(Clone, Copy)]
pub struct OrderBoardViewModel {
    pub board: RwSignal<OrderBoard>,
    pub search: RwSignal<String>,
    pub status: RwSignal<StatusFilter>,
    pub sort_field: RwSignal<SortField>,
    pub direction: RwSignal<SortDirection>,
    pub is_loading: RwSignal<bool>,
    pub quantity_draft: RwSignal<Option<QuantityDraft>>,
    pub received_draft: RwSignal<Option<ReceivedDraft>>,
    pub draft_error: RwSignal<Option<String>>,
    store: StoredValue<HttpOrderStore>,
    business: StoredValue<BusinessProfile>,
    print_delay_ms: u32,
}

impl OrderBoardViewModel {
    pub fn new(config: &AppConfig) -> Self {
        let query = OrderQuery::default();
        Self {
            board: RwSignal::new(OrderBoard::new()),
            search: RwSignal::new(query.search),
            status: RwSignal::new(query.status),
            sort_field: RwSignal::new(query.sort_field),
            direction: RwSignal::new(query.direction),
            is_loading: RwSignal::new(false),
            quantity_draft: RwSignal::new(None),
            received_draft: RwSignal::new(None),
            draft_error: RwSignal::new(None),
            store: StoredValue::new(HttpOrderStore::new(&config.store)),
            business: StoredValue::new(config.business.clone()),
            print_delay_ms: config.receipt.print_delay_ms,
        }
    }

    pub fn query(&self) -> OrderQuery {
        OrderQuery {
            search: self.search.get(),
            status: self.status.get(),
            sort_field: self.sort_field.get(),
            direction: self.direction.get(),
        }
    }

    /// Отображаемые заказы (клоны, порядок по текущему запросу)
    pub fn visible_orders(&self) -> Vec<Order> {
        let query = self.query();
        self.board
            .with(|b| b.visible(&query).into_iter().cloned().collect())
    }

    pub fn selected_order(&self) -> Option<Order> {
        self.board.with(|b| b.selected_order().cloned())
    }

    pub fn load(&self) {
        let vm = *self;
        vm.is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let store = vm.store.get_value();
            let result = load_orders(&store).await;
            vm.finish_reload(result);
        });
    }

    pub fn mark_completed(&self, id: OrderId) {
        let vm = *self;
        vm.is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let store = vm.store.get_value();
            let result = mark_completed(&store, &id).await;
            if result.is_ok() {
                log::info!("Order {} marked completed", id);
            }
            vm.finish_reload(result);
        });
    }

    fn finish_reload(&self, result: Result<Vec<Order>, ActionError>) {
        match &result {
            Ok(orders) => log::debug!("Loaded {} orders", orders.len()),
            Err(e) => log::warn!("{}", e),
        }
        self.board.update(|b| b.apply(result));
        self.is_loading.set(false);
    }

    pub fn dismiss_error(&self) {
        self.board.update(|b| b.dismiss_error());
    }

    pub fn open_details(&self, id: OrderId) {
        self.received_draft.set(None);
        self.draft_error.set(None);
        self.board.update(|b| b.select(id));
    }

    pub fn close_details(&self) {
        self.received_draft.set(None);
        self.draft_error.set(None);
        self.board.update(|b| b.clear_selection());
    }

    pub fn open_edit(&self, order: &Order) {
        self.draft_error.set(None);
        self.quantity_draft.set(QuantityDraft::open(order));
    }

    pub fn close_edit(&self) {
        self.draft_error.set(None);
        self.quantity_draft.set(None);
    }

    pub fn open_received(&self) {
        self.draft_error.set(None);
        let draft = self.board.with(|b| b.selected_order().and_then(ReceivedDraft::open));
        self.received_draft.set(draft);
    }

    pub fn cancel_received(&self) {
        self.draft_error.set(None);
        self.received_draft.set(None);
    }

    pub fn save_edit(&self) {
        let Some(draft) = self.quantity_draft.get_untracked() else {
            return;
        };
        let vm = *self;
        vm.is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let store = vm.store.get_value();
            let result = save_quantities(&store, &draft).await;
            vm.finish_draft_save(result, vm.quantity_draft);
        });
    }

    pub fn save_received(&self) {
        let Some(draft) = self.received_draft.get_untracked() else {
            return;
        };
        let vm = *self;
        vm.is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let store = vm.store.get_value();
            let result = save_received(&store, &draft).await;
            if result.is_ok() {
                log::info!(
                    "Received quantities saved for order {} ({})",
                    draft.order_id,
                    draft.resulting_status()
                );
            }
            vm.finish_draft_save(result, vm.received_draft);
        });
    }

    /// A failed write keeps the draft open with its error; a failed reload
    /// after a successful write closes it and reports the load failure.
    fn finish_draft_save<T: Send + Sync + 'static>(
        &self,
        result: Result<Vec<Order>, ActionError>,
        draft: RwSignal<Option<T>>,
    ) {
        match result {
            Err(e) if e.action != StoreAction::LoadOrders => {
                log::warn!("{}", e);
                self.draft_error.set(Some(e.user_message()));
                self.is_loading.set(false);
            }
            result => {
                draft.set(None);
                self.draft_error.set(None);
                self.finish_reload(result);
            }
        }
    }

    pub fn print_selected(&self) {
        let Some(order) = self.board.with_untracked(|b| b.selected_order().cloned()) else {
            return;
        };
        let receipt = self
            .business
            .with_value(|business| Receipt::for_order(&order, business));
        if let Err(e) = print_receipt(&receipt, self.print_delay_ms) {
            log::warn!("Could not print receipt: {}", e);
            self.draft_error.set(Some(format!("Failed to print receipt: {}", e)));
        }
    }
}
