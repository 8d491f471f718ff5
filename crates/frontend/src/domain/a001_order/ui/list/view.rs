use super::view_model::OrderBoardViewModel;
use crate::domain::a001_order::ui::details::OrderDetailsModal;
use crate::domain::a001_order::ui::edit::QuantityEditModal;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_event_date;
use crate::shared::list_utils::{highlight_matches, SearchInput, SortDirectionToggle};
use crate::shared::number_format::format_rupees;
use contracts::dashboards::d400_order_board::SortField;
use contracts::domain::a001_order::aggregate::Order;
use contracts::enums::order_status::{OrderStatus, StatusFilter};
use leptos::prelude::*;

#[component]
fn OrderRow(vm: OrderBoardViewModel, order: Order) -> impl IntoView {
    let search = vm.search;
    let row_class = if order.is_completed() { "order-row completed" } else { "order-row" };
    let badge_class = format!("status-badge {}", order.status.code());
    let id = order.id.clone();
    let id_for_view = order.id.clone();
    let order_for_edit = order.clone();
    let date = format_event_date(&order.date);
    let name = order.name.clone();
    let village = order.village.clone();
    let mobile = order.mobile.clone();
    let total = format_rupees(order.total_bill);

    view! {
        <tr class=row_class>
            <td>{date}</td>
            <td>
                <div class="customer-info">
                    <span class="customer-name">{move || highlight_matches(&name, &search.get())}</span>
                    <span class="customer-village">{move || highlight_matches(&village, &search.get())}</span>
                </div>
            </td>
            <td>
                <div class="contact-amount-info">
                    <div class="mobile-number">{move || highlight_matches(&mobile, &search.get())}</div>
                    <div class="total-amount">{total}</div>
                </div>
            </td>
            <td>
                <div class="status-actions-container">
                    <span class=badge_class>{order.status.display_name()}</span>
                    <div class="action-buttons">
                        {(!order.is_completed()).then(|| view! {
                            <button
                                class="button button--success"
                                on:click=move |_| vm.mark_completed(id.clone())
                            >
                                "Mark as Complete"
                            </button>
                        })}
                        <button
                            class="button button--secondary"
                            on:click=move |_| vm.open_details(id_for_view.clone())
                        >
                            "View"
                        </button>
                        {(order.status == OrderStatus::Pending).then(|| view! {
                            <button
                                class="button button--secondary"
                                on:click=move |_| vm.open_edit(&order_for_edit)
                            >
                                "Edit"
                            </button>
                        })}
                    </div>
                </div>
            </td>
        </tr>
    }
}

#[component]
pub fn OrderBoardPage() -> impl IntoView {
    let config = use_config();
    let vm = OrderBoardViewModel::new(&config);
    vm.load();

    let stats = Memo::new(move |_| vm.board.with(|b| b.stats()));

    let on_status_change = move |ev: leptos::ev::Event| {
        let code = event_target_value(&ev);
        vm.status.set(StatusFilter::from_code(&code).unwrap_or_default());
    };
    let on_sort_change = move |ev: leptos::ev::Event| {
        let code = event_target_value(&ev);
        vm.sort_field.set(SortField::from_code(&code).unwrap_or_default());
    };

    view! {
        <div class="admin-container">
            <div class="admin-header">
                <h2>"Admin Dashboard"</h2>
                <div class="stats-grid">
                    <StatCard
                        label="Total Orders"
                        icon_name="orders"
                        value=Signal::derive(move || stats.get().total.to_string())
                        tone=StatTone::Neutral
                    />
                    <StatCard
                        label="Pending Orders"
                        icon_name="pending"
                        value=Signal::derive(move || stats.get().pending.to_string())
                        tone=StatTone::Warning
                    />
                    <StatCard
                        label="Completed Orders"
                        icon_name="completed"
                        value=Signal::derive(move || stats.get().completed.to_string())
                        tone=StatTone::Success
                    />
                    <StatCard
                        label="Total Revenue"
                        icon_name="revenue"
                        value=Signal::derive(move || format_rupees(stats.get().total_revenue))
                        tone=StatTone::Neutral
                    />
                </div>

                <div class="filters-container">
                    <SearchInput on_change=Callback::new(move |text: String| vm.search.set(text)) />
                    <select on:change=on_status_change prop:value=move || vm.status.get().code()>
                        {StatusFilter::all()
                            .into_iter()
                            .map(|f| view! { <option value=f.code()>{f.label()}</option> })
                            .collect_view()}
                    </select>
                    <select on:change=on_sort_change prop:value=move || vm.sort_field.get().code()>
                        {SortField::all()
                            .into_iter()
                            .map(|f| view! { <option value=f.code()>{f.label()}</option> })
                            .collect_view()}
                    </select>
                    <SortDirectionToggle direction=vm.direction />
                    <button
                        class="button button--secondary"
                        disabled=move || vm.is_loading.get()
                        on:click=move |_| vm.load()
                    >
                        {move || if vm.is_loading.get() { "Loading..." } else { "Refresh" }}
                    </button>
                </div>
            </div>

            {move || vm.board.with(|b| b.error_message()).map(|message| view! {
                <div class="error">
                    <span>{message}</span>
                    <button class="button button--icon" on:click=move |_| vm.dismiss_error()>"×"</button>
                </div>
            })}

            <div class="orders-table-container">
                <table class="dashboard-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Customer Details"</th>
                            <th>"Contact & Amount"</th>
                            <th>"Status & Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            vm.visible_orders()
                                .into_iter()
                                .map(|order| view! { <OrderRow vm=vm order=order /> })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || vm.board.with(|b| b.orders().is_empty()) && !vm.is_loading.get()>
                    <div class="empty-state">"No orders yet."</div>
                </Show>
            </div>

            <Show when=move || vm.board.with(|b| b.selected_order().is_some())>
                <OrderDetailsModal vm=vm />
            </Show>
            <Show when=move || vm.quantity_draft.with(|d| d.is_some())>
                <QuantityEditModal vm=vm />
            </Show>
        </div>
    }
}
