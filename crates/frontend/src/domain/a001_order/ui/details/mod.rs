//! Карточка заказа: позиции, сверка полученного количества, печать чека

use super::list::view_model::OrderBoardViewModel;
use crate::shared::date_utils::format_event_date;
use crate::shared::modal::Modal;
use crate::shared::number_format::format_rupees;
use contracts::domain::a001_order::aggregate::Order;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

fn pending_class(pending: u32) -> &'static str {
    if pending > 0 {
        "pending-text"
    } else {
        "completed-text"
    }
}

fn order_lines_view(order: &Order) -> impl IntoView {
    order
        .products
        .iter()
        .map(|line| {
            let pending = line.pending();
            view! {
                <div class="product-item">
                    <span>{line.item.clone()}</span>
                    <span>{format!("Ordered: {}", line.quantity)}</span>
                    <span>{format!("Received: {}", line.received_quantity)}</span>
                    <span class=pending_class(pending)>{format!("Pending: {}", pending)}</span>
                </div>
            }
        })
        .collect_view()
}

#[component]
fn ReceivedEditor(vm: OrderBoardViewModel) -> impl IntoView {
    let count = vm
        .received_draft
        .with_untracked(|d| d.as_ref().map(|d| d.lines.len()).unwrap_or(0));

    (0..count)
        .map(|index| {
            let line = move || {
                vm.received_draft
                    .with(|d| d.as_ref().and_then(|d| d.lines.get(index).cloned()))
            };
            let item = line().map(|l| l.item).unwrap_or_default();
            view! {
                <div class="product-item">
                    <span>{item}</span>
                    <span>{move || format!("Ordered: {}", line().map(|l| l.ordered).unwrap_or(0))}</span>
                    <span>
                        "Received: "
                        <input
                            type="number"
                            min="0"
                            prop:max=move || line().map(|l| l.ordered.to_string()).unwrap_or_default()
                            prop:value=move || line().map(|l| l.received.to_string()).unwrap_or_default()
                            on:input=move |ev| {
                                let raw = event_target_value(&ev);
                                // значение всегда пересохраняется, чтобы поле показало результат ограничения
                                vm.received_draft.update(|d| {
                                    if let Some(d) = d {
                                        d.set_received(index, &raw);
                                    }
                                });
                            }
                        />
                    </span>
                    {move || {
                        let pending = line().map(|l| l.pending()).unwrap_or(0);
                        view! { <span class=pending_class(pending)>{format!("Pending: {}", pending)}</span> }
                    }}
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn OrderDetailsModal(vm: OrderBoardViewModel) -> impl IntoView {
    let editing = move || vm.received_draft.with(|d| d.is_some());
    let title = Signal::derive(move || {
        vm.selected_order()
            .map(|o| format!("{} Details: {}", Order::element_name(), o.name))
            .unwrap_or_else(|| format!("{} Details", Order::element_name()))
    });

    view! {
        <Modal title=title on_close=Callback::new(move |_| vm.close_details())>
            {move || vm.selected_order().map(|order| view! {
                <div class="customer-details">
                    <p><strong>"Customer Name: "</strong>{order.name.clone()}</p>
                    <p><strong>"Mobile: "</strong>{order.mobile.clone()}</p>
                    <p><strong>"Village: "</strong>{order.village.clone()}</p>
                    <p><strong>"Date: "</strong>{format_event_date(&order.date)}</p>
                    <p><strong>"Total Bill: "</strong>{format_rupees(order.total_bill)}</p>
                    <p><strong>"Status: "</strong>{order.status.display_name()}</p>
                    <p><strong>"Pending Items: "</strong>{order.pending_total()}</p>
                </div>
            })}

            {move || vm.draft_error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="order-details">
                {move || if editing() {
                    view! { <ReceivedEditor vm=vm /> }.into_any()
                } else {
                    vm.selected_order()
                        .map(|order| order_lines_view(&order).into_any())
                        .unwrap_or_else(|| ().into_any())
                }}
            </div>

            <div class="modal-actions">
                {move || {
                    let can_reconcile = vm.selected_order().map(|o| !o.is_completed()).unwrap_or(false);
                    if editing() {
                        view! {
                            <button class="button button--secondary" on:click=move |_| vm.cancel_received()>
                                "Cancel"
                            </button>
                            <button
                                class="button button--primary"
                                disabled=move || vm.is_loading.get()
                                on:click=move |_| vm.save_received()
                            >
                                "Save"
                            </button>
                        }
                        .into_any()
                    } else {
                        view! {
                            {can_reconcile.then(|| view! {
                                <button class="button button--primary" on:click=move |_| vm.open_received()>
                                    "Edit Received"
                                </button>
                            })}
                            <button class="button button--primary" on:click=move |_| vm.print_selected()>
                                "Print Receipt"
                            </button>
                        }
                        .into_any()
                    }
                }}
                <button class="button button--secondary" on:click=move |_| vm.close_details()>
                    "Close"
                </button>
            </div>
        </Modal>
    }
}
