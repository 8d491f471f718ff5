use super::list::view_model::OrderBoardViewModel;
use crate::shared::modal::Modal;
use leptos::prelude::*;

/// Правка заказанных количеств (только для `pending`)
#[component]
pub fn QuantityEditModal(vm: OrderBoardViewModel) -> impl IntoView {
    let items = vm.quantity_draft.with_untracked(|d| {
        d.as_ref()
            .map(|d| d.lines.iter().map(|l| l.item.clone()).collect::<Vec<_>>())
            .unwrap_or_default()
    });

    let rows = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            view! {
                <div class="product-item">
                    <span>{item}</span>
                    <input
                        type="number"
                        min="0"
                        prop:value=move || {
                            vm.quantity_draft.with(|d| {
                                d.as_ref()
                                    .and_then(|d| d.lines.get(index))
                                    .map(|l| l.quantity.clone())
                                    .unwrap_or_default()
                            })
                        }
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            vm.quantity_draft.update(|d| {
                                if let Some(d) = d {
                                    d.set_quantity(index, &text);
                                }
                            });
                        }
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <Modal title="Edit Product Quantities".to_string() on_close=Callback::new(move |_| vm.close_edit())>
            {move || vm.draft_error.get().map(|e| view! { <div class="error">{e}</div> })}
            <div class="order-details">{rows}</div>
            <div class="modal-actions">
                <button class="button button--secondary" on:click=move |_| vm.close_edit()>
                    "Cancel"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || vm.is_loading.get()
                    on:click=move |_| vm.save_edit()
                >
                    "Save"
                </button>
            </div>
        </Modal>
    }
}
