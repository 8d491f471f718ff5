use super::view_model::OrderFormViewModel;
use crate::shared::config::use_config;
use contracts::usecases::u501_submit_order::form::OrderForm;
use leptos::prelude::*;

fn text_field(
    vm: OrderFormViewModel,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    get: fn(&OrderForm) -> String,
    set: fn(&mut OrderForm, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type
                id=id
                prop:value=move || vm.form.with(get)
                on:input=move |ev| vm.form.update(|f| set(f, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn OrderFormPage() -> impl IntoView {
    let config = use_config();
    let vm = OrderFormViewModel::new(&config);
    let is_valid = vm.is_form_valid();

    // Строки каталога неизменны: таблица строится один раз
    let rows = vm
        .form
        .with_untracked(|f| f.lines.iter().map(|l| l.item.clone()).collect::<Vec<_>>())
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            view! {
                <tr>
                    <td>{index + 1}</td>
                    <td>{item}</td>
                    <td>
                        <input
                            type="text"
                            inputmode="numeric"
                            class="quantity-input"
                            prop:value=move || {
                                vm.form.with(|f| {
                                    f.lines.get(index).map(|l| l.quantity.clone()).unwrap_or_default()
                                })
                            }
                            on:input=move |ev| vm.set_quantity(index, event_target_value(&ev))
                        />
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="order-form-container">
            <div class="form-header">
                <h2>{config.business.name.clone()}</h2>
                <p class="form-subtitle">{config.business.address.clone()}</p>
            </div>

            {move || vm.notice.with(|n| n.text().map(|text| view! {
                <div class="notice notice--success">{text.to_string()}</div>
            }))}
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form
                class="order-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                {text_field(vm, "name", "Customer Name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                {text_field(vm, "mobile", "Mobile Number", "tel", |f| f.mobile.clone(), |f, v| f.mobile = v)}
                {text_field(vm, "village", "Village", "text", |f| f.village.clone(), |f, v| f.village = v)}
                {text_field(vm, "date", "Event Date", "date", |f| f.date.clone(), |f, v| f.date = v)}

                <table class="items-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Item"</th>
                            <th>"Quantity"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>

                {text_field(vm, "total_bill", "Total Bill Amount (₹)", "number", |f| f.total_bill.clone(), |f, v| f.total_bill = v)}

                <button
                    type="submit"
                    class="button button--primary submit-btn"
                    disabled=move || !is_valid() || vm.is_submitting.get()
                >
                    {move || if vm.is_submitting.get() { "Submitting..." } else { "Submit Order" }}
                </button>
            </form>
        </div>
    }
}
