use crate::domain::a001_order::ui::form::OrderFormPage;
use crate::domain::a001_order::ui::list::OrderBoardPage;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let business_name = config.business.name.clone();
    let phone = config.business.phone.clone();
    // Provide the configuration to the whole app via context.
    provide_context(config);

    let (show_admin, set_show_admin) = signal(false);

    view! {
        <div class="app">
            <header class="app-header">
                <div class="app-header__title">
                    <h1>{business_name}</h1>
                    <span class="app-header__phone">{phone}</span>
                </div>
                <button
                    class="button button--secondary"
                    on:click=move |_| set_show_admin.update(|v| *v = !*v)
                >
                    {move || if show_admin.get() { "Hide Admin" } else { "Show Admin" }}
                </button>
            </header>
            <main>
                <Show when=move || show_admin.get()>
                    <OrderBoardPage />
                </Show>
                <OrderFormPage />
            </main>
        </div>
    }
}
