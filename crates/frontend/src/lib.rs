pub mod app;
pub mod domain;
pub mod shared;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // Монтируем приложение, когда конфигурация уже известна
    wasm_bindgen_futures::spawn_local(async {
        let config = shared::config::load_config().await;
        leptos::mount::mount_to_body(move || view! { <App config=config /> });
    });
}
