#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod chrome;
pub mod content;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("logger already initialized");
    }
    leptos::mount::hydrate_body(App);
}
