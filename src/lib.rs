pub mod app;
pub mod board;
pub mod components;
pub mod models;
pub mod scroll;
pub mod stars;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    utils::panic_hook::init();

    leptos::mount_to_body(App);
}
