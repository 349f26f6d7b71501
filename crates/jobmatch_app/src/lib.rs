//! Jobmatch web app (Leptos + WASM).
mod app;
mod components;
mod effects;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    match_logging::initialize_console();
    leptos::mount::mount_to_body(app::App);
}
