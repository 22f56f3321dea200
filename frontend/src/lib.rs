//! WASM entry point for the Folio site.

use wasm_bindgen::prelude::*;

/// Mount the application once the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed, which is fine to keep.
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("logger already installed: {err}");
    }

    leptos::mount::mount_to_body(app::App);
}
