//! Web UI for labels-rs
//!
//! A Yew-based single-page form for entering label rows and downloading
//! the generated 4"x2" label PDF.

mod app;
mod components;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
