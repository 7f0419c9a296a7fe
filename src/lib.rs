//! Canvas Text Editor WASM Module
//!
//! Owns the state of a canvas on which text labels are added, dragged,
//! restyled, and undone/redone. The browser host renders from the state
//! this module exposes and reports pointer and toolbar events back to it.

pub mod api;
pub mod config;
pub mod drag;
pub mod error;
pub mod models;
pub mod renderers;
pub mod toolbar;
pub mod undo;

// Re-export commonly used types
pub use config::EditorConfig;
pub use error::EditorError;
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Canvas text editor WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        wasm_warn!("Logger already initialized: {}", e);
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
