//! Sketchgrid Engine - interactive grid sketchpad in WASM
//!
//! Architecture:
//! - domain/  - Cell identity, registry graph, paint modes, colors
//! - board/   - Session state, interaction state machine, WASM facade
//! - dom/     - Browser surface (grid construction + event wiring)
//!
//! The board core is plain Rust and fully testable natively; everything
//! browser-specific lives behind the `dom` module and the facade.

pub mod errors;
pub mod domain;
pub mod board;

#[cfg(target_arch = "wasm32")]
pub mod dom;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Sketchgrid WASM engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use board::{BoardCore, BoardSettings, Sketchpad};
pub use domain::cell::{Cell, CellId, IdAllocator};
pub use domain::color::Rgba;
pub use domain::graph::CellGraph;
pub use domain::modes::PaintMode;
pub use errors::BoardError;
