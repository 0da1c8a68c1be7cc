//! Error taxonomy for the sketchpad engine.
//!
//! Core operations return `Result<_, BoardError>`; the WASM facade converts
//! to `JsValue` strings at the boundary. Ignored events (pointer-enter while
//! idle, unknown hover targets) are not errors and never reach this type.

use crate::domain::cell::CellId;

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("unknown paint mode: {0}")]
    UnknownMode(String),
    #[error("cell {0} is already registered")]
    DuplicateCell(CellId),
    #[error("cell {0} is not registered")]
    UnknownCell(CellId),
    #[error("grid size must be at least 1, got {0}")]
    InvalidGridSize(u32),
    #[error("invalid board settings: {0}")]
    InvalidSettings(String),
    #[error("missing grid container element: #{0}")]
    MissingContainer(String),
    #[error("dom operation failed: {0}")]
    Dom(String),
}
