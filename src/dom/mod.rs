//! Browser surface - builds the visual grid and wires pointer events to the
//! board core.
//!
//! The surface owns the `BoardCore` plus one `HtmlElement` per cell, indexed
//! by id. Listeners hold an `Rc` to the surface and run synchronously on the
//! browser's event loop; there is no other thread, so a `RefCell` is the
//! whole locking story. Listeners are session-lifetime and deliberately
//! leaked via `EventListener::forget`.

mod events;
mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::board::{BoardCore, BoardSettings};
use crate::domain::cell::CellId;
use crate::domain::color::Rgba;
use crate::errors::BoardError;

/// CSS class flipped on every cell by the grid-line toggle
const GRID_LINES_CLASS: &str = "show-tracks";

pub struct SketchSurface {
    board: BoardCore,
    // Indexed by id - 1, mirroring the board's creation order
    cells: Vec<HtmlElement>,
}

impl SketchSurface {
    fn cell_element(&self, id: CellId) -> Option<&HtmlElement> {
        self.cells.get(id.checked_sub(1)? as usize)
    }

    fn apply_paint(&self, id: CellId, color: Rgba) {
        if let Some(el) = self.cell_element(id) {
            let _ = el.style().set_property("background-color", &color.to_css());
        }
    }

    fn apply_grid_lines(&self, shown: bool) {
        for el in &self.cells {
            let _ = el.class_list().toggle_with_force(GRID_LINES_CLASS, shown);
        }
    }
}

/// Build the grid inside `#container_id` and wire all listeners.
///
/// Fails fast at startup when the container is missing; after a successful
/// mount every event either completes or is ignored, never errors.
pub fn mount(container_id: &str, settings: BoardSettings) -> Result<(), BoardError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| BoardError::Dom("no window/document available".to_string()))?;

    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| BoardError::MissingContainer(container_id.to_string()))?;

    let board = BoardCore::with_settings(settings)?;
    let cells = surface::build_grid(&document, &container, board.size())?;

    let surface = Rc::new(RefCell::new(SketchSurface { board, cells }));
    events::install_listeners(&document, &container, &surface);

    Ok(())
}

#[wasm_bindgen(js_name = mountSketchpad)]
pub fn mount_sketchpad(container_id: &str) -> Result<(), JsValue> {
    mount(container_id, BoardSettings::default()).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = mountSketchpadWithSettings)]
pub fn mount_sketchpad_with_settings(
    container_id: &str,
    settings_json: &str,
) -> Result<(), JsValue> {
    let settings =
        BoardSettings::from_json(settings_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    mount(container_id, settings).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn dom_err(err: JsValue) -> BoardError {
    BoardError::Dom(format!("{err:?}"))
}
