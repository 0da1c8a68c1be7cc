use wasm_bindgen::prelude::*;

use crate::domain::cell::CellId;
use crate::errors::BoardError;

use super::settings::BoardSettings;
use super::BoardCore;

fn to_js(err: BoardError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS-facing sketchpad handle for hosts that drive their own rendering.
/// Pages that just want the DOM grid use `mountSketchpad` instead.
#[wasm_bindgen]
pub struct Sketchpad {
    core: BoardCore,
}

#[wasm_bindgen]
impl Sketchpad {
    /// Create a sketchpad with a `size` x `size` grid
    #[wasm_bindgen(constructor)]
    pub fn new(size: u32) -> Result<Sketchpad, JsValue> {
        Ok(Self {
            core: BoardCore::new(size).map_err(to_js)?,
        })
    }

    #[wasm_bindgen(js_name = fromSettingsJson)]
    pub fn from_settings_json(json: &str) -> Result<Sketchpad, JsValue> {
        let settings = BoardSettings::from_json(json).map_err(to_js)?;
        Ok(Self {
            core: BoardCore::with_settings(settings).map_err(to_js)?,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 {
        self.core.size()
    }

    #[wasm_bindgen(getter, js_name = cellCount)]
    pub fn cell_count(&self) -> u32 {
        self.core.cell_count()
    }

    #[wasm_bindgen(getter, js_name = pointerHeld)]
    pub fn pointer_held(&self) -> bool {
        self.core.pointer_held()
    }

    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.core.mode().to_string()
    }

    #[wasm_bindgen(getter, js_name = gridLinesShown)]
    pub fn grid_lines_shown(&self) -> bool {
        self.core.grid_lines_shown()
    }

    /// Pointer button pressed
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self) {
        self.core.pointer_down();
    }

    /// Pointer button released
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) {
        self.core.pointer_up();
    }

    /// Pointer entered a cell; returns the painted CSS color, if any
    #[wasm_bindgen(js_name = pointerEnter)]
    pub fn pointer_enter(&mut self, id: CellId) -> Option<String> {
        self.core.pointer_enter(id).map(|c| c.to_css())
    }

    /// Select a paint mode by name ("color", "rainbow", "eraser", "fill")
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, name: &str) -> Result<(), JsValue> {
        self.core.set_mode_by_name(name).map(|_| ()).map_err(to_js)
    }

    /// Flip grid-line visibility; returns the new state
    #[wasm_bindgen(js_name = toggleGridLines)]
    pub fn toggle_grid_lines(&mut self) -> bool {
        self.core.toggle_grid_lines()
    }

    #[wasm_bindgen(js_name = hasCell)]
    pub fn has_cell(&self, id: CellId) -> bool {
        self.core.contains_cell(id)
    }

    /// Current cell color as a CSS string (for DOM hosts)
    #[wasm_bindgen(js_name = cellColorCss)]
    pub fn cell_color_css(&self, id: CellId) -> Result<String, JsValue> {
        self.core
            .cell_color(id)
            .map(|c| c.to_css())
            .ok_or_else(|| to_js(BoardError::UnknownCell(id)))
    }

    /// Current cell color packed as ABGR (for canvas hosts)
    #[wasm_bindgen(js_name = cellColorAbgr)]
    pub fn cell_color_abgr(&self, id: CellId) -> Result<u32, JsValue> {
        self.core
            .cell_color(id)
            .map(|c| c.to_abgr())
            .ok_or_else(|| to_js(BoardError::UnknownCell(id)))
    }
}
