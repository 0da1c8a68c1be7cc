//! Grid construction: one row element per row, one cell element per cell,
//! ids mirroring the board's creation order (`cell-1` .. `cell-N²`).

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::domain::cell::CellId;
use crate::errors::BoardError;

use super::dom_err;

pub(super) fn build_grid(
    document: &Document,
    container: &Element,
    size: u32,
) -> Result<Vec<HtmlElement>, BoardError> {
    let mut cells = Vec::with_capacity((size as usize) * (size as usize));
    let mut next_id: CellId = 1;

    for _row in 0..size {
        let row = create_row(document)?;
        for _col in 0..size {
            let cell = create_cell(document, next_id)?;
            row.append_child(&cell).map_err(dom_err)?;
            cells.push(cell);
            next_id += 1;
        }
        container.append_child(&row).map_err(dom_err)?;
    }

    Ok(cells)
}

fn create_row(document: &Document) -> Result<Element, BoardError> {
    let row = document.create_element("div").map_err(dom_err)?;
    row.set_class_name("grid-row flex");
    Ok(row)
}

fn create_cell(document: &Document, id: CellId) -> Result<HtmlElement, BoardError> {
    let el = document.create_element("div").map_err(dom_err)?;
    el.set_id(&format!("cell-{id}"));
    el.set_class_name("square undraggable");
    el.dyn_into::<HtmlElement>()
        .map_err(|_| BoardError::Dom("created cell is not an HtmlElement".to_string()))
}
