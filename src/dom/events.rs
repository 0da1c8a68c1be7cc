//! Event wiring: document-level button state, delegated cell hover, and the
//! tool buttons.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::domain::cell::CellId;
use crate::domain::modes::PaintMode;

use super::SketchSurface;

/// Tool buttons looked up by element id. The `fill` button stays unwired:
/// the mode exists in the enum but has no action behind it yet.
const MODE_BUTTONS: [(&str, PaintMode); 3] = [
    ("color", PaintMode::Color),
    ("rainbow", PaintMode::Rainbow),
    ("eraser", PaintMode::Eraser),
];

const GRID_LINES_BUTTON: &str = "show-grid";

pub(super) fn install_listeners(
    document: &Document,
    container: &Element,
    surface: &Rc<RefCell<SketchSurface>>,
) {
    // Held/idle tracking is document-wide so a drag that starts or ends
    // outside the grid still flips the state machine.
    let s = Rc::clone(surface);
    EventListener::new(document, "mousedown", move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            if event.button() != 0 {
                return;
            }
        }
        s.borrow_mut().board.pointer_down();
    })
    .forget();

    let s = Rc::clone(surface);
    EventListener::new(document, "mouseup", move |_event| {
        s.borrow_mut().board.pointer_up();
    })
    .forget();

    // One delegated hover listener on the container instead of one closure
    // per cell; the cell id rides on the element id.
    let s = Rc::clone(surface);
    EventListener::new(container, "mouseover", move |event| {
        let Some(target) = event.target() else {
            return;
        };
        let Ok(el) = target.dyn_into::<Element>() else {
            return;
        };
        let Some(id) = cell_id_of(&el) else {
            return;
        };
        let painted = s.borrow_mut().board.pointer_enter(id);
        if let Some(color) = painted {
            s.borrow().apply_paint(id, color);
        }
    })
    .forget();

    for (button_id, mode) in MODE_BUTTONS {
        let Some(button) = document.get_element_by_id(button_id) else {
            continue;
        };
        let s = Rc::clone(surface);
        EventListener::new(&button, "click", move |_event| {
            s.borrow_mut().board.set_mode(mode);
        })
        .forget();
    }

    if let Some(button) = document.get_element_by_id(GRID_LINES_BUTTON) {
        let s = Rc::clone(surface);
        EventListener::new(&button, "click", move |_event| {
            let shown = s.borrow_mut().board.toggle_grid_lines();
            s.borrow().apply_grid_lines(shown);
        })
        .forget();
    }
}

fn cell_id_of(el: &Element) -> Option<CellId> {
    el.id().strip_prefix("cell-")?.parse().ok()
}
