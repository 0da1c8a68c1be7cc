use crate::domain::cell::CellId;
use crate::domain::color::Rgba;
use crate::domain::modes::PaintMode;

use super::random::xorshift32;
use super::BoardCore;

pub(super) fn pointer_down(board: &mut BoardCore) {
    board.pointer_held = true;
}

pub(super) fn pointer_up(board: &mut BoardCore) {
    board.pointer_held = false;
}

/// Guard first: entering a cell only paints while the button is held.
/// Unknown ids are ignored events, not errors.
pub(super) fn pointer_enter(board: &mut BoardCore, id: CellId) -> Option<Rgba> {
    if !board.pointer_held {
        return None;
    }
    if !board.graph.contains(id) {
        return None;
    }

    let color = match board.mode {
        PaintMode::Color => board.ink,
        PaintMode::Rainbow => random_color(board),
        PaintMode::Eraser => board.blank,
        // Declared but unwired; selecting it paints nothing.
        PaintMode::Fill => return None,
    };

    let idx = (id - 1) as usize;
    board.colors[idx] = color;
    Some(color)
}

/// Each channel drawn independently, uniform over 0..=255.
fn random_color(board: &mut BoardCore) -> Rgba {
    let r = random_channel(board);
    let g = random_channel(board);
    let b = random_channel(board);
    Rgba::rgb(r, g, b)
}

fn random_channel(board: &mut BoardCore) -> u8 {
    (xorshift32(&mut board.rng_state) & 0xFF) as u8
}
