use std::str::FromStr;

use crate::domain::modes::PaintMode;
use crate::errors::BoardError;

use super::BoardCore;

pub(super) fn set_mode(board: &mut BoardCore, mode: PaintMode) {
    board.mode = mode;
}

pub(super) fn set_mode_by_name(
    board: &mut BoardCore,
    name: &str,
) -> Result<PaintMode, BoardError> {
    let mode = PaintMode::from_str(name)?;
    board.mode = mode;
    Ok(mode)
}

pub(super) fn toggle_grid_lines(board: &mut BoardCore) -> bool {
    board.grid_lines_shown = !board.grid_lines_shown;
    board.grid_lines_shown
}
