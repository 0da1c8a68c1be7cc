use crate::domain::cell::{Cell, IdAllocator};
use crate::domain::graph::CellGraph;
use crate::errors::BoardError;

use super::settings::BoardSettings;
use super::BoardCore;

const RNG_SEED: u32 = 12345;

pub(super) fn create_board_core(settings: BoardSettings) -> Result<BoardCore, BoardError> {
    if settings.grid_size == 0 {
        return Err(BoardError::InvalidGridSize(0));
    }

    let mut board = BoardCore {
        graph: CellGraph::new(),
        ids: IdAllocator::new(),
        colors: Vec::new(),
        size: settings.grid_size,
        pointer_held: false,
        mode: settings.default_mode,
        grid_lines_shown: false,
        ink: settings.ink_color(),
        blank: settings.blank_color(),
        rng_state: RNG_SEED,
    };

    build_grid(&mut board)?;
    Ok(board)
}

/// Materialize the N x N grid: one fresh id per cell, registered in
/// creation order (row-major), every cell starting blank.
fn build_grid(board: &mut BoardCore) -> Result<(), BoardError> {
    let size = board.size as usize;
    board.colors = Vec::with_capacity(size * size);

    for _row in 0..size {
        for _col in 0..size {
            let id = board.ids.next_id();
            board.graph.insert(Cell::new(id))?;
            board.colors.push(board.blank);
        }
    }

    Ok(())
}
