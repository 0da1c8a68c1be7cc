//! Cell registry - authoritative `CellId -> Cell` store with an
//! adjacency-capable shape.
//!
//! The adjacency side exists for a future neighbor-based fill; nothing in
//! the current board ever connects cells, so every neighbor query answers
//! empty. The registry is append-only: cells are registered once at grid
//! construction and never removed.

use std::collections::HashMap;

use crate::domain::cell::{Cell, CellId};
use crate::errors::BoardError;

#[derive(Clone, Debug, Default)]
pub struct CellGraph {
    cells: HashMap<CellId, Cell>,
    edges: HashMap<CellId, Vec<CellId>>,
}

impl CellGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cell keyed by its own id.
    ///
    /// Duplicate registration is a defect in the caller (ids come from a
    /// monotonic allocator) and is rejected rather than silently replacing.
    pub fn insert(&mut self, cell: Cell) -> Result<(), BoardError> {
        if self.cells.contains_key(&cell.id) {
            return Err(BoardError::DuplicateCell(cell.id));
        }
        self.edges.entry(cell.id).or_default();
        self.cells.insert(cell.id, cell);
        Ok(())
    }

    pub fn contains(&self, id: CellId) -> bool {
        self.cells.contains_key(&id)
    }

    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(&id)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Record an undirected neighbor relation between two registered cells.
    ///
    /// Extension point for neighbor-based tools; no current caller outside
    /// of tests.
    pub fn connect(&mut self, a: CellId, b: CellId) -> Result<(), BoardError> {
        if !self.contains(a) {
            return Err(BoardError::UnknownCell(a));
        }
        if !self.contains(b) {
            return Err(BoardError::UnknownCell(b));
        }
        self.edges.entry(a).or_default().push(b);
        self.edges.entry(b).or_default().push(a);
        Ok(())
    }

    /// Neighbors of a cell; empty for unknown ids and for every cell the
    /// current board builds.
    pub fn neighbors(&self, id: CellId) -> &[CellId] {
        self.edges.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }
}
