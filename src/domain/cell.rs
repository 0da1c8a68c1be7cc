//! Cell identity - unique, stable identifiers for grid cells.
//!
//! Identifiers start at 1 and grow strictly monotonically for the lifetime
//! of a session; 0 is never a valid id.

/// Cell identifier (1-based)
pub type CellId = u32;

/// One paintable grid square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub id: CellId,
    /// Always true at creation; reserved for future deactivation semantics.
    pub active: bool,
}

impl Cell {
    pub fn new(id: CellId) -> Self {
        Self { id, active: true }
    }
}

/// Monotonic id source. Overflow is not a practical concern at the grid
/// sizes this engine builds (u32 covers a 65535x65535 board).
#[derive(Clone, Debug)]
pub struct IdAllocator {
    next: CellId,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Return the next unused id and advance the counter.
    pub fn next_id(&mut self) -> CellId {
        let id = self.next;
        self.next += 1;
        id
    }
}
