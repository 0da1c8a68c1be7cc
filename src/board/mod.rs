//! Board - the sketchpad session core.
//!
//! `BoardCore` owns the whole session: the cell registry, per-cell colors,
//! the pointer interaction state machine and the selected paint mode. It
//! only orchestrates; the actual operations live in the submodules:
//! - init/     - grid construction and settings
//! - commands/ - pointer events and painting
//! - tools/    - mode selection and the grid-line toggle
//!
//! Everything here is plain Rust; the WASM boundary is `facade::Sketchpad`.

use crate::domain::cell::{CellId, IdAllocator};
use crate::domain::color::Rgba;
use crate::domain::graph::CellGraph;
use crate::domain::modes::PaintMode;
use crate::errors::BoardError;

#[path = "init/init.rs"]
mod init;
#[path = "init/random.rs"]
mod random;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "tools/tools.rs"]
mod tools;
mod facade;

pub use facade::Sketchpad;
pub use settings::BoardSettings;

/// The sketchpad session
#[derive(Debug)]
pub struct BoardCore {
    graph: CellGraph,
    ids: IdAllocator,
    // Dense per-cell colors, indexed by id - 1 (ids are 1..=size^2)
    colors: Vec<Rgba>,
    size: u32,

    // Interaction session state
    pointer_held: bool,
    mode: PaintMode,
    grid_lines_shown: bool,

    // Settings
    ink: Rgba,
    blank: Rgba,

    rng_state: u32,
}

impl BoardCore {
    /// Create a board with an eagerly built `size` x `size` grid.
    pub fn new(size: u32) -> Result<Self, BoardError> {
        init::create_board_core(BoardSettings {
            grid_size: size,
            ..BoardSettings::default()
        })
    }

    pub fn with_settings(settings: BoardSettings) -> Result<Self, BoardError> {
        init::create_board_core(settings)
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn cell_count(&self) -> u32 {
        self.graph.len() as u32
    }

    pub fn pointer_held(&self) -> bool {
        self.pointer_held
    }

    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    pub fn grid_lines_shown(&self) -> bool {
        self.grid_lines_shown
    }

    pub fn contains_cell(&self, id: CellId) -> bool {
        self.graph.contains(id)
    }

    /// Current color of a cell, `None` for unregistered ids.
    pub fn cell_color(&self, id: CellId) -> Option<Rgba> {
        if !self.graph.contains(id) {
            return None;
        }
        self.colors.get(id.checked_sub(1)? as usize).copied()
    }

    /// Read access to the registry for hosts and tests.
    pub fn graph(&self) -> &CellGraph {
        &self.graph
    }

    /// Pointer button pressed (system-wide, not per-cell)
    pub fn pointer_down(&mut self) {
        commands::pointer_down(self);
    }

    /// Pointer button released
    pub fn pointer_up(&mut self) {
        commands::pointer_up(self);
    }

    /// Pointer entered a cell's visual area.
    ///
    /// No-op while the button is up or for unknown ids; otherwise paints
    /// per the current mode and returns the applied color so the host can
    /// mirror it onto the visual surface.
    pub fn pointer_enter(&mut self, id: CellId) -> Option<Rgba> {
        commands::pointer_enter(self, id)
    }

    /// Replace the current paint mode
    pub fn set_mode(&mut self, mode: PaintMode) {
        tools::set_mode(self, mode);
    }

    /// Parse and set a mode by name; unknown names are rejected
    pub fn set_mode_by_name(&mut self, name: &str) -> Result<PaintMode, BoardError> {
        tools::set_mode_by_name(self, name)
    }

    /// Flip grid-line visibility and return the new state.
    /// Visual-only: independent of mode and registry data.
    pub fn toggle_grid_lines(&mut self) -> bool {
        tools::toggle_grid_lines(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
