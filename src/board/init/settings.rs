use serde::Deserialize;

use crate::domain::color::Rgba;
use crate::domain::modes::PaintMode;
use crate::errors::BoardError;

/// Board configuration, loadable from JSON supplied by the host page.
/// Missing fields fall back to the classic sketchpad defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardSettings {
    /// Rows and columns of the square grid
    pub grid_size: u32,
    pub default_mode: PaintMode,
    /// [r, g, b] painted by the `color` mode
    pub ink: [u8; 3],
    /// [r, g, b] painted by the `eraser` mode (and the initial cell color)
    pub blank: [u8; 3],
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            grid_size: 100,
            default_mode: PaintMode::Color,
            ink: [0, 0, 0],
            blank: [255, 255, 255],
        }
    }
}

impl BoardSettings {
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        serde_json::from_str(json).map_err(|e| BoardError::InvalidSettings(e.to_string()))
    }

    pub fn ink_color(&self) -> Rgba {
        Rgba::rgb(self.ink[0], self.ink[1], self.ink[2])
    }

    pub fn blank_color(&self) -> Rgba {
        Rgba::rgb(self.blank[0], self.blank[1], self.blank[2])
    }
}
