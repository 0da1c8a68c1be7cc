//! Painting modes selectable through the tool buttons.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::BoardError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintMode {
    /// Solid ink (black by default)
    Color,
    /// Fresh random color per paint event
    Rainbow,
    /// Paint the blank color (white by default)
    Eraser,
    /// Declared but intentionally unwired; selecting it paints nothing.
    Fill,
}

impl PaintMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PaintMode::Color => "color",
            PaintMode::Rainbow => "rainbow",
            PaintMode::Eraser => "eraser",
            PaintMode::Fill => "fill",
        }
    }
}

impl fmt::Display for PaintMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaintMode {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "color" => Ok(PaintMode::Color),
            "rainbow" => Ok(PaintMode::Rainbow),
            "eraser" => Ok(PaintMode::Eraser),
            "fill" => Ok(PaintMode::Fill),
            other => Err(BoardError::UnknownMode(other.to_string())),
        }
    }
}
