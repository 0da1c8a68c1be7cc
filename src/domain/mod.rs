//! Domain types: cell identity, the registry graph, paint modes and colors.

pub mod cell;
pub mod color;
pub mod graph;
pub mod modes;
