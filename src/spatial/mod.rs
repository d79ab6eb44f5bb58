//! Spatial data structures
//!
//! This module contains:
//! - Sparse tile storage with unbounded coordinates
//! - Tile classification and per-tile state
//! - Built-in and random wall layouts

/// Sparse tile grid and bounding boxes
pub mod grid;
/// Ready-made wall layouts with ray endpoints
pub mod layout;
/// Tile classification and state
pub mod tiles;

pub use grid::TileGrid;
