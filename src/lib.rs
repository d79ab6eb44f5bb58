//! Grid ray tracing over sparse, unbounded tile grids
//!
//! A [`TileGrid`] stores walls at integer coordinates; [`GridRayTracer`] walks
//! the segment between two continuous points tile by tile with a digital
//! differential analyzer, stops at the first wall, and tags every visited
//! tile with a [`TileKind`] that callers read back for rendering or game logic.

#![forbid(unsafe_code)]

/// Grid walk and trace classification
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Continuous points and per-axis stepping arithmetic
pub mod math;
/// Tile storage, classification and ready-made layouts
pub mod spatial;

pub use algorithm::tracer::{GridRayTracer, TraceOutcome, TraceReport};
pub use io::error::{Result, TraceError};
pub use math::point::Point;
pub use spatial::grid::TileGrid;
pub use spatial::tiles::{Tile, TileKind};
