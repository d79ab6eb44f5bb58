//! Mathematical utilities for the grid walk

/// Continuous points and floor-based tile conversion
pub mod point;
/// Per-axis grid-line crossing arithmetic
pub mod stepping;
