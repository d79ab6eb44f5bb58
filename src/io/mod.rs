//! Input/output operations and error handling

/// Command-line interface and batch processing
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG rendering of classified grids
pub mod image;
/// Batch progress display
pub mod progress;
/// GIF animation of traces
pub mod visualization;
/// Wall layouts loaded from PNG images
pub mod walls;
