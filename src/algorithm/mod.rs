//! Ray walking and trace classification

/// Stateless tracer: reset, walk and tag passes over a grid
pub mod tracer;
/// Digital differential analyzer over tile coordinates
pub mod walk;
