//! Per-axis grid-line crossing state for a DDA walk
//!
//! Distances are measured along the ray in the same units as the ray length,
//! so the walk compares both axes directly against the total range. An axis
//! the ray runs parallel to never produces a crossing; it is represented
//! explicitly rather than through infinite or NaN arithmetic.

/// Grid axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal (`x`)
    X,
    /// Vertical (`y`)
    Y,
}

/// Crossing state along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisCrossing {
    /// The ray has no extent on this axis and never crosses its grid lines
    Parallel,
    /// The ray crosses this axis' grid lines `span` times over its length
    Crossing {
        /// Tile index increment applied on each crossing
        step: i32,
        /// Absolute extent of the ray on this axis (tiles)
        span: f64,
        /// Total ray length
        range: f64,
        /// Tiles (fractional) still to cover before the next crossing
        offset: f64,
    },
}

impl AxisCrossing {
    /// Set up crossing state for a ray starting at `origin` with extent `delta`
    ///
    /// `range` is the total ray length. The initial offset is the fraction of
    /// a tile between `origin` and the next grid line in the direction of
    /// travel, measured from `floor(origin)` so that both sides of zero
    /// behave identically.
    pub fn new(origin: f64, delta: f64, range: f64) -> Self {
        if delta == 0.0 {
            return Self::Parallel;
        }

        let step = sign(delta);
        let within = origin - origin.floor();
        let offset = if step < 0 { within } else { 1.0 - within };

        Self::Crossing {
            step,
            span: delta.abs(),
            range,
            offset,
        }
    }

    /// Ray distance at which the next grid line on this axis is crossed
    ///
    /// Divides by the span last, so a start exactly on a grid line reads as
    /// distance zero however short the span is, and an unreachable line reads
    /// as infinity rather than NaN.
    pub fn next_distance(&self) -> Option<f64> {
        match *self {
            Self::Parallel => None,
            Self::Crossing {
                span,
                range,
                offset,
                ..
            } => Some(offset * range / span),
        }
    }

    /// Consume one crossing, returning the tile index increment
    pub const fn advance(&mut self) -> i32 {
        match self {
            Self::Parallel => 0,
            Self::Crossing { step, offset, .. } => {
                *offset += 1.0;
                *step
            }
        }
    }

    /// True when the ray never crosses this axis' grid lines
    pub const fn is_parallel(&self) -> bool {
        matches!(self, Self::Parallel)
    }
}

/// Direction of travel along an axis; zero counts as positive
pub fn sign(value: f64) -> i32 {
    if value < 0.0 { -1 } else { 1 }
}

/// Pick the axis whose next crossing comes first, if it lies before `range`
///
/// `x` wins only when strictly closer; exact ties advance along `y`.
pub fn choose_axis(x: &AxisCrossing, y: &AxisCrossing, range: f64) -> Option<(Axis, f64)> {
    let candidate = match (x.next_distance(), y.next_distance()) {
        (None, None) => None,
        (Some(dx), None) => Some((Axis::X, dx)),
        (None, Some(dy)) => Some((Axis::Y, dy)),
        (Some(dx), Some(dy)) => {
            if dx < dy {
                Some((Axis::X, dx))
            } else {
                Some((Axis::Y, dy))
            }
        }
    };
    candidate.filter(|&(_, distance)| distance < range)
}
