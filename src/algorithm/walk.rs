//! Digital differential analyzer walk over the tile grid
//!
//! The walk yields the tile containing the start point and then one tile per
//! grid-line crossing, in order, until the next crossing would lie at or
//! beyond the end point. It reads nothing from a grid; the tracer decides
//! what each visited tile means.

use crate::io::error::Result;
use crate::math::point::Point;
use crate::math::stepping::{Axis, AxisCrossing, choose_axis};

/// One tile entered by the walk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkStep {
    /// Tile coordinates
    pub cell: [i32; 2],
    /// Distance along the ray at which the tile was entered
    pub distance: f64,
    /// Axis crossed to enter the tile (`None` for the start tile)
    pub axis: Option<Axis>,
}

/// Iterator over the tiles a segment passes through
#[derive(Debug, Clone)]
pub struct DdaWalk {
    cell: [i32; 2],
    x: AxisCrossing,
    y: AxisCrossing,
    range: f64,
    started: bool,
}

impl DdaWalk {
    /// Prepare a walk from `start` to `end`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either point is non-finite or lies in a
    /// tile whose index does not fit in an `i32`
    pub fn new(start: Point, end: Point) -> Result<Self> {
        let start = start.ensure_finite("start")?;
        let end = end.ensure_finite("end")?;
        let cell = start.tile()?;
        end.tile()?;

        let delta = start.delta(&end);
        let range = start.distance(&end);

        Ok(Self {
            cell,
            x: AxisCrossing::new(start.x, delta.x, range),
            y: AxisCrossing::new(start.y, delta.y, range),
            range,
            started: false,
        })
    }

    /// Euclidean length of the segment in tile units
    pub const fn range(&self) -> f64 {
        self.range
    }

    /// Tile the walk currently occupies
    pub const fn cell(&self) -> [i32; 2] {
        self.cell
    }

    /// Upper bound on the number of tiles the walk can yield
    ///
    /// Each axis contributes at most one crossing per tile of extent plus one
    /// for the partial tile at the start.
    pub fn max_steps(&self) -> usize {
        let per_axis = |axis: &AxisCrossing| match *axis {
            AxisCrossing::Parallel => 0.0,
            AxisCrossing::Crossing { span, .. } => span.ceil() + 1.0,
        };
        (per_axis(&self.x) + per_axis(&self.y) + 1.0) as usize
    }
}

impl Iterator for DdaWalk {
    type Item = WalkStep;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(WalkStep {
                cell: self.cell,
                distance: 0.0,
                axis: None,
            });
        }

        let (axis, distance) = choose_axis(&self.x, &self.y, self.range)?;
        match axis {
            Axis::X => self.cell[0] = self.cell[0].saturating_add(self.x.advance()),
            Axis::Y => self.cell[1] = self.cell[1].saturating_add(self.y.advance()),
        }

        Some(WalkStep {
            cell: self.cell,
            distance,
            axis: Some(axis),
        })
    }
}
