//! Ready-made wall layouts with ray endpoints

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::{DEMO_END, DEMO_START, DEMO_WALLS};
use crate::io::error::{Result, invalid_argument};
use crate::math::point::Point;
use crate::spatial::grid::{BoundingBox, TileGrid};

/// A grid together with the segment to trace across it
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Wall configuration
    pub grid: TileGrid,
    /// Ray start point
    pub start: Point,
    /// Ray end point
    pub end: Point,
}

impl Layout {
    /// Region worth rendering: every stored tile plus both endpoint tiles
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if an endpoint is non-finite or outside the
    /// representable tile range
    pub fn view_bounds(&self) -> Result<BoundingBox> {
        let start = self.start.tile()?;
        let end = self.end.tile()?;
        let mut bounds = BoundingBox::new(start, end);
        if let Some(stored) = self.grid.bounds() {
            bounds.include(stored.min);
            bounds.include(stored.max);
        }
        Ok(bounds)
    }
}

/// Walls straddling both axes with a ray that crosses the origin
pub fn demo_layout() -> Layout {
    Layout {
        grid: DEMO_WALLS.iter().copied().collect(),
        start: Point::from(DEMO_START),
        end: Point::from(DEMO_END),
    }
}

/// Scatter walls over `bounds` with probability `density` per tile
///
/// The tiles containing `start` and `end` are always left clear. The same
/// seed always produces the same layout.
///
/// # Errors
///
/// Returns `InvalidArgument` if `density` is outside `[0, 1]` or an endpoint
/// cannot be converted to a tile
pub fn random_layout(
    seed: u64,
    density: f64,
    bounds: &BoundingBox,
    start: Point,
    end: Point,
) -> Result<Layout> {
    if !(0.0..=1.0).contains(&density) {
        return Err(invalid_argument(
            "density",
            &density,
            &"must be between 0 and 1",
        ));
    }

    let keep_clear = [start.tile()?, end.tile()?];
    let mut rng = StdRng::seed_from_u64(seed);

    let grid = bounds
        .positions()
        .filter(|pos| rng.random_bool(density) && !keep_clear.contains(pos))
        .collect();

    Ok(Layout { grid, start, end })
}
