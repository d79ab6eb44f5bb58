//! Continuous points in tile-width units
//!
//! Tile `(0, 0)` spans `[0, 1) x [0, 1)`. Conversion to tile indices always
//! floors, so `-0.5` lands in tile `-1` rather than tile `0`.

use num_traits::ToPrimitive;
use std::fmt;
use std::str::FromStr;

use crate::io::error::{Result, TraceError, invalid_argument};

/// A real-valued position on the tile plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are neither NaN nor infinite
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Reject non-finite coordinates
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming `parameter` if either coordinate is
    /// NaN or infinite
    pub fn ensure_finite(self, parameter: &'static str) -> Result<Self> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(invalid_argument(
                parameter,
                &self,
                &"coordinates must be finite",
            ))
        }
    }

    /// Index of the tile containing this point
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the point is not finite or its floor does
    /// not fit in an `i32` tile index
    pub fn tile(&self) -> Result<[i32; 2]> {
        let point = self.ensure_finite("point")?;
        let x = point.x.floor().to_i32();
        let y = point.y.floor().to_i32();
        match (x, y) {
            (Some(x), Some(y)) => Ok([x, y]),
            _ => Err(invalid_argument(
                "point",
                &point,
                &"tile index does not fit in an i32",
            )),
        }
    }

    /// Component-wise difference `other - self`
    pub fn delta(&self, other: &Self) -> Self {
        Self::new(other.x - self.x, other.y - self.y)
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Self) -> f64 {
        let d = self.delta(other);
        d.x.hypot(d.y)
    }

    /// Centre of a tile
    pub fn tile_center(tile: [i32; 2]) -> Self {
        Self::new(f64::from(tile[0]) + 0.5, f64::from(tile[1]) + 0.5)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl FromStr for Point {
    type Err = TraceError;

    /// Parse `"x,y"`; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| invalid_argument("point", &s, &"expected 'x,y'"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| invalid_argument("point", &s, &e))
        };
        Point::new(parse(x)?, parse(y)?).ensure_finite("point")
    }
}
