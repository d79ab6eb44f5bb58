//! Wall layouts stored as PNG images
//!
//! One pixel is one tile. Pixels with enough opacity are walls, everything
//! else is empty. Image rows map to increasing `y`, matching screen space.

use image::RgbaImage;
use std::path::Path;

use crate::io::configuration::WALL_ALPHA_THRESHOLD;
use crate::io::error::{Result, TraceError, invalid_layout};
use crate::spatial::grid::TileGrid;

/// Where pixel `(0, 0)` of a layout image lands on the tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutOrigin {
    /// The image centre is tile `(0, 0)`
    #[default]
    Centered,
    /// The given pixel is tile `(0, 0)`
    Pixel([i32; 2]),
}

impl LayoutOrigin {
    const fn offset(self, width: u32, height: u32) -> [i32; 2] {
        match self {
            Self::Centered => [width as i32 / 2, height as i32 / 2],
            Self::Pixel(pixel) => pixel,
        }
    }
}

/// Parse a layout PNG into a grid of walls
///
/// # Errors
///
/// Returns an error if:
/// - The PNG file cannot be loaded
/// - The image contains no wall pixels
pub fn load_walls_from_png(path: &Path, origin: LayoutOrigin) -> Result<TileGrid> {
    let img = image::open(path).map_err(|e| TraceError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    walls_from_image(&img.to_rgba8(), origin)
}

/// Extract walls from an in-memory layout image
///
/// # Errors
///
/// Returns `InvalidLayout` if no pixel is opaque enough to count as a wall
pub fn walls_from_image(img: &RgbaImage, origin: LayoutOrigin) -> Result<TileGrid> {
    let (width, height) = img.dimensions();
    let [offset_x, offset_y] = origin.offset(width, height);

    let grid: TileGrid = img
        .enumerate_pixels()
        .filter(|(_, _, pixel)| pixel[3] >= WALL_ALPHA_THRESHOLD)
        .map(|(x, y, _)| [x as i32 - offset_x, y as i32 - offset_y])
        .collect();

    if grid.is_empty() {
        return Err(invalid_layout(&"layout image contains no wall pixels"));
    }

    Ok(grid)
}
