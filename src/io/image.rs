//! PNG rendering of classified grids

use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

use crate::io::configuration::{
    END_MARKER_COLOR, GRID_LINE_COLOR, GRID_LINE_WIDTH, MAX_TILE_PIXEL_SIZE, MAX_VIEW_TILES,
    START_MARKER_COLOR, tile_color,
};
use crate::io::error::{Result, TraceError, invalid_argument};
use crate::math::point::Point;
use crate::spatial::grid::{BoundingBox, TileGrid};
use crate::spatial::layout::Layout;

/// Rectangular window of the grid mapped onto image pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    bounds: BoundingBox,
    tile_px: u32,
}

impl View {
    /// Create a view over `bounds` drawing each tile `tile_px` pixels wide
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the tile size is zero or too large, or the
    /// region exceeds the rendering limit
    pub fn new(bounds: BoundingBox, tile_px: u32) -> Result<Self> {
        if tile_px == 0 || tile_px > MAX_TILE_PIXEL_SIZE {
            return Err(invalid_argument(
                "tile_px",
                &tile_px,
                &format!("must be between 1 and {MAX_TILE_PIXEL_SIZE}"),
            ));
        }
        if bounds.width() > MAX_VIEW_TILES || bounds.height() > MAX_VIEW_TILES {
            return Err(invalid_argument(
                "bounds",
                &format!("{}x{}", bounds.width(), bounds.height()),
                &format!("view is limited to {MAX_VIEW_TILES} tiles per side"),
            ));
        }
        Ok(Self { bounds, tile_px })
    }

    /// Tile region covered
    pub const fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Image dimensions in pixels
    pub const fn pixel_size(&self) -> (u32, u32) {
        (
            self.bounds.width() as u32 * self.tile_px,
            self.bounds.height() as u32 * self.tile_px,
        )
    }

    /// Pixel under a continuous point, if it falls inside the view
    pub fn to_pixel(&self, point: Point) -> Option<(u32, u32)> {
        let scale = f64::from(self.tile_px);
        let px = ((point.x - f64::from(self.bounds.min[0])) * scale).floor();
        let py = ((point.y - f64::from(self.bounds.min[1])) * scale).floor();
        let (width, height) = self.pixel_size();

        let inside = px >= 0.0 && py >= 0.0 && px < f64::from(width) && py < f64::from(height);
        inside.then_some((px as u32, py as u32))
    }
}

/// Paint every tile in the view with its classification colour
pub fn render_grid(grid: &TileGrid, view: &View) -> RgbaImage {
    let kinds = grid.to_dense(view.bounds());
    let (width, height) = view.pixel_size();
    let tile_px = view.tile_px;
    let line = GRID_LINE_WIDTH.min(tile_px / 2);

    ImageBuffer::from_fn(width, height, |px, py| {
        let (col, within_x) = ((px / tile_px) as usize, px % tile_px);
        let (row, within_y) = ((py / tile_px) as usize, py % tile_px);

        let on_line = within_x < line
            || within_y < line
            || within_x >= tile_px - line
            || within_y >= tile_px - line;

        if on_line {
            Rgba(GRID_LINE_COLOR)
        } else {
            let kind = kinds.get((row, col)).copied().unwrap_or_default();
            Rgba(tile_color(kind))
        }
    })
}

/// Render a layout's grid with markers on both ray endpoints
pub fn render_layout(layout: &Layout, view: &View) -> RgbaImage {
    let mut img = render_grid(&layout.grid, view);
    draw_marker(&mut img, view, layout.start, START_MARKER_COLOR);
    draw_marker(&mut img, view, layout.end, END_MARKER_COLOR);
    img
}

/// Draw a small square centred on `point`
pub fn draw_marker(img: &mut RgbaImage, view: &View, point: Point, color: [u8; 4]) {
    let Some((cx, cy)) = view.to_pixel(point) else {
        return;
    };
    let radius = (view.tile_px / 8).max(1);
    let (width, height) = img.dimensions();

    for y in cy.saturating_sub(radius)..=cy.saturating_add(radius).min(height - 1) {
        for x in cx.saturating_sub(radius)..=cx.saturating_add(radius).min(width - 1) {
            img.put_pixel(x, y, Rgba(color));
        }
    }
}

/// Save a rendered image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| TraceError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| TraceError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Render `grid` over `bounds` and save it as PNG
///
/// # Errors
///
/// Returns an error if the view is invalid or the file cannot be written
pub fn export_grid_as_png(
    grid: &TileGrid,
    bounds: BoundingBox,
    tile_px: u32,
    output_path: &Path,
) -> Result<()> {
    let view = View::new(bounds, tile_px)?;
    export_png(&render_grid(grid, &view), output_path)
}
