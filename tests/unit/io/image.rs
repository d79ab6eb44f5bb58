//! Tests for grid rendering and PNG export

#[cfg(test)]
mod tests {
    use image::Rgba;
    use tileray::io::configuration::{GRID_LINE_COLOR, START_MARKER_COLOR, tile_color};
    use tileray::io::image::{View, export_grid_as_png, render_grid, render_layout};
    use tileray::math::point::Point;
    use tileray::spatial::grid::{BoundingBox, TileGrid};
    use tileray::spatial::layout::Layout;
    use tileray::spatial::tiles::TileKind;

    fn two_tile_view() -> View {
        View::new(BoundingBox::new([0, 0], [1, 0]), 8)
            .unwrap_or_else(|e| unreachable!("valid view: {e}"))
    }

    // Tests tile interiors take the classification colour and borders the grid colour
    // Verified by drawing tiles without grid lines
    #[test]
    fn test_render_grid_colors() {
        let mut grid = TileGrid::new();
        grid.set(1, 0, TileKind::Wall);

        let img = render_grid(&grid, &two_tile_view());

        assert_eq!(img.dimensions(), (16, 8));
        assert_eq!(img.get_pixel(12, 4), &Rgba(tile_color(TileKind::Wall)));
        assert_eq!(img.get_pixel(4, 4), &Rgba(tile_color(TileKind::Empty)));
        assert_eq!(img.get_pixel(0, 0), &Rgba(GRID_LINE_COLOR));
        assert_eq!(img.get_pixel(7, 4), &Rgba(GRID_LINE_COLOR));
    }

    #[test]
    fn test_render_layout_draws_markers() {
        let layout = Layout {
            grid: TileGrid::new(),
            start: Point::new(0.5, 0.5),
            end: Point::new(1.5, 0.5),
        };
        let img = render_layout(&layout, &two_tile_view());
        assert_eq!(img.get_pixel(4, 4), &Rgba(START_MARKER_COLOR));
        assert_eq!(img.get_pixel(2, 2), &Rgba(tile_color(TileKind::Empty)));
    }

    #[test]
    fn test_to_pixel() {
        let view = two_tile_view();
        assert_eq!(view.to_pixel(Point::new(1.5, 0.5)), Some((12, 4)));
        assert_eq!(view.to_pixel(Point::new(-0.5, 0.5)), None);
        assert_eq!(view.to_pixel(Point::new(2.0, 0.5)), None);
        assert_eq!(view.pixel_size(), (16, 8));
    }

    // Tests tile sizes and regions outside the limits are rejected
    #[test]
    fn test_view_limits() {
        let bounds = BoundingBox::around([0, 0]);
        assert!(View::new(bounds, 0).is_err());
        assert!(View::new(bounds, 257).is_err());
        assert!(View::new(BoundingBox::new([0, 0], [2048, 0]), 1).is_err());
        assert!(View::new(bounds, 1).is_ok());
    }

    #[test]
    fn test_export_grid_creates_parent_directories() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory");
        };
        let path = dir.path().join("nested").join("grid.png");
        let grid: TileGrid = [[0, 0]].into_iter().collect();

        let result = export_grid_as_png(&grid, BoundingBox::new([-1, -1], [1, 1]), 4, &path);
        assert!(result.is_ok());

        let Ok(saved) = image::open(&path) else {
            unreachable!("exported PNG should load");
        };
        assert_eq!((saved.width(), saved.height()), (12, 12));
    }
}
