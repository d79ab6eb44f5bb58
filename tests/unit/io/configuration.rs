//! Tests for configuration constants and the tile palette

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use tileray::io::configuration::{
        DEFAULT_WALL_DENSITY, DEMO_WALLS, GRID_LINE_COLOR, MAX_TILE_PIXEL_SIZE, TILE_PIXEL_SIZE,
        tile_color,
    };
    use tileray::spatial::tiles::TileKind;

    // Tests every classification is drawn in its own opaque colour
    #[test]
    fn test_palette_is_distinct_and_opaque() {
        let colors: HashSet<[u8; 4]> = TileKind::ALL.into_iter().map(tile_color).collect();
        assert_eq!(colors.len(), TileKind::ALL.len());
        assert!(colors.iter().all(|color| color[3] == 0xff));
        assert!(!colors.contains(&GRID_LINE_COLOR));
    }

    #[test]
    fn test_palette_values() {
        assert_eq!(tile_color(TileKind::Empty), [0x11, 0x11, 0x11, 0xff]);
        assert_eq!(tile_color(TileKind::Wall), [0x4d, 0x58, 0xf0, 0xff]);
        assert_eq!(tile_color(TileKind::ConnectEnd), [0x37, 0xe3, 0x34, 0xff]);
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!((0.0..=1.0).contains(&DEFAULT_WALL_DENSITY));
        assert!(TILE_PIXEL_SIZE > 0 && TILE_PIXEL_SIZE <= MAX_TILE_PIXEL_SIZE);
        let unique: HashSet<[i32; 2]> = DEMO_WALLS.into_iter().collect();
        assert_eq!(unique.len(), DEMO_WALLS.len());
    }
}
