//! Rendering constants, demo data and runtime configuration defaults

use crate::spatial::tiles::TileKind;

// Rendering
/// Edge length of one tile in exported images (pixels)
pub const TILE_PIXEL_SIZE: u32 = 16;
/// Largest accepted tile edge length (pixels)
pub const MAX_TILE_PIXEL_SIZE: u32 = 256;
/// Width of the grid line drawn around every tile (pixels)
pub const GRID_LINE_WIDTH: u32 = 1;
/// Grid line colour
pub const GRID_LINE_COLOR: [u8; 4] = [0x55, 0x55, 0x55, 0xff];
/// Start point marker colour
pub const START_MARKER_COLOR: [u8; 4] = [0x00, 0xe6, 0x00, 0xff];
/// End point marker colour
pub const END_MARKER_COLOR: [u8; 4] = [0xff, 0x4d, 0x4d, 0xff];
/// Tiles of empty border added around the rendered region
pub const VIEW_MARGIN: i32 = 1;

// Safety limit to prevent excessive memory allocation
/// Maximum rendered region edge (tiles)
pub const MAX_VIEW_TILES: usize = 2_048;

/// Fill colour for each tile classification
pub const fn tile_color(kind: TileKind) -> [u8; 4] {
    match kind {
        TileKind::Empty => [0x11, 0x11, 0x11, 0xff],
        TileKind::EmptyCollide => [0x3e, 0x02, 0x2b, 0xff],
        TileKind::EmptyLastCollide => [0x6a, 0x1b, 0x51, 0xff],
        TileKind::Connect => [0x18, 0x48, 0x23, 0xff],
        TileKind::ConnectLast => [0x40, 0x83, 0x3e, 0xff],
        TileKind::ConnectEnd => [0x37, 0xe3, 0x34, 0xff],
        TileKind::Wall => [0x4d, 0x58, 0xf0, 0xff],
        TileKind::WallCollide => [0xbd, 0x31, 0x8e, 0xff],
    }
}

// Demo layout, in tile units
/// Start point of the built-in demo ray
pub const DEMO_START: [f64; 2] = [-3.7, -0.7];
/// End point of the built-in demo ray
pub const DEMO_END: [f64; 2] = [3.5, 2.1];
/// Walls of the built-in demo layout
pub const DEMO_WALLS: [[i32; 2]; 21] = [
    [0, 0],
    [0, 1],
    [0, -2],
    [0, -1],
    [0, 2],
    [3, -3],
    [3, -2],
    [4, -2],
    [4, -3],
    [-7, 1],
    [-7, 2],
    [-6, 1],
    [-5, 1],
    [-5, 2],
    [-6, -5],
    [-6, -4],
    [-6, -3],
    [-5, -4],
    [5, 3],
    [5, 4],
    [4, 4],
];

// Random layouts
/// Fixed seed for reproducible random layouts
pub const DEFAULT_SEED: u64 = 42;
/// Default probability that a tile becomes a wall
pub const DEFAULT_WALL_DENSITY: f64 = 0.15;
/// Half-width of the square region random walls are scattered over
pub const RANDOM_LAYOUT_RADIUS: i32 = 12;

// Layout images
/// Minimum alpha for a layout pixel to count as a wall
pub const WALL_ALPHA_THRESHOLD: u8 = 128;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_trace";
/// File name used when tracing a built-in layout
pub const DEFAULT_OUTPUT: &str = "trace.png";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 60;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Multiplier applied to the delay of the final animation frame
pub const FINAL_FRAME_HOLD: u32 = 25;
