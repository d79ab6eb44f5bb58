//! Sparse, unbounded tile storage
//!
//! Tiles live in a hash map keyed by integer coordinates. Any coordinate
//! without a record reads back as [`TileKind::Empty`], so the grid has no
//! size ceiling and negative coordinates need no offset bookkeeping.

use ndarray::Array2;
use std::collections::HashMap;

use crate::spatial::tiles::{Tile, TileKind, TileState, TraceMark};

/// Axis-aligned rectangle of tile coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum coordinates (inclusive)
    pub min: [i32; 2],
    /// Maximum coordinates (inclusive)
    pub max: [i32; 2],
}

impl BoundingBox {
    /// Create a box from two inclusive corners in any order
    pub fn new(a: [i32; 2], b: [i32; 2]) -> Self {
        Self {
            min: [a[0].min(b[0]), a[1].min(b[1])],
            max: [a[0].max(b[0]), a[1].max(b[1])],
        }
    }

    /// Box covering a single tile
    pub const fn around(pos: [i32; 2]) -> Self {
        Self { min: pos, max: pos }
    }

    /// Check if a position is within the bounds
    pub const fn contains(&self, pos: [i32; 2]) -> bool {
        pos[0] >= self.min[0]
            && pos[0] <= self.max[0]
            && pos[1] >= self.min[1]
            && pos[1] <= self.max[1]
    }

    /// Grow the box so it contains `pos`
    pub fn include(&mut self, pos: [i32; 2]) {
        self.min = [self.min[0].min(pos[0]), self.min[1].min(pos[1])];
        self.max = [self.max[0].max(pos[0]), self.max[1].max(pos[1])];
    }

    /// Grow the box by `margin` tiles on every side
    pub const fn expanded(&self, margin: i32) -> Self {
        Self {
            min: [
                self.min[0].saturating_sub(margin),
                self.min[1].saturating_sub(margin),
            ],
            max: [
                self.max[0].saturating_add(margin),
                self.max[1].saturating_add(margin),
            ],
        }
    }

    /// Number of tile columns covered
    pub const fn width(&self) -> usize {
        (self.max[0] as i64 - self.min[0] as i64 + 1) as usize
    }

    /// Number of tile rows covered
    pub const fn height(&self) -> usize {
        (self.max[1] as i64 - self.min[1] as i64 + 1) as usize
    }

    /// Every position in the box, row by row
    pub fn positions(&self) -> impl Iterator<Item = [i32; 2]> {
        let [min_x, min_y] = self.min;
        let [max_x, max_y] = self.max;
        (min_y..=max_y).flat_map(move |y| (min_x..=max_x).map(move |x| [x, y]))
    }
}

/// Sparse mapping from tile coordinates to tile state
///
/// Owned by the caller and lent to the tracer for one call at a time. There
/// is no internal synchronisation: wall edits and traces must be serialised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileGrid {
    tiles: HashMap<[i32; 2], TileState>,
}

impl TileGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a tile, returning a transient empty tile for unknown coordinates
    pub fn get(&self, x: i32, y: i32) -> Tile {
        Tile::new(x, y, self.state([x, y]).kind())
    }

    /// Store a classification at a coordinate
    ///
    /// Writing [`TileKind::Empty`] to a coordinate without a record is a
    /// no-op; every other write replaces whatever was stored before.
    pub fn set(&mut self, x: i32, y: i32, kind: TileKind) {
        let state = TileState::from_kind(kind);
        if state.is_default() {
            if let Some(existing) = self.tiles.get_mut(&[x, y]) {
                *existing = state;
            }
            return;
        }
        self.tiles.insert([x, y], state);
    }

    /// Every stored tile, in no particular order
    pub fn all(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles
            .iter()
            .map(|(&[x, y], state)| Tile::new(x, y, state.kind()))
    }

    /// Whether the tile at a coordinate blocks rays
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.state([x, y]).wall
    }

    /// Paint or clear a wall, returning whether the tile is now a wall
    ///
    /// Walls (touched by a trace or not) become empty; anything else becomes
    /// a wall. Trace marks on the tile are discarded either way.
    pub fn toggle_wall(&mut self, x: i32, y: i32) -> bool {
        let now_wall = !self.is_wall(x, y);
        let kind = if now_wall {
            TileKind::Wall
        } else {
            TileKind::Empty
        };
        self.set(x, y, kind);
        now_wall
    }

    /// Positions of every wall
    pub fn walls(&self) -> impl Iterator<Item = [i32; 2]> + '_ {
        self.tiles
            .iter()
            .filter(|(_, state)| state.wall)
            .map(|(&pos, _)| pos)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when no records are stored
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of stored tiles with the given classification
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles
            .values()
            .filter(|state| state.kind() == kind)
            .count()
    }

    /// Smallest box containing every stored record
    pub fn bounds(&self) -> Option<BoundingBox> {
        let mut keys = self.tiles.keys();
        let first = *keys.next()?;
        let mut bounds = BoundingBox::around(first);
        for &pos in keys {
            bounds.include(pos);
        }
        Some(bounds)
    }

    /// Drop every trace annotation
    ///
    /// Marked walls revert to plain walls and every other record is removed,
    /// which reads back as empty. Repeated traces therefore never grow the map
    /// beyond the wall count plus one trace's worth of tiles.
    pub fn reset_trace(&mut self) {
        self.tiles.retain(|_, state| {
            state.mark = None;
            state.wall
        });
    }

    /// Rasterise a region into a dense array indexed `[row, col]`
    pub fn to_dense(&self, bounds: &BoundingBox) -> Array2<TileKind> {
        Array2::from_shape_fn((bounds.height(), bounds.width()), |(row, col)| {
            let x = bounds.min[0] + col as i32;
            let y = bounds.min[1] + row as i32;
            self.state([x, y]).kind()
        })
    }

    pub(crate) fn state(&self, pos: [i32; 2]) -> TileState {
        self.tiles.get(&pos).copied().unwrap_or_default()
    }

    pub(crate) fn mark(&mut self, pos: [i32; 2], mark: TraceMark) {
        self.tiles.entry(pos).or_default().mark = Some(mark);
    }
}

impl FromIterator<[i32; 2]> for TileGrid {
    fn from_iter<I: IntoIterator<Item = [i32; 2]>>(walls: I) -> Self {
        let tiles = walls
            .into_iter()
            .map(|pos| (pos, TileState::WALL))
            .collect();
        Self { tiles }
    }
}

impl Extend<[i32; 2]> for TileGrid {
    fn extend<I: IntoIterator<Item = [i32; 2]>>(&mut self, walls: I) {
        for [x, y] in walls {
            self.set(x, y, TileKind::Wall);
        }
    }
}
