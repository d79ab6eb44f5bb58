//! Tile classification and per-tile state
//!
//! A tile carries two orthogonal pieces of state: a persistent wall flag set
//! by the caller, and a transient trace mark written by the tracer. The public
//! [`TileKind`] enumeration is derived from both, so illegal combinations such
//! as a wall tagged as the last clear tile cannot be stored.

use std::fmt;

/// Classification of a tile as seen by callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileKind {
    /// Untouched or cleared tile
    #[default]
    Empty,
    /// Persistent obstacle placed by the caller
    Wall,
    /// Empty tile visited by the current trace
    EmptyCollide,
    /// Empty tile entered immediately before a wall was struck
    EmptyLastCollide,
    /// Wall tile entered by the current trace, which terminated it
    WallCollide,
    /// Visited empty tile on a trace that reached its target
    Connect,
    /// Last empty tile before the target on a successful trace
    ConnectLast,
    /// Tile containing the end point of a successful trace
    ConnectEnd,
}

impl TileKind {
    /// Every classification, in palette order
    pub const ALL: [Self; 8] = [
        Self::Empty,
        Self::EmptyCollide,
        Self::EmptyLastCollide,
        Self::Connect,
        Self::ConnectLast,
        Self::ConnectEnd,
        Self::Wall,
        Self::WallCollide,
    ];

    /// Whether the tile blocks rays, whether or not a trace has touched it
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall | Self::WallCollide)
    }

    /// Whether this classification only exists for the duration of one trace
    pub const fn is_trace_transient(self) -> bool {
        !matches!(self, Self::Empty | Self::Wall)
    }

    /// Whether the tile was visited by the most recent trace
    pub const fn is_visited(self) -> bool {
        self.is_trace_transient()
    }

    /// Classification after the reset pass that starts every trace
    pub const fn reset(self) -> Self {
        if self.is_wall() { Self::Wall } else { Self::Empty }
    }

    /// Upper-case tag name, matching the names used in rendering legends
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::Wall => "WALL",
            Self::EmptyCollide => "EMPTY_COLLIDE",
            Self::EmptyLastCollide => "EMPTY_LAST_COLLIDE",
            Self::WallCollide => "WALL_COLLIDE",
            Self::Connect => "CONNECT",
            Self::ConnectLast => "CONNECT_LAST",
            Self::ConnectEnd => "CONNECT_END",
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Transient annotation left on a tile by the tracer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceMark {
    /// Tile entered by the walk
    Collide,
    /// Empty tile entered just before the wall that stopped the walk
    LastCollide,
    /// Tile on a walk that reached its end point
    Connect,
    /// Second-to-last tile of a walk that reached its end point
    ConnectLast,
    /// Final tile of a walk that reached its end point
    ConnectEnd,
}

/// Stored state of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileState {
    /// Persistent obstacle flag
    pub wall: bool,
    /// Annotation from the current trace, if the tile was visited
    pub mark: Option<TraceMark>,
}

impl TileState {
    /// State of an untouched coordinate
    pub const EMPTY: Self = Self {
        wall: false,
        mark: None,
    };

    /// State of an untouched wall
    pub const WALL: Self = Self {
        wall: true,
        mark: None,
    };

    /// Split a classification back into its wall flag and trace mark
    pub const fn from_kind(kind: TileKind) -> Self {
        let (wall, mark) = match kind {
            TileKind::Empty => (false, None),
            TileKind::Wall => (true, None),
            TileKind::EmptyCollide => (false, Some(TraceMark::Collide)),
            TileKind::EmptyLastCollide => (false, Some(TraceMark::LastCollide)),
            TileKind::WallCollide => (true, Some(TraceMark::Collide)),
            TileKind::Connect => (false, Some(TraceMark::Connect)),
            TileKind::ConnectLast => (false, Some(TraceMark::ConnectLast)),
            TileKind::ConnectEnd => (false, Some(TraceMark::ConnectEnd)),
        };
        Self { wall, mark }
    }

    /// Classification derived from the wall flag and trace mark
    ///
    /// Walls only ever carry the plain collide mark; any mark on a wall reads
    /// back as [`TileKind::WallCollide`].
    pub const fn kind(self) -> TileKind {
        match (self.wall, self.mark) {
            (true, None) => TileKind::Wall,
            (true, Some(_)) => TileKind::WallCollide,
            (false, None) => TileKind::Empty,
            (false, Some(TraceMark::Collide)) => TileKind::EmptyCollide,
            (false, Some(TraceMark::LastCollide)) => TileKind::EmptyLastCollide,
            (false, Some(TraceMark::Connect)) => TileKind::Connect,
            (false, Some(TraceMark::ConnectLast)) => TileKind::ConnectLast,
            (false, Some(TraceMark::ConnectEnd)) => TileKind::ConnectEnd,
        }
    }

    /// True when the state is indistinguishable from an absent record
    pub const fn is_default(self) -> bool {
        !self.wall && self.mark.is_none()
    }
}

/// A tile read back from the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Integer tile coordinates `[x, y]`
    pub position: [i32; 2],
    /// Current classification
    pub kind: TileKind,
}

impl Tile {
    /// Create a tile record
    pub const fn new(x: i32, y: i32, kind: TileKind) -> Self {
        Self {
            position: [x, y],
            kind,
        }
    }

    /// Horizontal tile index
    pub const fn x(&self) -> i32 {
        self.position[0]
    }

    /// Vertical tile index
    pub const fn y(&self) -> i32 {
        self.position[1]
    }

    /// Check the classification
    pub fn is(&self, kind: TileKind) -> bool {
        self.kind == kind
    }
}
