//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Allowed board dimensions (height and width are independent)
pub const MIN_DIM: u8 = 8;
pub const MAX_DIM: u8 = 10;

/// Cell capacity of the backing grid array (largest supported board)
pub const GRID_CAP: usize = (MAX_DIM as usize) * (MAX_DIM as usize);

/// Sunk pieces a team needs to win
pub const WIN_TARGET: u8 = 4;

/// Line terminating the board setup section
pub const SETUP_SENTINEL: &str = "#";

/// Pieces must start at least this many cells from every edge;
/// sinks must sit within this many cells of some edge.
pub const PLACEMENT_MARGIN: i8 = 3;

/// The two sides of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Light,
    Dark,
}

impl Team {
    pub fn opponent(&self) -> Self {
        match self {
            Team::Light => Team::Dark,
            Team::Dark => Team::Light,
        }
    }

    /// Parse team from its setup letter
    pub fn from_letter(s: &str) -> Option<Self> {
        match s {
            "l" => Some(Team::Light),
            "d" => Some(Team::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Light => "light",
            Team::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Piece kinds, distinguished by footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// 1 cell
    Single,
    /// 2 cells in a line
    Medium,
    /// 3 cells in a line
    Large,
    /// 2x2 block
    Square,
}

impl PieceKind {
    /// Parse piece kind from its setup letter (case-insensitive)
    pub fn from_letter(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "a" => Some(PieceKind::Single),
            "b" => Some(PieceKind::Medium),
            "c" => Some(PieceKind::Large),
            "d" => Some(PieceKind::Square),
            _ => None,
        }
    }

    /// Board symbol: lowercase for light, uppercase for dark
    pub fn symbol(&self, team: Team) -> char {
        let ch = match self {
            PieceKind::Single => 'a',
            PieceKind::Medium => 'b',
            PieceKind::Large => 'c',
            PieceKind::Square => 'd',
        };
        match team {
            Team::Light => ch,
            Team::Dark => ch.to_ascii_uppercase(),
        }
    }

    /// Resolve a board symbol back to kind and team
    pub fn from_symbol(ch: char) -> Option<(Self, Team)> {
        let team = if ch.is_ascii_lowercase() {
            Team::Light
        } else {
            Team::Dark
        };
        let kind = match ch.to_ascii_lowercase() {
            'a' => PieceKind::Single,
            'b' => PieceKind::Medium,
            'c' => PieceKind::Large,
            'd' => PieceKind::Square,
            _ => return None,
        };
        Some((kind, team))
    }

    /// Number of cells in the footprint
    pub fn cell_count(&self) -> usize {
        match self {
            PieceKind::Single => 1,
            PieceKind::Medium => 2,
            PieceKind::Large => 3,
            PieceKind::Square => 4,
        }
    }

    /// Length of the body along its long axis
    pub fn body_len(&self) -> i8 {
        match self {
            PieceKind::Single => 1,
            PieceKind::Medium => 2,
            PieceKind::Large => 3,
            PieceKind::Square => 2,
        }
    }

    /// Whether the footprint has a long axis (an orientation)
    pub fn is_oriented(&self) -> bool {
        matches!(self, PieceKind::Medium | PieceKind::Large)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Single => "single",
            PieceKind::Medium => "medium",
            PieceKind::Large => "large",
            PieceKind::Square => "square",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grid axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Which axis a multi-cell piece's body lies along.
///
/// Derived from grid geometry, never stored (see `core::pieces`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Body extends downward from the anchor
    Upright,
    /// Body extends rightward from the anchor
    Lying,
}

impl Orientation {
    pub fn long_axis(&self) -> Axis {
        match self {
            Orientation::Upright => Axis::Vertical,
            Orientation::Lying => Axis::Horizontal,
        }
    }
}

/// Slide directions.
///
/// Rows grow downward: `Down` increases the row index and matches the pull
/// of gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Parse direction from its command letter
    pub fn from_letter(s: &str) -> Option<Self> {
        match s {
            "l" => Some(Direction::Left),
            "r" => Some(Direction::Right),
            "u" => Some(Direction::Up),
            "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// (row delta, col delta) for one step
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }
}

/// Contents of one grid cell.
///
/// A multi-cell piece is one `Anchor` plus `Extension` cells that point back
/// at it through the anchor's encoded coordinate. Illegal mixtures (a piece
/// letter that is also a sink, a numeric back-reference with no meaning) are
/// unrepresentable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Permanently impassable; never occupied or cleared
    Blocked,
    /// Scoring target; removes the piece resting directly above it
    Sink,
    /// The single authoritative marker for a piece
    Anchor { kind: PieceKind, team: Team },
    /// Auxiliary cell of a multi-cell piece; `owner` is the encoded
    /// coordinate (`row * width + col`) of its anchor
    Extension { owner: u8 },
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl Cell {
    /// Whether this cell belongs to some piece's footprint
    pub fn is_piece(&self) -> bool {
        matches!(self, Cell::Anchor { .. } | Cell::Extension { .. })
    }
}
