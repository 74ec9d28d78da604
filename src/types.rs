//! Core value types: sides, piece ids, grid positions, directions and cells.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Width and height of the grid.
pub const BOARD_SIZE: u8 = 8;

/// Number of cells on the grid.
pub const CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Maximum number of pieces a side may ever place.
pub const MAX_PIECES: usize = 12;

/// Number of rings that can be shrunk away (ring 3 is the 2x2 centre).
pub const MAX_SHRINKS: u8 = 3;

/// Side identifier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    First = 0,
    Second = 1,
}

impl Side {
    /// Both sides, in index order.
    pub const ALL: [Side; 2] = [Side::First, Side::Second];

    /// Get the opposing side.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Index into per-side arrays (0 or 1).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Board symbol for a piece of this side.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Side::First => 'O',
            Side::Second => '@',
        }
    }
}

/// Per-side piece identifier in `[0, MAX_PIECES)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub struct PieceId(u8);

impl PieceId {
    /// Create an id, or `None` when out of range.
    #[inline]
    pub const fn new(id: u8) -> Option<PieceId> {
        if (id as usize) < MAX_PIECES {
            Some(PieceId(id))
        } else {
            None
        }
    }

    /// Raw id value.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub(crate) const fn from_slot(slot: usize) -> PieceId {
        debug_assert!(slot < MAX_PIECES);
        PieceId(slot as u8)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Position on the 8x8 grid (0-63, row-major).
///
/// Layout:
/// ```text
///    0  1  2  3  4  5  6  7
///    8  9 10 11 12 13 14 15
///   ...
///   56 57 58 59 60 61 62 63
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub struct Pos(u8);

impl Pos {
    /// Create a position from row and column, or `None` when off the grid.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Pos> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Pos(row * BOARD_SIZE + col))
        } else {
            None
        }
    }

    /// Create a position from row and column (0-7 each).
    ///
    /// Panics when either coordinate is off the grid; use [`Pos::new`] for
    /// untrusted input.
    #[inline]
    pub const fn from_row_col(row: u8, col: u8) -> Pos {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "position off the grid");
        Pos(row * BOARD_SIZE + col)
    }

    /// Create a position from its row-major index, or `None` when `>= 64`.
    #[inline]
    pub const fn from_index(idx: usize) -> Option<Pos> {
        if idx < CELLS {
            Some(Pos(idx as u8))
        } else {
            None
        }
    }

    /// Get the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// Get the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Row-major index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Concentric ring this cell belongs to: 0 for the outer edge, 3 for
    /// the 2x2 centre.
    #[inline]
    pub fn ring(self) -> u8 {
        let (r, c) = (self.row(), self.col());
        let last = BOARD_SIZE - 1;
        r.min(c).min(last - r).min(last - c)
    }

    /// Neighbour one step away, or `None` when that leaves the grid.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Pos::new(row as u8, col as u8)
    }

    /// Same cell reflected left-to-right.
    #[inline]
    pub fn mirrored(self) -> Pos {
        Pos::from_row_col(self.row(), BOARD_SIZE - 1 - self.col())
    }

    /// Same cell reflected top-to-bottom.
    #[inline]
    pub fn flipped(self) -> Pos {
        Pos::from_row_col(BOARD_SIZE - 1 - self.row(), self.col())
    }

    /// Iterate over all 64 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..CELLS as u8).map(Pos)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

/// Orthogonal direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Direction {
    Left,
    Down,
    Right,
    Up,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Down, Direction::Right, Direction::Up];

    /// (row, col) offset of one step.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
        }
    }

    /// The opposite direction.
    #[inline]
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
        }
    }
}

/// Contents of one grid square.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied { side: Side, id: PieceId },
    /// Impassable wall. Hostile to every piece, never captured.
    Blocked,
    /// Shrunk out of play.
    Removed,
}

impl Cell {
    /// Whether this cell helps capture a piece of `side`.
    #[inline]
    pub fn is_hostile_to(self, side: Side) -> bool {
        match self {
            Cell::Occupied { side: other, .. } => other != side,
            Cell::Blocked => true,
            Cell::Empty | Cell::Removed => false,
        }
    }

    /// Whether a piece can be jumped over (an occupied or blocked square).
    #[inline]
    pub fn is_obstacle(self) -> bool {
        matches!(self, Cell::Occupied { .. } | Cell::Blocked)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Side owning the piece on this cell, if any.
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Occupied { side, .. } => Some(side),
            _ => None,
        }
    }

    /// Board symbol: `O`, `@`, `-`, `X` or `#`.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Occupied { side, .. } => side.symbol(),
            Cell::Blocked => 'X',
            Cell::Removed => '#',
        }
    }
}
