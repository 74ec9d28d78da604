//! Rules engine for a two-player custodial-capture game on a shrinking 8x8
//! board.
//!
//! # Board
//!
//! ```text
//!      0 1 2 3 4 5 6 7
//!   0  X - - - - - - X      O  first side's piece
//!   1  - - - - - - - -      @  second side's piece
//!   2  - - - - - - - -      -  empty
//!   3  - - - - - - - -      X  blocked (wall)
//!   4  - - - - - - - -      #  removed by a shrink
//!   5  - - - - - - - -
//!   6  - - - - - - - -      First places in rows 0-5,
//!   7  X - - - - - - X      Second in rows 2-7.
//! ```
//!
//! # Rules
//!
//! - A piece flanked on one axis by two hostile cells (opposing pieces or
//!   walls) is captured. The piece that just arrived captures first and is
//!   then itself checked, so a move can take a piece and die in the process.
//! - Pieces move one orthogonal step into an empty cell, or jump one
//!   occupied or walled cell into the empty cell beyond.
//! - After `first_shrink_at` moves (128 by default) the outer ring is
//!   removed and the next ring is walled off; further shrinks follow after
//!   64, 32, ... more moves, at most three in total.
//! - The game is over once either side has fewer than two pieces.
//!
//! [`BoardState`] mutates in place; clone it to branch.
//!
//! ```
//! use squeeze_core::{BoardState, Pos, Side};
//!
//! let mut board = BoardState::new();
//! board.place(Side::First, Pos::from_row_col(2, 1)).unwrap();
//! board.place(Side::Second, Pos::from_row_col(2, 0)).unwrap();
//! let report = board.place(Side::Second, Pos::from_row_col(2, 2)).unwrap();
//!
//! assert_eq!(report.captured, 1);
//! assert_eq!(board.live(Side::First), 0);
//! ```

#[cfg(feature = "wasm")]
pub mod wasm;

pub mod board;
pub mod encode;
pub mod error;
pub mod movegen;
pub mod rules;
pub mod types;

pub use board::{BoardState, MoveReport, Outcome, Phase, PlaceReport};
pub use encode::FEATURE_LEN;
pub use error::RulesError;
pub use movegen::Destinations;
pub use rules::{Rules, WallRule, ZoneRule};
pub use types::{Cell, Direction, PieceId, Pos, Side, BOARD_SIZE, CELLS, MAX_PIECES, MAX_SHRINKS};
