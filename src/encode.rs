//! Fixed-size numeric views of a position for an external evaluator.
//!
//! # Cell codes (64 x i8)
//!
//! ```text
//!  0  empty
//!  1  piece of the viewing side
//! -1  piece of the other side
//!  2  blocked
//!  3  removed
//! ```
//!
//! # Feature vector (258 x f32)
//!
//! ```text
//! [  0.. 64)  own pieces      (one-hot)
//! [ 64..128)  opposing pieces (one-hot)
//! [128..192)  blocked cells   (one-hot)
//! [192..256)  removed cells   (one-hot)
//! 256         1.0 while pieces are still being placed
//! 257         rings shrunk / 3
//! ```
//!
//! Both views are canonical per side: for `Second` the rows are flipped so
//! the viewer's home rows are always at the top.

use crate::board::{BoardState, Phase};
use crate::types::{Cell, Pos, Side, CELLS, MAX_SHRINKS};

/// One-hot planes in the feature vector.
pub const PLANES: usize = 4;

/// Length of [`BoardState::features`].
pub const FEATURE_LEN: usize = PLANES * CELLS + 2;

/// Board cell shown at `pos` when looking from `perspective`.
#[inline]
fn viewed(pos: Pos, perspective: Side) -> Pos {
    match perspective {
        Side::First => pos,
        Side::Second => pos.flipped(),
    }
}

impl BoardState {
    /// Integer code per cell, row-major, from `perspective`'s point of view.
    pub fn cell_codes(&self, perspective: Side) -> [i8; CELLS] {
        let mut codes = [0i8; CELLS];
        for pos in Pos::all() {
            codes[pos.index()] = match self.cell(viewed(pos, perspective)) {
                Cell::Empty => 0,
                Cell::Occupied { side, .. } if side == perspective => 1,
                Cell::Occupied { .. } => -1,
                Cell::Blocked => 2,
                Cell::Removed => 3,
            };
        }
        codes
    }

    /// One-hot feature vector from `perspective`'s point of view.
    pub fn features(&self, perspective: Side) -> [f32; FEATURE_LEN] {
        let mut out = [0.0f32; FEATURE_LEN];
        for pos in Pos::all() {
            let plane = match self.cell(viewed(pos, perspective)) {
                Cell::Empty => continue,
                Cell::Occupied { side, .. } if side == perspective => 0,
                Cell::Occupied { .. } => 1,
                Cell::Blocked => 2,
                Cell::Removed => 3,
            };
            out[plane * CELLS + pos.index()] = 1.0;
        }
        if self.phase() == Phase::Placing {
            out[PLANES * CELLS] = 1.0;
        }
        out[PLANES * CELLS + 1] = self.shrink_ring() as f32 / MAX_SHRINKS as f32;
        out
    }
}
