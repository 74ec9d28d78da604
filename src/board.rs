//! Board state: placement, movement, custodial capture and board shrinking.
//!
//! All mutating operations work in place. Search code that needs to branch
//! clones the state first; a clone is a flat copy of a few hundred bytes.

use std::fmt;

use crate::error::RulesError;
use crate::rules::Rules;
use crate::types::{Cell, Direction, PieceId, Pos, Side, BOARD_SIZE, CELLS, MAX_PIECES, MAX_SHRINKS};

/// Whether pieces are still being placed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Phase {
    Placing,
    Moving,
}

/// Result of a finished game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Outcome {
    Winner(Side),
    Draw,
}

/// What a successful [`BoardState::place`] did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlaceReport {
    /// Id consumed by the placement, even if the piece did not survive.
    pub id: PieceId,
    /// Neighbours captured by the new piece.
    pub captured: u8,
    /// False when the new piece landed in a flanked square and was removed.
    pub survived: bool,
}

/// What a successful [`BoardState::move_piece`] did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveReport {
    pub side: Side,
    pub id: PieceId,
    /// Neighbours captured by the moved piece.
    pub captured: u8,
    /// False when the mover ended up flanked and was removed.
    pub survived: bool,
    /// True when this move reached the shrink threshold.
    pub shrunk: bool,
}

/// Complete game state.
///
/// Grid and piece registry are kept in lockstep: every `Occupied` cell is
/// the position recorded for that piece, and every recorded position holds
/// that piece.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct BoardState {
    grid: [Cell; CELLS],
    /// Per side, piece id -> position. `None` once captured.
    pieces: [[Option<Pos>; MAX_PIECES]; 2],
    /// Ids consumed per side.
    placed: [u8; 2],
    /// Pieces currently on the board per side.
    live: [u8; 2],
    shrink_ring: u8,
    turns: u32,
    next_shrink_at: u32,
    shrink_step: u32,
    rules: Rules,
}

impl BoardState {
    /// Create the starting position under the default rules.
    pub fn new() -> BoardState {
        Self::with_rules(Rules::default())
    }

    /// Create the starting position under the given rules: four blocked
    /// corners, everything else empty.
    pub fn with_rules(rules: Rules) -> BoardState {
        let mut grid = [Cell::Empty; CELLS];
        let last = BOARD_SIZE - 1;
        for (row, col) in [(0, 0), (0, last), (last, 0), (last, last)] {
            grid[Pos::from_row_col(row, col).index()] = Cell::Blocked;
        }

        BoardState {
            grid,
            pieces: [[None; MAX_PIECES]; 2],
            placed: [0; 2],
            live: [0; 2],
            shrink_ring: 0,
            turns: 0,
            next_shrink_at: rules.first_shrink_at,
            shrink_step: rules.shrink_step,
            rules,
        }
    }

    // ========== Accessors ==========

    #[inline]
    pub fn cell(&self, pos: Pos) -> Cell {
        self.grid[pos.index()]
    }

    /// Side and id of the piece at `pos`, if any.
    #[inline]
    pub fn piece_at(&self, pos: Pos) -> Option<(Side, PieceId)> {
        match self.cell(pos) {
            Cell::Occupied { side, id } => Some((side, id)),
            _ => None,
        }
    }

    /// Current position of a piece, or `None` if captured or never placed.
    #[inline]
    pub fn position_of(&self, side: Side, id: PieceId) -> Option<Pos> {
        self.pieces[side.index()][id.index()]
    }

    /// Live pieces of `side` in id order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (PieceId, Pos)> + '_ {
        self.pieces[side.index()]
            .iter()
            .enumerate()
            .filter_map(|(slot, pos)| pos.map(|pos| (PieceId::from_slot(slot), pos)))
    }

    /// Pieces `side` has placed so far, captured ones included.
    #[inline]
    pub fn placed(&self, side: Side) -> u8 {
        self.placed[side.index()]
    }

    /// Pieces `side` has on the board.
    #[inline]
    pub fn live(&self, side: Side) -> u8 {
        self.live[side.index()]
    }

    /// Number of rings shrunk away so far (0-3).
    #[inline]
    pub fn shrink_ring(&self) -> u8 {
        self.shrink_ring
    }

    /// Moves played so far. Placements are not counted.
    #[inline]
    pub fn turns_played(&self) -> u32 {
        self.turns
    }

    #[inline]
    pub fn next_shrink_at(&self) -> u32 {
        self.next_shrink_at
    }

    #[inline]
    pub fn shrink_step(&self) -> u32 {
        self.shrink_step
    }

    #[inline]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Whether `pos` is still inside the playing area.
    #[inline]
    pub fn is_active(&self, pos: Pos) -> bool {
        pos.ring() >= self.shrink_ring
    }

    /// Whether `pos` lies in `side`'s placement zone.
    #[inline]
    pub fn in_zone(&self, side: Side, pos: Pos) -> bool {
        self.rules.in_zone(side, pos, self.shrink_ring)
    }

    /// Whether `side` may place a piece at `pos` right now.
    #[inline]
    pub fn can_place(&self, side: Side, pos: Pos) -> bool {
        (self.placed(side) as usize) < MAX_PIECES
            && self.is_active(pos)
            && self.cell(pos).is_empty()
            && self.in_zone(side, pos)
    }

    /// `Placing` until both sides have used all their pieces.
    pub fn phase(&self) -> Phase {
        if Side::ALL.iter().any(|&side| (self.placed(side) as usize) < MAX_PIECES) {
            Phase::Placing
        } else {
            Phase::Moving
        }
    }

    /// True once either side is down to fewer than two pieces.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.live.iter().any(|&n| n < 2)
    }

    /// The result, or `None` while the game is still on.
    pub fn outcome(&self) -> Option<Outcome> {
        let first_out = self.live(Side::First) < 2;
        let second_out = self.live(Side::Second) < 2;
        match (first_out, second_out) {
            (false, false) => None,
            (true, true) => Some(Outcome::Draw),
            (true, false) => Some(Outcome::Winner(Side::Second)),
            (false, true) => Some(Outcome::Winner(Side::First)),
        }
    }

    // ========== Placement & Movement ==========

    /// Place a new piece for `side` at `pos`.
    ///
    /// Captures neighbours the new piece flanks, then removes the new piece
    /// itself if it sits between two hostile cells. Its id is consumed
    /// either way. Does not advance the turn counter.
    pub fn place(&mut self, side: Side, pos: Pos) -> Result<PlaceReport, RulesError> {
        let illegal = RulesError::IllegalPlacement { side, pos };
        let id = PieceId::new(self.placed(side)).ok_or(illegal)?;
        if !self.can_place(side, pos) {
            return Err(illegal);
        }

        self.placed[side.index()] += 1;
        self.grid[pos.index()] = Cell::Occupied { side, id };
        let captured = self.resolve_captures(pos);

        let survived = !self.is_captured(pos);
        if survived {
            self.pieces[side.index()][id.index()] = Some(pos);
            self.live[side.index()] += 1;
        } else {
            // Never registered, so only the grid needs clearing.
            self.grid[pos.index()] = Cell::Empty;
        }

        Ok(PlaceReport { id, captured, survived })
    }

    /// Move the piece at `from` to `to` by a single step or jump.
    ///
    /// Captures neighbours of `to` first, then removes the mover if it is
    /// flanked. Advances the turn counter and shrinks the board when the
    /// schedule says so.
    pub fn move_piece(&mut self, from: Pos, to: Pos) -> Result<MoveReport, RulesError> {
        let illegal = RulesError::IllegalMove { from, to };
        let (side, id) = self.piece_at(from).ok_or(illegal)?;
        if !self.destinations(from).contains(to) {
            return Err(illegal);
        }

        self.grid[from.index()] = Cell::Empty;
        self.grid[to.index()] = Cell::Occupied { side, id };
        self.pieces[side.index()][id.index()] = Some(to);
        let captured = self.resolve_captures(to);

        let survived = !self.is_captured(to);
        if !survived {
            self.remove_piece(to);
        }

        self.turns += 1;
        let shrunk = self.turns == self.next_shrink_at && self.shrink_ring < MAX_SHRINKS;
        if shrunk {
            self.shrink();
        }

        Ok(MoveReport { side, id, captured, survived, shrunk })
    }

    // ========== Capture ==========

    /// Capture every neighbour of `at` that is flanked along the axis
    /// through `at`. Returns the number captured.
    fn resolve_captures(&mut self, at: Pos) -> u8 {
        let mut captured = 0;
        for dir in Direction::ALL {
            if let Some(target) = self.flanked_neighbour(at, dir) {
                self.remove_piece(target);
                captured += 1;
            }
        }
        captured
    }

    /// The neighbour of `at` in direction `dir`, if it holds a piece caught
    /// between `at` and the cell beyond it.
    #[inline]
    fn flanked_neighbour(&self, at: Pos, dir: Direction) -> Option<Pos> {
        at.step(dir).filter(|&target| self.is_flanked(target, dir))
    }

    /// Whether the piece at `pos` has hostile active cells on both sides
    /// along `axis`.
    fn is_flanked(&self, pos: Pos, axis: Direction) -> bool {
        let Some(side) = self.cell(pos).side() else {
            return false;
        };
        let hostile = |dir: Direction| {
            pos.step(dir)
                .is_some_and(|p| self.is_active(p) && self.cell(p).is_hostile_to(side))
        };
        hostile(axis) && hostile(axis.reverse())
    }

    /// Whether the piece at `pos` is flanked on either axis.
    #[inline]
    fn is_captured(&self, pos: Pos) -> bool {
        self.is_flanked(pos, Direction::Down) || self.is_flanked(pos, Direction::Right)
    }

    /// Clear `pos`, dropping its piece from the registry if there is one.
    fn remove_piece(&mut self, pos: Pos) {
        if let Cell::Occupied { side, id } = self.cell(pos) {
            self.pieces[side.index()][id.index()] = None;
            self.live[side.index()] -= 1;
        }
        self.grid[pos.index()] = Cell::Empty;
    }

    // ========== Shrinking ==========

    /// Remove the outermost active ring and wall off the next one.
    ///
    /// Walls capture pieces they flank. Those captures are all decided
    /// against the fully walled board before any piece is taken off, rather
    /// than wall by wall, so two walls can each take a piece even when one
    /// capture would have freed the other piece. Wall order never matters.
    fn shrink(&mut self) {
        let ring = self.shrink_ring;
        for pos in Pos::all().filter(|p| p.ring() == ring) {
            self.remove_piece(pos);
            self.grid[pos.index()] = Cell::Removed;
        }
        self.shrink_ring += 1;

        let rules = self.rules;
        let wall_ring = self.shrink_ring;
        for pos in rules.wall_cells(wall_ring) {
            self.remove_piece(pos);
            self.grid[pos.index()] = Cell::Blocked;
        }

        let mut doomed = [false; CELLS];
        for wall in rules.wall_cells(wall_ring) {
            for dir in Direction::ALL {
                if let Some(target) = self.flanked_neighbour(wall, dir) {
                    doomed[target.index()] = true;
                }
            }
        }
        for pos in Pos::all().filter(|p| doomed[p.index()]) {
            self.remove_piece(pos);
        }

        self.next_shrink_at = self.next_shrink_at.saturating_add(self.shrink_step);
        self.shrink_step /= 2;
    }

    // ========== Symmetry ==========

    /// The same position reflected left-to-right.
    ///
    /// Corners, rings and placement zones are all symmetric under this
    /// reflection, so the mirrored state plays exactly like the original.
    pub fn mirrored(&self) -> BoardState {
        let mut out = self.clone();
        for pos in Pos::all() {
            out.grid[pos.mirrored().index()] = self.grid[pos.index()];
        }
        for slot in out.pieces.iter_mut().flatten() {
            *slot = slot.map(Pos::mirrored);
        }
        out
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.cell(Pos::from_row_col(row, col)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
