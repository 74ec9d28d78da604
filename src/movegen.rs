//! Legal placement and movement enumeration.
//!
//! Enumerations are lazy iterators borrowing the board. They are rebuilt
//! from the current state on every call and can be dropped part way
//! through.

use crate::board::BoardState;
use crate::types::{Cell, Direction, Pos, Side};

/// One destination per direction at most.
pub const MAX_DESTINATIONS: usize = 4;

/// Fixed-size destination list for a single piece (no heap allocation).
#[derive(Clone, Copy, Debug)]
pub struct Destinations {
    cells: [Pos; MAX_DESTINATIONS],
    len: u8,
}

impl Destinations {
    /// Create an empty list.
    #[inline]
    pub const fn new() -> Destinations {
        Destinations {
            cells: [Pos::from_row_col(0, 0); MAX_DESTINATIONS],
            len: 0,
        }
    }

    #[inline]
    fn push(&mut self, pos: Pos) {
        debug_assert!((self.len as usize) < MAX_DESTINATIONS);
        self.cells[self.len as usize] = pos;
        self.len += 1;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Pos] {
        &self.cells[..self.len as usize]
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.as_slice().contains(&pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.as_slice().iter().copied()
    }
}

impl Default for Destinations {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Destinations {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Destinations {}

impl IntoIterator for Destinations {
    type Item = Pos;
    type IntoIter = std::iter::Take<std::array::IntoIter<Pos, MAX_DESTINATIONS>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter().take(self.len as usize)
    }
}

impl BoardState {
    /// Empty active cells in `side`'s zone, row-major. Yields nothing once
    /// `side` has placed all its pieces.
    pub fn legal_placements(&self, side: Side) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.can_place(side, pos))
    }

    /// Every live piece of `side` with the cells it can reach, in id order.
    /// Pieces that cannot move are included with an empty list.
    pub fn legal_moves(&self, side: Side) -> impl Iterator<Item = (Pos, Destinations)> + '_ {
        self.pieces(side).map(move |(_, from)| (from, self.destinations(from)))
    }

    /// Total number of (piece, destination) pairs for `side`.
    pub fn move_count(&self, side: Side) -> usize {
        self.legal_moves(side).map(|(_, dests)| dests.len()).sum()
    }

    /// Cells the piece at `from` can reach, in Left, Down, Right, Up order.
    /// Empty if `from` holds no piece.
    pub fn destinations(&self, from: Pos) -> Destinations {
        let mut out = Destinations::new();
        if self.piece_at(from).is_none() {
            return out;
        }
        for dir in Direction::ALL {
            if let Some(to) = self.destination(from, dir) {
                out.push(to);
            }
        }
        out
    }

    /// Step into an empty neighbour, else jump one obstacle into the empty
    /// cell beyond it.
    fn destination(&self, from: Pos, dir: Direction) -> Option<Pos> {
        let next = from.step(dir).filter(|&p| self.is_active(p))?;
        match self.cell(next) {
            Cell::Empty => Some(next),
            cell if cell.is_obstacle() => next
                .step(dir)
                .filter(|&p| self.is_active(p) && self.cell(p).is_empty()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Rules, ZoneRule};

    fn pos(row: u8, col: u8) -> Pos {
        Pos::from_row_col(row, col)
    }

    #[test]
    fn test_destinations_list() {
        let mut list = Destinations::new();
        assert!(list.is_empty());
        list.push(pos(1, 1));
        list.push(pos(2, 2));
        assert_eq!(list.len(), 2);
        assert!(list.contains(pos(2, 2)));
        assert!(!list.contains(pos(0, 0)));
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![pos(1, 1), pos(2, 2)]);
        assert_eq!(list.iter().count(), 2);
    }

    #[test]
    fn test_initial_placements() {
        let board = BoardState::new();
        // Six rows of eight, minus the two corners in the band.
        assert_eq!(board.legal_placements(Side::First).count(), 46);
        assert_eq!(board.legal_placements(Side::Second).count(), 46);
        assert!(board.legal_placements(Side::First).all(|p| p.row() < 6));
        assert!(board.legal_placements(Side::Second).all(|p| p.row() >= 2));
        assert_eq!(board.legal_placements(Side::First).next(), Some(pos(0, 1)));
    }

    #[test]
    fn test_placements_skip_occupied() {
        let mut board = BoardState::new();
        board.place(Side::Second, pos(4, 4)).unwrap();
        assert!(!board.legal_placements(Side::First).any(|p| p == pos(4, 4)));
        assert_eq!(board.legal_placements(Side::First).count(), 45);
    }

    #[test]
    fn test_placements_agree_with_place() {
        let mut board = BoardState::with_rules(Rules { zones: ZoneRule::Shrinking, ..Rules::default() });
        board.place(Side::First, pos(2, 2)).unwrap();
        board.place(Side::Second, pos(5, 5)).unwrap();

        for side in Side::ALL {
            let legal: Vec<Pos> = board.legal_placements(side).collect();
            for at in Pos::all() {
                let mut probe = board.clone();
                assert_eq!(probe.place(side, at).is_ok(), legal.contains(&at), "{side:?} at {at}");
            }
        }
    }

    #[test]
    fn test_single_piece_moves() {
        let mut board = BoardState::new();
        board.place(Side::First, pos(3, 3)).unwrap();

        let moves: Vec<(Pos, Destinations)> = board.legal_moves(Side::First).collect();
        assert_eq!(moves.len(), 1);
        let (from, dests) = moves[0];
        assert_eq!(from, pos(3, 3));
        assert_eq!(dests.as_slice(), &[pos(3, 2), pos(4, 3), pos(3, 4), pos(2, 3)]);
        assert_eq!(board.legal_moves(Side::Second).count(), 0);
    }

    #[test]
    fn test_jump_over_piece() {
        let mut board = BoardState::new();
        board.place(Side::First, pos(3, 3)).unwrap();
        board.place(Side::Second, pos(3, 4)).unwrap();

        let dests = board.destinations(pos(3, 3));
        assert!(dests.contains(pos(3, 5)));
        assert!(!dests.contains(pos(3, 4)));
    }

    #[test]
    fn test_jump_blocked_when_far_cell_taken() {
        let mut board = BoardState::new();
        board.place(Side::First, pos(3, 3)).unwrap();
        board.place(Side::First, pos(3, 4)).unwrap();
        board.place(Side::First, pos(3, 5)).unwrap();

        let dests = board.destinations(pos(3, 3));
        assert!(!dests.iter().any(|p| p.row() == 3 && p.col() > 3));
        assert_eq!(dests.len(), 3);
    }

    #[test]
    fn test_walls_are_never_destinations() {
        let mut board = BoardState::new();
        board.place(Side::First, pos(0, 1)).unwrap();
        board.place(Side::First, pos(1, 0)).unwrap();
        // Beyond the (0,0) corner is off the grid, so there is no jump either.
        assert_eq!(board.destinations(pos(0, 1)).as_slice(), &[pos(1, 1), pos(0, 2)]);
        assert_eq!(board.destinations(pos(1, 0)).as_slice(), &[pos(2, 0), pos(1, 1)]);
    }

    #[test]
    fn test_jump_along_edge() {
        let mut board = BoardState::new();
        board.place(Side::First, pos(0, 3)).unwrap();
        board.place(Side::First, pos(0, 2)).unwrap();
        let dests = board.destinations(pos(0, 3));
        assert_eq!(dests.as_slice(), &[pos(0, 1), pos(1, 3), pos(0, 4)]);
    }

    #[test]
    fn test_empty_source_has_no_destinations() {
        let board = BoardState::new();
        assert!(board.destinations(pos(3, 3)).is_empty());
        assert!(board.destinations(pos(0, 0)).is_empty());
    }

    #[test]
    fn test_move_count_mirror_symmetric() {
        let mut board = BoardState::new();
        for (side, r, c) in [
            (Side::First, 1, 1),
            (Side::First, 2, 3),
            (Side::Second, 3, 3),
            (Side::Second, 5, 6),
            (Side::Second, 2, 6),
        ] {
            board.place(side, pos(r, c)).unwrap();
        }
        let mirror = board.mirrored();
        for side in Side::ALL {
            assert_eq!(board.move_count(side), mirror.move_count(side));
            assert_eq!(board.legal_placements(side).count(), mirror.legal_placements(side).count());
        }
    }
}
