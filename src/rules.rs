//! Rule configuration: shrink schedule, placement zones and wall layout.

use serde::{Deserialize, Serialize};

use crate::types::{Pos, Side, BOARD_SIZE};

/// Rows a side may place into.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneRule {
    /// First places in rows 0-5, Second in rows 2-7, whatever has been shrunk.
    #[default]
    Fixed,
    /// Both bands move inward with the active area.
    Shrinking,
    /// Any active row.
    Unrestricted,
}

/// Which cells of the new outermost ring turn into walls on a shrink.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallRule {
    /// The whole perimeter of the new outermost ring.
    #[default]
    Ring,
    /// Only its four corners.
    Corners,
}

/// Game configuration carried by every [`BoardState`](crate::BoardState).
///
/// Missing fields deserialize to their defaults:
///
/// ```
/// use squeeze_core::{Rules, ZoneRule};
///
/// let rules: Rules = serde_json::from_str(r#"{ "zones": "unrestricted" }"#).unwrap();
/// assert_eq!(rules.zones, ZoneRule::Unrestricted);
/// assert_eq!(rules.first_shrink_at, 128);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Turn count that triggers the first shrink.
    pub first_shrink_at: u32,
    /// Gap before the second shrink; halved after every shrink.
    pub shrink_step: u32,
    pub zones: ZoneRule,
    pub walls: WallRule,
}

impl Rules {
    pub const DEFAULT_FIRST_SHRINK: u32 = 128;
    pub const DEFAULT_SHRINK_STEP: u32 = 64;

    /// Half-open row band `[start, end)` that `side` may place into once
    /// `ring` rings have been shrunk.
    pub fn zone_rows(&self, side: Side, ring: u8) -> (u8, u8) {
        match (self.zones, side) {
            (ZoneRule::Fixed, Side::First) => (0, BOARD_SIZE - 2),
            (ZoneRule::Fixed, Side::Second) => (2, BOARD_SIZE),
            (ZoneRule::Shrinking, Side::First) => (ring, (BOARD_SIZE - 2).saturating_sub(ring)),
            (ZoneRule::Shrinking, Side::Second) => (2 + ring, BOARD_SIZE - ring),
            (ZoneRule::Unrestricted, _) => (0, BOARD_SIZE),
        }
    }

    /// Whether `pos` lies in `side`'s placement band. Does not check that
    /// the cell is still active.
    #[inline]
    pub fn in_zone(&self, side: Side, pos: Pos, ring: u8) -> bool {
        let (start, end) = self.zone_rows(side, ring);
        (start..end).contains(&pos.row())
    }

    /// Cells of `ring` that become walls when it turns into the outermost
    /// active ring.
    pub fn wall_cells(&self, ring: u8) -> impl Iterator<Item = Pos> + '_ {
        let far = BOARD_SIZE - 1 - ring;
        let walls = self.walls;
        Pos::all().filter(move |pos| {
            pos.ring() == ring
                && match walls {
                    WallRule::Ring => true,
                    WallRule::Corners => {
                        (pos.row() == ring || pos.row() == far) && (pos.col() == ring || pos.col() == far)
                    }
                }
        })
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            first_shrink_at: Self::DEFAULT_FIRST_SHRINK,
            shrink_step: Self::DEFAULT_SHRINK_STEP,
            zones: ZoneRule::Fixed,
            walls: WallRule::Ring,
        }
    }
}
