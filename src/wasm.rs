//! WASM bindings for squeeze-core
//!
//! Provides a JavaScript-friendly API for the rules engine.

use wasm_bindgen::prelude::*;

use crate::{BoardState, Outcome, Pos, Rules, Side};

/// WASM-friendly wrapper around BoardState
#[wasm_bindgen]
pub struct WasmBoard {
    inner: BoardState,
}

fn side_from(side: u8) -> Option<Side> {
    match side {
        0 => Some(Side::First),
        1 => Some(Side::Second),
        _ => None,
    }
}

#[wasm_bindgen]
impl WasmBoard {
    /// Create a new board under the default rules
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmBoard {
        WasmBoard { inner: BoardState::new() }
    }

    /// Create a board from a rules object, e.g. `{ zones: "unrestricted" }`
    #[wasm_bindgen(js_name = withRules)]
    pub fn with_rules(rules: JsValue) -> Result<WasmBoard, JsValue> {
        let rules: Rules = serde_wasm_bindgen::from_value(rules)?;
        Ok(WasmBoard { inner: BoardState::with_rules(rules) })
    }

    /// Place a piece for side 0 or 1. Returns true if legal.
    pub fn place(&mut self, side: u8, row: u8, col: u8) -> bool {
        match (side_from(side), Pos::new(row, col)) {
            (Some(side), Some(pos)) => self.inner.place(side, pos).is_ok(),
            _ => false,
        }
    }

    /// Move a piece. Returns true if legal.
    #[wasm_bindgen(js_name = movePiece)]
    pub fn move_piece(&mut self, from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> bool {
        match (Pos::new(from_row, from_col), Pos::new(to_row, to_col)) {
            (Some(from), Some(to)) => self.inner.move_piece(from, to).is_ok(),
            _ => false,
        }
    }

    /// Legal placements as a JSON array of `[row, col]`
    #[wasm_bindgen(js_name = legalPlacements)]
    pub fn legal_placements(&self, side: u8) -> Result<JsValue, JsValue> {
        let cells: Vec<[u8; 2]> = side_from(side)
            .map(|side| self.inner.legal_placements(side).map(|p| [p.row(), p.col()]).collect())
            .unwrap_or_default();
        Ok(serde_wasm_bindgen::to_value(&cells)?)
    }

    /// Legal moves as a JSON array of `{ from: [row, col], to: [[row, col], ...] }`
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self, side: u8) -> Result<JsValue, JsValue> {
        let moves: Vec<WasmMoves> = side_from(side)
            .map(|side| {
                self.inner
                    .legal_moves(side)
                    .map(|(from, dests)| WasmMoves {
                        from: [from.row(), from.col()],
                        to: dests.iter().map(|p| [p.row(), p.col()]).collect(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(serde_wasm_bindgen::to_value(&moves)?)
    }

    /// Cell codes from side 0's view: 0 empty, 1 first, -1 second, 2 blocked, 3 removed
    pub fn cells(&self) -> Vec<i8> {
        self.inner.cell_codes(Side::First).to_vec()
    }

    /// Pieces on the board for side 0 or 1
    pub fn live(&self, side: u8) -> u8 {
        side_from(side).map_or(0, |side| self.inner.live(side))
    }

    #[wasm_bindgen(js_name = turnsPlayed)]
    pub fn turns_played(&self) -> u32 {
        self.inner.turns_played()
    }

    #[wasm_bindgen(js_name = shrinkRing)]
    pub fn shrink_ring(&self) -> u8 {
        self.inner.shrink_ring()
    }

    #[wasm_bindgen(js_name = isTerminal)]
    pub fn is_terminal(&self) -> bool {
        self.inner.is_terminal()
    }

    /// Get game result: "ongoing", "first_wins", "second_wins", or "draw"
    pub fn result(&self) -> String {
        match self.inner.outcome() {
            None => "ongoing".to_string(),
            Some(Outcome::Winner(Side::First)) => "first_wins".to_string(),
            Some(Outcome::Winner(Side::Second)) => "second_wins".to_string(),
            Some(Outcome::Draw) => "draw".to_string(),
        }
    }

    /// Board as text, one row per line
    pub fn render(&self) -> String {
        self.inner.to_string()
    }

    /// Clone the board
    #[wasm_bindgen(js_name = clone)]
    pub fn clone_board(&self) -> WasmBoard {
        WasmBoard { inner: self.inner.clone() }
    }
}

impl Default for WasmBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable moves of one piece for JavaScript
#[derive(serde::Serialize)]
struct WasmMoves {
    from: [u8; 2],
    to: Vec<[u8; 2]>,
}
