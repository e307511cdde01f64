use super::bitboards::{bit, iter_bits, FULL_BOARD, KNIGHT_ATTACKS, KNIGHT_OFFSETS};
use super::cell::{Cell, BOARD_HEIGHT, BOARD_WIDTH};
use super::state::{ActionList, CellList, GameState, PlayerId};
use crate::error::{EngineError, EngineResult};
use std::fmt;

/*
 * REFERENCE KNIGHT ISOLATION BOARD
 * 11 columns x 9 rows, one knight per player.
 * Every cell a knight lands on is blocked for the rest of the game.
 */

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    /// Bitboard of cells that can no longer be entered
    blocked: u128,
    /// Current cell of each player; None until the player has placed its knight
    locations: [Option<Cell>; 2],
    ply_count: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board, player one to place
    pub fn new() -> Self {
        Self {
            blocked: 0,
            locations: [None, None],
            ply_count: 0,
        }
    }

    /// Build a position from its parts and check it is reachable in shape:
    /// every cell on the board, the two knights on distinct cells, and
    /// exactly `min(ply_count, 2)` knights placed.
    ///
    /// Knight cells are always blocked, whether or not `blocked` lists them.
    pub fn from_parts(
        blocked: &[Cell],
        locations: [Option<Cell>; 2],
        ply_count: u32,
    ) -> EngineResult<Self> {
        let mut mask = 0u128;
        for &cell in blocked.iter().chain(locations.iter().flatten()) {
            mask |= bit(checked_index(cell)?);
        }

        let placed = locations.iter().filter(|loc| loc.is_some()).count();
        if placed != (ply_count as usize).min(2) {
            return Err(EngineError::InvalidPosition {
                message: format!("{} knight(s) placed after {} plies", placed, ply_count),
            });
        }
        if locations[1].is_some() && locations[0].is_none() {
            return Err(EngineError::InvalidPosition {
                message: "player two placed before player one".to_string(),
            });
        }
        if let [Some(a), Some(b)] = locations {
            if a == b {
                return Err(EngineError::InvalidPosition {
                    message: format!("both knights on {}", a),
                });
            }
        }

        Ok(Self {
            blocked: mask,
            locations,
            ply_count,
        })
    }

    #[inline]
    pub fn is_open(&self, cell: Cell) -> bool {
        match cell.index() {
            Some(idx) => self.open_mask() & bit(idx) != 0,
            None => false,
        }
    }

    /// Blocked cells in index order, knight cells included
    pub fn blocked_cells(&self) -> Vec<Cell> {
        iter_bits(self.blocked).map(Cell::from_index).collect()
    }

    #[inline(always)]
    fn open_mask(&self) -> u128 {
        FULL_BOARD & !self.blocked
    }

    fn has_liberties(&self, player: PlayerId) -> bool {
        let reachable = match self.locations[player.index()].and_then(Cell::index) {
            Some(idx) => KNIGHT_ATTACKS[idx],
            None => FULL_BOARD,
        };
        reachable & self.open_mask() != 0
    }
}

fn checked_index(cell: Cell) -> EngineResult<usize> {
    cell.index().ok_or(EngineError::InvalidCell {
        cell,
        width: BOARD_WIDTH,
        height: BOARD_HEIGHT,
    })
}

impl GameState for Board {
    type Action = Cell;

    fn is_terminal(&self) -> bool {
        !self.has_liberties(self.active_player())
    }

    fn utility(&self, player: PlayerId) -> f64 {
        if !self.is_terminal() {
            return 0.0;
        }
        // The stuck player is always the one to move
        if player == self.active_player() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    }

    fn actions(&self) -> ActionList<Cell> {
        self.liberties(self.location(self.active_player()))
    }

    fn result(&self, action: Cell) -> Self {
        debug_assert!(self.actions().contains(&action), "illegal action {}", action);
        let mut next = *self;
        if let Some(idx) = action.index() {
            next.blocked |= bit(idx);
        }
        next.locations[self.active_player().index()] = Some(action);
        next.ply_count += 1;
        next
    }

    fn ply_count(&self) -> u32 {
        self.ply_count
    }

    fn active_player(&self) -> PlayerId {
        PlayerId::for_ply(self.ply_count)
    }

    fn location(&self, player: PlayerId) -> Option<Cell> {
        self.locations[player.index()]
    }

    fn liberties(&self, cell: Option<Cell>) -> CellList {
        match cell {
            None => iter_bits(self.open_mask()).map(Cell::from_index).collect(),
            Some(from) => KNIGHT_OFFSETS
                .iter()
                .filter_map(|&(dr, dc)| from.offset(dr, dc))
                .filter(|&to| self.is_open(to))
                .collect(),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_HEIGHT).rev() {
            for col in 0..BOARD_WIDTH {
                let cell = Cell::new(row as u8, col as u8);
                let symbol = if self.locations[0] == Some(cell) {
                    '1'
                } else if self.locations[1] == Some(cell) {
                    '2'
                } else if self.is_open(cell) {
                    '.'
                } else {
                    '#'
                };
                write!(f, "{}", symbol)?;
                if col + 1 < BOARD_WIDTH {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
