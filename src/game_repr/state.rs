//! The state interface consumed by the search.
//!
//! Everything the engine knows about the game goes through [`GameState`]:
//! legality, transitions, terminal detection and scoring belong to the
//! implementor. The search only compares actions, applies them and asks
//! for liberties.

use super::cell::Cell;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt::Debug;
use std::hash::Hash;

/// Ordered list of legal actions. Knight moves never exceed eight, so the
/// inline buffer only spills during the placement plies.
pub type ActionList<A> = SmallVec<[A; 8]>;

/// Set of cells reachable in one move
pub type CellList = SmallVec<[Cell; 8]>;

/// Identifies one of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(&self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// Player to move at a given ply; player one opens the game
    pub fn for_ply(ply: u32) -> Self {
        if ply % 2 == 0 {
            Self::One
        } else {
            Self::Two
        }
    }
}

/// Immutable two-player game position.
///
/// `result` must return a new position and leave `self` untouched. The order
/// of `actions` is significant: the search breaks ties by it.
pub trait GameState: Clone + Eq + Hash + Debug {
    type Action: Copy + Eq + Hash + Debug;

    /// True when the player to move has no legal action
    fn is_terminal(&self) -> bool;

    /// Game value for `player`; only meaningful on terminal positions
    fn utility(&self, player: PlayerId) -> f64;

    /// Legal actions for the player to move, in a stable order
    fn actions(&self) -> ActionList<Self::Action>;

    /// Position after the player to move plays `action`
    fn result(&self, action: Self::Action) -> Self;

    /// Number of moves played since the start of the game
    fn ply_count(&self) -> u32;

    fn active_player(&self) -> PlayerId;

    /// Current cell of `player`, or None if it has not been placed yet
    fn location(&self, player: PlayerId) -> Option<Cell>;

    /// Open cells reachable from `cell` in one move. `None` stands for an
    /// unplaced player, who may go to any open cell.
    fn liberties(&self, cell: Option<Cell>) -> CellList;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
        assert_eq!(PlayerId::Two.opponent().opponent(), PlayerId::Two);
    }

    #[test]
    fn test_for_ply_alternates() {
        assert_eq!(PlayerId::for_ply(0), PlayerId::One);
        assert_eq!(PlayerId::for_ply(1), PlayerId::Two);
        assert_eq!(PlayerId::for_ply(10), PlayerId::One);
    }
}
