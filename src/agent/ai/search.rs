// Iterative Deepening Search
//
// Runs the fixed-depth alpha-beta search at depth 1, 2, 3, ... up to
// max_depth and yields one result per completed depth. The iterator has no
// clock: whoever drives it decides when to stop pulling. A depth that is
// interrupted never yields anything, so every result handed out is complete.

use crate::game_repr::{GameState, PlayerId};
use super::alphabeta::{alpha_beta_search, SearchStats};
use super::evaluation::Evaluate;
use log::debug;
use std::iter::FusedIterator;

/// Deepest iteration the engine will attempt
pub const MAX_SEARCH_DEPTH: u8 = 20;

/// Outcome of one completed depth
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<A> {
    pub best_move: A,
    /// Minimax value of `best_move` from the perspective player's side
    pub score: f64,
    pub depth: u8,
    pub nodes_searched: u64,
}

/// Lazy iterative-deepening search over a single position
pub struct IterativeDeepening<'a, S, E: ?Sized> {
    state: &'a S,
    player: PlayerId,
    evaluator: &'a E,
    next_depth: u16,
    max_depth: u16,
}

/// Start an iterative deepening search
///
/// # Arguments
/// * `state` - Position to search, must not be terminal
/// * `player` - Perspective player, normally the player to move
/// * `max_depth` - Last depth to run
/// * `evaluator` - Horizon evaluator
///
/// # Panics
/// If `state` is terminal.
pub fn iterative_deepening_search<'a, S, E>(
    state: &'a S,
    player: PlayerId,
    max_depth: u8,
    evaluator: &'a E,
) -> IterativeDeepening<'a, S, E>
where
    S: GameState,
    E: Evaluate<S> + ?Sized,
{
    assert!(
        !state.is_terminal(),
        "iterative deepening called on a terminal position"
    );

    IterativeDeepening {
        state,
        player,
        evaluator,
        next_depth: 1,
        max_depth: max_depth as u16,
    }
}

impl<'a, S, E> Iterator for IterativeDeepening<'a, S, E>
where
    S: GameState,
    E: Evaluate<S> + ?Sized,
{
    type Item = SearchResult<S::Action>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_depth > self.max_depth {
            return None;
        }
        let depth = self.next_depth as u8;
        self.next_depth += 1;

        let mut stats = SearchStats::default();
        let (best_move, score) =
            alpha_beta_search(self.state, depth, self.player, self.evaluator, &mut stats);

        debug!(
            "depth {}: best {:?} score {} nodes {} evals {}",
            depth, best_move, score, stats.nodes, stats.evaluations
        );

        Some(SearchResult {
            best_move,
            score,
            depth,
            nodes_searched: stats.nodes,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.max_depth + 1).saturating_sub(self.next_depth) as usize;
        (remaining, Some(remaining))
    }
}

impl<'a, S, E> FusedIterator for IterativeDeepening<'a, S, E>
where
    S: GameState,
    E: Evaluate<S> + ?Sized,
{
}
