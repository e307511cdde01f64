// Minimax Search with Alpha-Beta Pruning
//
// Two mutually recursive functions: `max_value` plays for the searching
// player, `min_value` for the opponent. Scores are always from the
// searching player's point of view, so no negation happens between plies.
//
// Everything a node needs is passed in: the position, remaining depth, the
// alpha-beta window, the perspective player and the evaluator. The only
// mutable argument is the node counter.
//
// Terminal positions are scored by the game's utility before the depth
// check, so the evaluator never sees a finished game.

use crate::game_repr::{GameState, PlayerId};
use super::evaluation::Evaluate;

/// Node counters for one fixed-depth search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited (root children and below)
    pub nodes: u64,
    /// Calls to the heuristic evaluator
    pub evaluations: u64,
}

/// Maximizing node
///
/// # Arguments
///
/// * `state` - Position to score, perspective player's opponent just moved
/// * `depth` - Remaining plies before the evaluator is used
/// * `alpha` - Best value the maximizer can already guarantee
/// * `beta` - Best value the minimizer can already guarantee
/// * `player` - Perspective player
/// * `evaluator` - Horizon evaluator
/// * `stats` - Node counters
pub fn max_value<S, E>(
    state: &S,
    depth: u8,
    mut alpha: f64,
    beta: f64,
    player: PlayerId,
    evaluator: &E,
    stats: &mut SearchStats,
) -> f64
where
    S: GameState,
    E: Evaluate<S> + ?Sized,
{
    stats.nodes += 1;

    if state.is_terminal() {
        return state.utility(player);
    }
    if depth == 0 {
        stats.evaluations += 1;
        return evaluator.evaluate(state, player);
    }

    let mut val = f64::NEG_INFINITY;
    for action in state.actions() {
        let child = state.result(action);
        val = val.max(min_value(&child, depth - 1, alpha, beta, player, evaluator, stats));
        if val >= beta {
            return val;
        }
        alpha = alpha.max(val);
    }
    val
}

/// Minimizing node, symmetric to [`max_value`]
pub fn min_value<S, E>(
    state: &S,
    depth: u8,
    alpha: f64,
    mut beta: f64,
    player: PlayerId,
    evaluator: &E,
    stats: &mut SearchStats,
) -> f64
where
    S: GameState,
    E: Evaluate<S> + ?Sized,
{
    stats.nodes += 1;

    if state.is_terminal() {
        return state.utility(player);
    }
    if depth == 0 {
        stats.evaluations += 1;
        return evaluator.evaluate(state, player);
    }

    let mut val = f64::INFINITY;
    for action in state.actions() {
        let child = state.result(action);
        val = val.min(max_value(&child, depth - 1, alpha, beta, player, evaluator, stats));
        if val <= alpha {
            return val;
        }
        beta = beta.min(val);
    }
    val
}

/// Fixed-depth root search
///
/// Every root action is scored with a fresh `(-inf, +inf)` window at
/// `depth - 1`, since choosing the action uses up the first ply. The
/// highest value wins; among equal values the action enumerated first wins.
///
/// # Panics
///
/// If `state` has no legal actions or `depth` is zero. Finished games must
/// not be handed to the search.
pub fn alpha_beta_search<S, E>(
    state: &S,
    depth: u8,
    player: PlayerId,
    evaluator: &E,
    stats: &mut SearchStats,
) -> (S::Action, f64)
where
    S: GameState,
    E: Evaluate<S> + ?Sized,
{
    assert!(depth >= 1, "alpha-beta search needs a depth of at least 1");

    let mut best: Option<(S::Action, f64)> = None;
    for action in state.actions() {
        let child = state.result(action);
        let value = min_value(
            &child,
            depth - 1,
            f64::NEG_INFINITY,
            f64::INFINITY,
            player,
            evaluator,
            stats,
        );
        // Strict comparison keeps the earliest of equal values
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((action, value)),
        }
    }

    match best {
        Some(found) => found,
        None => panic!("alpha-beta search called on a position with no legal actions"),
    }
}
