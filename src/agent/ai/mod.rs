// AI Agent - Minimax with Alpha-Beta Pruning
//
// This module implements the knight isolation search: iterative deepening
// over a fixed-depth minimax with alpha-beta pruning, a mobility heuristic at
// the depth horizon, and an opening book for the first plies.
//
// Key features:
// - Deterministic search (ties go to the first action in enumeration order)
// - Anytime results: one best move per completed depth
// - No clock inside the search; the caller stops pulling results
// - Opening book lookups with a random fallback for uncovered positions

mod alphabeta;
mod evaluation;
mod opening_book;
mod search;

#[cfg(test)]
mod tests;

pub use alphabeta::{alpha_beta_search, max_value, min_value, SearchStats};
pub use evaluation::{BoardConfig, BorderCheck, Evaluate, MobilityEvaluator, OPPONENT_WEIGHT};
pub use opening_book::{select_opening_move, OpeningBook, OpeningMove, OPENING_PLY_THRESHOLD};
pub use search::{iterative_deepening_search, IterativeDeepening, SearchResult, MAX_SEARCH_DEPTH};
