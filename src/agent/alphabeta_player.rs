//! AlphaBetaPlayer - knight isolation agent built on iterative deepening
//!
//! The player combines the three parts of the engine:
//! - The opening selector answers the first plies from the book (or at random
//!   when the book has no entry)
//! - Otherwise iterative deepening alpha-beta runs depth 1, 2, 3, ... and the
//!   best move of every completed depth is reported to the sink
//! - The mobility evaluator scores positions at the depth horizon
//!
//! # Time Control
//!
//! The player has no clock. It keeps deepening until `max_depth` or until the
//! sink reports that nobody is listening any more. A supervisor enforces the
//! deadline by dropping the receiving end (see [`crate::orchestrator`]).
//!
//! # Examples
//!
//! ```rust
//! use knight_isolation::agent::{AgentConfig, AlphaBetaPlayer, Player};
//! use knight_isolation::game_repr::{Board, Cell, GameState};
//!
//! let board = Board::new()
//!     .result(Cell::new(4, 5))
//!     .result(Cell::new(0, 0))
//!     .result(Cell::new(6, 6))
//!     .result(Cell::new(2, 1));
//! let mut player = AlphaBetaPlayer::new(AgentConfig::default().with_max_depth(3));
//! let mut reports: Vec<Cell> = Vec::new();
//! player.get_action(&board, &mut reports);
//!
//! // One report per completed depth
//! assert_eq!(reports.len(), 3);
//! ```

use crate::agent::ai::{
    iterative_deepening_search, select_opening_move, BoardConfig, MobilityEvaluator, OpeningBook,
    OpeningMove, MAX_SEARCH_DEPTH, OPENING_PLY_THRESHOLD,
};
use crate::agent::player::{MoveSink, Player};
use crate::game_repr::GameState;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Search parameters for an [`AlphaBetaPlayer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentConfig {
    /// Positions below this ply count go to the opening selector
    pub opening_ply_threshold: u32,
    /// Deepest iteration of the search
    pub max_depth: u8,
    /// Geometry used by the evaluator
    pub board: BoardConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            opening_ply_threshold: OPENING_PLY_THRESHOLD,
            max_depth: MAX_SEARCH_DEPTH,
            board: BoardConfig::default(),
        }
    }
}

impl AgentConfig {
    /// # Panics
    ///
    /// If `max_depth` is zero; the player would never report a move.
    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        assert!(max_depth >= 1, "search depth must be at least 1");
        self.max_depth = max_depth;
        self
    }

    pub fn with_opening_ply_threshold(mut self, threshold: u32) -> Self {
        self.opening_ply_threshold = threshold;
        self
    }

    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }
}

/// Isolation agent: opening book first, then anytime alpha-beta search
///
/// The book is shared read-only; several players (one per game) can hold the
/// same `Arc` without locking.
#[derive(Debug, Clone)]
pub struct AlphaBetaPlayer<S: GameState> {
    config: AgentConfig,
    book: Option<Arc<OpeningBook<S>>>,
    evaluator: MobilityEvaluator,
    rng: StdRng,
    name: String,
}

impl<S: GameState> AlphaBetaPlayer<S> {
    /// Create a player without an opening book. It searches from the very
    /// first ply.
    pub fn new(config: AgentConfig) -> Self {
        assert!(config.max_depth >= 1, "search depth must be at least 1");
        Self {
            evaluator: MobilityEvaluator::new(config.board),
            config,
            book: None,
            rng: StdRng::from_entropy(),
            name: format!("AlphaBeta (depth {})", config.max_depth),
        }
    }

    /// Attach an opening book
    pub fn with_book(mut self, book: Arc<OpeningBook<S>>) -> Self {
        self.book = Some(book);
        self
    }

    /// Seed the generator used for uncovered opening positions
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}

impl<S: GameState> Player<S> for AlphaBetaPlayer<S> {
    /// Report the opening move, or the best move of every completed depth.
    ///
    /// # Panics
    ///
    /// If `state` is terminal.
    fn get_action(&mut self, state: &S, sink: &mut dyn MoveSink<S::Action>) {
        assert!(
            !state.is_terminal(),
            "{} asked to move in a finished game",
            self.name
        );

        let opening = select_opening_move(
            state,
            self.book.as_deref(),
            self.config.opening_ply_threshold,
            &mut self.rng,
        );
        if let Some(choice) = opening {
            match choice {
                OpeningMove::Book(action) => info!("[{}] book move {:?}", self.name, action),
                OpeningMove::Random(action) => {
                    info!("[{}] position not in book, random move {:?}", self.name, action)
                }
            }
            if sink.report(choice.action()).is_err() {
                debug!("[{}] receiver gone before the opening move", self.name);
            }
            return;
        }

        let player = state.active_player();
        let search = iterative_deepening_search(state, player, self.config.max_depth, &self.evaluator);
        for result in search {
            if sink.report(result.best_move).is_err() {
                debug!(
                    "[{}] receiver gone, stopping after depth {}",
                    self.name, result.depth
                );
                return;
            }
        }
        debug!("[{}] reached depth limit {}", self.name, self.config.max_depth);
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fork(&mut self) -> Self {
        Self {
            config: self.config,
            book: self.book.clone(),
            evaluator: self.evaluator.clone(),
            rng: StdRng::seed_from_u64(self.rng.gen()),
            name: self.name.clone(),
        }
    }
}
