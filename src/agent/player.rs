//! Player trait and move reporting for isolation agents.
//!
//! A player never returns its move. It reports candidates to a [`MoveSink`]
//! as often as it likes, and whoever owns the sink treats the latest report
//! as the player's answer. This lets a searching player hand over a usable
//! move after its first completed depth and keep improving it until the
//! supervisor stops listening.
//!
//! # Examples
//!
//! ```rust
//! use knight_isolation::agent::{Player, RandomPlayer};
//! use knight_isolation::game_repr::{Board, Cell, GameState};
//!
//! let board = Board::new();
//! let mut player = RandomPlayer::with_seed(42);
//! let mut reports: Vec<Cell> = Vec::new();
//! player.get_action(&board, &mut reports);
//! assert!(board.actions().contains(&reports[0]));
//! ```

use crate::agent::ai::{Evaluate, MobilityEvaluator};
use crate::error::SinkClosed;
use crate::game_repr::{GameState, PlayerId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::mpsc::Sender;

/// Result of a finished isolation game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// The opponent ran out of moves
    Won(PlayerId),
    /// The player failed to report a legal move in time
    Forfeit(PlayerId),
}

impl GameResult {
    pub fn winner(&self) -> PlayerId {
        match self {
            GameResult::Won(player) => *player,
            GameResult::Forfeit(loser) => loser.opponent(),
        }
    }
}

/// Destination for a player's move reports. Each report supersedes the
/// previous one.
pub trait MoveSink<A> {
    /// Publish `action` as the current best move.
    ///
    /// Returns [`SinkClosed`] once nobody is listening; the player should
    /// stop working at that point.
    fn report(&mut self, action: A) -> Result<(), SinkClosed>;
}

/// Collects every report in order; the last element is the answer
impl<A> MoveSink<A> for Vec<A> {
    fn report(&mut self, action: A) -> Result<(), SinkClosed> {
        self.push(action);
        Ok(())
    }
}

impl<A> MoveSink<A> for Sender<A> {
    fn report(&mut self, action: A) -> Result<(), SinkClosed> {
        self.send(action).map_err(|_| SinkClosed)
    }
}

/// Trait for entities that can choose moves in an isolation game.
pub trait Player<S: GameState> {
    /// Report one or more moves for the player to move in `state`.
    ///
    /// `state` must not be terminal.
    fn get_action(&mut self, state: &S, sink: &mut dyn MoveSink<S::Action>);

    /// Get the display name of this player
    fn name(&self) -> &str;

    /// Copy of this player to run a single request on another thread.
    ///
    /// Players that draw random numbers reseed the copy from their own
    /// generator, so the original advances and successive requests get
    /// independent draws.
    fn fork(&mut self) -> Self
    where
        Self: Sized + Clone,
    {
        self.clone()
    }
}

/// Plays a uniformly random legal move
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            name: "Random".to_string(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            name: "Random".to_string(),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> Player<S> for RandomPlayer {
    fn get_action(&mut self, state: &S, sink: &mut dyn MoveSink<S::Action>) {
        let actions = state.actions();
        if let Some(&action) = actions.choose(&mut self.rng) {
            // Single report; nothing left to stop if the receiver is gone
            let _ = sink.report(action);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fork(&mut self) -> Self {
        Self {
            rng: StdRng::seed_from_u64(self.rng.gen()),
            name: self.name.clone(),
        }
    }
}

/// One-ply lookahead: picks the move whose resulting position scores best
/// under the mobility heuristic. A move that leaves the opponent stuck wins
/// outright.
#[derive(Debug, Clone, Default)]
pub struct GreedyPlayer {
    evaluator: MobilityEvaluator,
}

impl GreedyPlayer {
    pub fn new(evaluator: MobilityEvaluator) -> Self {
        Self { evaluator }
    }
}

impl<S: GameState> Player<S> for GreedyPlayer {
    fn get_action(&mut self, state: &S, sink: &mut dyn MoveSink<S::Action>) {
        let me = state.active_player();
        let mut best: Option<(S::Action, f64)> = None;

        for action in state.actions() {
            let next = state.result(action);
            let score = if next.is_terminal() {
                next.utility(me)
            } else {
                self.evaluator.evaluate(&next, me)
            };
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((action, score)),
            }
        }

        if let Some((action, _)) = best {
            let _ = sink.report(action);
        }
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
