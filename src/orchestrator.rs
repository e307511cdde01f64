//! Turn supervision and match play.
//!
//! This module contains the [`Supervisor`], which gives a player a fixed
//! amount of wall-clock time per move, and [`play_match`], which alternates
//! two players until the game ends.
//!
//! # Architecture
//!
//! Players have no clock. The supervisor runs each request on a worker thread
//! that owns a fork of the player (see [`Player::fork`]) and the sending half
//! of a channel:
//! - Every report the player makes lands in the channel
//! - The supervisor keeps the most recent report until the deadline
//! - At the deadline the receiver is dropped; the worker's next report fails
//!   and a well-behaved player returns
//!
//! The worker is detached, so an abandoned search keeps its thread until it
//! finishes the depth it was working on.
//!
//! # Example Flow
//!
//! ```text
//! [Request move] -> worker: get_action(state, sender)
//!   -> report depth 1 -> report depth 2 -> ... -> deadline
//!   -> receiver dropped -> worker exits on next report
//!   -> [Apply latest report] -> [Check end] -> [Switch turn] ...
//! ```

use crate::agent::player::{GameResult, Player};
use crate::game_repr::{GameState, PlayerId};
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// Default per-move time limit
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_millis(150);

/// Outcome of one supervised move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision<A> {
    /// Move to play
    pub action: A,
    /// How many reports arrived before the deadline
    pub reports: usize,
    /// True when nothing was reported and a random legal move was substituted
    pub fallback: bool,
}

/// Runs players under a per-move time limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Supervisor {
    time_limit: Duration,
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT)
    }
}

impl Supervisor {
    pub fn new(time_limit: Duration) -> Self {
        Self { time_limit }
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Ask `player` for a move in `state` and wait at most the time limit.
    ///
    /// The latest report received before the deadline wins. If the player
    /// returns early the decision is made as soon as its channel closes. If it
    /// reported nothing, a uniformly random legal move is substituted.
    ///
    /// # Panics
    ///
    /// If `state` is terminal.
    pub fn decide<S, P>(&self, player: &mut P, state: &S) -> Decision<S::Action>
    where
        S: GameState + Send + 'static,
        S::Action: Send + 'static,
        P: Player<S> + Clone + Send + 'static,
    {
        let legal = state.actions();
        assert!(!legal.is_empty(), "supervisor asked for a move in a finished game");

        let (sender, receiver) = mpsc::channel();
        let mut worker = player.fork();
        let snapshot = state.clone();
        thread::spawn(move || {
            let mut sender = sender;
            worker.get_action(&snapshot, &mut sender);
        });

        let deadline = Instant::now() + self.time_limit;
        let mut latest = None;
        let mut reports = 0;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match receiver.recv_timeout(remaining) {
                Ok(action) => {
                    latest = Some(action);
                    reports += 1;
                }
                Err(RecvTimeoutError::Timeout) => break,
                // Worker returned (or panicked); no more reports are coming
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        drop(receiver);

        match latest {
            Some(action) => {
                debug!("{} reported {} move(s), playing {:?}", player.name(), reports, action);
                Decision {
                    action,
                    reports,
                    fallback: false,
                }
            }
            None => {
                let action = *legal
                    .choose(&mut rand::thread_rng())
                    .unwrap_or(&legal[0]);
                warn!(
                    "{} reported nothing within {:?}, substituting random move {:?}",
                    player.name(),
                    self.time_limit,
                    action
                );
                Decision {
                    action,
                    reports: 0,
                    fallback: true,
                }
            }
        }
    }
}

/// Full record of a finished match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord<S: GameState> {
    pub result: GameResult,
    /// Every applied move, player one first
    pub moves: Vec<S::Action>,
    pub final_state: S,
}

impl<S: GameState> MatchRecord<S> {
    pub fn winner(&self) -> PlayerId {
        self.result.winner()
    }
}

/// Alternate `one` and `two` from `initial` until the player to move is stuck.
///
/// Each move goes through `supervisor`. A reported move that is not legal in
/// the current position forfeits the game for the player who sent it.
pub fn play_match<S, P1, P2>(
    initial: S,
    one: &mut P1,
    two: &mut P2,
    supervisor: &Supervisor,
) -> MatchRecord<S>
where
    S: GameState + Send + 'static,
    S::Action: Send + 'static,
    P1: Player<S> + Clone + Send + 'static,
    P2: Player<S> + Clone + Send + 'static,
{
    info!(
        "{} vs {}, {:?} per move",
        one.name(),
        two.name(),
        supervisor.time_limit()
    );

    let mut state = initial;
    let mut moves = Vec::new();

    let result = loop {
        let active = state.active_player();
        if state.is_terminal() {
            break GameResult::Won(active.opponent());
        }

        let decision = match active {
            PlayerId::One => supervisor.decide(one, &state),
            PlayerId::Two => supervisor.decide(two, &state),
        };
        if !state.actions().contains(&decision.action) {
            let name = match active {
                PlayerId::One => one.name(),
                PlayerId::Two => two.name(),
            };
            warn!(
                "{} played illegal move {:?} at ply {}",
                name,
                decision.action,
                state.ply_count()
            );
            break GameResult::Forfeit(active);
        }

        moves.push(decision.action);
        state = state.result(decision.action);
    };

    let winner = match result.winner() {
        PlayerId::One => one.name(),
        PlayerId::Two => two.name(),
    };
    info!("{} wins after {} plies ({:?})", winner, moves.len(), result);

    MatchRecord {
        result,
        moves,
        final_state: state,
    }
}
