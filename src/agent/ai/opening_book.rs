//! Opening book and opening move selection
//!
//! The first few plies of a knight isolation game are cheap to precompute
//! and expensive to search, so early positions are answered from a table.
//! When the table has no entry the engine just plays a random legal move
//! rather than searching.
//!
//! Books for the reference [`Board`] are stored as JSON, one record per
//! position:
//!
//! ```text
//! [{ "blocked": [{"row":4,"col":5}], "locations": [{"row":4,"col":5}, null],
//!    "ply_count": 1, "action": {"row":0,"col":0} }]
//! ```

use crate::error::{EngineError, EngineResult};
use crate::game_repr::{Board, Cell, GameState, PlayerId};
use super::alphabeta::{alpha_beta_search, SearchStats};
use super::evaluation::Evaluate;
use log::{info, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Positions with fewer plies than this are answered without searching
pub const OPENING_PLY_THRESHOLD: u32 = 4;

/// Read-only map from position to recommended action
#[derive(Debug, Clone)]
pub struct OpeningBook<S: GameState> {
    entries: HashMap<S, S::Action>,
}

impl<S: GameState> Default for OpeningBook<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> OpeningBook<S> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, state: &S) -> Option<S::Action> {
        self.entries.get(state).copied()
    }

    /// Add or replace the entry for `state`
    pub fn insert(&mut self, state: S, action: S::Action) -> Option<S::Action> {
        self.entries.insert(state, action)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &S::Action)> {
        self.entries.iter()
    }

    /// Build a book by searching every non-terminal position reachable from
    /// `root` whose ply count is below `max_ply`.
    ///
    /// Each entry is the fixed-depth alpha-beta choice for the player to
    /// move in that position.
    pub fn generate<E>(root: &S, max_ply: u32, depth: u8, evaluator: &E) -> Self
    where
        E: Evaluate<S> + ?Sized,
    {
        let mut book = Self::new();
        let mut frontier = vec![root.clone()];

        while let Some(state) = frontier.pop() {
            if state.ply_count() >= max_ply
                || state.is_terminal()
                || book.entries.contains_key(&state)
            {
                continue;
            }

            let mut stats = SearchStats::default();
            let (action, score) =
                alpha_beta_search(&state, depth, state.active_player(), evaluator, &mut stats);
            trace!(
                "book ply {}: {:?} scored {} ({} nodes)",
                state.ply_count(),
                action,
                score,
                stats.nodes
            );

            frontier.extend(state.actions().into_iter().map(|a| state.result(a)));
            book.entries.insert(state, action);
        }

        info!("generated opening book with {} entries", book.len());
        book
    }
}

impl<S: GameState> FromIterator<(S, S::Action)> for OpeningBook<S> {
    fn from_iter<I: IntoIterator<Item = (S, S::Action)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// How the opening selector arrived at its move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningMove<A> {
    /// Exact position found in the book
    Book(A),
    /// Position not covered, uniformly random legal move
    Random(A),
}

impl<A: Copy> OpeningMove<A> {
    pub fn action(&self) -> A {
        match self {
            Self::Book(a) | Self::Random(a) => *a,
        }
    }
}

/// Opening selector
///
/// Declines (returns None) once `state` has reached `ply_threshold` plies or
/// when no book is loaded. Otherwise answers from the book, falling back to
/// a uniformly random legal action drawn from `rng`.
///
/// # Panics
/// If the selector would answer but `state` has no legal actions.
pub fn select_opening_move<S, R>(
    state: &S,
    book: Option<&OpeningBook<S>>,
    ply_threshold: u32,
    rng: &mut R,
) -> Option<OpeningMove<S::Action>>
where
    S: GameState,
    R: Rng + ?Sized,
{
    if state.ply_count() >= ply_threshold {
        return None;
    }
    let book = book?;

    if let Some(action) = book.get(state) {
        return Some(OpeningMove::Book(action));
    }

    let actions = state.actions();
    assert!(
        !actions.is_empty(),
        "opening selector called on a position with no legal actions"
    );
    actions.choose(rng).copied().map(OpeningMove::Random)
}

/// On-disk form of one book entry for the reference board
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookRecord {
    blocked: Vec<Cell>,
    locations: [Option<Cell>; 2],
    ply_count: u32,
    action: Cell,
}

impl OpeningBook<Board> {
    /// Load a JSON book from disk
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let file = File::open(path.as_ref())?;
        let book = Self::from_reader(BufReader::new(file))?;
        info!(
            "loaded opening book {} ({} entries)",
            path.as_ref().display(),
            book.len()
        );
        Ok(book)
    }

    /// Parse a JSON book, rejecting positions that break the board rules and
    /// actions that are not legal in their position
    pub fn from_reader<R: Read>(reader: R) -> EngineResult<Self> {
        let records: Vec<BookRecord> = serde_json::from_reader(reader)?;
        let mut book = Self::new();

        for record in records {
            let board = Board::from_parts(&record.blocked, record.locations, record.ply_count)?;
            if !board.actions().contains(&record.action) {
                return Err(EngineError::IllegalBookMove {
                    action: record.action,
                    ply: record.ply_count,
                });
            }
            book.insert(board, record.action);
        }
        Ok(book)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> EngineResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the book as JSON, ordered by ply then position for stable diffs
    pub fn to_writer<W: Write>(&self, writer: W) -> EngineResult<()> {
        let mut records: Vec<BookRecord> = self
            .entries
            .iter()
            .map(|(board, &action)| BookRecord {
                blocked: board.blocked_cells(),
                locations: [board.location(PlayerId::One), board.location(PlayerId::Two)],
                ply_count: board.ply_count(),
                action,
            })
            .collect();
        records.sort_by(|a, b| {
            (a.ply_count, a.locations, &a.blocked).cmp(&(b.ply_count, b.locations, &b.blocked))
        });

        serde_json::to_writer_pretty(writer, &records)?;
        Ok(())
    }
}
