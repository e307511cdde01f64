// Mobility Evaluation
//
// Scores a non-terminal position by comparing how many cells each knight can
// reach. Opponent mobility is weighted three times heavier than our own.
// When our knight sits on the board edge the opponent term also counts the
// liberties of every cell the opponent could jump to next.

use crate::game_repr::{Cell, GameState, PlayerId, BOARD_HEIGHT, BOARD_WIDTH};

/// Weight applied to the opponent's mobility
pub const OPPONENT_WEIGHT: f64 = 3.0;

/// Which border lists the evaluator consults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderCheck {
    /// Only the first list (row 0) counts as border. This is the behaviour
    /// the engine has always played with.
    #[default]
    FirstEdgeOnly,
    /// All four edges count as border
    AllEdges,
}

/// Board geometry as seen by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub border_check: BorderCheck,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            border_check: BorderCheck::default(),
        }
    }
}

impl BoardConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            border_check: BorderCheck::default(),
        }
    }

    pub fn with_border_check(mut self, border_check: BorderCheck) -> Self {
        self.border_check = border_check;
        self
    }

    /// Literal coordinate lists of the four edges, in order:
    /// row 0, column 0, last row, last column.
    pub fn borders(&self) -> [Vec<Cell>; 4] {
        let row = |r: usize| -> Vec<Cell> {
            (0..self.width).map(|c| Cell::new(r as u8, c as u8)).collect()
        };
        let col = |c: usize| -> Vec<Cell> {
            (0..self.height).map(|r| Cell::new(r as u8, c as u8)).collect()
        };
        [
            row(0),
            col(0),
            row(self.height.saturating_sub(1)),
            col(self.width.saturating_sub(1)),
        ]
    }
}

/// Leaf evaluator used by the search at its depth horizon
pub trait Evaluate<S: GameState> {
    /// Score `state` for `player`; higher is better for `player`.
    /// Must not be called on terminal positions.
    fn evaluate(&self, state: &S, player: PlayerId) -> f64;
}

/// Liberty-difference heuristic with a one-ply lookahead on the border
#[derive(Debug, Clone)]
pub struct MobilityEvaluator {
    config: BoardConfig,
    borders: [Vec<Cell>; 4],
}

impl Default for MobilityEvaluator {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl MobilityEvaluator {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            borders: config.borders(),
            config,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Border membership by the configured rule.
    ///
    /// `FirstEdgeOnly` answers from the first list alone, so a knight on
    /// column 0 or the far row/column is treated as interior.
    pub fn at_border(&self, cell: Cell) -> bool {
        match self.config.border_check {
            BorderCheck::FirstEdgeOnly => self.borders[0].contains(&cell),
            BorderCheck::AllEdges => self.borders.iter().any(|edge| edge.contains(&cell)),
        }
    }
}

impl<S: GameState> Evaluate<S> for MobilityEvaluator {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64 {
        let player_loc = state.location(player);
        let opponent_loc = state.location(player.opponent());

        let player_liberties = state.liberties(player_loc);
        let opponent_liberties = state.liberties(opponent_loc);

        let own = player_liberties.len() as f64;
        let theirs = opponent_liberties.len() as f64;

        // An unplaced knight is never on the border
        if player_loc.map_or(false, |cell| self.at_border(cell)) {
            let next_liberties: usize = opponent_liberties
                .iter()
                .map(|&next| state.liberties(Some(next)).len())
                .sum();
            own - OPPONENT_WEIGHT * (theirs + next_liberties as f64)
        } else {
            own - OPPONENT_WEIGHT * theirs
        }
    }
}
