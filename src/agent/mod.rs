pub mod player;
pub use player::*;

mod alphabeta_player;
pub use alphabeta_player::{AgentConfig, AlphaBetaPlayer};

pub mod ai;
pub use ai::{BoardConfig, BorderCheck, MobilityEvaluator, OpeningBook, SearchResult};
