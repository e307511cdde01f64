use knight_isolation::agent::{
    AgentConfig, AlphaBetaPlayer, GreedyPlayer, MobilityEvaluator, OpeningBook, Player,
};
use knight_isolation::game_repr::{Board, GameState, PlayerId};
use knight_isolation::orchestrator::{play_match, Supervisor, DEFAULT_TIME_LIMIT};
use knight_isolation::EngineResult;
use log::{info, warn};
use std::env;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Plies covered when a missing book has to be generated
const DEFAULT_BOOK_PLIES: u32 = 2;
/// Search depth used for every generated book entry
const BOOK_SEARCH_DEPTH: u8 = 3;

fn env_number<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {}={:?}: not a number", key, raw);
            None
        }
    }
}

/// Load the book at `path`, or build one and save it there
fn load_or_generate_book(path: &Path) -> EngineResult<OpeningBook<Board>> {
    if path.exists() {
        return OpeningBook::load(path);
    }

    let plies = env_number("ISOLATION_BOOK_PLIES").unwrap_or(DEFAULT_BOOK_PLIES);
    let evaluator = MobilityEvaluator::default();
    let book = OpeningBook::generate(&Board::new(), plies, BOOK_SEARCH_DEPTH, &evaluator);
    book.save(path)?;
    info!("wrote {} book entries to {}", book.len(), path.display());
    Ok(book)
}

fn main() -> EngineResult<()> {
    env_logger::init();

    let time_limit = env_number("ISOLATION_TIME_MS")
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TIME_LIMIT);
    let supervisor = Supervisor::new(time_limit);

    let mut searcher = AlphaBetaPlayer::new(AgentConfig::default());
    if let Ok(path) = env::var("ISOLATION_BOOK") {
        let book = load_or_generate_book(Path::new(&path))?;
        searcher = searcher.with_book(Arc::new(book));
    }
    let mut greedy = GreedyPlayer::default();

    let record = play_match(Board::new(), &mut searcher, &mut greedy, &supervisor);

    println!("{}", record.final_state);
    let winner = match record.winner() {
        PlayerId::One => searcher.name().to_string(),
        PlayerId::Two => Player::<Board>::name(&greedy).to_string(),
    };
    println!(
        "{} wins after {} plies ({:?}), final ply {}",
        winner,
        record.moves.len(),
        record.result,
        record.final_state.ply_count()
    );
    Ok(())
}
