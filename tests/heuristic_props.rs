//! Property-based tests for the mobility heuristic

use knight_isolation::agent::ai::{Evaluate, OPPONENT_WEIGHT};
use knight_isolation::agent::{BoardConfig, BorderCheck, MobilityEvaluator};
use knight_isolation::game_repr::{Board, Cell, GameState, PlayerId, BOARD_HEIGHT, BOARD_WIDTH};
use proptest::prelude::*;

fn cell_in(rows: std::ops::Range<u8>, cols: std::ops::Range<u8>) -> impl Strategy<Value = Cell> + Clone {
    (rows, cols).prop_map(|(row, col)| Cell::new(row, col))
}

fn any_cell() -> impl Strategy<Value = Cell> + Clone {
    cell_in(0..BOARD_HEIGHT as u8, 0..BOARD_WIDTH as u8)
}

/// Two distinct knight cells drawn from `knight`, plus up to 40 blocked cells
fn position(
    knight: impl Strategy<Value = Cell> + Clone,
) -> impl Strategy<Value = (Vec<Cell>, Cell, Cell)> {
    (
        prop::collection::vec(any_cell(), 0..40),
        knight.clone(),
        knight,
    )
        .prop_filter("knights must differ", |(_, a, b)| a != b)
}

fn board(blocked: &[Cell], one: Cell, two: Cell) -> Board {
    let blocked: Vec<Cell> = blocked
        .iter()
        .copied()
        .filter(|cell| *cell != one && *cell != two)
        .collect();
    Board::from_parts(&blocked, [Some(one), Some(two)], 20).unwrap()
}

proptest! {
    #[test]
    fn test_score_depends_on_role_not_seat((blocked, a, b) in position(any_cell())) {
        let eval = MobilityEvaluator::default();
        let forward = board(&blocked, a, b);
        let swapped = board(&blocked, b, a);

        prop_assert_eq!(
            eval.evaluate(&forward, PlayerId::One),
            eval.evaluate(&swapped, PlayerId::Two)
        );
        prop_assert_eq!(
            eval.evaluate(&forward, PlayerId::Two),
            eval.evaluate(&swapped, PlayerId::One)
        );
    }

    #[test]
    fn test_interior_scores_differ_by_weighted_mobility(
        (blocked, a, b) in position(cell_in(1..BOARD_HEIGHT as u8, 0..BOARD_WIDTH as u8))
    ) {
        let eval = MobilityEvaluator::default();
        let state = board(&blocked, a, b);
        let mine = state.liberties(Some(a)).len() as f64;
        let theirs = state.liberties(Some(b)).len() as f64;

        let one = eval.evaluate(&state, PlayerId::One);
        let two = eval.evaluate(&state, PlayerId::Two);
        prop_assert_eq!(one, mine - OPPONENT_WEIGHT * theirs);
        prop_assert_eq!(one - two, (1.0 + OPPONENT_WEIGHT) * (mine - theirs));
    }

    #[test]
    fn test_border_modes_agree_away_from_every_edge(
        (blocked, a, b) in position(cell_in(1..BOARD_HEIGHT as u8 - 1, 1..BOARD_WIDTH as u8 - 1))
    ) {
        let first = MobilityEvaluator::default();
        let all = MobilityEvaluator::new(
            BoardConfig::default().with_border_check(BorderCheck::AllEdges),
        );
        let state = board(&blocked, a, b);

        for player in [PlayerId::One, PlayerId::Two] {
            prop_assert_eq!(first.evaluate(&state, player), all.evaluate(&state, player));
        }
    }

    #[test]
    fn test_border_penalty_never_raises_score(
        (blocked, a, b) in position(cell_in(0..1, 0..BOARD_WIDTH as u8))
    ) {
        // Both knights on the first row
        let eval = MobilityEvaluator::default();
        let state = board(&blocked, a, b);
        let mine = state.liberties(Some(a)).len() as f64;
        let theirs = state.liberties(Some(b)).len() as f64;

        prop_assert!(eval.evaluate(&state, PlayerId::One) <= mine - OPPONENT_WEIGHT * theirs);
    }
}
