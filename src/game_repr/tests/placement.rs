use super::*;

// ==================== PLACEMENT TESTS ====================

#[test]
fn test_first_ply_can_place_anywhere() {
    let board = Board::new();
    assert_eq!(board.active_player(), PlayerId::One);
    assert_eq!(board.actions().len(), CELL_COUNT);
    assert!(!board.is_terminal());
}

#[test]
fn test_second_player_cannot_take_first_players_cell() {
    let board = Board::new().result(Cell::new(4, 5));
    assert_eq!(board.active_player(), PlayerId::Two);
    assert_eq!(board.actions().len(), CELL_COUNT - 1);
    assert!(!has_action(&board, 4, 5));
}

#[test]
fn test_placement_updates_location_and_ply() {
    let board = Board::new().result(Cell::new(0, 0)).result(Cell::new(8, 10));
    assert_eq!(board.ply_count(), 2);
    assert_eq!(board.location(PlayerId::One), Some(Cell::new(0, 0)));
    assert_eq!(board.location(PlayerId::Two), Some(Cell::new(8, 10)));
    assert_eq!(board.active_player(), PlayerId::One);
}

#[test]
fn test_unplaced_liberties_are_all_open_cells() {
    let board = Board::new().result(Cell::new(2, 2));
    let libs = board.liberties(None);
    assert_eq!(libs.len(), CELL_COUNT - 1);
    assert!(!libs.contains(&Cell::new(2, 2)));
}

#[test]
fn test_result_leaves_original_untouched() {
    let board = Board::new();
    let _next = board.result(Cell::new(3, 3));
    assert_eq!(board.ply_count(), 0);
    assert!(board.is_open(Cell::new(3, 3)));
}
