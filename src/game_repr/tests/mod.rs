use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Board with both knights placed and nothing else blocked
pub fn board_with(one: (u8, u8), two: (u8, u8), ply_count: u32) -> Board {
    Board::from_parts(
        &[],
        [Some(Cell::new(one.0, one.1)), Some(Cell::new(two.0, two.1))],
        ply_count,
    )
    .expect("valid test position")
}

/// Helper function to check if a cell is among the actions
pub fn has_action(board: &Board, row: u8, col: u8) -> bool {
    board.actions().contains(&Cell::new(row, col))
}

mod placement;
