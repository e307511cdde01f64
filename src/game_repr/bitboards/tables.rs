use super::super::cell::{BOARD_HEIGHT, BOARD_WIDTH, CELL_COUNT};

/// Knight offsets as (row delta, col delta).
///
/// The order here is the enumeration order of legal actions, which the
/// searcher relies on for its tie-break.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),   // NNE
    (1, 2),   // ENE
    (-1, 2),  // ESE
    (-2, 1),  // SSE
    (-2, -1), // SSW
    (-1, -2), // WSW
    (1, -2),  // WNW
    (2, -1),  // NNW
];

/// Precomputed knight move tables
/// KNIGHT_ATTACKS[cell] returns a bitboard of all cells a knight can reach from that cell
pub static KNIGHT_ATTACKS: [u128; CELL_COUNT] = generate_knight_attacks();

/// Bitboard with every on-board cell set
pub const FULL_BOARD: u128 = (1u128 << CELL_COUNT) - 1;

/// Generate knight move table at compile time
const fn generate_knight_attacks() -> [u128; CELL_COUNT] {
    let mut attacks = [0u128; CELL_COUNT];
    let mut idx = 0;

    while idx < CELL_COUNT {
        let row = (idx / BOARD_WIDTH) as i8;
        let col = (idx % BOARD_WIDTH) as i8;
        let mut attack = 0u128;

        let mut i = 0;
        while i < 8 {
            let (dr, dc) = KNIGHT_OFFSETS[i];
            let new_row = row + dr;
            let new_col = col + dc;

            if new_row >= 0
                && new_row < BOARD_HEIGHT as i8
                && new_col >= 0
                && new_col < BOARD_WIDTH as i8
            {
                let target = new_row as usize * BOARD_WIDTH + new_col as usize;
                attack |= 1u128 << target;
            }

            i += 1;
        }

        attacks[idx] = attack;
        idx += 1;
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_has_two_targets() {
        assert_eq!(KNIGHT_ATTACKS[0].count_ones(), 2);
        assert_eq!(KNIGHT_ATTACKS[CELL_COUNT - 1].count_ones(), 2);
    }

    #[test]
    fn test_interior_has_eight_targets() {
        // row 4, col 5 is the centre of the 11x9 board
        let centre = 4 * BOARD_WIDTH + 5;
        assert_eq!(KNIGHT_ATTACKS[centre].count_ones(), 8);
    }

    #[test]
    fn test_tables_stay_on_board() {
        for attack in KNIGHT_ATTACKS.iter() {
            assert_eq!(attack & !FULL_BOARD, 0);
        }
    }

    #[test]
    fn test_knight_moves_are_symmetric() {
        for from in 0..CELL_COUNT {
            let mut targets = KNIGHT_ATTACKS[from];
            while targets != 0 {
                let to = targets.trailing_zeros() as usize;
                targets &= targets - 1;
                assert!(KNIGHT_ATTACKS[to] & (1u128 << from) != 0);
            }
        }
    }
}
