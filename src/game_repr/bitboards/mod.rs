pub mod tables;
pub use tables::*;

/// Pop the least significant set bit and return its index
#[inline(always)]
pub fn pop_lsb(bb: &mut u128) -> usize {
    let idx = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    idx
}

/// Single-bit mask for a cell index
#[inline(always)]
pub fn bit(idx: usize) -> u128 {
    1u128 << idx
}

/// Iterate the set bits of a bitboard, lowest index first
pub fn iter_bits(mut bb: u128) -> impl Iterator<Item = usize> {
    std::iter::from_fn(move || if bb == 0 { None } else { Some(pop_lsb(&mut bb)) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_lsb() {
        let mut bb = 0b1010u128;
        assert_eq!(pop_lsb(&mut bb), 1);
        assert_eq!(bb, 0b1000);
        assert_eq!(pop_lsb(&mut bb), 3);
        assert_eq!(bb, 0);
    }

    #[test]
    fn test_pop_lsb_high_bits() {
        let mut bb = bit(98) | bit(64);
        assert_eq!(pop_lsb(&mut bb), 64);
        assert_eq!(pop_lsb(&mut bb), 98);
    }

    #[test]
    fn test_iter_bits() {
        let cells: Vec<usize> = iter_bits(bit(3) | bit(70) | bit(0)).collect();
        assert_eq!(cells, vec![0, 3, 70]);
    }
}
