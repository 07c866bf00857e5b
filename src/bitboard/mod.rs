//! Bitboard helpers built on the scans
//!
//! Square `0` is the least-significant bit. These are the loops a move
//! generator runs over piece sets.

use std::iter::FusedIterator;

use crate::scan::{count_trailing_zeros, highest_set_bit_index, NO_SET_BITS, WORD_BITS};
use crate::BitScanError;

/// Mask with only bit `index` set.
///
/// Fails with [`BitScanError::InvalidArgument`] for `index >= 64` instead of
/// wrapping the shift.
pub fn bit(index: u32) -> Result<u64, BitScanError> {
    1u64.checked_shl(index).ok_or_else(|| {
        BitScanError::invalid(format!("bit index {index} out of range 0..{WORD_BITS}"))
    })
}

/// Clear the lowest set bit and return `(remaining, index)`.
///
/// An empty board yields `(0, NO_SET_BITS)`.
#[inline]
pub fn pop_lsb(bb: u64) -> (u64, i32) {
    if bb == 0 {
        return (0, NO_SET_BITS);
    }
    (bb & (bb - 1), count_trailing_zeros(bb))
}

/// Iterator over the set-bit indices of a mask, lowest first.
///
/// `next_back` walks from the highest bit down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetBits(u64);

impl SetBits {
    /// Iterate the set bits of `bb`.
    pub fn new(bb: u64) -> Self {
        Self(bb)
    }

    /// Bits not yet yielded.
    pub fn remaining(&self) -> u64 {
        self.0
    }
}

impl Iterator for SetBits {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        let (rest, index) = pop_lsb(self.0);
        self.0 = rest;
        u32::try_from(index).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for SetBits {
    #[inline]
    fn next_back(&mut self) -> Option<u32> {
        let index = u32::try_from(highest_set_bit_index(self.0)).ok()?;
        self.0 &= !(1u64 << index);
        Some(index)
    }
}

impl ExactSizeIterator for SetBits {}

impl FusedIterator for SetBits {}

impl From<u64> for SetBits {
    fn from(bb: u64) -> Self {
        Self::new(bb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_bounds() {
        assert_eq!(bit(0), Ok(1));
        assert_eq!(bit(63), Ok(1u64 << 63));
        assert!(matches!(bit(64), Err(BitScanError::InvalidArgument(_))));
    }

    #[test]
    fn test_pop_lsb_sequence() {
        let (bb, sq) = pop_lsb(0b1010_0100);
        assert_eq!((bb, sq), (0b1010_0000, 2));
        let (bb, sq) = pop_lsb(bb);
        assert_eq!((bb, sq), (0b1000_0000, 5));
        let (bb, sq) = pop_lsb(bb);
        assert_eq!((bb, sq), (0, 7));
        assert_eq!(pop_lsb(bb), (0, NO_SET_BITS));
    }

    #[test]
    fn test_set_bits_both_ends() {
        let squares: Vec<u32> = SetBits::new(0x8000_0000_0000_0081).collect();
        assert_eq!(squares, vec![0, 7, 63]);

        let reversed: Vec<u32> = SetBits::new(0x8000_0000_0000_0081).rev().collect();
        assert_eq!(reversed, vec![63, 7, 0]);

        let mut iter = SetBits::new(0b1011);
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_empty_board() {
        assert_eq!(SetBits::new(0).count(), 0);
    }
}
