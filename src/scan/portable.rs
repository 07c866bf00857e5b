//! Portable bit scans for targets without a bit-scan instruction
//!
//! Same contract as the intrinsic scans: a bit index in 0-63, or
//! [`NO_SET_BITS`] for an all-zero mask.

use super::NO_SET_BITS;

/// Lowest set bit index for every byte value (entry 0 is unused).
pub const LSB_LOOKUP: [i8; 256] = build_lsb_lookup();

const fn build_lsb_lookup() -> [i8; 256] {
    let mut table = [NO_SET_BITS as i8; 256];
    let mut byte = 1;
    while byte < 256 {
        let mut index = 0;
        while (byte >> index) & 1 == 0 {
            index += 1;
        }
        table[byte] = index as i8;
        byte += 1;
    }
    table
}

/// Trailing scan via the byte lookup table.
///
/// Finds the first non-zero byte from the low end and adds its offset to
/// the table entry for that byte.
pub fn count_trailing_zeros(x: u64) -> i32 {
    if x == 0 {
        return NO_SET_BITS;
    }

    let mut shift = 0;
    while (x >> shift) & 0xFF == 0 {
        shift += 8;
    }
    LSB_LOOKUP[((x >> shift) & 0xFF) as usize] as i32 + shift
}

/// Highest-bit scan via a binary search of shifts.
pub fn highest_set_bit_index(x: u64) -> i32 {
    if x == 0 {
        return NO_SET_BITS;
    }

    let mut rest = x;
    let mut index = 0;
    for step in [32, 16, 8, 4, 2, 1] {
        if rest >> step != 0 {
            rest >>= step;
            index += step;
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_table() {
        assert_eq!(LSB_LOOKUP[0], -1);
        assert_eq!(LSB_LOOKUP[1], 0);
        assert_eq!(LSB_LOOKUP[0b1010_0000], 5);
        assert_eq!(LSB_LOOKUP[0x80], 7);
        assert_eq!(LSB_LOOKUP[0xFF], 0);
    }

    #[test]
    fn test_matches_intrinsic_on_every_single_bit() {
        for k in 0..64 {
            let x = 1u64 << k;
            assert_eq!(count_trailing_zeros(x), super::super::count_trailing_zeros(x));
            assert_eq!(highest_set_bit_index(x), super::super::highest_set_bit_index(x));
        }
    }

    #[test]
    fn test_zero_and_full() {
        assert_eq!(count_trailing_zeros(0), NO_SET_BITS);
        assert_eq!(highest_set_bit_index(0), NO_SET_BITS);
        assert_eq!(count_trailing_zeros(u64::MAX), 0);
        assert_eq!(highest_set_bit_index(u64::MAX), 63);
        assert_eq!(count_trailing_zeros(0xFF00_0000_0000_0000), 56);
    }
}
