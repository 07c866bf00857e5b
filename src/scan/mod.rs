//! Bit scans over a 64-bit mask
//!
//! Both scans compile down to a single TZCNT/LZCNT (or BSF/BSR) where the
//! target has one. [`portable`] holds table/shift versions with the same
//! contract for cross-checking and benchmarking.

pub mod portable;

/// Result of either scan when the mask has no set bits.
pub const NO_SET_BITS: i32 = -1;

/// Width of the scanned word in bits.
pub const WORD_BITS: u32 = u64::BITS;

/// Index (0-63) of the least-significant set bit, or [`NO_SET_BITS`] for 0.
///
/// Equivalently, the number of zero bits below the first set bit.
///
/// ```
/// use bitscan::count_trailing_zeros;
///
/// assert_eq!(count_trailing_zeros(1), 0);
/// assert_eq!(count_trailing_zeros(0b1000), 3);
/// assert_eq!(count_trailing_zeros(0), -1);
/// ```
#[inline]
pub fn count_trailing_zeros(x: u64) -> i32 {
    if x == 0 {
        return NO_SET_BITS;
    }
    x.trailing_zeros() as i32
}

/// Index (0-63) of the most-significant set bit, or [`NO_SET_BITS`] for 0.
///
/// This is `63 - leading_zeros(x)`, a bit index and not a count of leading
/// zeros. The value `k` satisfies `2^k <= x < 2^(k+1)`.
///
/// ```
/// use bitscan::highest_set_bit_index;
///
/// assert_eq!(highest_set_bit_index(1), 0);
/// assert_eq!(highest_set_bit_index(u64::MAX), 63);
/// assert_eq!(highest_set_bit_index(0), -1);
/// ```
#[inline]
pub fn highest_set_bit_index(x: u64) -> i32 {
    if x == 0 {
        return NO_SET_BITS;
    }
    (WORD_BITS - 1 - x.leading_zeros()) as i32
}

/// Host-facing name for [`count_trailing_zeros`].
#[inline]
pub fn ctz(x: u64) -> i32 {
    count_trailing_zeros(x)
}

/// Host-facing name for [`highest_set_bit_index`].
///
/// Despite the name this returns the highest set bit's index, matching what
/// existing callers of `clz` expect.
#[inline]
pub fn clz(x: u64) -> i32 {
    highest_set_bit_index(x)
}
