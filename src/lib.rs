//! # Bit-scan primitives for 64-bit bitboards
//!
//! Two pure functions over `u64` bitmasks, exposed both as a Rust API and
//! (with the `python-bindings` feature) as a native Python module:
//!
//! 1. **Trailing scan**: index of the least-significant set bit
//! 2. **Highest-bit scan**: index of the most-significant set bit
//!
//! Both return [`NO_SET_BITS`] (`-1`) for an all-zero mask. Zero is a
//! defined result, never an error.
//!
//! ## Usage Example
//!
//! ```
//! use bitscan::{count_trailing_zeros, highest_set_bit_index, NO_SET_BITS};
//!
//! assert_eq!(count_trailing_zeros(0b1100), 2);
//! assert_eq!(highest_set_bit_index(0b1100), 3);
//! assert_eq!(highest_set_bit_index(0), NO_SET_BITS);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod scan;       // Intrinsic and portable bit scans
pub mod bitboard;   // Square helpers and set-bit iteration
pub mod args;       // Call-boundary validation
pub mod timing;     // Intrinsic vs portable timing
/// Python bindings exposing the scans as the `bitops` extension module.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use scan::{clz, count_trailing_zeros, ctz, highest_set_bit_index, NO_SET_BITS};
pub use bitboard::{bit, pop_lsb, SetBits};
pub use args::{call_with_mask, checked_u64, parse_u64, single_argument, HostValue};

use thiserror::Error;

/// Errors raised at the call boundary.
///
/// The scans themselves are total over `u64`; only marshaling a caller's
/// value into that domain can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitScanError {
    /// Wrong arity, or a value outside the unsigned 64-bit range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl BitScanError {
    /// Shorthand for building an [`BitScanError::InvalidArgument`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        BitScanError::InvalidArgument(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_reason() {
        let err = BitScanError::invalid("value -3 is negative");
        assert_eq!(err.to_string(), "Invalid argument: value -3 is negative");
    }

    #[test]
    fn test_reexports_agree_with_modules() {
        assert_eq!(ctz(12), scan::count_trailing_zeros(12));
        assert_eq!(clz(12), scan::highest_set_bit_index(12));
    }
}
