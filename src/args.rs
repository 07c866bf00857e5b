//! Call-boundary validation
//!
//! Callers outside Rust hand us untyped values. Anything that is not
//! exactly one integer in `0..=u64::MAX` is rejected with
//! [`BitScanError::InvalidArgument`]; nothing is truncated or wrapped.

use crate::BitScanError;

/// Narrow a wide integer into the scanned domain.
pub fn checked_u64(value: i128) -> Result<u64, BitScanError> {
    if value < 0 {
        return Err(BitScanError::invalid(format!(
            "value {value} is negative"
        )));
    }
    u64::try_from(value).map_err(|_| {
        BitScanError::invalid(format!("value {value} exceeds {}", u64::MAX))
    })
}

/// Parse a textual bitmask.
///
/// Accepts decimal and `0x` / `0b` / `0o` prefixed forms, with optional `_`
/// digit separators.
pub fn parse_u64(text: &str) -> Result<u64, BitScanError> {
    let trimmed = text.trim();
    let digits: String = trimmed.chars().filter(|&c| c != '_').collect();
    let lower = digits.to_ascii_lowercase();

    let (radix, body) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else {
        (10, lower.as_str())
    };

    // from_str_radix accepts a leading '+', which we don't
    if body.is_empty() || !body.chars().all(|c| c.is_digit(radix)) {
        return Err(BitScanError::invalid(format!(
            "{trimmed:?} is not an unsigned integer"
        )));
    }

    u64::from_str_radix(body, radix).map_err(|_| {
        BitScanError::invalid(format!("{trimmed:?} exceeds {}", u64::MAX))
    })
}

/// Require exactly one argument.
pub fn single_argument<T>(args: &[T]) -> Result<&T, BitScanError> {
    match args {
        [only] => Ok(only),
        _ => Err(BitScanError::invalid(format!(
            "expected exactly 1 argument, got {}",
            args.len()
        ))),
    }
}

/// An argument as received from a dynamically typed caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostValue {
    /// Integer that fits in `i128`
    Int(i128),
    /// Integer too wide for `i128`, carried as its decimal text
    WideInt(String),
    /// Anything that is not an integer, carried as its type name
    NotInteger(String),
}

impl HostValue {
    /// Narrow into the scanned domain.
    pub fn to_mask(&self) -> Result<u64, BitScanError> {
        match self {
            HostValue::Int(value) => checked_u64(*value),
            HostValue::WideInt(text) => Err(BitScanError::invalid(format!(
                "value {text} exceeds {}",
                u64::MAX
            ))),
            HostValue::NotInteger(type_name) => Err(BitScanError::invalid(format!(
                "expected an integer, got {type_name}"
            ))),
        }
    }
}

/// Validate a host call and apply `op` to its single mask argument.
///
/// Wrong arity, keyword arguments and values outside `0..=u64::MAX` all fail
/// with [`BitScanError::InvalidArgument`] before `op` runs.
pub fn call_with_mask<R>(
    args: &[HostValue],
    keyword_count: usize,
    op: impl FnOnce(u64) -> Result<R, BitScanError>,
) -> Result<R, BitScanError> {
    if keyword_count > 0 {
        return Err(BitScanError::invalid(format!(
            "takes no keyword arguments, got {keyword_count}"
        )));
    }
    let mask = single_argument(args)?.to_mask()?;
    op(mask)
}

/// Host-level `bit`: the index arrives as a mask-domain value.
pub fn bit_from_index(index: u64) -> Result<u64, BitScanError> {
    let narrowed = u32::try_from(index).map_err(|_| {
        BitScanError::invalid(format!("bit index {index} out of range 0..64"))
    })?;
    crate::bitboard::bit(narrowed)
}
