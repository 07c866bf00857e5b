//! Wall-clock comparison of intrinsic and portable scans
//!
//! Quick sanity check for a given machine; the criterion bench is the
//! place for careful numbers.

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::scan::{self, portable};

/// Settings for [`compare_scans`].
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Calls of each scan per variant
    pub iterations: u64,

    /// Mask fed to every call
    pub value: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000_000,
            value: 1u64 << 37,
        }
    }
}

/// Timings from one [`compare_scans`] run.
#[derive(Debug, Clone)]
pub struct BenchReport {
    /// Time for the intrinsic trailing + highest scans
    pub intrinsic: Duration,

    /// Time for the portable trailing + highest scans
    pub portable: Duration,

    /// `(ctz, clz)` both variants produced for the configured value
    pub results: (i32, i32),
}

impl BenchReport {
    /// Portable time divided by intrinsic time.
    pub fn speedup(&self) -> f64 {
        let intrinsic = self.intrinsic.as_secs_f64();
        if intrinsic == 0.0 {
            return f64::INFINITY;
        }
        self.portable.as_secs_f64() / intrinsic
    }
}

/// Time both scan variants over the same input.
///
/// Returns `None` if the variants disagree on the configured value.
pub fn compare_scans(config: &BenchConfig) -> Option<BenchReport> {
    let expected = (
        scan::count_trailing_zeros(config.value),
        scan::highest_set_bit_index(config.value),
    );
    let fallback = (
        portable::count_trailing_zeros(config.value),
        portable::highest_set_bit_index(config.value),
    );
    if expected != fallback {
        return None;
    }

    let intrinsic = time_pair(config, scan::count_trailing_zeros, scan::highest_set_bit_index);
    let portable = time_pair(
        config,
        portable::count_trailing_zeros,
        portable::highest_set_bit_index,
    );

    Some(BenchReport {
        intrinsic,
        portable,
        results: expected,
    })
}

fn time_pair(config: &BenchConfig, low: fn(u64) -> i32, high: fn(u64) -> i32) -> Duration {
    let start = Instant::now();
    for _ in 0..config.iterations {
        black_box(low(black_box(config.value)));
        black_box(high(black_box(config.value)));
    }
    start.elapsed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.iterations, 10_000_000);
        assert_eq!(config.value, 1 << 37);
    }

    #[test]
    fn test_compare_reports_results() {
        let config = BenchConfig {
            iterations: 1_000,
            value: 0b1100,
        };
        let report = compare_scans(&config).expect("variants agree");
        assert_eq!(report.results, (2, 3));
        assert!(report.speedup() >= 0.0);
    }

    #[test]
    fn test_zero_value_is_benchable() {
        let config = BenchConfig {
            iterations: 10,
            value: 0,
        };
        let report = compare_scans(&config).expect("variants agree");
        assert_eq!(report.results, (-1, -1));
    }
}
