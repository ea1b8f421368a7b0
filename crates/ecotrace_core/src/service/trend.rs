//! Trend, benchmark and percentile placement.
//!
//! # Responsibility
//! - Compute period-over-period deltas from a daily emissions series.
//! - Compare a subject total against a reference benchmark.
//! - Place a subject inside a peer group as a 0-100 percentile.
//!
//! # Invariants
//! - Direction is `Flat` iff `|percent_change|` is below the configured
//!   epsilon.
//! - A zero first-half average defines the change as 0 / flat instead of
//!   dividing by zero.
//! - Percentile is interpolated on rank position; tied values share one
//!   percentile.

use crate::config::{round_display, EngineConfig};
use crate::model::report::{BenchmarkComparison, BenchmarkStatus, TrendDirection, TrendResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Benchmark failures; the variant carries the offending reference value.
#[derive(Debug, Clone, PartialEq)]
pub enum BenchmarkError {
    /// The reference value must be strictly positive.
    InvalidBenchmark(f64),
}

impl Display for BenchmarkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBenchmark(value) => {
                write!(f, "benchmark must be > 0, got {value}")
            }
        }
    }
}

impl Error for BenchmarkError {}

/// Computes the trend of a daily series by comparing its two halves.
///
/// # Contract
/// - The first half receives the extra day on odd lengths.
/// - `percent_change = (second_avg - first_avg) / first_avg * 100`.
/// - `first_avg == 0` yields `percent_change = 0` and `direction = Flat`.
/// - A series shorter than two days has no second half to compare and
///   reports flat with `percent_change = 0`.
pub fn trend(daily_kg: &[f64], config: &EngineConfig) -> TrendResult {
    if daily_kg.len() < 2 {
        return TrendResult {
            direction: TrendDirection::Flat,
            percent_change: 0.0,
            comparison_basis_kg: round_display(mean(daily_kg), config.display_decimals),
        };
    }

    let split = daily_kg.len().div_ceil(2);
    let first_avg = mean(&daily_kg[..split]);
    let second_avg = mean(&daily_kg[split..]);

    if first_avg == 0.0 {
        return TrendResult {
            direction: TrendDirection::Flat,
            percent_change: 0.0,
            comparison_basis_kg: 0.0,
        };
    }

    let percent_change = (second_avg - first_avg) / first_avg * 100.0;
    let direction = if percent_change.abs() < config.trend_epsilon_percent {
        TrendDirection::Flat
    } else if percent_change > 0.0 {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    };

    TrendResult {
        direction,
        percent_change: round_display(percent_change, config.display_decimals),
        comparison_basis_kg: round_display(first_avg, config.display_decimals),
    }
}

/// Compares a subject total against a reference benchmark.
///
/// # Contract
/// - Fails with `BenchmarkError::InvalidBenchmark` when `benchmark_kg <= 0`
///   (or non-finite).
/// - `status = Below` when `subject_kg < benchmark_kg`, else `Above`.
pub fn benchmark(
    subject_kg: f64,
    benchmark_kg: f64,
    config: &EngineConfig,
) -> Result<BenchmarkComparison, BenchmarkError> {
    if !benchmark_kg.is_finite() || benchmark_kg <= 0.0 {
        return Err(BenchmarkError::InvalidBenchmark(benchmark_kg));
    }

    let percent_difference = (subject_kg - benchmark_kg) / benchmark_kg * 100.0;
    let status = if subject_kg < benchmark_kg {
        BenchmarkStatus::Below
    } else {
        BenchmarkStatus::Above
    };

    Ok(BenchmarkComparison {
        subject_kg,
        benchmark_kg,
        percent_difference: round_display(percent_difference, config.display_decimals),
        status,
    })
}

/// Places `subject` in `sorted_peers` as a 0-100 percentile.
///
/// # Contract
/// - `sorted_peers` must be ascending; the subject may or may not be a member.
/// - Percentile is linear in rank position: the would-be index of the first
///   peer not less than the subject, over `len - 1`.
/// - Duplicate peer values share the same percentile.
/// - A subject above every peer caps at 100.
/// - Fewer than two peers places the subject at 0.
pub fn percentile_rank(sorted_peers: &[f64], subject: f64) -> f64 {
    if sorted_peers.len() < 2 {
        return 0.0;
    }

    let rank = sorted_peers.partition_point(|peer| *peer < subject);
    (rank as f64 / (sorted_peers.len() - 1) as f64 * 100.0).min(100.0)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
