//! Derived reporting model: summaries, trends, benchmarks, recommendations.
//!
//! # Responsibility
//! - Define the shapes the aggregation/trend/recommendation services return.
//! - Keep every derived entity free of persistent identity; each call
//!   recomputes from scratch.
//!
//! # Invariants
//! - `TimeWindow` is half-open: `start_ms` inclusive, `end_ms` exclusive.
//! - `TrendResult.direction == Flat` iff `|percent_change|` is below the
//!   configured epsilon.

use crate::model::activity::Category;
use serde::{Deserialize, Serialize};

/// Milliseconds in one UTC day, the bucketing unit for daily series.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Half-open aggregation window `[start_ms, end_ms)` in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl TimeWindow {
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    pub fn contains(&self, timestamp_ms: i64) -> bool {
        timestamp_ms >= self.start_ms && timestamp_ms < self.end_ms
    }
}

/// Per-category rollup inside a `PeriodSummary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    pub total_kg: f64,
    pub activity_count: usize,
    pub average_kg: f64,
    pub percentage_of_total: f64,
}

/// One entry of the top-contributors list, keyed by activity id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopActivity {
    pub activity_id: String,
    pub total_kg: f64,
    pub count: usize,
}

/// One day of the dense daily series; zero-emission days are present too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyEmission {
    /// Epoch milliseconds of the UTC day boundary this bucket starts at.
    pub day_start_ms: i64,
    pub total_kg: f64,
}

/// Windowed aggregation result for dashboards and trend charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub period_start_ms: i64,
    pub period_end_ms: i64,
    pub total_kg: f64,
    pub daily_average_kg: f64,
    pub category_breakdown: Vec<CategorySummary>,
    pub top_activities: Vec<TopActivity>,
    /// Dense, gap-free day buckets covering the whole window.
    pub daily_series: Vec<DailyEmission>,
}

/// Direction of a period-over-period emissions trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Period-over-period delta between two halves of a daily series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub direction: TrendDirection,
    pub percent_change: f64,
    /// First-half average the change is measured against.
    pub comparison_basis_kg: f64,
}

/// Placement relative to a reference value such as a regional daily average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkStatus {
    Below,
    Above,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub subject_kg: f64,
    pub benchmark_kg: f64,
    pub percent_difference: f64,
    pub status: BenchmarkStatus,
}

/// Effort level of a reduction action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Immutable catalog entry describing one reduction action.
///
/// Selection and ranking are computed per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub category: Category,
    pub estimated_impact_kg_per_year: f64,
    pub difficulty: Difficulty,
}
