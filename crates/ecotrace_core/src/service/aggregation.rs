//! Windowed aggregation of activity records.
//!
//! # Responsibility
//! - Roll record batches into period summaries: totals, category breakdown,
//!   top contributors and a dense daily series.
//! - Stay lenient: empty or out-of-window input yields zero-filled output,
//!   never an error, so dashboards remain renderable.
//!
//! # Invariants
//! - Window filtering is half-open `[start, end)`.
//! - Sums run unrounded; display rounding is applied once per output field.
//! - The daily series has one bucket per UTC day in the window, gap-free.

use crate::config::{round_display, EngineConfig};
use crate::model::activity::{ActivityRecord, Category};
use crate::model::report::{
    CategorySummary, DailyEmission, PeriodSummary, TimeWindow, TopActivity, MS_PER_DAY,
};
use log::debug;
use std::collections::HashMap;

/// Aggregates `records` over `window` into a `PeriodSummary`.
///
/// # Contract
/// - Records outside the window are ignored, not an error.
/// - `top_n` caps the top-contributors list; ties break by activity count
///   descending, then activity id ascending, for deterministic output.
/// - `grand_total == 0` yields all percentages 0 rather than NaN.
pub fn aggregate(
    records: &[ActivityRecord],
    window: TimeWindow,
    top_n: usize,
    config: &EngineConfig,
) -> PeriodSummary {
    let in_window: Vec<&ActivityRecord> = records
        .iter()
        .filter(|record| window.contains(record.timestamp_ms))
        .collect();

    let grand_total: f64 = in_window
        .iter()
        .map(|record| record.emissions_kg_co2e)
        .sum();

    let decimals = config.display_decimals;
    let daily_series = build_daily_series(&in_window, window, decimals);
    let day_count = daily_series.len();
    let daily_average = if day_count == 0 {
        0.0
    } else {
        grand_total / day_count as f64
    };

    debug!(
        "event=aggregate module=aggregation status=ok records_in_window={} days={}",
        in_window.len(),
        day_count
    );

    PeriodSummary {
        period_start_ms: window.start_ms,
        period_end_ms: window.end_ms,
        total_kg: round_display(grand_total, decimals),
        daily_average_kg: round_display(daily_average, decimals),
        category_breakdown: build_breakdown(&in_window, grand_total, decimals),
        top_activities: build_top_activities(&in_window, top_n, decimals),
        daily_series,
    }
}

fn build_breakdown(
    records: &[&ActivityRecord],
    grand_total: f64,
    decimals: u32,
) -> Vec<CategorySummary> {
    let mut totals: HashMap<Category, (f64, usize)> = HashMap::new();
    for record in records {
        let entry = totals.entry(record.category).or_insert((0.0, 0));
        entry.0 += record.emissions_kg_co2e;
        entry.1 += 1;
    }

    // Canonical category order keeps the breakdown deterministic.
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let (total, count) = *totals.get(&category)?;
            let percentage = if grand_total == 0.0 {
                0.0
            } else {
                total / grand_total * 100.0
            };
            Some(CategorySummary {
                category,
                total_kg: round_display(total, decimals),
                activity_count: count,
                average_kg: round_display(total / count as f64, decimals),
                percentage_of_total: round_display(percentage, decimals),
            })
        })
        .collect()
}

fn build_top_activities(
    records: &[&ActivityRecord],
    top_n: usize,
    decimals: u32,
) -> Vec<TopActivity> {
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
    for record in records {
        let entry = totals.entry(record.activity_id.as_str()).or_insert((0.0, 0));
        entry.0 += record.emissions_kg_co2e;
        entry.1 += 1;
    }

    let mut ranked: Vec<(&str, f64, usize)> = totals
        .into_iter()
        .map(|(id, (total, count))| (id, total, count))
        .collect();
    ranked.sort_by(|a, b| {
        b.1.total_cmp(&a.1)
            .then_with(|| b.2.cmp(&a.2))
            .then_with(|| a.0.cmp(b.0))
    });
    ranked.truncate(top_n);

    ranked
        .into_iter()
        .map(|(activity_id, total, count)| TopActivity {
            activity_id: activity_id.to_string(),
            total_kg: round_display(total, decimals),
            count,
        })
        .collect()
}

fn build_daily_series(
    records: &[&ActivityRecord],
    window: TimeWindow,
    decimals: u32,
) -> Vec<DailyEmission> {
    if window.end_ms <= window.start_ms {
        return Vec::new();
    }

    // First bucket is the UTC day containing `start`; last is the day
    // containing `end - 1`, keeping the half-open semantics.
    let first_day = window.start_ms.div_euclid(MS_PER_DAY);
    let last_day = (window.end_ms - 1).div_euclid(MS_PER_DAY);
    let day_count = (last_day - first_day + 1) as usize;

    let mut buckets = vec![0.0; day_count];
    for record in records {
        let day = record.timestamp_ms.div_euclid(MS_PER_DAY);
        let index = (day - first_day) as usize;
        buckets[index] += record.emissions_kg_co2e;
    }

    buckets
        .into_iter()
        .enumerate()
        .map(|(offset, total)| DailyEmission {
            day_start_ms: (first_day + offset as i64) * MS_PER_DAY,
            total_kg: round_display(total, decimals),
        })
        .collect()
}
