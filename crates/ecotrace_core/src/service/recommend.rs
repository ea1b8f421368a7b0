//! Rule-based ranking of reduction actions.
//!
//! # Responsibility
//! - Select the top-K catalog actions for a user's dominant category and
//!   recent trend.
//! - Let callers override the trend-sensitive ordering with their own
//!   comparator.
//!
//! # Invariants
//! - Output is deterministic for identical inputs; no randomness.
//! - Dominant-category matches always precede backfill entries.

use crate::model::activity::Category;
use crate::model::report::{Difficulty, Recommendation, TrendDirection};
use std::cmp::Ordering;

/// Selects the top `k` actions using the default trend-sensitive policy.
///
/// # Contract
/// - Catalog entries matching `dominant_category` come first; when fewer than
///   `k` match, the remainder backfills from other categories by estimated
///   impact descending.
/// - A rising trend surfaces easy actions first (quick wins); a falling trend
///   surfaces medium/hard ones to sustain momentum. This is policy, not a
///   hard constraint; see `recommend_with`.
pub fn recommend(
    dominant_category: Category,
    recent_trend: TrendDirection,
    catalog: &[Recommendation],
    k: usize,
) -> Vec<Recommendation> {
    recommend_with(dominant_category, catalog, k, |a, b| {
        policy_order(recent_trend, a, b)
    })
}

/// Selects the top `k` actions using a caller-supplied ordering.
///
/// The comparator only orders entries within the dominant-category block and
/// within the backfill block; it cannot move backfill ahead of matches.
pub fn recommend_with(
    dominant_category: Category,
    catalog: &[Recommendation],
    k: usize,
    compare: impl Fn(&Recommendation, &Recommendation) -> Ordering,
) -> Vec<Recommendation> {
    let (mut matching, mut backfill): (Vec<Recommendation>, Vec<Recommendation>) = catalog
        .iter()
        .cloned()
        .partition(|entry| entry.category == dominant_category);

    matching.sort_by(|a, b| compare(a, b).then_with(|| a.title.cmp(&b.title)));
    backfill.sort_by(|a, b| {
        b.estimated_impact_kg_per_year
            .total_cmp(&a.estimated_impact_kg_per_year)
            .then_with(|| a.title.cmp(&b.title))
    });

    matching.extend(backfill);
    matching.truncate(k);
    matching
}

/// Default policy ordering for one trend direction.
fn policy_order(recent_trend: TrendDirection, a: &Recommendation, b: &Recommendation) -> Ordering {
    let difficulty = match recent_trend {
        // Rising emissions: quick wins first.
        TrendDirection::Up => difficulty_tier_easy_first(a.difficulty)
            .cmp(&difficulty_tier_easy_first(b.difficulty)),
        // Falling emissions: bigger-effort actions to sustain momentum.
        TrendDirection::Down => difficulty_tier_effort_first(a.difficulty)
            .cmp(&difficulty_tier_effort_first(b.difficulty)),
        TrendDirection::Flat => Ordering::Equal,
    };
    difficulty.then_with(|| {
        b.estimated_impact_kg_per_year
            .total_cmp(&a.estimated_impact_kg_per_year)
    })
}

fn difficulty_tier_easy_first(difficulty: Difficulty) -> u8 {
    match difficulty {
        Difficulty::Easy => 0,
        Difficulty::Medium => 1,
        Difficulty::Hard => 2,
    }
}

fn difficulty_tier_effort_first(difficulty: Difficulty) -> u8 {
    match difficulty {
        Difficulty::Medium => 0,
        Difficulty::Hard => 1,
        Difficulty::Easy => 2,
    }
}
