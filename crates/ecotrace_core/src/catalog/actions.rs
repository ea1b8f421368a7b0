//! Builtin reduction-action catalog.
//!
//! # Responsibility
//! - Ship the default set of reduction actions the recommender ranks.
//!
//! # Invariants
//! - Impact estimates are annualized kg CO2e per year.
//! - Entries are immutable; ranking never reorders the catalog in place.

use crate::model::activity::Category;
use crate::model::report::{Difficulty, Recommendation};

fn action(
    title: &str,
    category: Category,
    estimated_impact_kg_per_year: f64,
    difficulty: Difficulty,
) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        category,
        estimated_impact_kg_per_year,
        difficulty,
    }
}

/// Default reduction-action catalog, covering every category.
pub fn builtin_actions() -> Vec<Recommendation> {
    vec![
        action(
            "Use public transport for the daily commute",
            Category::Transportation,
            700.0,
            Difficulty::Easy,
        ),
        action(
            "Cycle or walk distances under 3 km",
            Category::Transportation,
            260.0,
            Difficulty::Easy,
        ),
        action(
            "Car-pool or switch to an electric vehicle",
            Category::Transportation,
            1500.0,
            Difficulty::Hard,
        ),
        action(
            "Replace two meat meals a week with plant-based ones",
            Category::Food,
            310.0,
            Difficulty::Medium,
        ),
        action(
            "Buy local and seasonal produce",
            Category::Food,
            120.0,
            Difficulty::Easy,
        ),
        action(
            "Switch household lighting to LED",
            Category::Energy,
            40.0,
            Difficulty::Easy,
        ),
        action(
            "Raise the air-conditioner set point by 2\u{b0}C",
            Category::Energy,
            200.0,
            Difficulty::Easy,
        ),
        action(
            "Install rooftop solar water heating",
            Category::Energy,
            450.0,
            Difficulty::Hard,
        ),
        action(
            "Buy secondhand clothing instead of new",
            Category::Shopping,
            180.0,
            Difficulty::Easy,
        ),
        action(
            "Repair electronics before replacing them",
            Category::Shopping,
            110.0,
            Difficulty::Medium,
        ),
        action(
            "Compost wet waste instead of landfilling it",
            Category::Household,
            90.0,
            Difficulty::Medium,
        ),
        action(
            "Fix leaking taps and shorten hot showers",
            Category::Household,
            60.0,
            Difficulty::Easy,
        ),
    ]
}
