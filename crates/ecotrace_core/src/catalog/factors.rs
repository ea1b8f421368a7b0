//! Emission-factor reference table.
//!
//! # Responsibility
//! - Hold validated, unique-keyed emission factors behind a lookup API.
//! - Ship the builtin dataset used when the caller supplies none.
//!
//! # Invariants
//! - Every factor in a table passed `EmissionFactor::validate`.
//! - `activity_id` keys are unique within a table.

use crate::model::activity::{Category, EmissionFactor, FactorValidationError};
use std::collections::HashMap;

/// Read-only lookup table from activity id to emission factor.
///
/// Built once at startup from caller-supplied or builtin data and injected
/// into the calculator; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct FactorTable {
    factors: HashMap<String, EmissionFactor>,
}

impl FactorTable {
    /// Builds a table, rejecting invalid or duplicate factors.
    pub fn from_factors(
        factors: impl IntoIterator<Item = EmissionFactor>,
    ) -> Result<Self, FactorValidationError> {
        let mut map = HashMap::new();
        for factor in factors {
            factor.validate()?;
            if map.contains_key(&factor.activity_id) {
                return Err(FactorValidationError::DuplicateActivityId(
                    factor.activity_id,
                ));
            }
            map.insert(factor.activity_id.clone(), factor);
        }
        Ok(Self { factors: map })
    }

    /// Builds the default dataset shipped with the engine.
    pub fn builtin() -> Self {
        // Builtin entries are static and known-valid, so construction cannot
        // fail and skips the duplicate check.
        let mut factors = HashMap::new();
        for factor in builtin_factors() {
            factors.insert(factor.activity_id.clone(), factor);
        }
        Self { factors }
    }

    pub fn get(&self, activity_id: &str) -> Option<&EmissionFactor> {
        self.factors.get(activity_id)
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Iterates factors in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &EmissionFactor> {
        self.factors.values()
    }
}

/// Default per-activity factors, in kg CO2e per unit.
pub fn builtin_factors() -> Vec<EmissionFactor> {
    vec![
        EmissionFactor::new("car", Category::Transportation, "km", 0.12),
        EmissionFactor::new("bus", Category::Transportation, "km", 0.05),
        EmissionFactor::new("train", Category::Transportation, "km", 0.04),
        EmissionFactor::new("chicken", Category::Food, "meal", 1.5),
        EmissionFactor::new("vegetarian", Category::Food, "meal", 0.8),
        EmissionFactor::new("electricity_grid", Category::Energy, "kWh", 0.82),
        EmissionFactor::new("lpg_refill", Category::Energy, "cylinder", 42.5),
        EmissionFactor::new("clothes_new", Category::Shopping, "item", 20.0),
        EmissionFactor::new("electronics_small", Category::Shopping, "item", 55.0),
        EmissionFactor::new("waste_landfill", Category::Household, "kg", 0.57),
        EmissionFactor::new("water_heated", Category::Household, "litre", 0.03),
    ]
}

#[cfg(test)]
mod tests {
    use super::{builtin_factors, FactorTable};
    use crate::model::activity::{Category, EmissionFactor, FactorValidationError};

    #[test]
    fn builtin_table_contains_expected_entries() {
        let table = FactorTable::builtin();
        assert_eq!(table.len(), builtin_factors().len());

        let bus = table.get("bus").expect("bus factor should exist");
        assert_eq!(bus.category, Category::Transportation);
        assert_eq!(bus.unit, "km");
        assert_eq!(bus.factor_kg_co2e_per_unit, 0.05);

        assert!(table.get("rocket").is_none());
    }

    #[test]
    fn builtin_covers_every_category() {
        let table = FactorTable::builtin();
        for category in Category::ALL {
            assert!(
                table.iter().any(|factor| factor.category == category),
                "no builtin factor for category {category}"
            );
        }
    }

    #[test]
    fn from_factors_rejects_duplicates() {
        let err = FactorTable::from_factors(vec![
            EmissionFactor::new("bus", Category::Transportation, "km", 0.05),
            EmissionFactor::new("bus", Category::Transportation, "km", 0.06),
        ])
        .expect_err("duplicate ids must be rejected");
        assert_eq!(
            err,
            FactorValidationError::DuplicateActivityId("bus".to_string())
        );
    }
}
