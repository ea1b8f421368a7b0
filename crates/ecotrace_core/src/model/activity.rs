//! Activity and emission-factor domain model.
//!
//! # Responsibility
//! - Define the canonical shapes for logged activities and their factors.
//! - Keep record emissions exact; display rounding happens downstream.
//!
//! # Invariants
//! - `ActivityRecord.emissions_kg_co2e == quantity * factor` at creation and
//!   is never recomputed or mutated afterwards (append-only log semantics).
//! - `EmissionFactor.factor_kg_co2e_per_unit` is finite and strictly positive.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a logged activity record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;

/// Emission category for activities, factors and reduction actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Personal mobility: car, bus, train, flights.
    Transportation,
    /// Meals and groceries.
    Food,
    /// Household electricity and fuels.
    Energy,
    /// Purchased goods.
    Shopping,
    /// Non-energy household activity such as waste and water.
    Household,
}

impl Category {
    /// All categories in canonical order, for dense breakdown iteration.
    pub const ALL: [Category; 5] = [
        Category::Transportation,
        Category::Food,
        Category::Energy,
        Category::Shopping,
        Category::Household,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Transportation => "transportation",
            Category::Food => "food",
            Category::Energy => "energy",
            Category::Shopping => "shopping",
            Category::Household => "household",
        }
    }

    pub fn parse(value: &str) -> Option<Category> {
        match value {
            "transportation" => Some(Category::Transportation),
            "food" => Some(Category::Food),
            "energy" => Some(Category::Energy),
            "shopping" => Some(Category::Shopping),
            "household" => Some(Category::Household),
            _ => None,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static conversion constant: activity quantity -> kg CO2e.
///
/// Reference data loaded once into a `FactorTable`; read-only thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactor {
    /// Unique key used by callers when logging (`"bus"`, `"chicken"`, ...).
    pub activity_id: String,
    pub category: Category,
    /// Quantity unit the factor is expressed against (`"km"`, `"kWh"`, ...).
    pub unit: String,
    pub factor_kg_co2e_per_unit: f64,
}

impl EmissionFactor {
    pub fn new(
        activity_id: impl Into<String>,
        category: Category,
        unit: impl Into<String>,
        factor_kg_co2e_per_unit: f64,
    ) -> Self {
        Self {
            activity_id: activity_id.into(),
            category,
            unit: unit.into(),
            factor_kg_co2e_per_unit,
        }
    }

    /// Checks reference-data sanity before the factor enters a table.
    pub fn validate(&self) -> Result<(), FactorValidationError> {
        if self.activity_id.trim().is_empty() {
            return Err(FactorValidationError::EmptyActivityId);
        }
        if !self.factor_kg_co2e_per_unit.is_finite() || self.factor_kg_co2e_per_unit <= 0.0 {
            return Err(FactorValidationError::NonPositiveFactor {
                activity_id: self.activity_id.clone(),
                factor: self.factor_kg_co2e_per_unit,
            });
        }
        Ok(())
    }
}

/// Validation failures for emission-factor reference data.
#[derive(Debug, Clone, PartialEq)]
pub enum FactorValidationError {
    EmptyActivityId,
    NonPositiveFactor { activity_id: String, factor: f64 },
    DuplicateActivityId(String),
}

impl Display for FactorValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyActivityId => write!(f, "emission factor activity_id cannot be empty"),
            Self::NonPositiveFactor {
                activity_id,
                factor,
            } => write!(
                f,
                "emission factor for `{activity_id}` must be finite and > 0, got {factor}"
            ),
            Self::DuplicateActivityId(id) => {
                write!(f, "duplicate emission factor activity_id `{id}`")
            }
        }
    }
}

impl Error for FactorValidationError {}

/// One logged activity with its emissions fixed at creation time.
///
/// Owned by the caller's persistence layer; the engine only processes batches
/// of these and never stores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: RecordId,
    /// Unix epoch milliseconds, UTC.
    pub timestamp_ms: i64,
    pub activity_id: String,
    pub category: Category,
    pub quantity: f64,
    pub unit: String,
    /// Exact `quantity * factor`, unrounded so aggregation stays precise.
    pub emissions_kg_co2e: f64,
    pub note: Option<String>,
}

/// Result of one emission calculation, rounded for display stability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityComputation {
    pub activity_id: String,
    pub category: Category,
    pub unit: String,
    pub quantity: f64,
    pub emissions_kg_co2e: f64,
}
