//! Emission calculation service.
//!
//! # Responsibility
//! - Turn (activity id, quantity) pairs into emission figures via the
//!   injected factor table.
//! - Build append-only `ActivityRecord`s with exact, unrounded emissions.
//!
//! # Invariants
//! - `calculate` is referentially transparent and linear in quantity.
//! - Display rounding is applied exactly once, to `ActivityComputation`;
//!   records keep the exact product so aggregation stays precise.

use crate::catalog::factors::FactorTable;
use crate::config::{round_display, EngineConfig};
use crate::model::activity::{ActivityComputation, ActivityRecord, EmissionFactor, RecordId};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type CalcResult<T> = Result<T, CalcError>;

/// Calculation failures; each variant carries the offending input.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// The activity id is absent from the factor table.
    UnknownActivity(String),
    /// Quantity was non-positive or non-finite.
    InvalidQuantity(f64),
}

impl Display for CalcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownActivity(id) => write!(f, "unknown activity id `{id}`"),
            Self::InvalidQuantity(quantity) => {
                write!(f, "quantity must be finite and > 0, got {quantity}")
            }
        }
    }
}

impl Error for CalcError {}

/// Stateless calculator over an injected factor table.
pub struct EmissionCalculator {
    table: FactorTable,
    config: EngineConfig,
}

impl EmissionCalculator {
    pub fn new(table: FactorTable, config: EngineConfig) -> Self {
        Self { table, config }
    }

    /// Computes emissions for one activity quantity.
    ///
    /// # Contract
    /// - Fails with `CalcError::UnknownActivity` for ids missing from the table.
    /// - Fails with `CalcError::InvalidQuantity` for non-positive or
    ///   non-finite quantities.
    /// - The returned emissions are rounded to the configured display
    ///   precision; no partial result is ever returned.
    pub fn calculate(&self, activity_id: &str, quantity: f64) -> CalcResult<ActivityComputation> {
        let factor = self.lookup(activity_id, quantity)?;
        let emissions = quantity * factor.factor_kg_co2e_per_unit;

        debug!(
            "event=emission_calculated module=calculator status=ok activity_id={} quantity={}",
            activity_id, quantity
        );

        Ok(ActivityComputation {
            activity_id: factor.activity_id.clone(),
            category: factor.category,
            unit: factor.unit.clone(),
            quantity,
            emissions_kg_co2e: round_display(emissions, self.config.display_decimals),
        })
    }

    /// Builds an append-only record for the caller's persistence layer.
    ///
    /// # Contract
    /// - `emissions_kg_co2e` is the exact `quantity * factor` product.
    /// - A fresh stable id is generated; the engine never stores the record.
    pub fn record(
        &self,
        activity_id: &str,
        quantity: f64,
        timestamp_ms: i64,
        note: Option<String>,
    ) -> CalcResult<ActivityRecord> {
        let factor = self.lookup(activity_id, quantity)?;

        Ok(ActivityRecord {
            id: new_record_id(),
            timestamp_ms,
            activity_id: factor.activity_id.clone(),
            category: factor.category,
            quantity,
            unit: factor.unit.clone(),
            emissions_kg_co2e: quantity * factor.factor_kg_co2e_per_unit,
            note,
        })
    }

    fn lookup(&self, activity_id: &str, quantity: f64) -> CalcResult<&EmissionFactor> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(CalcError::InvalidQuantity(quantity));
        }
        self.table
            .get(activity_id)
            .ok_or_else(|| CalcError::UnknownActivity(activity_id.to_string()))
    }
}

fn new_record_id() -> RecordId {
    Uuid::new_v4()
}
