//! Carbon capture, storage and project-economics model.
//!
//! # Responsibility
//! - Define the shapes of the industrial capture/storage/credit pipeline.
//! - Enforce the storage-site capacity identity at construction.
//!
//! # Invariants
//! - `StorageSite.total_capacity_mt` always equals the sum of its three
//!   formation capacities.
//! - At most the single top-ranked site per ranking request carries
//!   `recommended = true`.

use serde::{Deserialize, Serialize};

/// Capture-efficiency reference entry for one industry type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryProfile {
    /// Key used by callers (`"cement"`, `"power"`, ...).
    pub industry_type: String,
    pub capture_efficiency_percent: f64,
    pub description: String,
}

/// Outcome of simulating capture against annual industrial emissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureAnalysis {
    pub industry_type: String,
    pub annual_emissions_tonnes: f64,
    pub capture_efficiency_percent: f64,
    pub capturable_tonnes: f64,
    pub remaining_tonnes: f64,
    /// Share of annual emissions removed; equals the capture efficiency.
    pub reduction_percent: f64,
}

/// Geological storage option with per-formation capacity estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSite {
    pub region: String,
    pub depleted_wells_mt: f64,
    pub saline_aquifers_mt: f64,
    pub coal_seams_mt: f64,
    pub total_capacity_mt: f64,
    /// 0.0..=1.0, higher when the site sits in a caller-preferred region.
    pub proximity_score: f64,
    pub recommended: bool,
}

impl StorageSite {
    /// Builds a site with the capacity identity computed, not caller-supplied.
    pub fn new(
        region: impl Into<String>,
        depleted_wells_mt: f64,
        saline_aquifers_mt: f64,
        coal_seams_mt: f64,
    ) -> Self {
        Self {
            region: region.into(),
            depleted_wells_mt,
            saline_aquifers_mt,
            coal_seams_mt,
            total_capacity_mt: depleted_wells_mt + saline_aquifers_mt + coal_seams_mt,
            proximity_score: 0.0,
            recommended: false,
        }
    }
}

/// Reference entry describing one CO2 utilization route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayProfile {
    /// Key used by callers (`"enhanced_oil_recovery"`, `"concrete_curing"`, ...).
    pub pathway: String,
    pub description: String,
    /// Share of routed CO2 the process actually binds or displaces.
    pub efficiency_percent: f64,
    /// Qualitative economics rating for display (`"high"`, `"moderate"`, ...).
    pub economics: String,
    /// Share of a captured stream this pathway can absorb, in 0.0..=1.0.
    pub capacity_factor: f64,
}

/// One ranked utilization option for a captured CO2 quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationPathway {
    pub pathway: String,
    pub description: String,
    pub utilizable_co2_tonnes: f64,
    pub efficiency_percent: f64,
    pub economics: String,
    pub capacity_factor: f64,
    pub recommended: bool,
}

/// Revenue valuation for a quantity of stored CO2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonCreditValuation {
    pub stored_tonnes: f64,
    pub price_per_tonne: f64,
    pub total_value: f64,
    /// Assumes the full stored quantity earns credits for a whole year.
    pub annual_revenue_potential: f64,
}

/// Undiscounted return-on-investment estimate for a capture project.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiEstimate {
    pub total_revenue: f64,
    pub net_profit: f64,
    /// Negative when the project loses money; losses are reportable results.
    pub roi_percent: f64,
    pub payback_years: f64,
}

/// Combined capture -> storage -> utilization -> credits report for one
/// industrial source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveAnalysis {
    pub capture: CaptureAnalysis,
    pub storage_options: Vec<StorageSite>,
    pub utilization_options: Vec<UtilizationPathway>,
    pub credits: CarbonCreditValuation,
}
