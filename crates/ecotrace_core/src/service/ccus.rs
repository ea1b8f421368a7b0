//! Capture and storage project-economics service.
//!
//! # Responsibility
//! - Simulate industrial CO2 capture against the injected efficiency table.
//! - Rank storage sites by capacity with an optional preferred-region boost.
//! - Rank CO2 utilization pathways by the tonnage each can absorb.
//! - Value carbon credits and estimate undiscounted project ROI.
//!
//! # Invariants
//! - Exactly one ranked site (and one ranked pathway) carries
//!   `recommended = true` when the input is non-empty.
//! - Economic math is strict: malformed single inputs fail loudly; negative
//!   ROI is a valid, reportable result and is never clamped.
//! - Chained analyses pass unrounded intermediates downstream; rounding
//!   happens only on the fields of the returned structs.

use crate::catalog::sites::IndustryTable;
use crate::config::{round_display, EngineConfig};
use crate::model::ccus::{
    CaptureAnalysis, CarbonCreditValuation, ComprehensiveAnalysis, PathwayProfile, RoiEstimate,
    StorageSite, UtilizationPathway,
};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Proximity scores assigned during ranking by preferred-region match.
const PROXIMITY_PREFERRED: f64 = 1.0;
const PROXIMITY_DEFAULT: f64 = 0.5;

pub type CcusResult<T> = Result<T, CcusError>;

/// Economics failures; each variant carries the offending input.
#[derive(Debug, Clone, PartialEq)]
pub enum CcusError {
    /// The industry type is absent from the efficiency table.
    UnsupportedIndustry(String),
    /// Annual emissions must be finite and > 0.
    InvalidEmissions(f64),
    /// A scalar economic parameter was non-positive or non-finite.
    InvalidInput { name: &'static str, value: f64 },
    /// Payback is undefined when the named divisor is zero.
    DivisionByZero { name: &'static str },
}

impl Display for CcusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedIndustry(industry) => {
                write!(f, "unsupported industry type `{industry}`")
            }
            Self::InvalidEmissions(value) => {
                write!(f, "annual emissions must be finite and > 0, got {value}")
            }
            Self::InvalidInput { name, value } => {
                write!(f, "{name} must be finite and > 0, got {value}")
            }
            Self::DivisionByZero { name } => {
                write!(f, "{name} must be non-zero to compute payback")
            }
        }
    }
}

impl Error for CcusError {}

/// Capture simulator over an injected industry-efficiency table.
pub struct CaptureSimulator {
    industries: IndustryTable,
    config: EngineConfig,
}

impl CaptureSimulator {
    pub fn new(industries: IndustryTable, config: EngineConfig) -> Self {
        Self { industries, config }
    }

    /// Simulates capture for one industrial emitter.
    ///
    /// # Contract
    /// - Fails with `CcusError::UnsupportedIndustry` for unknown industries.
    /// - Fails with `CcusError::InvalidEmissions` when
    ///   `annual_emissions_tonnes <= 0` or is non-finite.
    /// - `capturable = annual * efficiency / 100`; the remainder stays
    ///   uncaptured.
    pub fn simulate(
        &self,
        industry_type: &str,
        annual_emissions_tonnes: f64,
    ) -> CcusResult<CaptureAnalysis> {
        if !annual_emissions_tonnes.is_finite() || annual_emissions_tonnes <= 0.0 {
            return Err(CcusError::InvalidEmissions(annual_emissions_tonnes));
        }
        let profile = self
            .industries
            .get(industry_type)
            .ok_or_else(|| CcusError::UnsupportedIndustry(industry_type.to_string()))?;

        let efficiency = profile.capture_efficiency_percent;
        let capturable = annual_emissions_tonnes * efficiency / 100.0;
        let decimals = self.config.display_decimals;

        debug!(
            "event=capture_simulated module=ccus status=ok industry={} annual_tonnes={}",
            industry_type, annual_emissions_tonnes
        );

        Ok(CaptureAnalysis {
            industry_type: profile.industry_type.clone(),
            annual_emissions_tonnes,
            capture_efficiency_percent: efficiency,
            capturable_tonnes: round_display(capturable, decimals),
            remaining_tonnes: round_display(annual_emissions_tonnes - capturable, decimals),
            reduction_percent: efficiency,
        })
    }

    /// Chains capture, storage ranking, utilization ranking and credit
    /// valuation into one report.
    ///
    /// The exact (unrounded) capturable tonnage feeds every downstream step;
    /// only the returned structs carry display-rounded figures.
    pub fn comprehensive_analysis(
        &self,
        industry_type: &str,
        annual_emissions_tonnes: f64,
        sites: &[StorageSite],
        pathways: &[PathwayProfile],
        preferred_region: Option<&str>,
        price_per_tonne: f64,
    ) -> CcusResult<ComprehensiveAnalysis> {
        let capture = self.simulate(industry_type, annual_emissions_tonnes)?;
        let capturable_exact =
            annual_emissions_tonnes * capture.capture_efficiency_percent / 100.0;

        let storage_options = rank_storage_sites(capturable_exact, sites, preferred_region)?;
        let utilization_options =
            utilization_pathways(capturable_exact, pathways, &self.config)?;
        let credits = value_credits(capturable_exact, price_per_tonne, &self.config)?;

        Ok(ComprehensiveAnalysis {
            capture,
            storage_options,
            utilization_options,
            credits,
        })
    }
}

/// Ranks storage sites for a captured CO2 quantity.
///
/// # Contract
/// - Fails with `CcusError::InvalidInput` when `co2_tonnes <= 0`.
/// - Sites in `preferred_region` form a higher rank tier; within a tier the
///   order is total capacity descending, then region name ascending.
/// - Exactly the single highest-ranked site is flagged `recommended`; an
///   empty input yields an empty result.
pub fn rank_storage_sites(
    co2_tonnes: f64,
    sites: &[StorageSite],
    preferred_region: Option<&str>,
) -> CcusResult<Vec<StorageSite>> {
    if !co2_tonnes.is_finite() || co2_tonnes <= 0.0 {
        return Err(CcusError::InvalidInput {
            name: "co2_tonnes",
            value: co2_tonnes,
        });
    }

    let mut ranked: Vec<StorageSite> = sites
        .iter()
        .cloned()
        .map(|mut site| {
            let preferred = preferred_region
                .map(|region| site.region == region)
                .unwrap_or(false);
            site.proximity_score = if preferred {
                PROXIMITY_PREFERRED
            } else {
                PROXIMITY_DEFAULT
            };
            site.recommended = false;
            site
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.proximity_score
            .total_cmp(&a.proximity_score)
            .then_with(|| b.total_capacity_mt.total_cmp(&a.total_capacity_mt))
            .then_with(|| a.region.cmp(&b.region))
    });

    if let Some(best) = ranked.first_mut() {
        best.recommended = true;
    }

    Ok(ranked)
}

/// Ranks CO2 utilization pathways for a captured quantity.
///
/// # Contract
/// - Fails with `CcusError::InvalidInput` when `co2_tonnes <= 0`.
/// - `utilizable_co2_tonnes = co2 * capacity_factor * efficiency / 100`,
///   rounded on the returned struct only.
/// - Order is utilizable tonnage descending, then pathway name ascending;
///   exactly the top pathway is flagged `recommended` when the catalog is
///   non-empty.
pub fn utilization_pathways(
    co2_tonnes: f64,
    pathways: &[PathwayProfile],
    config: &EngineConfig,
) -> CcusResult<Vec<UtilizationPathway>> {
    if !co2_tonnes.is_finite() || co2_tonnes <= 0.0 {
        return Err(CcusError::InvalidInput {
            name: "co2_tonnes",
            value: co2_tonnes,
        });
    }

    let decimals = config.display_decimals;
    let mut ranked: Vec<UtilizationPathway> = pathways
        .iter()
        .map(|profile| {
            let utilizable =
                co2_tonnes * profile.capacity_factor * profile.efficiency_percent / 100.0;
            UtilizationPathway {
                pathway: profile.pathway.clone(),
                description: profile.description.clone(),
                utilizable_co2_tonnes: round_display(utilizable, decimals),
                efficiency_percent: profile.efficiency_percent,
                economics: profile.economics.clone(),
                capacity_factor: profile.capacity_factor,
                recommended: false,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.utilizable_co2_tonnes
            .total_cmp(&a.utilizable_co2_tonnes)
            .then_with(|| a.pathway.cmp(&b.pathway))
    });

    if let Some(best) = ranked.first_mut() {
        best.recommended = true;
    }

    Ok(ranked)
}

/// Values carbon credits for a stored CO2 quantity.
///
/// # Contract
/// - Fails with `CcusError::InvalidInput` on non-positive arguments.
/// - `annual_revenue_potential` assumes the full quantity stays stored for a
///   whole year, so it equals the total value.
pub fn value_credits(
    stored_tonnes: f64,
    price_per_tonne: f64,
    config: &EngineConfig,
) -> CcusResult<CarbonCreditValuation> {
    if !stored_tonnes.is_finite() || stored_tonnes <= 0.0 {
        return Err(CcusError::InvalidInput {
            name: "stored_tonnes",
            value: stored_tonnes,
        });
    }
    if !price_per_tonne.is_finite() || price_per_tonne <= 0.0 {
        return Err(CcusError::InvalidInput {
            name: "price_per_tonne",
            value: price_per_tonne,
        });
    }

    let total_value = stored_tonnes * price_per_tonne;
    let decimals = config.display_decimals;

    Ok(CarbonCreditValuation {
        stored_tonnes,
        price_per_tonne,
        total_value: round_display(total_value, decimals),
        annual_revenue_potential: round_display(total_value, decimals),
    })
}

/// Estimates undiscounted project ROI over `years`.
///
/// # Contract
/// - Fails with `CcusError::DivisionByZero` when `investment == 0` (ROI) or
///   `annual_revenue == 0` (payback).
/// - `roi_percent` may be negative; a loss is a reportable result.
pub fn estimate_roi(
    investment: f64,
    annual_revenue: f64,
    years: u32,
    config: &EngineConfig,
) -> CcusResult<RoiEstimate> {
    if investment == 0.0 {
        return Err(CcusError::DivisionByZero { name: "investment" });
    }
    if annual_revenue == 0.0 {
        return Err(CcusError::DivisionByZero {
            name: "annual_revenue",
        });
    }

    let total_revenue = annual_revenue * f64::from(years);
    let net_profit = total_revenue - investment;
    let decimals = config.display_decimals;

    Ok(RoiEstimate {
        total_revenue: round_display(total_revenue, decimals),
        net_profit: round_display(net_profit, decimals),
        roi_percent: round_display(net_profit / investment * 100.0, decimals),
        payback_years: round_display(investment / annual_revenue, decimals),
    })
}
