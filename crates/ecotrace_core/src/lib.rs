//! Carbon and project-economics analytics engine.
//! This crate is the single source of truth for emissions and CCUS math.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;

pub use catalog::actions::builtin_actions;
pub use catalog::factors::{builtin_factors, FactorTable};
pub use catalog::sites::{
    builtin_industries, builtin_pathways, builtin_storage_sites, storage_overview, IndustryTable,
    StorageOverview,
};
pub use config::{round_display, EngineConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::{
    ActivityComputation, ActivityRecord, Category, EmissionFactor, FactorValidationError, RecordId,
};
pub use model::ccus::{
    CaptureAnalysis, CarbonCreditValuation, ComprehensiveAnalysis, IndustryProfile,
    PathwayProfile, RoiEstimate, StorageSite, UtilizationPathway,
};
pub use model::report::{
    BenchmarkComparison, BenchmarkStatus, CategorySummary, DailyEmission, Difficulty,
    PeriodSummary, Recommendation, TimeWindow, TopActivity, TrendDirection, TrendResult,
    MS_PER_DAY,
};
pub use service::aggregation::aggregate;
pub use service::calculator::{CalcError, CalcResult, EmissionCalculator};
pub use service::ccus::{
    estimate_roi, rank_storage_sites, utilization_pathways, value_credits, CaptureSimulator,
    CcusError, CcusResult,
};
pub use service::recommend::{recommend, recommend_with};
pub use service::trend::{benchmark, percentile_rank, trend, BenchmarkError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
