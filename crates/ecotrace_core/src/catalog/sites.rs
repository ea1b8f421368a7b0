//! Industrial capture-efficiency table and CCUS reference datasets.
//!
//! # Responsibility
//! - Hold capture efficiencies per industry type behind a lookup API.
//! - Ship the builtin Indian storage-site dataset and its overview totals.
//! - Ship the builtin CO2 utilization-pathway catalog.
//!
//! # Invariants
//! - Efficiencies are percentages in (0, 100].
//! - Site totals always satisfy the formation-sum identity.
//! - Pathway capacity factors lie in 0.0..=1.0.

use crate::model::ccus::{IndustryProfile, PathwayProfile, StorageSite};
use std::collections::HashMap;

/// Read-only lookup from industry type to capture-efficiency profile.
#[derive(Debug, Clone)]
pub struct IndustryTable {
    industries: HashMap<String, IndustryProfile>,
}

impl IndustryTable {
    pub fn from_profiles(profiles: impl IntoIterator<Item = IndustryProfile>) -> Self {
        let industries = profiles
            .into_iter()
            .map(|profile| (profile.industry_type.clone(), profile))
            .collect();
        Self { industries }
    }

    /// Builds the default industry dataset shipped with the engine.
    pub fn builtin() -> Self {
        Self::from_profiles(builtin_industries())
    }

    pub fn get(&self, industry_type: &str) -> Option<&IndustryProfile> {
        self.industries.get(industry_type)
    }

    /// Profiles sorted by efficiency descending, for display lists.
    pub fn profiles_by_efficiency(&self) -> Vec<IndustryProfile> {
        let mut profiles: Vec<IndustryProfile> = self.industries.values().cloned().collect();
        profiles.sort_by(|a, b| {
            b.capture_efficiency_percent
                .total_cmp(&a.capture_efficiency_percent)
                .then_with(|| a.industry_type.cmp(&b.industry_type))
        });
        profiles
    }
}

fn profile(industry_type: &str, efficiency: f64, description: &str) -> IndustryProfile {
    IndustryProfile {
        industry_type: industry_type.to_string(),
        capture_efficiency_percent: efficiency,
        description: description.to_string(),
    }
}

/// Default capture efficiencies per industry type.
pub fn builtin_industries() -> Vec<IndustryProfile> {
    vec![
        profile("fertilizer", 95.0, "High-purity CO2 stream from ammonia synthesis"),
        profile("power", 90.0, "Post-combustion capture at thermal power plants"),
        profile("steel", 85.0, "Blast-furnace and DRI off-gas capture"),
        profile("refinery", 80.0, "Hydrogen and FCC unit capture at refineries"),
        profile("chemicals", 70.0, "Mixed-stream capture across chemical plants"),
        profile("cement", 65.0, "Calciner and kiln flue-gas capture at cement plants"),
    ]
}

/// Default storage-site dataset: Indian states with per-formation capacity
/// estimates in megatonnes.
pub fn builtin_storage_sites() -> Vec<StorageSite> {
    vec![
        StorageSite::new("Gujarat", 4500.0, 9500.0, 0.0),
        StorageSite::new("Rajasthan", 3200.0, 7800.0, 0.0),
        StorageSite::new("Jharkhand", 0.0, 2000.0, 7000.0),
        StorageSite::new("Maharashtra", 1500.0, 6500.0, 0.0),
        StorageSite::new("Tamil Nadu", 800.0, 5200.0, 1000.0),
        StorageSite::new("Andhra Pradesh", 1200.0, 4800.0, 500.0),
        StorageSite::new("Odisha", 0.0, 3400.0, 2800.0),
        StorageSite::new("West Bengal", 200.0, 2500.0, 3000.0),
    ]
}

fn pathway(
    pathway: &str,
    description: &str,
    efficiency_percent: f64,
    economics: &str,
    capacity_factor: f64,
) -> PathwayProfile {
    PathwayProfile {
        pathway: pathway.to_string(),
        description: description.to_string(),
        efficiency_percent,
        economics: economics.to_string(),
        capacity_factor,
    }
}

/// Default CO2 utilization-pathway catalog.
pub fn builtin_pathways() -> Vec<PathwayProfile> {
    vec![
        pathway(
            "enhanced_oil_recovery",
            "Inject CO2 into mature oil fields to boost recovery",
            90.0,
            "high",
            0.40,
        ),
        pathway(
            "concrete_curing",
            "Mineralize CO2 into precast concrete products",
            95.0,
            "moderate",
            0.15,
        ),
        pathway(
            "urea_production",
            "Feed CO2 into urea fertilizer synthesis",
            85.0,
            "high",
            0.25,
        ),
        pathway(
            "methanol_synthesis",
            "Convert CO2 and green hydrogen into methanol",
            70.0,
            "emerging",
            0.20,
        ),
        pathway(
            "food_and_beverage",
            "Supply food-grade CO2 for carbonation and chilling",
            99.0,
            "moderate",
            0.05,
        ),
        pathway(
            "algae_cultivation",
            "Grow algae biomass on flue-gas CO2",
            60.0,
            "emerging",
            0.10,
        ),
    ]
}

/// Nationwide totals over a site dataset, for overview dashboards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorageOverview {
    pub total_capacity_mt: f64,
    pub regions_covered: usize,
}

pub fn storage_overview(sites: &[StorageSite]) -> StorageOverview {
    StorageOverview {
        total_capacity_mt: sites.iter().map(|site| site.total_capacity_mt).sum(),
        regions_covered: sites.len(),
    }
}
