//! Engine configuration and display rounding.
//!
//! # Responsibility
//! - Hold tunable thresholds injected into engine services at construction.
//! - Centralize display rounding so it happens once, at the output boundary.
//!
//! # Invariants
//! - Internal sums and averages are never rounded mid-calculation.
//! - The same config value drives every service built from it.

use serde::{Deserialize, Serialize};

/// Tunable parameters shared by the analytics services.
///
/// Supplied explicitly by the caller; the engine reads no hidden global state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Percent-change magnitude below which a trend counts as flat.
    pub trend_epsilon_percent: f64,
    /// Decimal places applied to values handed back for display.
    pub display_decimals: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trend_epsilon_percent: 1.0,
            display_decimals: 2,
        }
    }
}

/// Rounds `value` to `decimals` places for display-layer stability.
///
/// Applied only when a result struct is assembled, never to running totals,
/// so aggregation does not compound rounding error.
pub fn round_display(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
