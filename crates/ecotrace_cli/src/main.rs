//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ecotrace_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use ecotrace_core::{
    CaptureSimulator, EmissionCalculator, EngineConfig, FactorTable, IndustryTable,
};

fn main() {
    let config = EngineConfig::default();
    println!("ecotrace_core version={}", ecotrace_core::core_version());

    let calculator = EmissionCalculator::new(FactorTable::builtin(), config);
    match calculator.calculate("bus", 10.0) {
        Ok(result) => println!(
            "sample_calc activity=bus quantity=10km emissions_kg={}",
            result.emissions_kg_co2e
        ),
        Err(err) => println!("sample_calc failed: {err}"),
    }

    let simulator = CaptureSimulator::new(IndustryTable::builtin(), config);
    match simulator.simulate("cement", 100_000.0) {
        Ok(analysis) => println!(
            "sample_capture industry=cement capturable_t={} remaining_t={}",
            analysis.capturable_tonnes, analysis.remaining_tonnes
        ),
        Err(err) => println!("sample_capture failed: {err}"),
    }
}
