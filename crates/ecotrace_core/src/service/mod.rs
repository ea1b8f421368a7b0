//! Engine services: stateless transformations over injected reference data.
//!
//! # Responsibility
//! - Expose the typed function-call surface of the analytics engine.
//! - Keep every operation synchronous, side-effect-free and bounded by its
//!   input size; callers may invoke services concurrently on disjoint inputs.

pub mod aggregation;
pub mod calculator;
pub mod ccus;
pub mod recommend;
pub mod trend;
