//! Domain model for the carbon analytics engine.
//!
//! # Responsibility
//! - Define canonical data structures shared by all engine services.
//! - Keep derived entities identity-free; only `ActivityRecord` has an id.
//!
//! # Invariants
//! - Timestamps are Unix epoch milliseconds, UTC.
//! - All shapes serialize with snake_case field and variant names.

pub mod activity;
pub mod ccus;
pub mod report;
