//! Reference datasets injected into the engine services.
//!
//! # Responsibility
//! - Provide validated lookup tables and builtin datasets as explicit values.
//! - Keep the engine free of hidden global reference state; callers may pass
//!   alternate datasets without touching engine code.

pub mod actions;
pub mod factors;
pub mod sites;
