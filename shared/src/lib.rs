//! Shared types and models for the farm analytics engine
//!
//! This crate contains the forecast input records and the cumulative summary
//! output shared between the analytics engine, the dashboard (via WASM),
//! and any other consumer of the JSON wire format.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
