//! # API Shared
//!
//! Shared wire types and services for Curie APIs.
//!
//! Contains:
//! - Response types for the service-level endpoints (`wire` module)
//! - Shared services like `HealthService`
//!
//! Domain payloads (pathway requests and results, trial records, guideline metadata) are defined
//! in `curie-core`.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
