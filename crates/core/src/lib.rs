//! # Curie Core
//!
//! Core decision logic for the Curie clinical decision support service.
//!
//! This crate contains the HFpEF pathway generator and everything it reads:
//! - The fixed three-step therapy template and its modifier-driven annotation rules
//! - Reference data (guidelines and trial records) loaded from static JSON files
//! - Boundary validation of requests and generated pathways
//!
//! **No API concerns**: HTTP servers, CORS and OpenAPI routing belong in `api-rest`; shared wire
//! types belong in `api-shared`.

pub mod config;
pub mod constants;
pub mod error;
pub mod evidence;
pub mod modifiers;
pub mod pathway;
pub mod reference;
pub mod service;
pub mod trials;
pub mod validation;

pub use config::CoreConfig;
pub use constants::{DEFAULT_DATA_DIR, SUPPORTED_DISEASE};
pub use error::{CdsError, CdsResult};
pub use evidence::{EvidenceConfidence, EvidenceLevel, RecommendationClass};
pub use modifiers::{KeyModifiers, ModifierVector};
pub use pathway::{generate, PathwayResult, TherapyStep};
pub use reference::{JsonFileSource, ReferenceSource, StaticSource};
pub use service::{GuidelineMetadata, PathwayRequest, PathwayService};
pub use trials::{leading_trial_records, GuidelineData, TrialData, TrialRecord};
