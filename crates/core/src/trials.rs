//! Reference data records.
//!
//! Trial records and the guideline document are read from static JSON files and passed through to
//! callers verbatim. Nothing in this crate mutates them.

use crate::constants::MAX_TRIAL_SUPPORT;
use crate::{CdsError, CdsResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Guideline document: arbitrary JSON keyed by section name, in file order.
pub type GuidelineData = Map<String, Value>;

/// Trial reference collection as stored, one JSON value per record.
///
/// Kept untyped so the listing surface returns records exactly as written, including fields that
/// [`TrialRecord`] does not model.
pub type TrialData = Vec<Value>;

/// A published trial that supports the pathway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrialRecord {
    pub name: String,
    pub population: String,
    pub intervention: String,
    pub comparator: String,
    pub primary_endpoint: String,
    pub outcome: String,
    #[serde(default)]
    pub abstract_link: Option<String>,
    #[serde(default)]
    pub relevance_general: Option<String>,
    /// Phenotype key mapped to a phenotype-specific relevance note.
    ///
    /// Carried for callers that do their own phenotype inference; the generator does not filter
    /// on it.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub relevance_by_phenotype: Option<Map<String, Value>>,
}

/// Types the leading trial records that are attached to a pathway.
///
/// Only the first [`MAX_TRIAL_SUPPORT`] records are read, so records further down the collection
/// are never validated here.
///
/// # Errors
///
/// Returns `CdsError::Deserialization` if one of the leading records does not match
/// [`TrialRecord`].
pub fn leading_trial_records(trials: &[Value]) -> CdsResult<Vec<TrialRecord>> {
    trials
        .iter()
        .take(MAX_TRIAL_SUPPORT)
        .map(|trial| TrialRecord::deserialize(trial).map_err(CdsError::Deserialization))
        .collect()
}
