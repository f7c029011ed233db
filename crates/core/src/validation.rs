//! Boundary checks around the pathway generator.
//!
//! The generator itself cannot fail. These checks run before it (is the request for a supported
//! disease?) and after it (did the reference data yield a usable pathway?).

use crate::constants::SUPPORTED_DISEASE;
use crate::pathway::PathwayResult;
use crate::{CdsError, CdsResult};

/// Validates the disease selector of a pathway request.
///
/// Only an exact match on the supported disease is accepted.
///
/// # Errors
///
/// Returns `CdsError::UnsupportedDisease` for any other value.
pub fn validate_disease(disease: &str) -> CdsResult<()> {
    if disease == SUPPORTED_DISEASE {
        Ok(())
    } else {
        Err(CdsError::UnsupportedDisease(disease.to_owned()))
    }
}

/// Validates a generated pathway before it is returned to a caller.
///
/// A pathway without steps or without supporting trials points at missing reference data rather
/// than a bad request.
///
/// # Errors
///
/// Returns `CdsError::ValidationFailed` if either collection is empty.
pub fn validate_pathway(pathway: &PathwayResult) -> CdsResult<()> {
    if pathway.steps.is_empty() {
        return Err(CdsError::ValidationFailed("pathway has no steps".into()));
    }
    if pathway.trial_support.is_empty() {
        return Err(CdsError::ValidationFailed(
            "pathway has no supporting trials".into(),
        ));
    }
    Ok(())
}
