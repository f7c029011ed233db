//! Constants used throughout the Curie core crate.
//!
//! This module holds the fixed strings that make up the pathway template and the reference data
//! file layout, so that every surface reports the same values.

/// The only disease selector accepted by the pathway generator.
pub const SUPPORTED_DISEASE: &str = "HFpEF";

/// Guideline editions the pathway template is built from.
pub const GUIDELINE_VERSION: &str = "ACC/AHA/HFSA 2022, ESC 2021";

/// Date stamp reported on every pathway and on the metadata record.
pub const LAST_UPDATED: &str = "2024-01-15";

/// Guideline sources cited on every generated pathway.
pub const GUIDELINE_SOURCES: [&str; 2] = [
    "ACC/AHA/HFSA Heart Failure Guideline 2022",
    "ESC Heart Failure Guidelines 2021",
];

/// Mechanistic rationale attached to every generated pathway.
pub const MECHANISTIC_RATIONALE: &str = "HFpEF management focuses on three pillars: (1) SGLT2 inhibitors as foundational therapy with proven CV and renal benefits,
    (2) Neurohormonal modulation with ARNI or ACEi/ARB to address remodeling, and (3) Comorbidity optimization including
    blood pressure control, rate/rhythm management in AFib, and volume optimization. Patient-specific factors modify the
    sequence and intensity of these interventions.";

/// Maximum number of trial records attached to a pathway.
pub const MAX_TRIAL_SUPPORT: usize = 4;

/// Default directory for reference data when no explicit directory is configured.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Filename for the guidelines reference document.
pub const GUIDELINES_FILENAME: &str = "guidelines.json";

/// Filename for the trials reference document.
pub const TRIALS_FILENAME: &str = "trials.json";
