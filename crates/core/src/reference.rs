//! Reference data sources.
//!
//! The pathway generator reads two read-only collections: the guideline document and the trial
//! records. They are provided through [`ReferenceSource`] so the service can either read the JSON
//! files on each request ([`JsonFileSource`]) or hold a snapshot in memory ([`StaticSource`]).

use crate::constants::{GUIDELINES_FILENAME, TRIALS_FILENAME};
use crate::trials::{GuidelineData, TrialData};
use crate::{CdsError, CdsResult};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read access to the guideline document and trial records.
pub trait ReferenceSource: Send + Sync {
    /// Returns the guideline document, or an empty mapping if none is available.
    fn load_guidelines(&self) -> CdsResult<GuidelineData>;

    /// Returns all trial records in reference order, or an empty list if none are available.
    ///
    /// Records are returned as stored; typing them is left to the caller.
    fn load_trials(&self) -> CdsResult<TrialData>;
}

/// Reads `guidelines.json` and `trials.json` from a data directory.
///
/// A missing file is treated as an empty collection. A file that exists but cannot be read or
/// parsed is an error.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    data_dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn guidelines_path(&self) -> PathBuf {
        self.data_dir.join(GUIDELINES_FILENAME)
    }

    pub fn trials_path(&self) -> PathBuf {
        self.data_dir.join(TRIALS_FILENAME)
    }
}

impl ReferenceSource for JsonFileSource {
    fn load_guidelines(&self) -> CdsResult<GuidelineData> {
        Ok(read_json_or_default::<GuidelineData>(&self.guidelines_path())?.unwrap_or_default())
    }

    fn load_trials(&self) -> CdsResult<TrialData> {
        Ok(read_json_or_default::<TrialData>(&self.trials_path())?.unwrap_or_default())
    }
}

/// Reads and parses a JSON file, returning `None` if the file does not exist.
fn read_json_or_default<T: DeserializeOwned>(path: &Path) -> CdsResult<Option<T>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("reference data file not found: {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(CdsError::FileRead(e)),
    };

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(CdsError::Deserialization)
}

/// In-memory reference data.
///
/// Useful for caching a [`JsonFileSource`] for the lifetime of a process.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    guidelines: GuidelineData,
    trials: TrialData,
}

impl StaticSource {
    pub fn new(guidelines: GuidelineData, trials: TrialData) -> Self {
        Self { guidelines, trials }
    }

    /// Loads both collections from `source` once.
    pub fn snapshot(source: &dyn ReferenceSource) -> CdsResult<Self> {
        Ok(Self {
            guidelines: source.load_guidelines()?,
            trials: source.load_trials()?,
        })
    }
}

impl ReferenceSource for StaticSource {
    fn load_guidelines(&self) -> CdsResult<GuidelineData> {
        Ok(self.guidelines.clone())
    }

    fn load_trials(&self) -> CdsResult<TrialData> {
        Ok(self.trials.clone())
    }
}
