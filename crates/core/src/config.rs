//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into core services, so request
//! handling never reads process-wide environment variables.

use crate::constants::DEFAULT_DATA_DIR;
use crate::{CdsError, CdsResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
}

impl CoreConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Directory holding `guidelines.json` and `trials.json`.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Resolve the reference data directory without reading environment variables.
///
/// If `override_dir` is provided it must be an existing directory. Otherwise this looks for
/// `data/` relative to the current working directory and then walks up from
/// `CARGO_MANIFEST_DIR`. When nothing is found the relative default is returned; the loader
/// treats missing files as empty collections.
pub fn resolve_data_dir(override_dir: Option<PathBuf>) -> CdsResult<PathBuf> {
    if let Some(data_dir) = override_dir {
        if data_dir.is_dir() {
            return Ok(data_dir);
        }
        return Err(CdsError::InvalidInput(format!(
            "CURIE_DATA_DIR override is not a directory: {}",
            data_dir.display()
        )));
    }

    let cwd_relative = PathBuf::from(DEFAULT_DATA_DIR);
    if cwd_relative.is_dir() {
        return Ok(cwd_relative);
    }

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    for ancestor in manifest_dir.ancestors() {
        let candidate = ancestor.join(DEFAULT_DATA_DIR);
        if candidate.is_dir() {
            return Ok(candidate);
        }
    }

    tracing::warn!(
        "no {}/ directory found; reference data will be empty",
        DEFAULT_DATA_DIR
    );
    Ok(cwd_relative)
}

/// Parse a data directory override from an optional environment value.
///
/// Empty or whitespace-only values count as unset.
pub fn data_dir_from_env_value(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn override_must_be_a_directory() {
        let dir = TempDir::new().expect("create temp dir");
        let resolved = resolve_data_dir(Some(dir.path().to_path_buf())).expect("resolve");
        assert_eq!(resolved, dir.path());

        let missing = dir.path().join("missing");
        let err = resolve_data_dir(Some(missing)).expect_err("should reject");
        assert!(matches!(err, CdsError::InvalidInput(_)));
    }

    #[test]
    fn finds_shipped_data_dir_without_override() {
        let resolved = resolve_data_dir(None).expect("resolve");
        assert!(resolved.ends_with(DEFAULT_DATA_DIR));
    }

    #[test]
    fn blank_env_value_is_unset() {
        assert_eq!(data_dir_from_env_value(None), None);
        assert_eq!(data_dir_from_env_value(Some("   ".into())), None);
        assert_eq!(
            data_dir_from_env_value(Some(" /srv/curie ".into())),
            Some(PathBuf::from("/srv/curie"))
        );
    }
}
