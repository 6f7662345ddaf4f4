use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Version descriptor the deployed app serves as `version.json`, so clients
/// can report which build they are running.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
}

impl VersionInfo {
    /// The version declared in the crate manifest.
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("failed to write version file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode version file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the version file at `path`, mirroring the manifest version.
///
/// Run as a release step so the deployed artifact always matches the
/// package version. Parent directories are created as needed.
pub fn sync_version_file(path: impl AsRef<Path>) -> Result<(), VersionError> {
    let path = path.as_ref();
    let info = VersionInfo::current();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string(&info)?)?;

    info!(version = %info.version, path = %path.display(), "version file updated");
    Ok(())
}
