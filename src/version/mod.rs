//! Deployment version artifact.

mod version;

pub use version::{sync_version_file, VersionError, VersionInfo};
