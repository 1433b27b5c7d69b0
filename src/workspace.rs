//! Local source tree layout and package discovery
//!
//! Packages live under `<root>/github.com/<owner>/<package>/`, one directory each.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::{Config, NAMESPACE_HOST, add_trailing_slash};
use crate::version::error::CheckError;

/// Local checkout layout rooted at a source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    src_dir: String,
    owner: String,
    version_file: String,
}

impl Workspace {
    pub fn new(src_dir: &str, owner: &str, version_file: &str) -> Self {
        Self {
            src_dir: add_trailing_slash(src_dir),
            owner: owner.to_string(),
            version_file: version_file.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.src_dir, &config.owner, &config.version_file)
    }

    /// Slash-terminated source root
    pub fn src_dir(&self) -> &str {
        &self.src_dir
    }

    /// Directory whose immediate children are the packages
    pub fn namespace_dir(&self) -> PathBuf {
        PathBuf::from(format!("{}{}/{}", self.src_dir, NAMESPACE_HOST, self.owner))
    }

    /// Path of the version declaration file for `package`
    pub fn version_file(&self, package: &str) -> PathBuf {
        self.namespace_dir().join(package).join(&self.version_file)
    }

    /// Lists the package directories in directory-listing order.
    ///
    /// Regular files, symlinks, and other non-directory entries are skipped.
    pub async fn packages(&self) -> Result<Vec<String>, CheckError> {
        let dir = self.namespace_dir();
        let read_dir_error = |source| CheckError::ReadDir {
            path: dir.clone(),
            source,
        };

        let mut entries = tokio::fs::read_dir(&dir).await.map_err(read_dir_error)?;
        let mut packages = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(read_dir_error)? {
            let file_type = entry.file_type().await.map_err(read_dir_error)?;
            if !file_type.is_dir() {
                debug!("Skipping non-directory entry {:?}", entry.path());
                continue;
            }
            packages.push(entry.file_name().to_string_lossy().into_owned());
        }

        info!("Found {} packages in {}", packages.len(), dir.display());
        Ok(packages)
    }
}
