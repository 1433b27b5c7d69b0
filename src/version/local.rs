//! Local version lookup

use std::path::Path;

use tracing::debug;

use crate::version::error::CheckError;
use crate::version::extractor::extract_version;

/// Reads the file at `path` and extracts its version token.
pub async fn read_local_version(path: &Path) -> Result<String, CheckError> {
    debug!("Reading local version from {}", path.display());

    let contents = tokio::fs::read(path)
        .await
        .map_err(|source| CheckError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(extract_version(&contents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::extractor::no_match_message;
    use tempfile::TempDir;

    #[tokio::test]
    async fn read_local_version_extracts_declared_version() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("version.go");
        std::fs::write(&path, "package sendgrid\n\nconst VERSION = \"3.6.1\"\n").unwrap();

        let version = read_local_version(&path).await.unwrap();

        assert_eq!(version, "3.6.1");
    }

    #[tokio::test]
    async fn read_local_version_returns_diagnostic_for_file_without_version() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("version.go");
        std::fs::write(&path, "package sendgrid\n").unwrap();

        let version = read_local_version(&path).await.unwrap();

        assert_eq!(version, no_match_message());
    }

    #[tokio::test]
    async fn read_local_version_fails_for_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.go");

        let result = read_local_version(&path).await;

        assert!(matches!(
            result,
            Err(CheckError::ReadFile { path: ref p, .. }) if *p == path
        ));
    }
}
