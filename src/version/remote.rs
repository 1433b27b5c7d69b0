//! Remote source trait for fetching a package's published version

#[cfg(test)]
use mockall::automock;

use crate::version::error::CheckError;

/// Trait for fetching the published version of a package
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetches the version declared in the remote copy of `package_name`
    ///
    /// # Returns
    /// * `Ok(String)` - The version token, or the extractor's no-match diagnostic
    /// * `Err(CheckError)` - If the fetch or decode fails
    async fn fetch_version(&self, package_name: &str) -> Result<String, CheckError>;
}
