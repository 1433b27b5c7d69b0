//! Local/remote comparison across all packages
//!
//! Every package gets two concurrent lookups, one against its local version
//! file and one against the remote source. All lookups are joined before any
//! report is returned, and reports keep the order packages were given in. The
//! first error aborts the whole run.

use futures::future::try_join_all;
use futures::{StreamExt, TryStreamExt, stream};
use tracing::debug;

use crate::version::error::CheckError;
use crate::version::local::read_local_version;
use crate::version::remote::RemoteSource;
use crate::version::report::VersionReport;
use crate::workspace::Workspace;

/// Compares local and remote versions for a set of packages
pub struct Checker<R: RemoteSource> {
    workspace: Workspace,
    remote: R,
    jobs: Option<usize>,
}

impl<R: RemoteSource> Checker<R> {
    pub fn new(workspace: Workspace, remote: R) -> Self {
        Self {
            workspace,
            remote,
            jobs: None,
        }
    }

    /// Caps how many packages are checked at once. `None` or `Some(0)` checks
    /// all of them together.
    pub fn with_jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs.filter(|jobs| *jobs > 0);
        self
    }

    /// Checks every package and returns one report per package, in input order.
    pub async fn check_all(&self, packages: Vec<String>) -> Result<Vec<VersionReport>, CheckError> {
        debug!("Checking {} packages", packages.len());

        let checks = packages.into_iter().map(|name| self.check_package(name));

        match self.jobs {
            None => try_join_all(checks).await,
            Some(jobs) => stream::iter(checks).buffered(jobs).try_collect().await,
        }
    }

    async fn check_package(&self, name: String) -> Result<VersionReport, CheckError> {
        let path = self.workspace.version_file(&name);

        let (local_version, remote_version) = tokio::try_join!(
            read_local_version(&path),
            self.remote.fetch_version(&name)
        )?;

        debug!(
            "{}: local {}, remote {}",
            name, local_version, remote_version
        );

        Ok(VersionReport {
            name,
            local_version,
            remote_version,
        })
    }
}
