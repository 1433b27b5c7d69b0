//! Top-level comparison run

use std::io::Write;

use tracing::info;

use crate::config::Config;
use crate::version::checker::Checker;
use crate::version::error::CheckError;
use crate::version::remotes::GitHubContents;
use crate::workspace::Workspace;

/// Enumerates packages, compares them, and writes the report to `out`.
///
/// Nothing past the header line is written unless every package succeeds.
pub async fn run<W: Write>(config: &Config, out: &mut W) -> Result<(), CheckError> {
    let workspace = Workspace::from_config(config);
    let remote = GitHubContents::from_config(config)?;

    writeln!(
        out,
        "Checking all SendGrid packages found in: {}",
        workspace.src_dir()
    )
    .map_err(CheckError::Output)?;

    let packages = workspace.packages().await?;
    info!("Comparing {} packages", packages.len());

    let checker = Checker::new(workspace, remote).with_jobs(config.jobs);
    let reports = checker.check_all(packages).await?;

    for report in &reports {
        write!(out, "{report}").map_err(CheckError::Output)?;
    }
    out.flush().map_err(CheckError::Output)
}
