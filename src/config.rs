use std::fmt;
use std::time::Duration;

use crate::cli::Cli;
use crate::version::error::CheckError;

// =============================================================================
// Defaults
// =============================================================================

/// Environment variable carrying the GitHub personal access token
pub const TOKEN_ENV_VAR: &str = "SG_GITHUB_TOKEN";

/// Root scanned when no path is given on the command line
pub const DEFAULT_SRC_DIR: &str = "src/";

/// Host segment of the local namespace directory (`<root>/github.com/<owner>`)
pub const NAMESPACE_HOST: &str = "github.com";

/// Organization owning every checked package
pub const DEFAULT_OWNER: &str = "sendgrid";

/// File holding the `VERSION = "x.y.z"` declaration in each package
pub const DEFAULT_VERSION_FILE: &str = "version.go";

/// Branch the remote version is read from
pub const DEFAULT_BRANCH: &str = "master";

/// Base URL for the GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Resolved runtime configuration for one comparison run
#[derive(Clone, PartialEq)]
pub struct Config {
    /// Source root, always slash-terminated
    pub src_dir: String,
    pub token: String,
    pub owner: String,
    pub version_file: String,
    pub branch: String,
    pub api_url: String,
    /// Per-request timeout; `None` waits forever
    pub timeout: Option<Duration>,
    /// Maximum packages checked at once; `None` or `0` checks all of them together
    pub jobs: Option<usize>,
}

impl Config {
    /// Builds the configuration from parsed arguments and the process environment.
    pub fn from_cli(cli: &Cli) -> Result<Self, CheckError> {
        Self::from_cli_with_env(cli, |key| std::env::var(key).ok())
    }

    /// Builds the configuration using `lookup` to resolve environment variables.
    pub fn from_cli_with_env<F>(cli: &Cli, lookup: F) -> Result<Self, CheckError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_ENV_VAR)
            .filter(|token| !token.is_empty())
            .ok_or(CheckError::MissingToken { var: TOKEN_ENV_VAR })?;

        Ok(Self {
            src_dir: add_trailing_slash(cli.src_dir()),
            token,
            owner: cli.owner.clone(),
            version_file: cli.file.clone(),
            branch: cli.branch.clone(),
            api_url: cli.api_url.trim_end_matches('/').to_string(),
            timeout: cli.timeout.map(Duration::from_secs),
            jobs: cli.jobs,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("src_dir", &self.src_dir)
            .field("token", &"<redacted>")
            .field("owner", &self.owner)
            .field("version_file", &self.version_file)
            .field("branch", &self.branch)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .field("jobs", &self.jobs)
            .finish()
    }
}

/// Appends `/` to `path` unless it already ends with one.
///
/// An empty path means the current directory.
pub fn add_trailing_slash(path: &str) -> String {
    if path.is_empty() {
        "./".to_string()
    } else if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}
