//! Command line surface: argument parsing, usage text, and fatal error rendering

use std::ffi::OsString;

use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use colored::Colorize;

use crate::config::{
    DEFAULT_API_URL, DEFAULT_BRANCH, DEFAULT_OWNER, DEFAULT_SRC_DIR, DEFAULT_VERSION_FILE,
};
use crate::version::error::CheckError;

/// Long-form usage printed after every fatal error
pub const USAGE: &str = r#"
Example Usage:
	$ export SG_GITHUB_TOKEN="[:token]"
	$ vcheck
	or
	$ SG_GITHUB_TOKEN="[:token]" vcheck

vcheck defaults to look in the current directory for src/. However,
you can explicitly set where vcheck should look. Examples:
	$ cd /path/to/project; vcheck
	$ vcheck /path/to/project/src
	$ vcheck --src=/path/to/project/src

Environment Variable
vcheck uses a Personal GitHub Access Token to make http requests to GitHub.
See https://docs.github.com/en/rest/authentication for access tokens.

You can set the environment variable by exporting it or setting it when calling
vcheck as shown in the example usage.
"#;

#[derive(Debug, Parser)]
#[command(name = "vcheck")]
#[command(
    version,
    about = "Compare local SendGrid package versions with GitHub",
    after_help = USAGE
)]
pub struct Cli {
    /// Source root containing github.com/<owner>/
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Source root; overrides a positional PATH given after it
    #[arg(long = "src", value_name = "PATH")]
    pub src: Option<String>,

    /// GitHub organization owning the packages
    #[arg(long, default_value = DEFAULT_OWNER)]
    pub owner: String,

    /// File holding the version declaration in each package
    #[arg(long, default_value = DEFAULT_VERSION_FILE)]
    pub file: String,

    /// Branch to read the remote version from
    #[arg(long, default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// GitHub API base URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Maximum number of packages checked concurrently (unbounded when omitted)
    #[arg(long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parses the process arguments, accepting the legacy single-dash `-src` form.
    pub fn parse_args() -> Self {
        Self::parse_from_args(std::env::args_os())
    }

    /// Parses `args`, exiting with clap's message on invalid input.
    ///
    /// When both a positional PATH and `--src` are given, whichever comes
    /// first wins.
    pub fn parse_from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let matches = Self::command().get_matches_from(normalize_args(args));
        let mut cli = Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

        if let (Some(path_index), Some(src_index)) =
            (matches.index_of("path"), matches.index_of("src"))
        {
            if path_index < src_index {
                cli.src = None;
            }
        }

        cli
    }

    /// Root directory to scan: `--src`, then the positional path, then the default.
    pub fn src_dir(&self) -> &str {
        self.src
            .as_deref()
            .or(self.path.as_deref())
            .unwrap_or(DEFAULT_SRC_DIR)
    }
}

/// Rewrites `-src` and `-src=<path>` into their `--src` equivalents.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-src") => OsString::from("--src"),
            Some(s) if s.starts_with("-src=") => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}

/// Renders a fatal error as a bold red line followed by the usage block.
pub fn fatal_message(message: &str) -> String {
    format!("\n{}\n{USAGE}", message.red().bold())
}

/// Exit status and console output for a finished run
pub fn outcome(result: &Result<(), CheckError>) -> (u8, Option<String>) {
    match result {
        Ok(()) => (0, None),
        Err(e) => (1, Some(fatal_message(&e.to_string()))),
    }
}
