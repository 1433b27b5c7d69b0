//! GitHub contents API remote source

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{Config, DEFAULT_BRANCH, DEFAULT_VERSION_FILE};
use crate::version::error::CheckError;
use crate::version::extractor::extract_version;
use crate::version::remote::RemoteSource;

/// Response from the GitHub contents API (`GET /repos/{owner}/{repo}/contents/{path}`)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContentEnvelope {
    pub name: String,
    pub path: String,
    pub sha: String,
    pub size: u64,
    pub url: String,
    pub html_url: String,
    pub git_url: String,
    pub download_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    /// Base64 file body, wrapped with newlines
    pub content: String,
    pub encoding: String,
    #[serde(rename = "_links")]
    pub links: ContentLinks,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContentLinks {
    #[serde(rename = "self")]
    pub self_url: String,
    pub git: String,
    pub html: String,
}

/// Remote source reading a version file through the GitHub contents API
pub struct GitHubContents {
    client: reqwest::Client,
    base_url: String,
    owner: String,
    version_file: String,
    branch: String,
    token: String,
}

impl GitHubContents {
    /// Creates a source for `owner`'s repositories, reading the default
    /// version file from the default branch.
    pub fn new(base_url: &str, owner: &str, token: &str) -> Result<Self, CheckError> {
        Self::build(base_url, owner, token, None)
    }

    pub fn from_config(config: &Config) -> Result<Self, CheckError> {
        let mut source = Self::build(&config.api_url, &config.owner, &config.token, config.timeout)?;
        source.version_file = config.version_file.clone();
        source.branch = config.branch.clone();
        Ok(source)
    }

    fn build(
        base_url: &str,
        owner: &str,
        token: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, CheckError> {
        let mut builder = reqwest::Client::builder().user_agent("vcheck");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            version_file: DEFAULT_VERSION_FILE.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            token: token.to_string(),
        })
    }

    /// Contents API URL of the version file in `package_name`
    pub fn contents_url(&self, package_name: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            self.base_url, self.owner, package_name, self.version_file, self.branch
        )
    }
}

#[async_trait::async_trait]
impl RemoteSource for GitHubContents {
    async fn fetch_version(&self, package_name: &str) -> Result<String, CheckError> {
        let url = self.contents_url(package_name);
        debug!("Fetching remote version from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CheckError::NotFound { url });
        }

        // Other failures still carry a JSON body; without `content` it
        // decodes to nothing and surfaces as the extractor's diagnostic.
        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
        }

        let body = response.bytes().await?;
        let envelope: ContentEnvelope = serde_json::from_slice(&body).unwrap_or_else(|e| {
            warn!("Failed to parse GitHub contents response for {}: {}", url, e);
            ContentEnvelope::default()
        });

        let decoded = decode_content(&envelope.content)?;

        Ok(extract_version(&decoded))
    }
}

/// Decodes a contents API payload, ignoring the line breaks GitHub inserts.
pub fn decode_content(content: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let joined: String = content
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect();
    STANDARD.decode(joined)
}
