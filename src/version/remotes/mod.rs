//! Remote source implementations

pub mod github;

pub use github::GitHubContents;
