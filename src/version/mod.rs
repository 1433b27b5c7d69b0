//! Version lookup and comparison
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │    Local    │     │   Remote    │
//! │ (file read) │     │ (HTTP GET)  │
//! └──────┬──────┘     └──────┬──────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────────────────────────┐
//! │           Extractor             │
//! └────────────────┬────────────────┘
//!                  ▼
//!           ┌─────────────┐
//!           │   Checker   │──▶ reports
//!           │   (join)    │
//!           └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Concurrent local/remote lookup joined into ordered reports
//! - [`error`]: Fatal error taxonomy
//! - [`extractor`]: `VERSION ... x.y.z` token extraction
//! - [`local`]: Reads a version from a local file
//! - [`remote`]: Trait for fetching a published version
//! - [`remotes`]: Concrete remote sources (GitHub contents API)
//! - [`report`]: Per-package report record

pub mod checker;
pub mod error;
pub mod extractor;
pub mod local;
pub mod remote;
pub mod remotes;
pub mod report;
