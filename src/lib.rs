//! vcheck compares the version declared in each locally checked-out package
//! against the version published on its GitHub default branch.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod version;
pub mod workspace;
