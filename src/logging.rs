//! Logging initialization for the binary.
//!
//! Logs are written to stderr so the report on stdout stays clean.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` is honored; `verbosity` raises the crate's own level
/// (0 = WARN, 1 = DEBUG, 2+ = TRACE).
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let filter = match verbosity_level(verbosity) {
        Some(level) => match format!("vcheck={level}").parse() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        },
        None => filter,
    };

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}

fn verbosity_level(verbosity: u8) -> Option<Level> {
    match verbosity {
        0 => None,
        1 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_level_maps_flag_count() {
        assert_eq!(verbosity_level(0), None);
        assert_eq!(verbosity_level(1), Some(Level::DEBUG));
        assert_eq!(verbosity_level(5), Some(Level::TRACE));
    }
}
