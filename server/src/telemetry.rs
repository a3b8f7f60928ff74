//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::RunMode;

/// Install the global subscriber for `mode`.
///
/// Test mode filters everything out. Otherwise `RUST_LOG` applies, defaulting
/// to `info`; production writes JSON lines. Safe to call more than once.
pub fn init(mode: RunMode) {
    let filter = match mode {
        RunMode::Test => EnvFilter::new("off"),
        _ => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let installed = match mode {
        RunMode::Production => builder.json().try_init(),
        _ => builder.try_init(),
    };
    // Fails only when a global subscriber is already set; that one stays in charge.
    if let Err(err) = installed {
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_keeps_the_first_subscriber() {
        init(RunMode::Test);
        init(RunMode::Development);
        assert!(!tracing::enabled!(tracing::Level::ERROR));
    }
}
