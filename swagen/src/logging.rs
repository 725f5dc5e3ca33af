//! Diagnostic logging for the command line.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter, e.g. `SWAGEN_LOG=swagen_codegen=debug`.
pub const LOG_ENV: &str = "SWAGEN_LOG";

/// Install a compact stderr subscriber.
///
/// `SWAGEN_LOG` wins when set; otherwise only warnings are shown, or
/// everything down to `debug` with `--verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    // A second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "debug");
    }
}
