//! Tracing subscriber setup for the binary
//!
//! Logs go to stderr so stdout stays clean for reports and JSONL.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_VAR: &str = "LUAHINT_LOG";

/// Default filter directive when `LUAHINT_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "luahint=debug" } else { "warn" }
}

/// Install the global subscriber
///
/// `LUAHINT_LOG` wins over the verbosity flag. Calling this twice is harmless;
/// the second install is ignored.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "luahint=debug");
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(false);
        init_logging(true);
    }
}
