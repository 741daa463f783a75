//! stderr tracing subscriber.

use fileman_fs::conf::{C_ENV_LOG_FILTER, C_LOG_LEVEL_DEFAULT};
use tracing_subscriber::EnvFilter;

/// Level implied by `-v`/`-q` when the environment sets no filter.
pub fn derive_log_level(n_verbose: u8, if_quiet: bool) -> &'static str {
    if if_quiet {
        return "error";
    }
    match n_verbose {
        0 => C_LOG_LEVEL_DEFAULT,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `FILEMAN_LOG` wins over the flags.
pub fn init_logging(n_verbose: u8, if_quiet: bool) {
    let filter = EnvFilter::try_from_env(C_ENV_LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(derive_log_level(n_verbose, if_quiet)));
    // A second init (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::derive_log_level;

    #[test]
    fn derive_log_level_from_flags() {
        assert_eq!(derive_log_level(0, false), "warn");
        assert_eq!(derive_log_level(1, false), "info");
        assert_eq!(derive_log_level(2, false), "debug");
        assert_eq!(derive_log_level(9, false), "trace");
        assert_eq!(derive_log_level(3, true), "error");
    }
}
