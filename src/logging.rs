//! Diagnostic logging setup.
//!
//! Logs go to stderr so rendered plans on stdout stay clean. `RUST_LOG`
//! overrides the level given on the command line.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Logging is diagnostic only, so a failed install (for example a subscriber
/// that is already set) is reported on stderr and the program carries on.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("meal_plan_rs={}", level)));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Logging disabled: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_does_not_panic() {
        init_logging("debug");
        init_logging("warn");
        tracing::debug!("still running after a repeated init");
    }
}
