// ============================================================================
// Logging Setup
// Optional tracing subscriber for binaries and demos
// ============================================================================

use tracing::Level;

/// Install a `fmt` subscriber writing events up to `max_level` to stderr.
///
/// # Returns
/// * `true` if the subscriber was installed
/// * `false` if another global subscriber already exists
///
/// # Example
/// ```ignore
/// use base36_types::utils::init_logging;
///
/// init_logging(tracing::Level::DEBUG);
/// ```
#[cfg(feature = "logging")]
pub fn init_logging(max_level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// Install a `fmt` subscriber writing events up to `max_level` to stderr.
///
/// **Note:** This is a no-op stub. Enable the `logging` feature for output.
#[cfg(not(feature = "logging"))]
pub fn init_logging(_max_level: Level) -> bool {
    // No-op when logging feature is disabled
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "logging")]
    #[test]
    fn test_second_init_is_rejected() {
        init_logging(Level::DEBUG);
        assert!(!init_logging(Level::TRACE));
    }

    #[cfg(not(feature = "logging"))]
    #[test]
    fn test_stub_installs_nothing() {
        assert!(!init_logging(Level::DEBUG));
    }
}
