// ============================================================================
// Utilities Module
// Helper functions shared by binaries, demos and tests
// ============================================================================

mod logging;

pub use logging::init_logging;
