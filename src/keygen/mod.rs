// ============================================================================
// Key Generation Module
// Allocation of base 36 primary keys
// ============================================================================

pub mod sequence;

pub use sequence::KeySequence;
