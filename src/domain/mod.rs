// ============================================================================
// Domain Models Module
// Value objects stored next to base 36 keys
// ============================================================================

pub mod config;
pub mod encrypted_string;
pub mod gender;
pub mod period;

pub use config::KeySequenceConfig;
pub use encrypted_string::EncryptedString;
pub use gender::Gender;
pub use period::{DateStringRepresentation, Period, PeriodError};
