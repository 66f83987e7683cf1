// ============================================================================
// Base36 Types Library
// Fixed-width base 36 keys and small value objects for persistence layers
// ============================================================================

//! # Base36 Types
//!
//! Fixed-width base 36 numbers used as database primary keys, plus the value
//! objects usually stored next to them.
//!
//! ## Features
//!
//! - **Base36Number**: immutable fixed-capacity unsigned integer, alphabet
//!   `0-9A-Z`, `#` padding sentinel
//! - **Reversed layout**: digits are stored and written least significant first
//! - **Checked arithmetic**: addition overflows with an error, never wraps
//! - **KeySequence**: thread-safe allocator for increasing keys
//! - **Value objects**: `Period`, `Gender`, `EncryptedString`
//!
//! ## Example
//!
//! ```rust
//! use base36_types::prelude::*;
//!
//! let key = Base36Number::from_value(2589212, 6).unwrap();
//! assert_eq!(key.to_string(), "KUHJ1#");
//!
//! // Capacity does not take part in ordering or equality
//! let wide = Base36Number::new("KUHJ1", 9).unwrap();
//! assert_eq!(key, wide);
//!
//! // Allocate keys for a table
//! let config = KeySequenceConfig::new("orders".to_string(), 6).with_start("KUHJ1#");
//! let sequence = KeySequence::from_config(&config).unwrap();
//! assert_eq!(sequence.next_key().unwrap().to_string(), "LUHJ1#");
//! ```

pub mod domain;
pub mod keygen;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        DateStringRepresentation, EncryptedString, Gender, KeySequenceConfig, Period, PeriodError,
    };
    pub use crate::keygen::KeySequence;
    pub use crate::numeric::{Base36Error, Base36Number, Base36Result, Digit};
}
