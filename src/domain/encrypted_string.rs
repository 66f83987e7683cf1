// ============================================================================
// Encrypted String
// Opaque holder for an already encrypted value
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wraps ciphertext so it cannot be confused with plain strings.
///
/// The value is carried as-is; encryption happens elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EncryptedString(Option<String>);

impl EncryptedString {
    /// Holder without a value.
    pub const EMPTY: Self = Self(None);

    pub fn new(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Option<String>> for EncryptedString {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

impl fmt::Display for EncryptedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value().unwrap_or_default())
    }
}
