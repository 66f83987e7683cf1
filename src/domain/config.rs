// ============================================================================
// Key Sequence Configuration
// Settings for allocating base 36 primary keys
// ============================================================================

use crate::numeric::Base36Number;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`KeySequence`](crate::keygen::KeySequence).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeySequenceConfig {
    /// Name of the sequence (e.g., the table it issues keys for)
    pub name: String,

    /// Number of base 36 digits per key
    pub capacity: usize,

    /// Optional: last key already in use, in wire form (e.g., "QU#")
    /// None means the sequence starts at zero
    #[cfg_attr(feature = "serde", serde(default))]
    pub start: Option<String>,
}

impl KeySequenceConfig {
    /// Create a new configuration with required parameters
    pub fn new(name: String, capacity: usize) -> Self {
        Self {
            name,
            capacity,
            start: None,
        }
    }

    /// Builder method: Resume after an existing key
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Sequence name cannot be empty".to_string());
        }

        if self.capacity == 0 {
            return Err("Capacity must be positive".to_string());
        }

        if let Some(start) = &self.start {
            Base36Number::new(start, self.capacity)
                .map_err(|e| format!("Invalid start key: {}", e))?;
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl KeySequenceConfig {
    /// Object id keys as used by the persistence layer
    /// - 8 digits (36^8 - 1 keys)
    pub fn object_id(name: String) -> Self {
        Self::new(name, 8)
    }
}
