// ============================================================================
// Key Sequence
// Thread-safe allocator handing out increasing base 36 keys
// ============================================================================

use crate::domain::KeySequenceConfig;
use crate::numeric::{Base36Error, Base36Number, Base36Result};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Issues strictly increasing keys of a fixed capacity.
///
/// The cursor holds the last issued key. Each call to [`next_key`] increments
/// it under a lock, so concurrent callers never receive the same key.
///
/// [`next_key`]: KeySequence::next_key
pub struct KeySequence {
    /// Sequence name, used in log output
    name: String,

    /// Digits per key, fixed by the start key
    capacity: usize,

    /// Last key handed out (or the configured start)
    cursor: Mutex<Base36Number>,

    /// Number of keys issued by this instance
    issued: AtomicU64,
}

impl KeySequence {
    /// Create a sequence starting right after `last`.
    pub fn new(name: String, last: Base36Number) -> Self {
        Self {
            name,
            capacity: last.capacity(),
            cursor: Mutex::new(last),
            issued: AtomicU64::new(0),
        }
    }

    /// Create a sequence from configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if [`KeySequenceConfig::validate`] rejects the
    /// configuration.
    pub fn from_config(config: &KeySequenceConfig) -> Base36Result<Self> {
        config
            .validate()
            .map_err(|reason| Base36Error::InvalidConfig { reason })?;

        let last = match &config.start {
            Some(start) => Base36Number::new(start, config.capacity)?,
            None => Base36Number::from_value(0, config.capacity)?,
        };
        tracing::debug!(
            sequence = %config.name,
            capacity = config.capacity,
            start = %last,
            "key sequence created"
        );
        Ok(Self::new(config.name.clone(), last))
    }

    /// Allocate the next key.
    ///
    /// # Errors
    /// Returns `Overflow` once the key space is exhausted. The cursor is left
    /// on the last valid key, so every later call fails the same way.
    pub fn next_key(&self) -> Base36Result<Base36Number> {
        let mut cursor = self.cursor.lock();
        let next = cursor.increment().inspect_err(|e| {
            tracing::warn!(sequence = %self.name, error = %e, "key sequence exhausted");
        })?;
        *cursor = next.clone();
        drop(cursor);

        self.issued.fetch_add(1, Ordering::AcqRel);
        tracing::trace!(sequence = %self.name, key = %next, "key issued");
        Ok(next)
    }

    /// Last issued key (or the start key if nothing was issued yet).
    pub fn current(&self) -> Base36Number {
        self.cursor.lock().clone()
    }

    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::Acquire)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
