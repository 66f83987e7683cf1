// ============================================================================
// Base36 Errors
// Error types for base 36 construction and digit-wise arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while building or combining base 36 numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Base36Error {
    /// Input contains a symbol outside `[0-9A-Z#]` or padding that is not trailing
    InvalidFormat {
        /// The rejected input
        input: String,
    },
    /// Value needs more digits than the declared capacity
    CapacityExceeded {
        /// Number of digits the value needs
        required: usize,
        /// Declared capacity
        capacity: usize,
    },
    /// Negative integers are not representable
    NegativeValue(i64),
    /// Addition carried past the most significant digit
    Overflow {
        /// Wire form of the left operand
        augend: String,
        /// Wire form of the right operand
        addend: String,
    },
    /// Key sequence configuration rejected by validation
    InvalidConfig {
        /// Validation message
        reason: String,
    },
}

impl fmt::Display for Base36Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base36Error::InvalidFormat { input } => {
                write!(f, "invalid base 36 format: {:?} does not match [0-9A-Z]+#*", input)
            },
            Base36Error::CapacityExceeded { required, capacity } => write!(
                f,
                "capacity exceeded: value needs {} digits but capacity is {}",
                required, capacity
            ),
            Base36Error::NegativeValue(value) => {
                write!(f, "negative value {} is not supported", value)
            },
            Base36Error::Overflow { augend, addend } => write!(
                f,
                "base 36 overflow: {} + {} exceeds the maximum value",
                augend, addend
            ),
            Base36Error::InvalidConfig { reason } => {
                write!(f, "invalid key sequence configuration: {}", reason)
            },
        }
    }
}

impl std::error::Error for Base36Error {}

/// Result type alias for base 36 operations
pub type Base36Result<T> = Result<T, Base36Error>;
