// ============================================================================
// Base36 Number
// Fixed-width base 36 integer with reversed digit layout and padding sentinel
// ============================================================================

use super::digit::{Digit, RADIX};
use super::errors::{Base36Error, Base36Result};
use arrayvec::ArrayVec;
use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Digits held inline before the buffer spills to the heap.
const INLINE_DIGITS: usize = 16;

/// Digits needed for the largest `u64` (36^12 < u64::MAX < 36^13).
const MAX_INT_DIGITS: usize = 13;

type DigitBuf = SmallVec<[Digit; INLINE_DIGITS]>;

/// Non-negative integer of fixed width, encoded in base 36.
///
/// Digits are stored least significant first: index 0 carries weight 36^0 and
/// the last index the highest weight. The string form follows the storage
/// order, so it reads reversed compared to ordinary numerals. Keys already
/// persisted in this form depend on it; never flip it for display.
///
/// ```text
/// "QU#"  = 26 * 36^0 + 30 * 36^1 = 1106
/// "123#" > "3210###" because the third digit has the highest weight
/// ```
///
/// Unused high-order positions hold the `#` sentinel. The capacity (number of
/// digits) is fixed at construction; every arithmetic operation returns a new
/// value and fails with [`Base36Error::Overflow`] instead of wrapping.
///
/// # Example
/// ```
/// use base36_types::numeric::Base36Number;
///
/// let id = Base36Number::from_value(1106, 3)?;
/// assert_eq!(id.to_string(), "QU#");
///
/// let next = id.increment()?;
/// assert_eq!(next.to_i64(), 1107);
/// # Ok::<(), base36_types::numeric::Base36Error>(())
/// ```
#[derive(Clone)]
pub struct Base36Number {
    digits: DigitBuf,
}

impl Base36Number {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a wire string with an explicit capacity.
    ///
    /// The string must match `[0-9A-Z]+#*` and may be shorter than `capacity`,
    /// in which case the high-order positions are padded with `#`.
    ///
    /// # Errors
    /// - `InvalidFormat` for foreign symbols or non-trailing padding
    /// - `CapacityExceeded` if the string is longer than `capacity`
    pub fn new(symbols: &str, capacity: usize) -> Base36Result<Self> {
        let mut digits = parse_symbols(symbols)?;
        if digits.len() > capacity {
            return Err(Base36Error::CapacityExceeded {
                required: digits.len(),
                capacity,
            });
        }
        digits.resize(capacity, Digit::PAD);
        Ok(Self { digits })
    }

    /// Create from an integer value.
    ///
    /// The value is added onto an all-padding buffer, so the result carries the
    /// same trailing-zero compaction as any other sum.
    ///
    /// # Errors
    /// - `NegativeValue` if `value < 0`
    /// - `CapacityExceeded` if the value needs more than `capacity` digits
    pub fn from_value(value: i64, capacity: usize) -> Base36Result<Self> {
        let addend = minimal_digits(value)?;
        if addend.len() > capacity {
            return Err(Base36Error::CapacityExceeded {
                required: addend.len(),
                capacity,
            });
        }
        let empty: DigitBuf = smallvec![Digit::PAD; capacity];
        let digits = add_digits(&empty, &addend)?;
        Ok(Self { digits })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of digits this value was created with.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.digits.len()
    }

    /// Stored digits, least significant first.
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Index of the most significant nonzero digit, 0 if the value is zero.
    pub fn highest_populated_index(&self) -> usize {
        self.digits
            .iter()
            .rposition(|digit| digit.value() > 0)
            .unwrap_or(0)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|digit| digit.value() == 0)
    }

    #[inline]
    fn value_at(&self, index: usize) -> u8 {
        self.digits.get(index).map_or(0, |digit| digit.value())
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition of another base 36 number.
    ///
    /// Passing `None` returns a copy of `self`. The result has the capacity of
    /// the wider operand.
    ///
    /// # Errors
    /// Returns `Overflow` if the sum does not fit into that capacity.
    pub fn checked_add<'a>(&self, rhs: impl Into<Option<&'a Base36Number>>) -> Base36Result<Self> {
        match rhs.into() {
            Some(rhs) => add_digits(&self.digits, &rhs.digits).map(|digits| Self { digits }),
            None => Ok(self.clone()),
        }
    }

    /// Checked addition of an integer.
    ///
    /// The result has the capacity of `self`, or the digit count of `value`
    /// if that is larger.
    ///
    /// # Errors
    /// - `NegativeValue` if `value < 0`
    /// - `Overflow` if the sum carries past the most significant digit
    pub fn checked_add_value(&self, value: i64) -> Base36Result<Self> {
        let addend = minimal_digits(value)?;
        add_digits(&self.digits, &addend).map(|digits| Self { digits })
    }

    /// Returns `self + 1`.
    ///
    /// # Errors
    /// Returns `Overflow` if every digit is already `Z`.
    pub fn increment(&self) -> Base36Result<Self> {
        add_digits(&self.digits, &[Digit::ONE]).map(|digits| Self { digits })
    }

    // ========================================================================
    // Decoding
    // ========================================================================

    /// Integer value of this number.
    ///
    /// Wraps silently once the value exceeds `i64::MAX`, which can only happen
    /// for capacities above 12.
    pub fn to_i64(&self) -> i64 {
        let mut weight: i64 = 1;
        let mut sum: i64 = 0;
        for digit in &self.digits {
            sum = sum.wrapping_add(i64::from(digit.value()).wrapping_mul(weight));
            weight = weight.wrapping_mul(i64::from(RADIX));
        }
        sum
    }

    /// Integer value truncated to 32 bits.
    #[inline]
    pub fn to_i32(&self) -> i32 {
        self.to_i64() as i32
    }

    /// Hash of the stored symbols, padding included.
    ///
    /// `h = 31 * h + symbol` over the wire string, starting at 1 and wrapping
    /// at 32 bits. Persisted hash columns were computed this way, so two equal
    /// numbers with different padding produce different values here. Use the
    /// [`Hash`] impl for hash maps.
    pub fn digit_hash(&self) -> i32 {
        self.digits.iter().fold(1i32, |hash, digit| {
            hash.wrapping_mul(31).wrapping_add(digit.to_char() as i32)
        })
    }
}

// ============================================================================
// Digit Arithmetic
// ============================================================================

/// Decode a wire string, enforcing `[0-9A-Z]+#*`.
fn parse_symbols(symbols: &str) -> Base36Result<DigitBuf> {
    let invalid = || Base36Error::InvalidFormat {
        input: symbols.to_string(),
    };

    let mut digits = DigitBuf::with_capacity(symbols.len());
    let mut padding = false;
    for c in symbols.chars() {
        let digit = Digit::from_char(c).ok_or_else(invalid)?;
        if digit.is_pad() {
            padding = true;
        } else if padding {
            return Err(invalid());
        }
        digits.push(digit);
    }

    // At least one symbol must precede the padding.
    if digits.first().is_none_or(|digit| digit.is_pad()) {
        return Err(invalid());
    }
    Ok(digits)
}

/// Shortest base 36 form of `value`, least significant digit first.
fn minimal_digits(value: i64) -> Base36Result<ArrayVec<Digit, MAX_INT_DIGITS>> {
    if value < 0 {
        return Err(Base36Error::NegativeValue(value));
    }

    let radix = u64::from(RADIX);
    let mut remaining = value.unsigned_abs();
    let mut digits = ArrayVec::new();
    loop {
        digits.push(Digit::reduced((remaining % radix) as u8));
        remaining /= radix;
        if remaining == 0 {
            break;
        }
    }
    Ok(digits)
}

/// Digit-wise sum of two place-value ordered buffers.
///
/// The result is as long as the longer input. A carry out of the last digit is
/// an overflow. Trailing zeros are compacted to padding, index 0 excluded.
fn add_digits(lhs: &[Digit], rhs: &[Digit]) -> Base36Result<DigitBuf> {
    let len = lhs.len().max(rhs.len());
    let mut result = DigitBuf::with_capacity(len);

    let mut carry = 0u8;
    for i in 0..len {
        let a = lhs.get(i).map_or(0, |digit| digit.value());
        let b = rhs.get(i).map_or(0, |digit| digit.value());
        let sum = a + b + carry;
        result.push(Digit::reduced(sum));
        carry = sum / RADIX;
    }

    if carry > 0 {
        let augend = render(lhs);
        let addend = render(rhs);
        tracing::debug!(%augend, %addend, width = len, "base 36 addition overflowed");
        return Err(Base36Error::Overflow { augend, addend });
    }

    for digit in result.iter_mut().skip(1).rev() {
        if *digit != Digit::ZERO {
            break;
        }
        *digit = Digit::PAD;
    }

    Ok(result)
}

fn render(digits: &[Digit]) -> String {
    digits.iter().map(|digit| digit.to_char()).collect()
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Base36Number {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Base36Number {}

impl PartialOrd for Base36Number {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Base36Number {
    /// Numeric order; capacity and padding are ignored.
    fn cmp(&self, other: &Self) -> Ordering {
        let highest = self
            .highest_populated_index()
            .max(other.highest_populated_index());

        for i in (0..=highest).rev() {
            match self.value_at(i).cmp(&other.value_at(i)) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl Hash for Base36Number {
    /// Hashes digit values up to the highest populated digit, which keeps the
    /// hash consistent with `Eq` across capacities and padding.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let len = self.highest_populated_index() + 1;
        for digit in self.digits.iter().take(len) {
            state.write_u8(digit.value());
        }
    }
}

impl FromStr for Base36Number {
    type Err = Base36Error;

    /// Parse a wire string; the capacity is the string length.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s, s.chars().count())
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Base36Number {
    /// Writes the stored digits in storage order, padding included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for digit in &self.digits {
            f.write_char(digit.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Base36Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Base36Number(\"{}\", capacity={}, value={})",
            self,
            self.capacity(),
            self.to_i64()
        )
    }
}

// ============================================================================
// Serialization (wire string)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Base36Number {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Base36Number {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = <String as serde::Deserialize>::deserialize(deserializer)?;
        wire.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
