// ============================================================================
// Base36 Digit
// A single place of a base 36 number: a symbol value or the padding sentinel
// ============================================================================

/// Number of distinct symbol values per digit.
pub const RADIX: u8 = 36;

/// All symbols in ascending value order.
pub const ALPHABET: &[u8; RADIX as usize] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Sentinel for an unused high-order position.
///
/// Fixed by the storage format of existing keys; it must never change.
pub const PADDING_CHAR: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Repr {
    /// Always `< RADIX`
    Value(u8),
    Pad,
}

/// One position of a [`Base36Number`](super::Base36Number).
///
/// Either a symbol value in `0..RADIX` or the padding sentinel. Padding
/// evaluates to zero but marks a position that was never written or was
/// cleared by trailing-zero compaction. Values can only be created through
/// checked constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(Repr);

impl Digit {
    /// The padding sentinel `#`.
    pub const PAD: Self = Digit(Repr::Pad);

    /// The explicit zero digit `'0'`.
    pub const ZERO: Self = Digit(Repr::Value(0));

    /// The digit `'1'`.
    pub const ONE: Self = Digit(Repr::Value(1));

    /// Create a digit from its numeric value, `None` if `value >= RADIX`.
    #[inline]
    pub const fn from_value(value: u8) -> Option<Self> {
        if value < RADIX {
            Some(Digit(Repr::Value(value)))
        } else {
            None
        }
    }

    /// Digit for `value mod RADIX`, used by the carry loop.
    #[inline]
    pub(crate) const fn reduced(value: u8) -> Self {
        Digit(Repr::Value(value % RADIX))
    }

    /// Decode a wire symbol.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Digit(Repr::Value(c as u8 - b'0'))),
            'A'..='Z' => Some(Digit(Repr::Value(c as u8 - b'A' + 10))),
            PADDING_CHAR => Some(Digit::PAD),
            _ => None,
        }
    }

    /// Arithmetic value of this position; padding counts as zero.
    #[inline]
    pub const fn value(self) -> u8 {
        match self.0 {
            Repr::Value(v) => v,
            Repr::Pad => 0,
        }
    }

    /// Wire symbol of this position.
    #[inline]
    pub fn to_char(self) -> char {
        match self.0 {
            Repr::Value(v) => char::from(ALPHABET[usize::from(v)]),
            Repr::Pad => PADDING_CHAR,
        }
    }

    #[inline]
    pub const fn is_pad(self) -> bool {
        matches!(self.0, Repr::Pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_round_trip() {
        for (value, &symbol) in ALPHABET.iter().enumerate() {
            let digit = Digit::from_char(char::from(symbol)).unwrap();
            assert_eq!(digit.value() as usize, value);
            assert_eq!(digit.to_char(), char::from(symbol));
        }
    }

    #[test]
    fn test_padding() {
        let pad = Digit::from_char('#').unwrap();
        assert!(pad.is_pad());
        assert_eq!(pad, Digit::PAD);
        assert_eq!(pad.value(), 0);
        assert_eq!(pad.to_char(), '#');
        assert_ne!(pad, Digit::ZERO);
    }

    #[test]
    fn test_rejects_foreign_symbols() {
        assert_eq!(Digit::from_char('a'), None);
        assert_eq!(Digit::from_char('-'), None);
        assert_eq!(Digit::from_char('ä'), None);
    }

    #[test]
    fn test_out_of_range_values() {
        assert_eq!(Digit::from_value(36), None);
        assert_eq!(Digit::from_value(u8::MAX), None);

        let z = Digit::from_value(35).unwrap();
        assert_eq!(z.to_char(), 'Z');

        // Every value a caller can obtain renders without panicking.
        for value in 0..=u8::MAX {
            if let Some(digit) = Digit::from_value(value) {
                assert!(ALPHABET.contains(&(digit.to_char() as u8)));
            }
        }
    }

    #[test]
    fn test_reduced_wraps_into_range() {
        assert_eq!(Digit::reduced(36), Digit::ZERO);
        assert_eq!(Digit::reduced(71).to_char(), 'Z');
    }
}
