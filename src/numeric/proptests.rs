// ============================================================================
// Property Tests
// Base 36 arithmetic and ordering against plain integer arithmetic
// ============================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::numeric::{Base36Error, Base36Number};

    // 36^6 - 1, the largest value that fits six digits
    const SIX_DIGIT_MAX: i64 = 2_176_782_335;

    fn six_digit_value() -> impl Strategy<Value = i64> {
        0i64..=SIX_DIGIT_MAX
    }

    // Wire strings: one to six symbols followed by padding
    fn wire_form() -> impl Strategy<Value = (String, usize)> {
        ("[0-9A-Z]{1,6}", 0usize..6).prop_map(|(symbols, padding)| {
            let len = symbols.len();
            (format!("{}{}", symbols, "#".repeat(padding)), len + padding)
        })
    }

    proptest! {
        #[test]
        fn from_value_round_trips(value in six_digit_value()) {
            let x = Base36Number::from_value(value, 6).unwrap();
            prop_assert_eq!(x.capacity(), 6);
            prop_assert_eq!(x.to_i64(), value);
        }

        #[test]
        fn new_pads_to_capacity(symbols in "[0-9A-Z]{1,8}", extra in 0usize..8) {
            let capacity = symbols.len() + extra;
            let x = Base36Number::new(&symbols, capacity).unwrap();
            let wire = x.to_string();
            prop_assert_eq!(x.capacity(), capacity);
            prop_assert!(wire.starts_with(symbols.as_str()));
            prop_assert!(wire[symbols.len()..].chars().all(|c| c == '#'));
        }

        #[test]
        fn new_rejects_overlong_input(symbols in "[0-9A-Z]{2,8}") {
            let capacity = symbols.len() - 1;
            let rejected = matches!(
                Base36Number::new(&symbols, capacity),
                Err(Base36Error::CapacityExceeded { .. })
            );
            prop_assert!(rejected);
        }

        #[test]
        fn wire_form_round_trips((wire, capacity) in wire_form()) {
            let x = Base36Number::new(&wire, capacity).unwrap();
            let back = Base36Number::new(&x.to_string(), x.capacity()).unwrap();
            prop_assert_eq!(&back, &x);
            prop_assert_eq!(back.to_string(), wire);
        }

        #[test]
        fn add_value_matches_integer_sum(a in 0i64..1_000_000_000, b in 0i64..1_000_000_000) {
            let x = Base36Number::from_value(a, 7).unwrap();
            prop_assert_eq!(x.checked_add_value(b).unwrap().to_i64(), a + b);
        }

        #[test]
        fn add_commutes(a in six_digit_value(), b in six_digit_value()) {
            let x = Base36Number::from_value(a, 7).unwrap();
            let y = Base36Number::from_value(b, 7).unwrap();
            let xy = x.checked_add(&y).unwrap();
            let yx = y.checked_add(&x).unwrap();
            prop_assert_eq!(xy.to_string(), yx.to_string());
            prop_assert_eq!(xy.to_i64(), a + b);
        }

        #[test]
        fn add_overflows_instead_of_wrapping(a in six_digit_value(), b in six_digit_value()) {
            let x = Base36Number::from_value(a, 6).unwrap();
            let y = Base36Number::from_value(b, 6).unwrap();
            match x.checked_add(&y) {
                Ok(sum) => prop_assert_eq!(sum.to_i64(), a + b),
                Err(Base36Error::Overflow { .. }) => prop_assert!(a + b > SIX_DIGIT_MAX),
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }

        #[test]
        fn increments_equal_single_add(a in 0i64..1_000_000, n in 0u8..50) {
            let x = Base36Number::from_value(a, 5).unwrap();
            let mut stepped = x.clone();
            for _ in 0..n {
                stepped = stepped.increment().unwrap();
            }
            let added = x.checked_add_value(i64::from(n)).unwrap();
            prop_assert_eq!(&stepped, &added);
            prop_assert_eq!(stepped.to_string(), added.to_string());
        }

        #[test]
        fn order_matches_value(a in six_digit_value(), b in six_digit_value(), cap_a in 6usize..10, cap_b in 6usize..10) {
            let x = Base36Number::from_value(a, cap_a).unwrap();
            let y = Base36Number::from_value(b, cap_b).unwrap();
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
            prop_assert_eq!(x == y, a == b);
        }
    }
}
