// Property tests, included by lib.rs; num-bigint is the reference for every value.

use std::cmp::Ordering;

use num_bigint::BigUint;
use proptest::prelude::*;

use crate::{compare, DigitError, DigitList};

fn big(list: &DigitList) -> BigUint {
    BigUint::parse_bytes(list.to_decimal_string().as_bytes(), 10).unwrap()
}

fn big_str(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 10).unwrap()
}

mod text {
    use super::*;

    proptest! {
        #[test]
        fn decimal_string_round_trip(s in "[0-9]{0,60}") {
            let list = DigitList::from(s.as_str());
            let expected = if s.is_empty() { "0".to_string() } else { s.clone() };
            prop_assert_eq!(list.to_decimal_string(), expected);
        }
    }
}

mod arithmetic {
    use super::*;

    proptest! {
        #[test]
        fn hex_matches_reference(s in "[0-9]{1,60}") {
            let hex = DigitList::from(s.as_str()).to_hex();
            prop_assert_eq!(hex.to_string(), format!("{:X}", big_str(&s)));
        }

        #[test]
        fn compare_matches_reference(a in "[0-9]{1,30}", b in "[0-9]{1,30}") {
            let (x, y) = (DigitList::from(a.as_str()), DigitList::from(b.as_str()));
            prop_assert_eq!(compare(&x, &y), big_str(&a).cmp(&big_str(&b)));
            prop_assert_eq!(compare(&y, &x), big_str(&b).cmp(&big_str(&a)));
        }

        #[test]
        fn sub_then_add_restores(a in "[0-9]{1,40}", b in "[0-9]{1,40}") {
            let (mut x, mut y) = (DigitList::from(a.as_str()), DigitList::from(b.as_str()));
            if compare(&x, &y) == Ordering::Less {
                std::mem::swap(&mut x, &mut y);
            }
            let difference = x.checked_sub(&y).unwrap();
            prop_assert_eq!(big(&difference) + big(&y), big(&x));
            prop_assert_eq!(difference.normalized(), difference);
        }

        #[test]
        fn div_is_floor_division(a in "[0-9]{1,40}", b in "0{0,3}[1-9][0-9]{0,20}") {
            let (x, y) = (DigitList::from(a.as_str()), DigitList::from(b.as_str()));
            let (q, r) = x.div_rem(&y).unwrap();
            let (a, b) = (big_str(&a), big_str(&b));
            prop_assert_eq!(big(&q), &a / &b);
            prop_assert_eq!(big(&r), &a % &b);
            prop_assert_eq!(x.divide(&y).unwrap(), q.clone());
            prop_assert_eq!(q.normalized(), q);
        }

        #[test]
        fn div_by_zero_is_an_error(a in "[0-9]{0,20}", zeros in "0{0,4}") {
            let x = DigitList::from(a.as_str());
            let y = DigitList::from(zeros.as_str());
            prop_assert_eq!(x.divide(&y), Err(DigitError::DivisionByZero));
        }

        #[test]
        fn normalize_is_idempotent(s in "[0-9]{0,30}") {
            let once = DigitList::from(s.as_str()).normalized();
            prop_assert_eq!(once.normalized(), once.clone());
            if !s.is_empty() {
                prop_assert_eq!(big(&once), big_str(&s));
                prop_assert!(once.len() == 1 || once.first() != Some(0));
            }
        }
    }
}

mod list {
    use super::*;

    proptest! {
        #[test]
        fn insert_then_get(digits in prop::collection::vec(0u8..16, 0..40), pos in any::<prop::sample::Index>(), d in 0u8..16) {
            let mut list: DigitList = digits.iter().copied().collect();
            let i = pos.index(digits.len() + 1);
            list.insert(i, d).unwrap();
            prop_assert_eq!(list.len(), digits.len() + 1);
            prop_assert_eq!(list.get(i), Ok(d));
        }

        #[test]
        fn remove_matches_vec(digits in prop::collection::vec(0u8..16, 1..40), pos in any::<prop::sample::Index>()) {
            let mut list: DigitList = digits.iter().copied().collect();
            let mut expected = digits.clone();
            let i = pos.index(digits.len());
            prop_assert_eq!(list.remove(i), Ok(expected.remove(i)));
            prop_assert_eq!(list.len(), expected.len());
            prop_assert_eq!(list.iter().collect::<Vec<_>>(), expected.clone());
            prop_assert_eq!(list.iter().rev().collect::<Vec<_>>(), expected.into_iter().rev().collect::<Vec<_>>());
        }

        #[test]
        fn shift_left_then_right_restores(digits in prop::collection::vec(0u8..16, 0..20)) {
            let mut list: DigitList = digits.iter().copied().collect();
            list.shift_left();
            list.shift_right();
            prop_assert_eq!(list, digits);
        }

        #[test]
        fn sort_matches_vec(digits in prop::collection::vec(0u8..16, 0..30)) {
            let mut list: DigitList = digits.iter().copied().collect();
            let mut expected = digits.clone();
            expected.sort();
            list.sort_ascending();
            prop_assert_eq!(&list, &expected);
            expected.reverse();
            list.sort_descending();
            prop_assert_eq!(&list, &expected);
        }
    }
}
