//! # NumberList
//! A decimal number kept as a list of digits, with the conversions of the
//! number-list assignment: load from and save to a file, change of scale to
//! hexadecimal, and the integer part of the division of two numbers.
//! # Example
//! ```
//! use number_list::NumberList;
//!
//! let a = NumberList::from("255");
//! let b = NumberList::from("16");
//! assert_eq!(a.change_scale().to_string(), "FF");
//! assert_eq!(a.additional_operation(&b).unwrap().to_string(), "15");
//! ```
//!

use std::fmt::Display;
use std::ops::{Deref, DerefMut};
use std::path::Path;

use digit_num::{Digit, DigitList};

use crate::error::NumberListError;
use crate::persist;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NumberList {
    digits: DigitList,
}

// 实现构造
impl NumberList {
    pub fn new() -> Self {
        NumberList::default()
    }

    /// Reads a decimal number from the first line of `path`.
    /// When the file cannot be read the failure is logged and the number is empty.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        NumberList { digits: persist::load(path.as_ref()) }
    }

    /// Saves the number into `path` in decimal notation.
    pub fn save_list<P: AsRef<Path>>(&self, path: P) -> Result<(), NumberListError> {
        persist::save(&self.digits, path.as_ref())
    }

    pub fn digits(&self) -> &DigitList {
        &self.digits
    }

    pub fn into_digits(self) -> DigitList {
        self.digits
    }
}

// 实现运算
impl NumberList {
    /// The same number in hexadecimal notation.
    pub fn change_scale(&self) -> NumberList {
        NumberList { digits: self.digits.to_hex() }
    }

    /// Integer part of `self / arg`.
    pub fn additional_operation(&self, arg: &NumberList) -> Result<NumberList, NumberListError> {
        let digits = self.digits.divide(&arg.digits)?;
        Ok(NumberList { digits })
    }

    pub fn to_decimal_string(&self) -> String {
        self.digits.to_decimal_string()
    }
}

impl Deref for NumberList {
    type Target = DigitList;

    fn deref(&self) -> &DigitList {
        &self.digits
    }
}

impl DerefMut for NumberList {
    fn deref_mut(&mut self) -> &mut DigitList {
        &mut self.digits
    }
}

impl Display for NumberList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.digits, f)
    }
}

impl From<&str> for NumberList {
    fn from(val: &str) -> Self {
        NumberList { digits: DigitList::from(val) }
    }
}

impl From<DigitList> for NumberList {
    fn from(digits: DigitList) -> Self {
        NumberList { digits }
    }
}

impl PartialEq<DigitList> for NumberList {
    fn eq(&self, other: &DigitList) -> bool {
        self.digits == *other
    }
}

impl PartialEq<[Digit]> for NumberList {
    fn eq(&self, other: &[Digit]) -> bool {
        self.digits == *other
    }
}

impl PartialEq<Vec<Digit>> for NumberList {
    fn eq(&self, other: &Vec<Digit>) -> bool {
        self.digits == *other
    }
}

impl<const N: usize> PartialEq<[Digit; N]> for NumberList {
    fn eq(&self, other: &[Digit; N]) -> bool {
        self.digits == *other
    }
}

#[cfg(test)]
mod tests {
    use digit_num::DigitError;

    use super::*;

    #[test]
    fn change_scale() {
        assert_eq!(NumberList::from("255").change_scale().to_string(), "FF");
        assert_eq!(NumberList::from("0").change_scale().to_string(), "0");
        assert_eq!(NumberList::new().change_scale().to_string(), "0");
        assert_eq!(NumberList::from("16").change_scale(), [1, 0]);
        assert_eq!(
            NumberList::from("123456789012345678901234567890").change_scale().to_string(),
            "18EE90FF6C373E0EE4E3F0AD2"
        );
    }

    #[test]
    fn additional_operation() {
        let div = |a: &str, b: &str| {
            NumberList::from(a).additional_operation(&NumberList::from(b)).unwrap().to_string()
        };
        assert_eq!(div("100", "9"), "11");
        assert_eq!(div("7", "9"), "0");
        assert_eq!(div("9", "9"), "1");
        assert_eq!(div("123456789012345678901234567890", "987654321"), "124999998873437499901");

        let err = NumberList::from("5").additional_operation(&NumberList::from("0"));
        assert!(matches!(err, Err(NumberListError::Digit(DigitError::DivisionByZero))));
    }

    #[test]
    fn operands_are_untouched() {
        let a = NumberList::from("00100");
        let b = NumberList::from("010");
        let _ = a.additional_operation(&b).unwrap();
        let _ = a.change_scale();
        assert_eq!(a, [0, 0, 1, 0, 0]);
        assert_eq!(b, [0, 1, 0]);
    }

    #[test]
    fn list_operations_through_deref() {
        let mut a = NumberList::from("123");
        a.push(4);
        a.insert(0, 0).unwrap();
        assert_eq!(a.get(1), Ok(1));
        assert!(a.swap(0, 4));
        a.sort_descending();
        assert_eq!(a, vec![4, 3, 2, 1, 0]);
        assert_eq!(a.to_decimal_string(), "43210");
        assert_eq!(NumberList::new().to_string(), "[]");
        assert_eq!(NumberList::new().to_decimal_string(), "0");
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("number.txt");
        let a = NumberList::from("98765432109876543210");
        a.save_list(&path).unwrap();
        let b = NumberList::from_file(&path);
        assert_eq!(a, b);
        assert_eq!(b.change_scale().to_string(), "55AA54D38E5267EEA");

        let missing = NumberList::from_file(dir.path().join("missing.txt"));
        assert!(missing.is_empty());
    }
}
