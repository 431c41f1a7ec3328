use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

use crate::DigitList;
use crate::digit_list::Digit;
use crate::digit_num_constants::*;

// 实现打印
impl Display for DigitList {
    /// `0`-`9` and `A`-`F`; a list without digits prints as `[]`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str(EMPTY_LIST);
        }
        f.write_str(&self.digits_to_string())
    }
}

impl DigitList {
    /// Like `to_string`, but a list without digits is the number `0`.
    pub fn to_decimal_string(&self) -> String {
        if self.is_empty() {
            return String::from("0");
        }
        self.digits_to_string()
    }

    fn digits_to_string(&self) -> String {
        self.iter()
            .map(|digit| DIGITS.get(digit as usize).copied().unwrap_or('?'))
            .collect()
    }
}

// 实现解析
impl DigitList {
    /// Picks the digits `0`-`9`, `a`-`f` and `A`-`F` out of `val`, in order.
    /// Anything else is skipped, so parsing never fails.
    pub fn parse_digits(val: &str) -> DigitList {
        val.chars()
            .filter_map(|c| c.to_digit(HEX_RADIX))
            .map(|d| d as Digit)
            .collect()
    }
}

impl From<&str> for DigitList {
    fn from(val: &str) -> Self {
        DigitList::parse_digits(val)
    }
}

impl From<String> for DigitList {
    fn from(val: String) -> Self {
        DigitList::parse_digits(&val)
    }
}

impl FromStr for DigitList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DigitList::parse_digits(s))
    }
}

#[test]
fn test_parse() {
    let a: DigitList = "12 34".into();
    assert_eq!(a, [1, 2, 3, 4]);
    let b: DigitList = "fF-a9z".parse().unwrap();
    assert_eq!(b, [15, 15, 10, 9]);
    let c = DigitList::from(String::from("+-."));
    assert!(c.is_empty());
}

#[test]
fn test_to_string() {
    let a: DigitList = "00120".into();
    assert_eq!(a.to_string(), "00120");
    assert_eq!(a.to_decimal_string(), "00120");

    let b: DigitList = [1, 10, 15, 0].into_iter().collect();
    assert_eq!(b.to_string(), "1AF0");

    let empty = DigitList::new();
    assert_eq!(empty.to_string(), "[]");
    assert_eq!(empty.to_decimal_string(), "0");
}
