//! # Arithmetic on digit lists
//! Numeric comparison, subtraction, division by a small integer, base conversion and
//! long division. Every operation reads its operands without modifying them and builds
//! a new list; division works on explicit copies.
//! # Example
//! ```
//! use digit_num::DigitList;
//!
//! let a: DigitList = "255".into();
//! let b: DigitList = "9".into();
//! assert_eq!(a.to_hex().to_string(), "FF");
//! assert_eq!((&a / &b).to_string(), "28");
//! assert_eq!((&a - &b).to_string(), "246");
//! ```
//!

use std::cmp::Ordering;
use std::ops::{Div, Rem, Sub};

use log::trace;

use crate::DigitList;
use crate::digit_list::Digit;
use crate::digit_num_cache::*;
use crate::digit_num_constants::*;
use crate::error::DigitError;

// 实现零判断与规范化
impl DigitList {
    /// `true` for an empty list or a single `0` digit.
    pub fn is_zero(&self) -> bool {
        self.is_empty() || (self.len() == 1 && self.first() == Some(0))
    }

    /// `true` when every digit is `0`, including lists like `000`.
    fn is_zero_value(&self) -> bool {
        self.iter().all(|d| d == 0)
    }

    /// Number of leading zeros that can go while keeping one digit.
    fn leading_zeros(&self) -> usize {
        self.iter()
            .take(self.len().saturating_sub(1))
            .take_while(|d| *d == 0)
            .count()
    }

    /// Strips leading zeros in place, keeping at least one digit.
    pub fn normalize(&mut self) {
        for _ in 0..self.leading_zeros() {
            self.pop_front();
        }
    }

    /// A copy without leading zeros; `self` is left as it is.
    pub fn normalized(&self) -> DigitList {
        self.iter().skip(self.leading_zeros()).collect()
    }
}

// 实现大小比较
impl DigitList {
    /// Compares the numeric values: `007` equals `7`, an empty list equals `0`.
    pub fn cmp_value(&self, other: &DigitList) -> Ordering {
        match (self.is_zero_value(), other.is_zero_value()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        let self_skip = self.leading_zeros();
        let other_skip = other.leading_zeros();
        let self_len = self.len() - self_skip;
        let other_len = other.len() - other_skip;

        if self_len != other_len {
            return self_len.cmp(&other_len);
        }

        self.iter().skip(self_skip).cmp(other.iter().skip(other_skip))
    }
}

/// Numeric comparison of two decimal lists, see [`DigitList::cmp_value`].
pub fn compare(a: &DigitList, b: &DigitList) -> Ordering {
    a.cmp_value(b)
}

// 实现减法
impl DigitList {
    /// `self - rhs` for decimal lists, or [`DigitError::Underflow`] when `rhs > self`.
    pub fn checked_sub(&self, rhs: &DigitList) -> Result<DigitList, DigitError> {
        if self.cmp_value(rhs) == Ordering::Less {
            return Err(DigitError::Underflow);
        }
        Ok(DigitList::sub(self, rhs))
    }

    /// Schoolbook subtraction from the least significant digit. Requires `big >= little`.
    fn sub(big: &DigitList, little: &DigitList) -> DigitList {
        let radix = DECIMAL_RADIX as i8;
        let mut result = DigitList::with_capacity(big.len());
        let mut little_digits = little.iter().rev();
        let mut borrow: i8 = 0;

        for a in big.iter().rev() {
            let b = little_digits.next().unwrap_or(0);
            let mut difference = a as i8 - b as i8 - borrow;
            if difference < 0 {
                difference += radix;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push_front(difference as Digit);
        }

        if result.is_empty() {
            return zero();
        }
        result.normalize();
        result
    }
}

impl Sub<&DigitList> for &DigitList {
    type Output = DigitList;

    fn sub(self, rhs: &DigitList) -> Self::Output {
        match self.checked_sub(rhs) {
            Ok(difference) => difference,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Sub for DigitList {
    type Output = DigitList;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

// 实现单字除法
impl DigitList {
    /// Divides in place by `divisor`, reading the digits in `radix`, and returns the remainder.
    ///
    /// All leading zeros of the quotient are removed, so a zero quotient leaves the list
    /// empty (which [`is_zero`](DigitList::is_zero) accepts).
    pub fn div_rem_small(&mut self, divisor: u32, radix: u32) -> Result<u32, DigitError> {
        if divisor == 0 {
            return Err(DigitError::DivisionByZero);
        }
        check_radix(radix)?;
        Ok(self.divide_small(divisor, radix))
    }

    /// Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1 exercise 16,
    /// one digit at a time.
    fn divide_small(&mut self, divisor: u32, radix: u32) -> u32 {
        let divisor = divisor as u64;
        let radix = radix as u64;
        let mut r: u64 = 0;

        let mut cursor = self.cursor_mut();
        while let Some(digit) = cursor.current() {
            let val = digit as u64 + r * radix;
            cursor.set_current((val / divisor) as Digit);
            r = val % divisor;
            cursor.move_next();
        }

        while self.first() == Some(0) {
            self.pop_front();
        }
        r as u32
    }
}

fn check_radix(radix: u32) -> Result<(), DigitError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(DigitError::InvalidRadix(radix))
    }
}

// 实现进制转换
impl DigitList {
    /// Reads `self` as a decimal number and returns its digits in `radix`.
    pub fn to_radix(&self, radix: u32) -> Result<DigitList, DigitError> {
        check_radix(radix)?;
        Ok(self.convert(radix))
    }

    /// Reads `self` as a decimal number and returns its hexadecimal digits.
    pub fn to_hex(&self) -> DigitList {
        self.convert(HEX_RADIX)
    }

    fn convert(&self, radix: u32) -> DigitList {
        if self.is_zero() {
            return zero();
        }

        let mut result = DigitList::new();
        let mut current = self.clone();
        // remainders come out least significant first
        while !current.is_zero() {
            let remainder = current.divide_small(radix, DECIMAL_RADIX);
            trace!("to radix {}: remainder {}, {} digits left", radix, remainder, current.len());
            result.push_front(remainder as Digit);
        }

        if result.is_empty() {
            return zero();
        }
        result
    }
}

// 实现除法
impl DigitList {
    /// Truncated quotient `self / divisor` of two decimal lists.
    pub fn divide(&self, divisor: &DigitList) -> Result<DigitList, DigitError> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    /// Long division by repeated subtraction, returning `(quotient, remainder)`.
    ///
    /// Each dividend digit is brought down into a chunk; the number of times the
    /// divisor can be subtracted from the chunk is the next quotient digit.
    pub fn div_rem(&self, divisor: &DigitList) -> Result<(DigitList, DigitList), DigitError> {
        if divisor.is_zero_value() {
            return Err(DigitError::DivisionByZero);
        }

        if self.cmp_value(divisor) == Ordering::Less {
            let remainder = if self.is_empty() { zero() } else { self.normalized() };
            return Ok((zero(), remainder));
        }

        let divisor = divisor.normalized();
        let mut quotient = DigitList::new();
        let mut chunk = DigitList::new();

        for digit in self.iter() {
            chunk.push(digit);
            chunk.normalize();

            let mut count: Digit = 0;
            while chunk.cmp_value(&divisor) != Ordering::Less {
                chunk = DigitList::sub(&chunk, &divisor);
                count += 1;
            }
            trace!("brought down {}: quotient digit {}, chunk {}", digit, count, chunk);

            // no leading zeros in the quotient
            if !quotient.is_empty() || count > 0 {
                quotient.push(count);
            }
        }

        if quotient.is_empty() {
            quotient.push(0);
        }
        Ok((quotient, chunk))
    }
}

impl Div<&DigitList> for &DigitList {
    type Output = DigitList;

    fn div(self, rhs: &DigitList) -> Self::Output {
        match self.divide(rhs) {
            Ok(quotient) => quotient,
            Err(_) => panic!("Divide by 0"),
        }
    }
}

impl Div for DigitList {
    type Output = DigitList;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Rem<&DigitList> for &DigitList {
    type Output = DigitList;

    fn rem(self, rhs: &DigitList) -> Self::Output {
        match self.div_rem(rhs) {
            Ok((_, remainder)) => remainder,
            Err(_) => panic!("Divide by 0"),
        }
    }
}

impl Rem for DigitList {
    type Output = DigitList;

    fn rem(self, rhs: Self) -> Self::Output {
        &self % &rhs
    }
}

// 实现与机器整数的转换
macro_rules! impl_unsigned_to_digit_list {
    ($($u: ty),*) => {
    $(
    impl From<$u> for DigitList {
        fn from(val: $u) -> Self {
            DigitList::value_of(val as u64)
        }
    }
    )*
    };
}
impl_unsigned_to_digit_list!(u8, u16, u32, usize, u64);

impl DigitList {
    fn value_of(mut val: u64) -> DigitList {
        if val <= MAX_CONSTANT as u64 {
            return SMALL_CACHE[val as usize].clone();
        }
        let radix = DECIMAL_RADIX as u64;
        let mut list = DigitList::new();
        while val != 0 {
            list.push_front((val % radix) as Digit);
            val /= radix;
        }
        list
    }

    /// The decimal value, or `None` if it does not fit in a `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        self.iter().try_fold(0_u64, |acc, digit| {
            acc.checked_mul(DECIMAL_RADIX as u64)?.checked_add(digit as u64)
        })
    }
}

#[cfg(test)]
fn num(s: &str) -> DigitList {
    DigitList::from(s)
}

#[test]
fn test_is_zero() {
    assert!(DigitList::new().is_zero());
    assert!(num("0").is_zero());
    assert!(!num("00").is_zero());
    assert!(!num("10").is_zero());
}

#[test]
fn test_normalize() {
    let a = num("000120");
    let b = a.normalized();
    assert_eq!(b, [1, 2, 0]);
    assert_eq!(a.len(), 6);
    assert_eq!(b.normalized(), b);

    let mut c = num("0000");
    c.normalize();
    assert_eq!(c, [0]);

    let mut d = DigitList::new();
    d.normalize();
    assert!(d.is_empty());
}

#[test]
fn test_compare() {
    assert_eq!(compare(&num("007"), &num("7")), Ordering::Equal);
    assert_eq!(compare(&num("100"), &num("99")), Ordering::Greater);
    assert_eq!(compare(&num("123"), &num("124")), Ordering::Less);
    assert_eq!(compare(&num("000"), &DigitList::new()), Ordering::Equal);
    assert_eq!(compare(&DigitList::new(), &num("1")), Ordering::Less);
    // operands are not touched
    let a = num("0042");
    let b = num("042");
    assert_eq!(a.cmp_value(&b), Ordering::Equal);
    assert_eq!(a, [0, 0, 4, 2]);
    assert_eq!(b, [0, 4, 2]);
}

#[test]
fn test_sub() {
    assert_eq!(num("1000").checked_sub(&num("1")).unwrap(), [9, 9, 9]);
    assert_eq!(num("52").checked_sub(&num("52")).unwrap(), [0]);
    assert_eq!(num("903").checked_sub(&num("0004")).unwrap(), [8, 9, 9]);
    assert_eq!(num("12").checked_sub(&num("13")), Err(DigitError::Underflow));
    assert_eq!(&num("120") - &num("13"), num("107"));
}

#[test]
#[should_panic(expected = "Subtraction underflow")]
fn test_sub_underflow_panics() {
    let _ = num("1") - num("2");
}

#[test]
fn test_div_rem_small() {
    let mut a = num("1234");
    assert_eq!(a.div_rem_small(16, DECIMAL_RADIX), Ok(2));
    assert_eq!(a, [7, 7]);
    let mut b = num("7");
    assert_eq!(b.div_rem_small(16, DECIMAL_RADIX), Ok(7));
    assert!(b.is_empty());
    assert_eq!(num("1").div_rem_small(0, DECIMAL_RADIX), Err(DigitError::DivisionByZero));
    assert_eq!(num("1").div_rem_small(2, 17), Err(DigitError::InvalidRadix(17)));
}

#[test]
fn test_to_hex() {
    assert_eq!(num("255").to_hex(), [15, 15]);
    assert_eq!(num("0").to_hex(), [0]);
    assert_eq!(DigitList::new().to_hex(), [0]);
    assert_eq!(num("16").to_hex(), [1, 0]);
    assert_eq!(num("000").to_hex(), [0]);
    assert_eq!(num("4294967295").to_hex(), [15; 8]);
    assert_eq!(num("10").to_radix(2).unwrap(), [1, 0, 1, 0]);
    assert_eq!(num("10").to_radix(1), Err(DigitError::InvalidRadix(1)));
}

#[test]
fn test_div() {
    assert_eq!(num("100").divide(&num("9")).unwrap(), [1, 1]);
    assert_eq!(num("7").divide(&num("9")).unwrap(), [0]);
    assert_eq!(num("9").divide(&num("9")).unwrap(), [1]);
    assert_eq!(num("120") / num("13"), num("9"));
    assert_eq!(num("1000000").divide(&num("1000")).unwrap(), [1, 0, 0, 0]);
    assert_eq!(num("0100").divide(&num("010")).unwrap(), [1, 0]);
    assert_eq!(num("5").divide(&num("0")), Err(DigitError::DivisionByZero));
    assert_eq!(num("5").divide(&num("000")), Err(DigitError::DivisionByZero));
    assert_eq!(num("5").divide(&DigitList::new()), Err(DigitError::DivisionByZero));

    let (q, r) = num("124871287894782164876238905710532").div_rem(&num("56789876546789")).unwrap();
    assert_eq!(q, num("2198830064226343316"));
    assert_eq!(r, num("38912054298208"));
}

#[test]
fn test_rem() {
    assert_eq!(num("12") % num("8"), num("4"));
    assert_eq!(num("10000000000000000") % num("10"), num("0"));
    assert_eq!(num("3") % num("007"), num("3"));
}

#[test]
#[should_panic(expected = "Divide by 0")]
fn test_div_by_zero_panics() {
    let _ = num("12") / num("0");
}

#[test]
fn test_from_u64() {
    assert_eq!(DigitList::from(0_u8), [0]);
    assert_eq!(DigitList::from(16_u32), [1, 6]);
    assert_eq!(DigitList::from(1234567_u64), [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(num("18446744073709551615").to_u64(), Some(u64::MAX));
    assert_eq!(num("18446744073709551616").to_u64(), None);
}
