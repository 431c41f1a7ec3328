//! Digit Num \
//! This crate provides:
//! - [`DigitList`]: an arbitrary-precision unsigned number stored as a doubly-linked list of
//!   digits, most significant digit first. It behaves as a list (positional insert, remove,
//!   cursors, sorting, rotation) and as a decimal number (comparison, subtraction,
//!   conversion to hexadecimal, long division).

mod digit_list;
mod digit_ops;
mod digit_fmt;
mod digit_num_cache;
mod digit_num_constants;
pub mod error;

pub use digit_list::{CursorMut, Digit, DigitList, IntoIter, Iter};
pub use digit_ops::compare;
pub use digit_num_constants::{DECIMAL_RADIX, HEX_RADIX};
pub use error::DigitError;

#[cfg(test)]
mod tests {
    use crate::DigitList;

    #[test]
    fn it_works() {
        let a: DigitList = "1000000000000000000000".into();
        let b: DigitList = "900000000000".into();
        println!("a = {}", a);
        println!("a - b = {}", &a - &b);
        println!("a / b = {}", &a / &b);
        println!("a % b = {}", &a % &b);
        println!("hex(a) = {}", a.to_hex());
        assert_eq!((&a / &b).to_string(), "1111111111");
        assert_eq!(a.to_hex().to_string(), "3635C9ADC5DEA00000");
    }
}

#[cfg(test)]
#[path = "lib.tests.property-tests.rs"]
mod property_tests;
