use thiserror::Error;

/// Failures reported by [`DigitList`](crate::DigitList) and the arithmetic built on it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DigitError {
    #[error("Index: {index}, Size: {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Division by zero")]
    DivisionByZero,

    /// The subtrahend is larger than the minuend; the difference would be negative.
    #[error("Subtraction underflow")]
    Underflow,

    #[error("Radix {0} out of bound, expected 2..=16")]
    InvalidRadix(u32),
}
