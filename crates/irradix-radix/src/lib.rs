//! Positional numerals in base phi (the golden ratio).
//!
//! Each integer `v` is written as digits `d_k .. d_0` produced by the
//! recurrence `q = floor(v / phi)`, `d = floor(v - q * phi)`, `v <- q`. Since
//! `phi < 2` every digit is `0` or `1`. The inverse folds the digits back with
//! `v <- ceil(v * phi + d)`, which recovers each quotient exactly.
//!
//! Two converters implement [`PhiRadix`]:
//! - [`ExactPhi`] evaluates the recurrence with integers only and is exact up
//!   to [`MAX_EXACT_VALUE`].
//! - [`FloatPhi`] evaluates it with `f64` and is trusted only up to
//!   [`FLOAT_SAFE_LIMIT`].

pub mod digits;
pub mod error;
pub mod exact;
pub mod float;

pub use digits::DigitString;
pub use error::{RadixError, Result};
pub use exact::{ExactPhi, MAX_EXACT_VALUE};
pub use float::{FloatPhi, FLOAT_SAFE_LIMIT, PHI};

/// Conversion between integers and base-phi digit strings.
pub trait PhiRadix: Send + Sync {
    /// Digits of `value`, most significant first. Zero is `"0"`.
    fn to_digits(&self, value: u128) -> Result<DigitString>;

    /// The integer represented by `digits`.
    fn from_digits(&self, digits: &DigitString) -> Result<u128>;
}

/// Base-phi digits of `n`, computed exactly.
pub fn to_digits(n: u64) -> DigitString {
    match ExactPhi.to_digits(u128::from(n)) {
        Ok(digits) => digits,
        Err(_) => unreachable!("u64 values are within the exact range"),
    }
}

/// Parse a base-phi digit string back into a `u64`.
pub fn from_digits(text: &str) -> Result<u64> {
    let digits: DigitString = text.parse()?;
    let value = ExactPhi.from_digits(&digits)?;
    u64::try_from(value).map_err(|_| RadixError::Overflow { len: digits.len() })
}
