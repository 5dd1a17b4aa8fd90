use tracing::debug;

use crate::digits::DigitString;
use crate::error::{RadixError, Result};
use crate::PhiRadix;

/// The golden ratio, `(1 + sqrt(5)) / 2`, rounded to the nearest `f64`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Largest value the `f64` converter is trusted to round-trip.
///
/// Digits start to flip near multiples of Fibonacci numbers once
/// `v * PHI` carries less precision than its distance to the nearest
/// integer; the first failure is at 165 580 142.
pub const FLOAT_SAFE_LIMIT: u128 = 1 << 26;

const EPSILON: f64 = 1e-9;

/// Base-phi converter using `f64` arithmetic.
///
/// Kept for compatibility with buffers produced by floating-point encoders
/// and as a reference for [`ExactPhi`](crate::ExactPhi). Values above the
/// configured limit are refused rather than silently mis-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatPhi {
    limit: Option<u128>,
}

impl FloatPhi {
    /// Converter that refuses values above [`FLOAT_SAFE_LIMIT`].
    pub const fn new() -> Self {
        Self {
            limit: Some(FLOAT_SAFE_LIMIT),
        }
    }

    /// Converter without the precision guard. Large values lose accuracy.
    pub const fn unchecked() -> Self {
        Self { limit: None }
    }

    /// The enforced limit, if any.
    pub fn limit(&self) -> Option<u128> {
        self.limit
    }

    fn check(&self, value: u128) -> Result<()> {
        match self.limit {
            Some(limit) if value > limit => {
                debug!(value, limit, "value above float precision limit");
                Err(RadixError::PrecisionLimitExceeded { value, limit })
            }
            _ => Ok(()),
        }
    }
}

impl Default for FloatPhi {
    fn default() -> Self {
        Self::new()
    }
}

impl PhiRadix for FloatPhi {
    fn to_digits(&self, value: u128) -> Result<DigitString> {
        self.check(value)?;
        if value == 0 {
            return Ok(DigitString::zero());
        }

        let mut digits = Vec::new();
        let mut v = value as f64;
        while v > EPSILON {
            let rem = v % PHI;
            digits.push(rem.floor() as u8);
            v = (v - rem) / PHI;
        }
        Ok(DigitString::from_lsb_first(&digits))
    }

    fn from_digits(&self, digits: &DigitString) -> Result<u128> {
        let mut v = 0.0f64;
        for digit in digits.digits() {
            v = (v * PHI + f64::from(digit)).ceil();
        }
        if !v.is_finite() || v >= 2f64.powi(128) {
            return Err(RadixError::Overflow { len: digits.len() });
        }
        let value = v.round() as u128;
        self.check(value)?;
        Ok(value)
    }
}
