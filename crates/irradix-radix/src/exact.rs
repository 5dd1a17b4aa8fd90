//! Integer-only base-phi conversion.
//!
//! Every step of the positional recurrence needs `floor(v / phi)` or
//! `ceil(v * phi)`. Both reduce to `floor(v * sqrt(5))`, which equals
//! `isqrt(5 * v^2)` and is computed here with 256-bit intermediates. No
//! floating-point value ever decides a digit, so conversion is exact over the
//! whole working range.

use crate::digits::DigitString;
use crate::error::{RadixError, Result};
use crate::PhiRadix;

/// Largest value accepted by [`ExactPhi`]. `5 * v^2` must fit in 256 bits.
pub const MAX_EXACT_VALUE: u128 = 1 << 120;

const LOW_MASK: u128 = u64::MAX as u128;

/// A 256-bit unsigned value as `(high, low)`. Tuple ordering is numeric ordering.
type Wide = (u128, u128);

/// Exact base-phi converter built on integer arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactPhi;

impl PhiRadix for ExactPhi {
    fn to_digits(&self, value: u128) -> Result<DigitString> {
        if value > MAX_EXACT_VALUE {
            return Err(RadixError::PrecisionLimitExceeded {
                value,
                limit: MAX_EXACT_VALUE,
            });
        }
        if value == 0 {
            return Ok(DigitString::zero());
        }

        let mut digits = Vec::with_capacity(128);
        let mut v = value;
        while v > 0 {
            let q = floor_div_phi(v);
            digits.push(remainder_digit(v, q));
            v = q;
        }
        Ok(DigitString::from_lsb_first(&digits))
    }

    fn from_digits(&self, digits: &DigitString) -> Result<u128> {
        let mut v: u128 = 0;
        for digit in digits.digits() {
            if v > MAX_EXACT_VALUE {
                return Err(RadixError::Overflow { len: digits.len() });
            }
            let d = u128::from(digit);
            v = if v == 0 { d } else { ceil_mul_phi(v) + d };
        }
        if v > MAX_EXACT_VALUE {
            return Err(RadixError::Overflow { len: digits.len() });
        }
        Ok(v)
    }
}

/// `floor(v / phi)` for `0 < v <= MAX_EXACT_VALUE`.
///
/// `v / phi = (v * sqrt(5) - v) / 2`, and because `v * sqrt(5)` is irrational
/// its floor can replace it without moving the result across an integer.
fn floor_div_phi(v: u128) -> u128 {
    let s = isqrt(times_five(square(v)));
    (s - v) / 2
}

/// `ceil(v * phi)` for `0 < v <= MAX_EXACT_VALUE`.
fn ceil_mul_phi(v: u128) -> u128 {
    let s = isqrt(times_five(square(v)));
    (v + s) / 2 + 1
}

/// The digit `floor(v - q * phi)` where `q = floor(v / phi)`.
fn remainder_digit(v: u128, q: u128) -> u8 {
    if q == 0 {
        // v < phi, so v == 1.
        return 1;
    }
    // v - q*phi >= 1  <=>  2(v - 1) - q >= q*sqrt(5)
    let twice = 2 * (v - 1);
    if twice < q {
        return 0;
    }
    let lhs = twice - q;
    u8::from(square(lhs) > times_five(square(q)))
}

fn square(x: u128) -> Wide {
    let (a, b) = (x >> 64, x & LOW_MASK);
    let (aa, ab, bb) = (a * a, a * b, b * b);
    // x^2 = aa * 2^128 + ab * 2^65 + bb
    let (low, carry) = bb.overflowing_add(ab << 65);
    (aa + (ab >> 63) + u128::from(carry), low)
}

fn add((ah, al): Wide, (bh, bl): Wide) -> Wide {
    let (low, carry) = al.overflowing_add(bl);
    (ah + bh + u128::from(carry), low)
}

fn times_five((high, low): Wide) -> Wide {
    add(((high << 2) | (low >> 126), low << 2), (high, low))
}

fn bit_length((high, low): Wide) -> u32 {
    if high != 0 {
        256 - high.leading_zeros()
    } else {
        128 - low.leading_zeros()
    }
}

fn to_f64((high, low): Wide) -> f64 {
    (high as f64) * 2f64.powi(128) + low as f64
}

/// Largest `s` with `s^2 <= n`.
///
/// A floating-point estimate narrows the search window; the bracket is then
/// checked and bisected with exact squares.
fn isqrt(n: Wide) -> u128 {
    if n == (0, 0) {
        return 0;
    }

    let estimate = to_f64(n).sqrt() as u128;
    let slack = (estimate >> 48) + 2;
    let mut lo = estimate.saturating_sub(slack);
    let mut hi = estimate.saturating_add(slack);
    if square(lo) > n {
        lo = 0;
    }
    if square(hi) <= n {
        hi = 1u128 << bit_length(n).div_ceil(2);
    }

    // lo^2 <= n < hi^2
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if square(mid) <= n {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}
