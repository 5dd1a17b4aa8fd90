/// Errors that can occur while converting to or from base-phi digits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RadixError {
    /// The digit string has no digits. Zero is written as `"0"`.
    #[error("empty digit string")]
    Empty,

    /// A character other than `0` or `1` was found.
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },

    /// The value is outside the range the converter reproduces exactly.
    #[error("value {value} exceeds the precision-safe limit {limit}")]
    PrecisionLimitExceeded { value: u128, limit: u128 },

    /// Accumulating the digits overflowed the working range.
    #[error("digit string of {len} digits overflows the working range")]
    Overflow { len: usize },
}

pub type Result<T> = std::result::Result<T, RadixError>;
