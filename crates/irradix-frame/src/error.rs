use irradix_radix::RadixError;

/// Errors that can occur during sequence encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// The bit stream does not follow the framing rules.
    #[error("malformed input: {reason}")]
    Malformed { reason: String },

    /// The length-prefixed frame delimiter was not found.
    #[error("malformed input: missing frame delimiter")]
    MissingFrameDelimiter,

    /// The length table declares more data bits than the buffer holds.
    #[error("truncated data ({needed} bits declared, {available} available)")]
    Truncated { needed: usize, available: usize },

    /// Bits remain after the last declared element that are not padding.
    #[error("unexpected trailing data ({count} bits after the last element)")]
    TrailingBits { count: usize },

    /// A character other than `0` or `1` was handed to the bit packer.
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { position: usize, found: char },

    /// The input buffer exceeds the configured maximum size.
    #[error("buffer too large ({size} bytes, max {max})")]
    BufferTooLarge { size: usize, max: usize },

    /// The sequence exceeds the configured maximum element count.
    #[error("too many elements ({count}, max {max})")]
    TooManyElements { count: usize, max: usize },

    /// Digit conversion failed.
    #[error(transparent)]
    Radix(#[from] RadixError),
}

/// Coarse classification of [`FrameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing delimiter, truncated data, or a length-table mismatch.
    MalformedInput,
    /// A value is outside the range the converter reproduces exactly.
    PrecisionLimitExceeded,
    /// A configured limit was exceeded.
    LimitExceeded,
}

impl FrameError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Radix(RadixError::PrecisionLimitExceeded { .. }) => {
                ErrorKind::PrecisionLimitExceeded
            }
            Self::BufferTooLarge { .. } | Self::TooManyElements { .. } => ErrorKind::LimitExceeded,
            _ => ErrorKind::MalformedInput,
        }
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;
