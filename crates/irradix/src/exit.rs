use std::fmt;
use std::io;

use irradix_frame::{ErrorKind, FrameError};
use irradix_radix::RadixError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        io::ErrorKind::InvalidData => DATA_INVALID,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

/// Text the user typed that is not a digit string is a usage problem; a
/// well-formed string whose value does not fit is bad data.
pub fn radix_error(context: &str, err: RadixError) -> CliError {
    let code = match err {
        RadixError::Empty | RadixError::InvalidDigit { .. } => USAGE,
        RadixError::Overflow { .. } | RadixError::PrecisionLimitExceeded { .. } => DATA_INVALID,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match (err.kind(), err) {
        (_, FrameError::InvalidBit { .. }) => {
            CliError::new(INTERNAL, format!("{context}: bit packing failed"))
        }
        (ErrorKind::MalformedInput | ErrorKind::PrecisionLimitExceeded, err) => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        (ErrorKind::LimitExceeded, err) => CliError::new(FAILURE, format!("{context}: {err}")),
    }
}
