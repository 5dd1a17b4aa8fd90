//! Self-delimiting byte framing for sequences of integers written in base phi.
//!
//! Two formats turn a sequence of `u64` values into a byte buffer:
//! - [`delimited`] (format A): escaped digit strings joined by `101`,
//!   left-padded to a byte boundary.
//! - [`prefixed`] (format B): a format A encoded table of digit counts, the
//!   frame delimiter `1010101`, then the raw digits, right-padded.
//!
//! Decoding is all-or-nothing: any framing violation yields a [`FrameError`]
//! and no partial sequence.

pub mod bits;
pub mod config;
pub mod delimited;
pub mod error;
pub mod prefixed;

pub use bits::{pack, unpack, Align};
pub use config::{CodecConfig, DEFAULT_MAX_BUFFER, DEFAULT_MAX_ELEMENTS};
pub use delimited::{decode, encode, DelimitedCodec, DELIMITER, ESCAPE_SUFFIX};
pub use error::{ErrorKind, FrameError, Result};
pub use prefixed::{l1decode, l1encode, PrefixedCodec, FRAME_DELIMITER};
