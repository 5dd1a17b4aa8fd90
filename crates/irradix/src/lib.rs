//! Compact golden-ratio base codec for integer sequences.
//!
//! irradix writes each integer in base phi (digits `0`/`1`) and frames a
//! sequence of such digit strings into a byte buffer that can be decoded
//! without an external length table.
//!
//! # Crate Structure
//!
//! - [`radix`]: conversion between integers and base-phi digit strings
//! - [`frame`]: bit packing plus the delimited and length-prefixed formats
//!
//! ```
//! let bytes = irradix::l1encode(&[5, 130_000]).unwrap();
//! assert_eq!(irradix::l1decode(&bytes).unwrap(), vec![5, 130_000]);
//! ```

/// Re-export radix types.
pub mod radix {
    pub use irradix_radix::*;
}

/// Re-export frame types.
pub mod frame {
    pub use irradix_frame::*;
}

pub use irradix_frame::{decode, encode, l1decode, l1encode, CodecConfig, FrameError};
pub use irradix_radix::{from_digits, to_digits, DigitString, RadixError};
