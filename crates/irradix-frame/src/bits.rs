//! Conversion between `'0'`/`'1'` bit strings and byte buffers.
//!
//! Bits are packed most significant first within each byte. Strings whose
//! length is not a multiple of 8 are padded with zero bits on the side chosen
//! by the calling format.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};

/// Which end of the bit string receives the zero padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Pad before the first bit (the delimited format).
    Left,
    /// Pad after the last bit (the length-prefixed format).
    Right,
}

/// Number of padding bits needed to reach a byte boundary.
pub fn padding_for(len: usize) -> usize {
    (8 - len % 8) % 8
}

/// Pack a bit string into bytes.
///
/// An empty bit string packs to an empty buffer.
pub fn pack(bits: &str, align: Align) -> Result<Bytes> {
    if let Some((position, found)) = bits.char_indices().find(|(_, c)| !matches!(c, '0' | '1')) {
        return Err(FrameError::InvalidBit { position, found });
    }

    let pad = padding_for(bits.len());
    let mut packer = Packer::with_capacity((bits.len() + pad) / 8);
    let data = bits.bytes().map(|b| b == b'1');
    match align {
        Align::Left => {
            packer.extend(std::iter::repeat_n(false, pad));
            packer.extend(data);
        }
        Align::Right => {
            packer.extend(data);
            packer.extend(std::iter::repeat_n(false, pad));
        }
    }
    Ok(packer.finish())
}

/// Expand every byte into eight `'0'`/`'1'` characters.
pub fn unpack(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for shift in (0..8).rev() {
            out.push(if (byte >> shift) & 1 == 1 { '1' } else { '0' });
        }
    }
    out
}

struct Packer {
    dst: BytesMut,
    current: u8,
    filled: u8,
}

impl Packer {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            dst: BytesMut::with_capacity(capacity),
            current: 0,
            filled: 0,
        }
    }

    fn extend(&mut self, bits: impl Iterator<Item = bool>) {
        for bit in bits {
            self.current = (self.current << 1) | u8::from(bit);
            self.filled += 1;
            if self.filled == 8 {
                self.dst.put_u8(self.current);
                self.current = 0;
                self.filled = 0;
            }
        }
    }

    fn finish(self) -> Bytes {
        debug_assert_eq!(self.filled, 0, "bit string was not padded to a byte boundary");
        self.dst.freeze()
    }
}
