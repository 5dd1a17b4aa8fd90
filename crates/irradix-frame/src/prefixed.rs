//! Length-prefixed sequence framing (format B).
//!
//! Wire format:
//! ```text
//! ┌───────────────────────┬───────────┬──────────────────────┬─────────┐
//! │ Length table          │ 1010101   │ Data                 │ Padding │
//! │ (format A bits of the │ (frame    │ (raw base-phi digits │ (0-7    │
//! │ digit count per item) │ delimiter)│ of (n + 1) * 2)      │ zeros)  │
//! └───────────────────────┴───────────┴──────────────────────┴─────────┘
//! ```
//! The length table never contains the frame delimiter: its `101` runs never
//! overlap and it never ends in `10`, so the first `1010101` in the stream is
//! always the real boundary.

use bytes::Bytes;
use irradix_radix::{DigitString, ExactPhi, PhiRadix};
use tracing::{debug, trace};

use crate::bits::{pack, unpack, Align};
use crate::config::CodecConfig;
use crate::delimited::{transform, untransform, DelimitedCodec};
use crate::error::{FrameError, Result};

/// Boundary between the length table and the data region.
pub const FRAME_DELIMITER: &str = "1010101";

/// Encodes integer sequences as a length table followed by raw digits.
#[derive(Debug, Clone)]
pub struct PrefixedCodec<R = ExactPhi> {
    table: DelimitedCodec<R>,
}

impl PrefixedCodec<ExactPhi> {
    /// Create a codec using exact conversion and default limits.
    pub fn new() -> Self {
        Self::with_config(ExactPhi, CodecConfig::default())
    }
}

impl Default for PrefixedCodec<ExactPhi> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: PhiRadix> PrefixedCodec<R> {
    /// Create a codec with an explicit converter and default limits.
    pub fn with_radix(radix: R) -> Self {
        Self::with_config(radix, CodecConfig::default())
    }

    /// Create a codec with an explicit converter and limits.
    pub fn with_config(radix: R, config: CodecConfig) -> Self {
        Self {
            table: DelimitedCodec::with_config(radix, config),
        }
    }

    pub fn radix(&self) -> &R {
        self.table.radix()
    }

    pub fn config(&self) -> &CodecConfig {
        self.table.config()
    }

    /// Encode `nums` into a right-padded byte buffer.
    pub fn encode(&self, nums: &[u64]) -> Result<Bytes> {
        self.table.check_count(nums.len())?;

        let mut lengths = Vec::with_capacity(nums.len());
        let mut data = String::new();
        for &n in nums {
            let digits = self.radix().to_digits(transform(n))?;
            trace!(value = n, digits = %digits, "encoded element");
            lengths.push(digits.len() as u64);
            data.push_str(digits.as_str());
        }

        let table = self.table.encode_bits(&lengths)?;
        let mut bits = String::with_capacity(table.len() + FRAME_DELIMITER.len() + data.len());
        bits.push_str(&table);
        bits.push_str(FRAME_DELIMITER);
        bits.push_str(&data);

        let bytes = pack(&bits, Align::Right)?;
        debug!(
            elements = nums.len(),
            table_bits = table.len(),
            data_bits = data.len(),
            bytes = bytes.len(),
            "encoded length-prefixed sequence"
        );
        Ok(bytes)
    }

    /// Decode a buffer produced by [`encode`](Self::encode).
    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<u64>> {
        let max = self.config().max_buffer_size;
        if bytes.len() > max {
            return Err(FrameError::BufferTooLarge {
                size: bytes.len(),
                max,
            });
        }

        let bits = unpack(bytes);
        let boundary = bits
            .find(FRAME_DELIMITER)
            .ok_or(FrameError::MissingFrameDelimiter)?;
        let table = &bits[..boundary];
        let data = &bits[boundary + FRAME_DELIMITER.len()..];

        let lengths = self.table.decode_bits(table)?;
        let needed = lengths.iter().fold(0usize, |acc, &len| {
            acc.saturating_add(usize::try_from(len).unwrap_or(usize::MAX))
        });
        if needed > data.len() {
            return Err(FrameError::Truncated {
                needed,
                available: data.len(),
            });
        }

        let mut values = Vec::with_capacity(lengths.len());
        let mut cursor = 0usize;
        for &len in &lengths {
            // `needed` fits in `data`, so every length fits in usize.
            let len = len as usize;
            let slice = &data[cursor..cursor + len];
            cursor += len;
            if slice.is_empty() || slice.starts_with('0') {
                return Err(FrameError::malformed(format!(
                    "element {} has a non-canonical digit string {slice:?}",
                    values.len()
                )));
            }
            let digits: DigitString = slice.parse()?;
            let value = untransform(self.radix().from_digits(&digits)?)?;
            trace!(value, digits = %digits, "decoded element");
            values.push(value);
        }

        let trailing = &data[cursor..];
        if trailing.len() >= 8 || trailing.contains('1') {
            return Err(FrameError::TrailingBits {
                count: trailing.len(),
            });
        }

        debug!(
            bytes = bytes.len(),
            elements = values.len(),
            table_bits = table.len(),
            data_bits = cursor,
            "decoded length-prefixed sequence"
        );
        Ok(values)
    }
}

/// Encode with the default length-prefixed codec.
pub fn l1encode(nums: &[u64]) -> Result<Bytes> {
    PrefixedCodec::new().encode(nums)
}

/// Decode with the default length-prefixed codec.
pub fn l1decode(bytes: &[u8]) -> Result<Vec<u64>> {
    PrefixedCodec::new().decode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use irradix_radix::FloatPhi;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(&[0], &[245, 96]; "escaped length")]
    #[test_case(&[1, 2, 3], &[155, 55, 150, 172, 242]; "small run")]
    #[test_case(&[5, 130_000], &[133, 252, 181, 97, 147, 228, 146]; "mixed magnitudes")]
    fn test_known_buffers(nums: &[u64], expected: &[u8]) {
        let bytes = l1encode(nums).unwrap();
        assert_eq!(bytes.as_ref(), expected);
        assert_eq!(l1decode(&bytes).unwrap(), nums);
    }

    #[test]
    fn test_empty_sequence() {
        let bytes = l1encode(&[]).unwrap();
        assert_eq!(bytes.as_ref(), &[0xAA]);
        assert_eq!(l1decode(&bytes).unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn test_roundtrip_example() {
        let bytes = l1encode(&[5, 130_000]).unwrap();
        assert_eq!(l1decode(&bytes).unwrap(), vec![5, 130_000]);
    }

    #[test]
    fn test_extreme_values() {
        let nums = [u64::MAX, 0, 1 << 63, u64::MAX - 1];
        assert_eq!(l1decode(&l1encode(&nums).unwrap()).unwrap(), nums);
    }

    #[test]
    fn test_truncated_data() {
        let bytes = l1encode(&[5, 130_000]).unwrap();
        assert_eq!(
            l1decode(&bytes[..4]),
            Err(FrameError::Truncated {
                needed: 30,
                available: 6
            })
        );
    }

    #[test]
    fn test_missing_frame_delimiter() {
        let err = l1decode(&[0x00, 0xFF]).unwrap_err();
        assert_eq!(err, FrameError::MissingFrameDelimiter);
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert_eq!(l1decode(&[]), Err(FrameError::MissingFrameDelimiter));
    }

    #[test]
    fn test_trailing_bits_rejected() {
        let mut bytes = l1encode(&[5, 130_000]).unwrap().to_vec();
        bytes.push(0x00);
        assert_eq!(l1decode(&bytes), Err(FrameError::TrailingBits { count: 8 }));

        let mut bytes = l1encode(&[1]).unwrap().to_vec();
        let last = bytes.len() - 1;
        bytes[last] |= 0x01;
        assert!(matches!(
            l1decode(&bytes),
            Err(FrameError::TrailingBits { .. })
        ));
    }

    #[test]
    fn test_malformed_length_table() {
        // "11" decodes to the odd value 3, which no length can produce.
        let bytes = pack(&format!("11{FRAME_DELIMITER}"), Align::Right).unwrap();
        let err = l1decode(&bytes).unwrap_err();
        assert!(matches!(err, FrameError::Malformed { .. }));
    }

    #[test]
    fn test_zero_length_element_rejected() {
        // Length table holding a single zero: field "100101".
        let bytes = pack(&format!("100101{FRAME_DELIMITER}"), Align::Right).unwrap();
        assert!(matches!(
            l1decode(&bytes),
            Err(FrameError::Malformed { .. })
        ));
    }

    #[test]
    fn test_float_radix_matches_exact_for_small_values() {
        let nums = [0, 7, 5, 130_000];
        let float = PrefixedCodec::with_radix(FloatPhi::new());
        let bytes = float.encode(&nums).unwrap();
        assert_eq!(bytes, l1encode(&nums).unwrap());
        assert_eq!(float.decode(&bytes).unwrap(), nums);
    }

    #[test]
    fn test_element_limit() {
        let config = CodecConfig {
            max_elements: 1,
            ..CodecConfig::default()
        };
        let codec = PrefixedCodec::with_config(ExactPhi, config);
        assert_eq!(
            codec.encode(&[1, 2]),
            Err(FrameError::TooManyElements { count: 2, max: 1 })
        );
    }

    proptest! {
        #[test]
        fn prop_roundtrip(nums in prop::collection::vec(any::<u64>(), 0..64)) {
            let bytes = l1encode(&nums).unwrap();
            prop_assert_eq!(l1decode(&bytes).unwrap(), nums);
        }

        #[test]
        fn prop_roundtrip_small_values(nums in prop::collection::vec(0..1000u64, 0..256)) {
            let bytes = l1encode(&nums).unwrap();
            prop_assert_eq!(l1decode(&bytes).unwrap(), nums);
        }

        #[test]
        fn prop_frame_delimiter_only_at_boundary(lengths in prop::collection::vec(any::<u64>(), 0..32)) {
            let table = DelimitedCodec::new().encode_bits(&lengths).unwrap();
            let framed = format!("{table}{FRAME_DELIMITER}");
            prop_assert_eq!(framed.find(FRAME_DELIMITER), Some(table.len()));
        }

        #[test]
        fn prop_truncation_never_decodes(nums in prop::collection::vec(any::<u64>(), 1..16), cut in 1usize..8) {
            let bytes = l1encode(&nums).unwrap();
            let keep = bytes.len().saturating_sub(cut);
            prop_assert!(l1decode(&bytes[..keep]).is_err());
        }
    }
}
