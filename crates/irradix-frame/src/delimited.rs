//! Delimited sequence framing (format A).
//!
//! Wire format:
//! ```text
//! [zero padding][field 0] 101 [field 1] 101 ... [field n-1]
//! ```
//! Each field is the base-phi digit string of `(n + 1) * 2`. Those digit
//! strings never contain `101` and always start with `1`, so the only way a
//! delimiter can be misread is a field ending in `10` followed by `101`. Such
//! fields get the suffix `0101`, which surfaces on decode as the field
//! (ending in `100`) followed by an empty split segment. The whole bit string
//! is zero-padded on the left to a byte boundary.

use bytes::Bytes;
use irradix_radix::{DigitString, ExactPhi, PhiRadix};
use tracing::{debug, trace};

use crate::bits::{pack, unpack, Align};
use crate::config::CodecConfig;
use crate::error::{FrameError, Result};

/// Separator between consecutive fields.
pub const DELIMITER: &str = "101";

/// Appended to any field whose digits end in [`ESCAPE_TRIGGER`].
pub const ESCAPE_SUFFIX: &str = "0101";

/// Field ending that would fuse with a following delimiter.
pub const ESCAPE_TRIGGER: &str = "10";

/// Map `n` onto an even value `>= 2`.
pub(crate) fn transform(n: u64) -> u128 {
    (u128::from(n) + 1) * 2
}

/// Inverse of [`transform`].
pub(crate) fn untransform(value: u128) -> Result<u64> {
    if value < 2 || value % 2 != 0 {
        return Err(FrameError::malformed(format!(
            "decoded value {value} is not an encoded integer"
        )));
    }
    u64::try_from(value / 2 - 1).map_err(|_| {
        FrameError::malformed(format!("decoded value {value} does not fit in 64 bits"))
    })
}

/// Encodes integer sequences as delimiter-separated base-phi fields.
#[derive(Debug, Clone)]
pub struct DelimitedCodec<R = ExactPhi> {
    radix: R,
    config: CodecConfig,
}

impl DelimitedCodec<ExactPhi> {
    /// Create a codec using exact conversion and default limits.
    pub fn new() -> Self {
        Self::with_config(ExactPhi, CodecConfig::default())
    }
}

impl Default for DelimitedCodec<ExactPhi> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: PhiRadix> DelimitedCodec<R> {
    /// Create a codec with an explicit converter and default limits.
    pub fn with_radix(radix: R) -> Self {
        Self::with_config(radix, CodecConfig::default())
    }

    /// Create a codec with an explicit converter and limits.
    pub fn with_config(radix: R, config: CodecConfig) -> Self {
        Self { radix, config }
    }

    pub fn radix(&self) -> &R {
        &self.radix
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode `nums` into a left-padded byte buffer.
    pub fn encode(&self, nums: &[u64]) -> Result<Bytes> {
        let bits = self.encode_bits(nums)?;
        let bytes = pack(&bits, Align::Left)?;
        debug!(
            elements = nums.len(),
            bits = bits.len(),
            bytes = bytes.len(),
            "encoded delimited sequence"
        );
        Ok(bytes)
    }

    /// Decode a buffer produced by [`encode`](Self::encode).
    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<u64>> {
        if bytes.len() > self.config.max_buffer_size {
            return Err(FrameError::BufferTooLarge {
                size: bytes.len(),
                max: self.config.max_buffer_size,
            });
        }

        let bits = unpack(bytes);
        let values = match bits.find('1') {
            Some(start) => self.decode_bits(&bits[start..])?,
            None => Vec::new(),
        };
        debug!(
            bytes = bytes.len(),
            elements = values.len(),
            "decoded delimited sequence"
        );
        Ok(values)
    }

    /// Encode `nums` into an unpadded bit string.
    pub fn encode_bits(&self, nums: &[u64]) -> Result<String> {
        self.check_count(nums.len())?;

        let mut bits = String::new();
        for (i, &n) in nums.iter().enumerate() {
            if i > 0 {
                bits.push_str(DELIMITER);
            }
            let digits = self.radix.to_digits(transform(n))?;
            let escaped = digits.as_str().ends_with(ESCAPE_TRIGGER);
            trace!(value = n, digits = %digits, escaped, "encoded field");
            bits.push_str(digits.as_str());
            if escaped {
                bits.push_str(ESCAPE_SUFFIX);
            }
        }
        Ok(bits)
    }

    /// Decode a bit string produced by [`encode_bits`](Self::encode_bits).
    ///
    /// The input must start at the first field; no padding is stripped.
    pub fn decode_bits(&self, bits: &str) -> Result<Vec<u64>> {
        let mut values = Vec::new();
        if bits.is_empty() {
            return Ok(values);
        }

        let mut parts = bits.split(DELIMITER).peekable();
        while let Some(part) = parts.next() {
            if values.len() == self.config.max_elements {
                return Err(FrameError::TooManyElements {
                    count: values.len() + 1,
                    max: self.config.max_elements,
                });
            }
            if part.is_empty() {
                return Err(FrameError::malformed(format!(
                    "empty field at index {}",
                    values.len()
                )));
            }
            if part.starts_with('0') {
                return Err(FrameError::malformed(format!(
                    "field {} starts with a zero digit",
                    values.len()
                )));
            }

            let escaped = parts.next_if(|next| next.is_empty()).is_some();
            let field = if escaped {
                match part.strip_suffix('0') {
                    Some(raw) if raw.ends_with(ESCAPE_TRIGGER) => raw,
                    _ => {
                        return Err(FrameError::malformed(format!(
                            "field {} is followed by an escape but does not end in 100",
                            values.len()
                        )))
                    }
                }
            } else if part.ends_with(ESCAPE_TRIGGER) {
                return Err(FrameError::malformed(format!(
                    "field {} ends in 10 without an escape",
                    values.len()
                )));
            } else {
                part
            };

            let digits: DigitString = field.parse()?;
            let value = untransform(self.radix.from_digits(&digits)?)?;
            trace!(value, digits = %digits, escaped, "decoded field");
            values.push(value);
        }
        Ok(values)
    }

    pub(crate) fn check_count(&self, count: usize) -> Result<()> {
        if count > self.config.max_elements {
            return Err(FrameError::TooManyElements {
                count,
                max: self.config.max_elements,
            });
        }
        Ok(())
    }
}

/// Encode with the default delimited codec.
pub fn encode(nums: &[u64]) -> Result<Bytes> {
    DelimitedCodec::new().encode(nums)
}

/// Decode with the default delimited codec.
pub fn decode(bytes: &[u8]) -> Result<Vec<u64>> {
    DelimitedCodec::new().decode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use irradix_radix::{FloatPhi, RadixError};
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(&[0], &[0x25]; "escaped zero")]
    #[test_case(&[1], &[0x04]; "one")]
    #[test_case(&[0, 0], &[75, 101]; "two escaped fields")]
    #[test_case(&[5, 130_000], &[16, 185, 62, 73, 37]; "mixed magnitudes")]
    #[test_case(&[1, 2, 3], &[151, 217]; "small run")]
    fn test_known_buffers(nums: &[u64], expected: &[u8]) {
        let bytes = encode(nums).unwrap();
        assert_eq!(bytes.as_ref(), expected);
        assert_eq!(decode(&bytes).unwrap(), nums);
    }

    #[test]
    fn test_empty_sequence() {
        let bytes = encode(&[]).unwrap();
        assert!(bytes.is_empty());
        assert_eq!(decode(&bytes).unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn test_escape_applied_to_trailing_10() {
        let codec = DelimitedCodec::new();
        // (0 + 1) * 2 = 2 -> "10"; (4 + 1) * 2 = 10 -> "1110".
        assert_eq!(codec.encode_bits(&[0]).unwrap(), "100101");
        assert_eq!(codec.encode_bits(&[4]).unwrap(), "11100101");
        assert_eq!(codec.encode_bits(&[1]).unwrap(), "100");
        assert_eq!(codec.encode_bits(&[4, 0, 1]).unwrap(), "11100101101100101101100");
        assert_eq!(codec.decode_bits("11100101101100101101100").unwrap(), vec![4, 0, 1]);
    }

    #[test]
    fn test_escaped_field_last_in_sequence() {
        let codec = DelimitedCodec::new();
        let bits = codec.encode_bits(&[7, 8]).unwrap();
        assert!(bits.ends_with(ESCAPE_SUFFIX));
        assert_eq!(codec.decode_bits(&bits).unwrap(), vec![7, 8]);
    }

    #[test]
    fn test_delimiter_never_inside_a_field() {
        let codec = DelimitedCodec::new();
        for n in 0..20_000u64 {
            let field = codec.encode_bits(&[n]).unwrap();
            let raw = field.strip_suffix(ESCAPE_SUFFIX).unwrap_or(&field);
            assert!(!raw.contains(DELIMITER), "{n} -> {field}");
            assert_eq!(codec.decode_bits(&field).unwrap(), vec![n]);
        }
    }

    #[test]
    fn test_leading_zero_bytes_are_padding() {
        assert_eq!(decode(&[0x00, 0x25]).unwrap(), vec![0]);
        assert_eq!(decode(&[0x00, 0x00]).unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn test_extreme_values() {
        let nums = [u64::MAX, 0, u64::MAX - 1, 1 << 63];
        assert_eq!(decode(&encode(&nums).unwrap()).unwrap(), nums);
    }

    #[test_case("101"; "bare delimiter")]
    #[test_case("100101101"; "dangling delimiter")]
    #[test_case("1"; "value below transform range")]
    #[test_case("11"; "odd value")]
    #[test_case("110"; "unescaped trailing 10")]
    #[test_case("111101"; "escape without 100")]
    #[test_case("100101101101100"; "two empty segments")]
    #[test_case("0100"; "leading zero digit")]
    fn test_malformed_bits(bits: &str) {
        let err = DelimitedCodec::new().decode_bits(bits).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput, "{bits}: {err}");
    }

    #[test]
    fn test_value_beyond_u64_is_malformed() {
        let digits = ExactPhi.to_digits((u128::from(u64::MAX) + 2) * 2).unwrap();
        let err = DelimitedCodec::new().decode_bits(digits.as_str()).unwrap_err();
        assert!(matches!(err, FrameError::Malformed { .. }));
    }

    #[test]
    fn test_buffer_limit() {
        let config = CodecConfig {
            max_buffer_size: 1,
            ..CodecConfig::default()
        };
        let codec = DelimitedCodec::with_config(ExactPhi, config);
        assert_eq!(
            codec.decode(&[0, 0x25]),
            Err(FrameError::BufferTooLarge { size: 2, max: 1 })
        );
    }

    #[test]
    fn test_element_limit() {
        let config = CodecConfig {
            max_elements: 2,
            ..CodecConfig::default()
        };
        let codec = DelimitedCodec::with_config(ExactPhi, config);
        assert_eq!(
            codec.encode(&[1, 2, 3]),
            Err(FrameError::TooManyElements { count: 3, max: 2 })
        );
        let bytes = encode(&[1, 2, 3]).unwrap();
        assert!(matches!(
            codec.decode(&bytes),
            Err(FrameError::TooManyElements { max: 2, .. })
        ));
    }

    #[test]
    fn test_float_radix_matches_exact_for_small_values() {
        let nums = [0, 1, 5, 130_000, 1_000_000];
        let float = DelimitedCodec::with_radix(FloatPhi::new());
        let bytes = float.encode(&nums).unwrap();
        assert_eq!(bytes, encode(&nums).unwrap());
        assert_eq!(float.decode(&bytes).unwrap(), nums);
    }

    #[test]
    fn test_float_radix_refuses_large_values() {
        let float = DelimitedCodec::with_radix(FloatPhi::new());
        let err = float.encode(&[1 << 40]).unwrap_err();
        assert!(matches!(
            err,
            FrameError::Radix(RadixError::PrecisionLimitExceeded { .. })
        ));
        assert_eq!(err.kind(), ErrorKind::PrecisionLimitExceeded);
    }

    proptest! {
        #[test]
        fn prop_roundtrip(nums in prop::collection::vec(any::<u64>(), 0..64)) {
            let bytes = encode(&nums).unwrap();
            prop_assert_eq!(decode(&bytes).unwrap(), nums);
        }

        #[test]
        fn prop_roundtrip_small_values(nums in prop::collection::vec(0..64u64, 0..256)) {
            let bytes = encode(&nums).unwrap();
            prop_assert_eq!(decode(&bytes).unwrap(), nums);
        }

        #[test]
        fn prop_bits_never_end_in_escape_trigger(nums in prop::collection::vec(any::<u64>(), 1..16)) {
            let bits = DelimitedCodec::new().encode_bits(&nums).unwrap();
            prop_assert!(!bits.ends_with(ESCAPE_TRIGGER));
        }
    }
}
