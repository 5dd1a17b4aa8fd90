use std::fmt;
use std::str::FromStr;

use crate::error::RadixError;

/// A base-phi digit string, most significant digit first.
///
/// Every digit is `0` or `1`, so the text looks like a binary number even
/// though the positions weigh powers of phi rather than powers of two.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitString(String);

impl DigitString {
    /// Build from digits collected least significant first.
    pub(crate) fn from_lsb_first(digits: &[u8]) -> Self {
        let text = digits
            .iter()
            .rev()
            .map(|&d| if d == 0 { '0' } else { '1' })
            .collect();
        Self(text)
    }

    pub(crate) fn zero() -> Self {
        Self("0".to_string())
    }

    /// The digits as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a parsed or converted digit string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over digit values, most significant first.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for DigitString {
    type Err = RadixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(RadixError::Empty);
        }
        if let Some((position, found)) = s.char_indices().find(|(_, c)| !matches!(c, '0' | '1')) {
            return Err(RadixError::InvalidDigit { position, found });
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
