//! Size comparison printed by `l1encode -vv`.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeStats {
    pub elements: usize,
    /// Fixed-width size using the narrowest of 1/2/4/8 bytes that fits the maximum.
    pub baseline_bytes: usize,
    /// Sum of each value's bit length plus the bit length of that length.
    pub theoretical_bytes: usize,
    pub encoded_bytes: usize,
    pub vs_baseline_pct: Option<f64>,
    pub vs_theoretical_pct: Option<f64>,
}

impl SizeStats {
    pub fn compute(nums: &[u64], encoded_bytes: usize) -> Self {
        let width = match nums.iter().copied().max().unwrap_or(0) {
            0..=0xFF => 1,
            0x100..=0xFFFF => 2,
            0x1_0000..=0xFFFF_FFFF => 4,
            _ => 8,
        };
        let baseline_bytes = nums.len() * width;

        let theoretical_bits: usize = nums
            .iter()
            .map(|&n| {
                let len = bit_length(n);
                len + bit_length(len as u64)
            })
            .sum();
        let theoretical_bytes = theoretical_bits.div_ceil(8);

        Self {
            elements: nums.len(),
            baseline_bytes,
            theoretical_bytes,
            encoded_bytes,
            vs_baseline_pct: ratio(encoded_bytes, baseline_bytes),
            vs_theoretical_pct: ratio(encoded_bytes, theoretical_bytes),
        }
    }
}

/// Bits needed to write `n`; zero still takes one bit.
fn bit_length(n: u64) -> usize {
    (u64::BITS - n.leading_zeros()).max(1) as usize
}

fn ratio(encoded: usize, reference: usize) -> Option<f64> {
    (reference > 0).then(|| 100.0 * encoded as f64 / reference as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_mixed_magnitudes() {
        let stats = SizeStats::compute(&[5, 130_000], 7);
        assert_eq!(stats.baseline_bytes, 8);
        // 5: 3 + 2 bits, 130000: 17 + 5 bits.
        assert_eq!(stats.theoretical_bytes, 4);
        assert_eq!(stats.vs_baseline_pct, Some(87.5));
        assert_eq!(stats.vs_theoretical_pct, Some(175.0));
    }

    #[test]
    fn picks_width_from_maximum() {
        assert_eq!(SizeStats::compute(&[1, 255], 0).baseline_bytes, 2);
        assert_eq!(SizeStats::compute(&[256], 0).baseline_bytes, 2);
        assert_eq!(SizeStats::compute(&[65_536], 0).baseline_bytes, 4);
        assert_eq!(SizeStats::compute(&[u64::MAX], 0).baseline_bytes, 8);
    }

    #[test]
    fn empty_sequence_has_no_ratios() {
        let stats = SizeStats::compute(&[], 1);
        assert_eq!(stats.baseline_bytes, 0);
        assert_eq!(stats.theoretical_bytes, 0);
        assert_eq!(stats.vs_baseline_pct, None);
        assert_eq!(stats.vs_theoretical_pct, None);
    }

    #[test]
    fn zero_counts_as_one_bit() {
        assert_eq!(bit_length(0), 1);
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(u64::MAX), 64);
        assert_eq!(SizeStats::compute(&[0, 0, 0, 0], 2).theoretical_bytes, 1);
    }
}
