//! L/R interleaving for the data chunk.

/// `out[2k] = left[k]`, `out[2k + 1] = right[k]`.
/// Both channels come from the same buffer, so lengths always match.
pub fn interleave(left: &[i16], right: &[i16]) -> Vec<i16> {
    debug_assert_eq!(left.len(), right.len());
    left.iter()
        .zip(right)
        .flat_map(|(&l, &r)| [l, r])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::interleave;

    #[test]
    fn alternates_left_then_right() {
        let out = interleave(&[1, 2, 3], &[-1, -2, -3]);
        assert_eq!(out, vec![1, -1, 2, -2, 3, -3]);
    }

    #[test]
    fn empty_channels() {
        assert!(interleave(&[], &[]).is_empty());
    }

    #[test]
    fn every_index_is_written() {
        let left: Vec<i16> = (0..500).map(|i| i as i16).collect();
        let right: Vec<i16> = (0..500).map(|i| -(i as i16) - 1).collect();
        let out = interleave(&left, &right);
        assert_eq!(out.len(), 1000);
        for k in 0..500 {
            assert_eq!(out[2 * k], left[k]);
            assert_eq!(out[2 * k + 1], right[k]);
        }
    }
}
