//! Joint peak normalization and 16-bit quantization.

/// Full-scale magnitude a normalized peak maps to.
pub const FULL_SCALE: f64 = i16::MAX as f64;

/// Per-channel quantized samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Quantized {
    pub left: Vec<i16>,
    pub right: Vec<i16>,
}

/// Largest finite absolute value across both channels, 0.0 for silence.
pub fn peak(left: &[f64], right: &[f64]) -> f64 {
    left.iter()
        .chain(right)
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0f64, |m, v| m.max(v.abs()))
}

/// Scales both channels by one shared factor so the peak lands on `FULL_SCALE`.
/// Non-finite inputs and an all-zero buffer quantize to 0.
pub fn quantize(left: &[f64], right: &[f64]) -> Quantized {
    let peak = peak(left, right);
    Quantized {
        left: quantize_channel(left, peak),
        right: quantize_channel(right, peak),
    }
}

fn quantize_channel(values: &[f64], peak: f64) -> Vec<i16> {
    if peak == 0.0 {
        return vec![0; values.len()];
    }
    values.iter().map(|&v| quantize_sample(v, peak)).collect()
}

fn quantize_sample(value: f64, peak: f64) -> i16 {
    if !value.is_finite() {
        return 0;
    }
    // |value| <= peak, so the ratio stays in [-1, 1]
    (value / peak * FULL_SCALE).round().clamp(-FULL_SCALE, FULL_SCALE) as i16
}

#[cfg(test)]
mod tests {
    use super::{peak, quantize, FULL_SCALE};

    #[test]
    fn peak_spans_both_channels() {
        assert_eq!(peak(&[0.1, -0.3], &[0.2, 0.25]), 0.3);
        assert_eq!(peak(&[0.1], &[-2.0]), 2.0);
        assert_eq!(peak(&[], &[]), 0.0);
    }

    #[test]
    fn peak_ignores_non_finite() {
        assert_eq!(peak(&[f64::NAN, 0.5], &[f64::INFINITY, -0.75]), 0.75);
    }

    #[test]
    fn silence_quantizes_to_zero() {
        let q = quantize(&[0.0; 8], &[0.0; 8]);
        assert_eq!(q.left, vec![0; 8]);
        assert_eq!(q.right, vec![0; 8]);
    }

    #[test]
    fn empty_input() {
        let q = quantize(&[], &[]);
        assert!(q.left.is_empty() && q.right.is_empty());
    }

    #[test]
    fn peak_maps_to_full_scale() {
        let q = quantize(&[0.5, -1.0, 0.25], &[2.0, 0.0, -2.0]);
        assert_eq!(q.right, vec![32767, 0, -32767]);
        assert_eq!(q.left, vec![8192, -16384, 4096]);
    }

    #[test]
    fn joint_normalization_keeps_channel_ratio() {
        let q = quantize(&[1.0, -1.0], &[0.1, -0.1]);
        assert_eq!(q.left, vec![32767, -32767]);
        assert_eq!(q.right, vec![3277, -3277]);
    }

    #[test]
    fn tiny_peak_still_normalizes() {
        let q = quantize(&[1e-300, -2.5e-301], &[0.0, 0.0]);
        assert_eq!(q.left, vec![32767, -8192]);
    }

    #[test]
    fn non_finite_samples_become_zero() {
        let q = quantize(&[f64::NAN, 1.0], &[f64::NEG_INFINITY, -0.5]);
        assert_eq!(q.left, vec![0, 32767]);
        assert_eq!(q.right, vec![0, -16384]);
    }

    #[test]
    fn outputs_never_exceed_full_scale() {
        let left: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.37).sin() * 3.3).collect();
        let right: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.11).cos() * -1.7).collect();
        let q = quantize(&left, &right);
        let max = q.left.iter().chain(&q.right).map(|v| v.unsigned_abs()).max().unwrap();
        assert_eq!(max as f64, FULL_SCALE);
    }
}
