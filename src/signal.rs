//! Ready-made signal generators for `Sound::add_signal`.

use std::f64::consts::PI;

/// Frequency sweep driven by `tan` over the outer quarters of the clip and
/// by `cot` over the middle half, where the tangent runs off to infinity.
pub fn tangent_sweep(duration: f64) -> impl Fn(f64) -> f64 {
    let quarter = duration / 4.0;
    let period = 2.0 * duration;
    move |t| {
        let tan = (2.0 * PI * t / period).tan();
        if t > quarter && t < duration - quarter {
            (2.0 * PI / tan * 100.0).sin()
        } else {
            (2.0 * PI * tan * 100.0).sin()
        }
    }
}
