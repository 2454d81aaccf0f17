//! Stereo accumulation buffer for additive synthesis.

use std::f64::consts::PI;

use crate::error::{check_duration, SynthError};
use crate::header::WavHeader;
use crate::interleave::interleave;
use crate::quantize::quantize;

/// Which accumulation array(s) a synthesis call writes into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Channel {
    Left,
    Right,
    #[default]
    Both,
}

impl Channel {
    fn left(self) -> bool {
        matches!(self, Channel::Left | Channel::Both)
    }

    fn right(self) -> bool {
        matches!(self, Channel::Right | Channel::Both)
    }
}

/// Owns one `f64` array per channel, index-aligned: index `i` is `i / sample_rate` seconds.
#[derive(Clone, Debug)]
pub struct Sound {
    duration: f64,
    sample_rate: u32,
    left: Vec<f64>,
    right: Vec<f64>,
}

impl Sound {
    /// Zeroed buffer of `floor(duration * sample_rate)` frames.
    /// Only the sample rate is read from `header`.
    pub fn new(duration: f64, header: &WavHeader) -> Result<Self, SynthError> {
        let duration = check_duration(duration)?;
        let sample_rate = header.sample_rate();
        let count = (duration * sample_rate as f64).floor();
        if count > u32::MAX as f64 {
            return Err(SynthError::DurationTooLong(duration));
        }
        let count = count as usize;
        Ok(Self {
            duration,
            sample_rate,
            left: vec![0.0; count],
            right: vec![0.0; count],
        })
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn sample_count(&self) -> usize {
        self.left.len()
    }

    pub fn left(&self) -> &[f64] {
        &self.left
    }

    pub fn right(&self) -> &[f64] {
        &self.right
    }

    /// Time in seconds of sample index `i`.
    pub fn time_at(&self, i: usize) -> f64 {
        i as f64 / self.sample_rate as f64
    }

    /// Adds `amplitude * sin(2π·frequency·t + phase)`.
    pub fn add_sine(&mut self, frequency: f64, amplitude: f64, phase: f64, channel: Channel) {
        self.add_signal(
            move |t| amplitude * (2.0 * PI * frequency * t + phase).sin(),
            channel,
        );
    }

    /// Adds `f(t)` at every sample time.
    pub fn add_signal<F>(&mut self, f: F, channel: Channel)
    where
        F: Fn(f64) -> f64,
    {
        for i in 0..self.sample_count() {
            let value = f(self.time_at(i));
            if channel.left() {
                self.left[i] += value;
            }
            if channel.right() {
                self.right[i] += value;
            }
        }
    }

    /// Peak-normalized, quantized, L/R interleaved samples ready for the data chunk.
    pub fn finalize(&self) -> Vec<i16> {
        let q = quantize(&self.left, &self.right);
        interleave(&q.left, &q.right)
    }

    /// Size in bytes of the data chunk `finalize` produces.
    pub fn data_size(&self) -> usize {
        self.sample_count() * 2 * std::mem::size_of::<i16>()
    }
}
