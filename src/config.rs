//! Run configuration: clip length, output path and the signals to mix in.

use std::path::PathBuf;

use crate::sound::Channel;

/// Built-in signal mixed in before any explicit sine components.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Tangent/cotangent frequency sweep across the whole clip.
    Sweep,
    None,
}

/// One `--sine` component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SineComponent {
    /// Frequency (Hz).
    pub frequency: f64,
    /// Linear amplitude before normalization.
    pub amplitude: f64,
    /// Phase offset (radians).
    pub phase: f64,
    pub channel: Channel,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Clip length (seconds).
    pub duration: f64,
    /// Output WAV file.
    pub output: PathBuf,
    pub preset: Preset,
    /// Channel(s) the preset is written into.
    pub preset_channel: Channel,
    pub sines: Vec<SineComponent>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration: 5.0,
            output: PathBuf::from("file.wav"),
            preset: Preset::Sweep,
            preset_channel: Channel::Both,
            sines: Vec::new(),
        }
    }
}

impl Config {
    /// Number of synthesis passes this configuration runs.
    pub fn component_count(&self) -> usize {
        let preset = match self.preset {
            Preset::Sweep => 1,
            Preset::None => 0,
        };
        preset + self.sines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, Preset, SineComponent};
    use crate::sound::Channel;

    #[test]
    fn default_renders_five_second_sweep() {
        let c = Config::default();
        assert_eq!(c.duration, 5.0);
        assert_eq!(c.output.to_str(), Some("file.wav"));
        assert_eq!(c.preset, Preset::Sweep);
        assert_eq!(c.component_count(), 1);
    }

    #[test]
    fn component_count_includes_sines() {
        let tone = SineComponent { frequency: 440.0, amplitude: 1.0, phase: 0.0, channel: Channel::Left };
        let c = Config {
            preset: Preset::None,
            sines: vec![tone, tone],
            ..Config::default()
        };
        assert_eq!(c.component_count(), 2);
    }
}
