mod config;
mod error;
mod header;
mod interleave;
mod quantize;
mod signal;
mod sound;
mod wav;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use config::{Config, Preset, SineComponent};
use error::SynthError;
use header::WavHeader;
use quantize::peak;
use signal::tangent_sweep;
use sound::{Channel, Sound};
use wav::write_wav_file;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CliPreset {
    Sweep,
    None,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CliChannel {
    Left,
    Right,
    Both,
}

impl From<CliPreset> for Preset {
    fn from(p: CliPreset) -> Self {
        match p {
            CliPreset::Sweep => Preset::Sweep,
            CliPreset::None => Preset::None,
        }
    }
}

impl From<CliChannel> for Channel {
    fn from(c: CliChannel) -> Self {
        match c {
            CliChannel::Left => Channel::Left,
            CliChannel::Right => Channel::Right,
            CliChannel::Both => Channel::Both,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "wav-synth")]
#[command(about = "Synthesize a 16-bit stereo WAV file from analytic signals")]
struct Args {
    /// Output WAV file (default: file.wav)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Clip length in seconds (default: 5)
    #[arg(short, long)]
    duration: Option<f64>,

    /// Built-in signal to start from
    #[arg(long, value_enum, default_value_t = CliPreset::Sweep)]
    preset: CliPreset,

    /// Channel(s) the preset is written into
    #[arg(long, value_enum, default_value_t = CliChannel::Both)]
    channel: CliChannel,

    /// Extra sine component, FREQ[:AMP[:PHASE[:left|right|both]]]. Repeatable
    #[arg(long, value_parser = parse_sine)]
    sine: Vec<SineComponent>,
}

fn parse_sine(s: &str) -> Result<SineComponent, String> {
    let parts: Vec<&str> = s.split(':').map(str::trim).collect();
    if parts.is_empty() || parts.len() > 4 || parts[0].is_empty() {
        return Err("sine must be FREQ[:AMP[:PHASE[:CHANNEL]]] (e.g. 440:0.5:0:left)".to_string());
    }
    let number = |i: usize, name: &str, default: f64| -> Result<f64, String> {
        match parts.get(i) {
            Some(p) => {
                let v: f64 = p.parse().map_err(|_| format!("invalid {}: {:?}", name, p))?;
                if v.is_finite() {
                    Ok(v)
                } else {
                    Err(format!("{} must be finite", name))
                }
            }
            None => Ok(default),
        }
    };
    let frequency = number(0, "frequency", 0.0)?;
    let amplitude = number(1, "amplitude", 1.0)?;
    let phase = number(2, "phase", 0.0)?;
    let channel = match parts.get(3) {
        Some(c) => CliChannel::from_str(c, true)
            .map_err(|_| format!("invalid channel {:?} (left, right or both)", c))?
            .into(),
        None => Channel::Both,
    };
    Ok(SineComponent {
        frequency,
        amplitude,
        phase,
        channel,
    })
}

/// Build the header and accumulate every configured component.
/// `on_component` runs after each synthesis pass.
fn synthesize(
    config: &Config,
    mut on_component: impl FnMut(),
) -> Result<(WavHeader, Sound), SynthError> {
    let mut header = WavHeader::new(config.duration)?;
    let mut sound = Sound::new(config.duration, &header)?;

    if config.preset == Preset::Sweep {
        sound.add_signal(tangent_sweep(config.duration), config.preset_channel);
        on_component();
    }
    for c in &config.sines {
        sound.add_sine(c.frequency, c.amplitude, c.phase, c.channel);
        on_component();
    }

    // whole frames only: the duration-derived size can overshoot by a partial frame
    let data_size = u32::try_from(sound.data_size())
        .map_err(|_| SynthError::DurationTooLong(config.duration))?;
    header.set_data_size(data_size)?;
    Ok((header, sound))
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let defaults = Config::default();
    let config = Config {
        duration: args.duration.unwrap_or(defaults.duration),
        output: args.output.unwrap_or_else(|| defaults.output.clone()),
        preset: args.preset.into(),
        preset_channel: args.channel.into(),
        sines: args.sine,
    };

    println!(
        "Synthesizing {}s of stereo audio ({} component(s))",
        config.duration,
        config.component_count()
    );

    let pb = ProgressBar::new(config.component_count() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} components")?
            .progress_chars("=>-"),
    );
    pb.set_message("Synthesizing");
    let (header, sound) = synthesize(&config, || pb.inc(1))?;
    pb.finish_with_message("Synthesis done");

    let data = sound.finalize();
    println!(
        "Format: PCM ({}), {} Hz, {} channels, {}-bit",
        header.audio_format(),
        header.sample_rate(),
        header.channels(),
        header.bits_per_sample()
    );
    println!(
        "Frames: {} ({}s), data bytes: {}, chunk size: {}, peak before normalization: {:.4}",
        header.frame_count(),
        sound.duration(),
        header.data_size(),
        header.chunk_size(),
        peak(sound.left(), sound.right())
    );

    println!("Writing WAV: {:?}", config.output);
    write_wav_file(&config.output, &header, &data)?;

    println!("done");
    Ok(())
}
