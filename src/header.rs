//! RIFF/WAVE header for 16-bit stereo PCM.

use crate::error::{check_duration, SynthError};

pub const SAMPLE_RATE: u32 = 44100;
pub const NUM_CHANNELS: u16 = 2;
pub const BITS_PER_SAMPLE: u16 = 16;
/// Size of the encoded header in bytes.
pub const HEADER_LEN: usize = 44;

const FMT_CHUNK_SIZE: u32 = 16;
const PCM_FORMAT: u16 = 1;
/// Bytes between the end of the chunk size field and the start of the data.
const CHUNK_OVERHEAD: u32 = (HEADER_LEN - 8) as u32;

/// Container header. Both size fields always move together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WavHeader {
    chunk_size: u32,
    sample_rate: u32,
    channels: u16,
    bits_per_sample: u16,
    subchunk2_size: u32,
}

impl Default for WavHeader {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_OVERHEAD,
            sample_rate: SAMPLE_RATE,
            channels: NUM_CHANNELS,
            bits_per_sample: BITS_PER_SAMPLE,
            subchunk2_size: 0,
        }
    }
}

impl WavHeader {
    /// Header for a clip of `duration` seconds.
    pub fn new(duration: f64) -> Result<Self, SynthError> {
        let mut header = Self::default();
        header.set_duration(duration)?;
        Ok(header)
    }

    pub fn set_duration(&mut self, duration: f64) -> Result<(), SynthError> {
        let duration = check_duration(duration)?;
        let bytes = (duration * self.byte_rate() as f64).floor();
        if bytes > (u32::MAX - CHUNK_OVERHEAD) as f64 {
            return Err(SynthError::DurationTooLong(duration));
        }
        self.set_data_size(bytes as u32)
    }

    pub fn set_data_size(&mut self, data_size: u32) -> Result<(), SynthError> {
        let chunk_size = data_size
            .checked_add(CHUNK_OVERHEAD)
            .ok_or(SynthError::DataSizeTooLarge(data_size))?;
        self.chunk_size = chunk_size;
        self.subchunk2_size = data_size;
        Ok(())
    }

    pub fn data_size(&self) -> u32 {
        self.subchunk2_size()
    }

    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    pub fn subchunk2_size(&self) -> u32 {
        self.subchunk2_size
    }

    pub fn audio_format(&self) -> u16 {
        PCM_FORMAT
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    pub fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }

    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// Number of sample frames (one sample per channel) the data chunk holds.
    pub fn frame_count(&self) -> u32 {
        self.subchunk2_size / self.block_align() as u32
    }

    /// Encodes the header field by field, little-endian.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        let fields: [&[u8]; 13] = [
            b"RIFF",
            &self.chunk_size.to_le_bytes(),
            b"WAVE",
            b"fmt ",
            &FMT_CHUNK_SIZE.to_le_bytes(),
            &PCM_FORMAT.to_le_bytes(),
            &self.channels.to_le_bytes(),
            &self.sample_rate.to_le_bytes(),
            &self.byte_rate().to_le_bytes(),
            &self.block_align().to_le_bytes(),
            &self.bits_per_sample.to_le_bytes(),
            b"data",
            &self.subchunk2_size.to_le_bytes(),
        ];
        let mut pos = 0;
        for field in fields {
            out[pos..pos + field.len()].copy_from_slice(field);
            pos += field.len();
        }
        debug_assert_eq!(pos, HEADER_LEN);
        out
    }
}
