//! Header + interleaved samples → WAV byte stream.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::SynthError;
use crate::header::WavHeader;

/// Write the 44-byte header, then `samples` as little-endian `i16`.
/// Nothing is written when the header's data size disagrees with the payload.
pub fn write_wav<W: Write>(
    writer: &mut W,
    header: &WavHeader,
    samples: &[i16],
) -> Result<(), SynthError> {
    let payload = samples.len() * std::mem::size_of::<i16>();
    if payload != header.data_size() as usize {
        return Err(SynthError::DataSizeMismatch {
            header: header.data_size(),
            payload,
        });
    }

    writer.write_all(&header.to_bytes())?;
    let mut data = Vec::with_capacity(payload);
    for s in samples {
        data.extend_from_slice(&s.to_le_bytes());
    }
    writer.write_all(&data)?;
    Ok(())
}

/// Create `path` and write a complete WAV file into it.
pub fn write_wav_file(path: &Path, header: &WavHeader, samples: &[i16]) -> Result<(), SynthError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_wav(&mut writer, header, samples)?;
    writer.flush()?;
    Ok(())
}
