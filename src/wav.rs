/// WAV import/export for inspecting buffers with ordinary audio tools
///
/// Export quantizes with the same transform as the transport codec, so a
/// saved file holds exactly the i16 values a receiver would decode.

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::{debug, info};

use crate::error::PcmError;
use crate::pcm::codec::{i16_to_sample, sample_to_i16};
use crate::pcm::format::AudioFormat;

/// Save f32 samples to a 16-bit integer WAV file
pub fn save_wav<P: AsRef<Path>>(samples: &[f32], format: AudioFormat, path: P) -> Result<()> {
    let spec = hound::WavSpec {
        channels: format.channels,
        sample_rate: format.sample_rate,
        bits_per_sample: format.bits_per_sample(),
        sample_format: hound::SampleFormat::Int,
    };

    // Quantize up front so a bad sample never leaves a partial file behind
    let quantized = samples
        .iter()
        .enumerate()
        .map(|(index, &value)| sample_to_i16(value).ok_or(PcmError::InvalidSample { index, value }))
        .collect::<std::result::Result<Vec<i16>, _>>()?;

    let mut writer = hound::WavWriter::create(path.as_ref(), spec)
        .with_context(|| format!("Failed to create WAV file: {:?}", path.as_ref()))?;

    for s in quantized {
        writer.write_sample(s)?;
    }

    writer.finalize()?;
    info!(
        "Saved {} samples to {:?} ({} Hz, {} ch)",
        samples.len(),
        path.as_ref(),
        format.sample_rate,
        format.channels
    );
    Ok(())
}

/// Load a WAV file as f32 samples plus its format
///
/// Accepts 16-bit integer and 32-bit float files.
pub fn load_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, AudioFormat)> {
    let mut reader = hound::WavReader::open(path.as_ref())
        .with_context(|| format!("Failed to open WAV file: {:?}", path.as_ref()))?;

    let spec = reader.spec();
    debug!(
        "WAV spec: {} Hz, {} ch, {} bits, {:?}",
        spec.sample_rate, spec.channels, spec.bits_per_sample, spec.sample_format
    );

    let samples = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Int, 16) => reader
            .samples::<i16>()
            .map(|s| s.map(i16_to_sample))
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Failed to read 16-bit samples")?,
        (hound::SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Failed to read float samples")?,
        (format, bits) => bail!("Unsupported WAV sample format: {:?} {}-bit", format, bits),
    };

    Ok((samples, AudioFormat::new(spec.sample_rate, spec.channels)))
}
