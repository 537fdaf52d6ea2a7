/// 16-bit linear PCM transport codec
///
/// Converts float samples in [-1.0, 1.0] to signed 16-bit little-endian PCM
/// and wraps the raw bytes in standard base64 (with padding) so they can ride
/// in any text field. The encoded form carries no header: sample rate and
/// channel count travel out of band (see `AudioFormat`).
///
/// ## Scaling
///
/// Two's complement has one more negative code than positive, so the scale
/// is chosen per sign:
/// - negative samples: `round(s * 32768)`, so -1.0 lands on -32768 (0x8000)
/// - non-negative samples: `round(s * 32767)`, so 1.0 lands on 32767 (0x7FFF)
///
/// Decoding divides by the same constant, which keeps both extremes exact.
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::error::{PcmError, Result};

/// Scale applied to negative samples (magnitude of i16::MIN)
pub const NEGATIVE_SCALE: f32 = 32768.0;

/// Scale applied to zero and positive samples (i16::MAX)
pub const POSITIVE_SCALE: f32 = 32767.0;

/// Bytes per encoded sample
pub const BYTES_PER_SAMPLE: usize = 2;

/// Quantize one float sample to i16.
///
/// Out-of-range values are clamped to [-1.0, 1.0]. Returns `None` for NaN
/// and infinities, which a plain clamp would let through as garbage.
#[inline]
pub fn sample_to_i16(sample: f32) -> Option<i16> {
    if !sample.is_finite() {
        return None;
    }

    // f64 keeps the product exact, so rounding sees the true value
    let s = sample.clamp(-1.0, 1.0) as f64;
    let scaled = if s < 0.0 {
        (s * NEGATIVE_SCALE as f64).round()
    } else {
        (s * POSITIVE_SCALE as f64).round()
    };

    // Already within [-32768, 32767] after the clamp
    Some(scaled as i16)
}

/// Map an i16 sample back to [-1.0, 1.0] with the inverse asymmetric scale.
#[inline]
pub fn i16_to_sample(sample: i16) -> f32 {
    if sample < 0 {
        sample as f32 / NEGATIVE_SCALE
    } else {
        sample as f32 / POSITIVE_SCALE
    }
}

/// Quantize float samples to raw 16-bit little-endian bytes (no header).
///
/// This is also the layout of the raw `.pcm` capture files.
pub fn encode_bytes(samples: &[f32]) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(samples.len() * BYTES_PER_SAMPLE);

    for (index, &value) in samples.iter().enumerate() {
        let quantized = sample_to_i16(value).ok_or(PcmError::InvalidSample { index, value })?;
        bytes.extend_from_slice(&quantized.to_le_bytes());
    }

    Ok(bytes)
}

/// Encode float samples to the base64 transport string.
///
/// An empty slice encodes to the empty string.
pub fn encode(samples: &[f32]) -> Result<String> {
    let bytes = encode_bytes(samples)?;
    Ok(BASE64.encode(bytes))
}

/// Reinterpret raw little-endian bytes as i16 samples.
pub fn bytes_to_i16(bytes: &[u8]) -> Result<Vec<i16>> {
    if bytes.len() % BYTES_PER_SAMPLE != 0 {
        return Err(PcmError::OddByteLength(bytes.len()));
    }

    Ok(bytes
        .chunks_exact(BYTES_PER_SAMPLE)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

fn decode_bytes(encoded: &str) -> Result<Vec<u8>> {
    let bytes = BASE64
        .decode(encoded)
        .map_err(|e| PcmError::MalformedBase64(e.to_string()))?;

    if bytes.len() % BYTES_PER_SAMPLE != 0 {
        return Err(PcmError::OddByteLength(bytes.len()));
    }

    Ok(bytes)
}

/// Decode a transport string to 16-bit signed samples.
pub fn decode_i16(encoded: &str) -> Result<Vec<i16>> {
    let bytes = decode_bytes(encoded)?;
    bytes_to_i16(&bytes)
}

/// Decode a transport string, appending samples to an existing buffer.
///
/// Lets a receiver reuse one buffer across frames. On error `output` is left
/// untouched.
pub fn decode_i16_into(encoded: &str, output: &mut Vec<i16>) -> Result<()> {
    let bytes = decode_bytes(encoded)?;

    output.reserve(bytes.len() / BYTES_PER_SAMPLE);
    for pair in bytes.chunks_exact(BYTES_PER_SAMPLE) {
        output.push(i16::from_le_bytes([pair[0], pair[1]]));
    }

    Ok(())
}

/// Decode a transport string to float samples in [-1.0, 1.0].
pub fn decode_f32(encoded: &str) -> Result<Vec<f32>> {
    let samples = decode_i16(encoded)?;
    Ok(samples.into_iter().map(i16_to_sample).collect())
}

/// Exact length of the transport string for `samples` samples.
#[inline]
pub fn encoded_len(samples: usize) -> usize {
    (samples * BYTES_PER_SAMPLE).div_ceil(3) * 4
}



/// Kani formal verification proofs
/// Run with: cargo kani --tests
#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Proves: sample_to_i16 never panics and rejects exactly the non-finite inputs
    #[kani::proof]
    fn sample_to_i16_never_panics() {
        let sample: f32 = kani::any();
        let result = sample_to_i16(sample);
        kani::assert(result.is_some() == sample.is_finite(), "only finite samples quantize");
    }

    /// Proves: i16_to_sample always produces normalized output in [-1.0, 1.0]
    #[kani::proof]
    fn i16_to_sample_always_normalized() {
        let sample: i16 = kani::any();
        let result = i16_to_sample(sample);
        kani::assert(result >= -1.0 && result <= 1.0, "f32 must be normalized");
    }

    /// Proves: bytes_to_i16 halves any even-length input
    #[kani::proof]
    #[kani::unwind(9)]
    fn bytes_to_i16_length() {
        let bytes: [u8; 8] = kani::any();
        let len: usize = kani::any();
        kani::assume(len <= 8);

        match bytes_to_i16(&bytes[..len]) {
            Ok(samples) => kani::assert(samples.len() * 2 == len, "two bytes per sample"),
            Err(_) => kani::assert(len % 2 == 1, "only odd lengths fail"),
        }
    }
}
