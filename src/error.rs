//! PCM codec error types.

use thiserror::Error;

/// Errors surfaced by the codec.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PcmError {
    /// Transport text is not valid standard base64.
    #[error("Malformed input: invalid base64 ({0})")]
    MalformedBase64(String),

    /// Decoded byte count cannot form whole 16-bit samples.
    #[error("Malformed input: odd byte length {0}, expected whole 2-byte samples")]
    OddByteLength(usize),

    /// NaN or infinite sample handed to the encoder.
    #[error("Invalid sample {value} at index {index}: samples must be finite")]
    InvalidSample {
        /// Position of the offending sample.
        index: usize,
        /// The offending value.
        value: f32,
    },
}

impl PcmError {
    /// True for the errors that mean "corrupt transport data".
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedBase64(_) | Self::OddByteLength(_))
    }
}

/// Codec result type.
pub type Result<T> = std::result::Result<T, PcmError>;
