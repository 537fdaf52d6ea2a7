pub mod analysis;
pub mod codec;
pub mod format;
pub mod generator;

pub use analysis::{
    correlation, is_silence, is_silence_below, peak, rms, validate, SignalStats,
    DEFAULT_SILENCE_THRESHOLD,
};
pub use codec::{
    bytes_to_i16, decode_f32, decode_i16, decode_i16_into, encode, encode_bytes, encoded_len,
    i16_to_sample, sample_to_i16,
};
pub use format::{format_duration, AudioFormat, VOICE_SAMPLE_RATE};
pub use generator::{constant, sine_wave, white_noise};
