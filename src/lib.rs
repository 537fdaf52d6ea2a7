//! voicepcm - 16-bit PCM transport codec for voice messages
//!
//! Converts float PCM samples to base64-wrapped 16-bit little-endian PCM and
//! back, with small analysis helpers (validation, RMS, silence) and synthetic
//! signal generators for tests.
//!
//! ```
//! use voicepcm::pcm::{decode_f32, encode, sine_wave};
//!
//! let tone = sine_wave(440.0, 16000, 0.01);
//! let text = encode(&tone).unwrap();
//! let back = decode_f32(&text).unwrap();
//! assert_eq!(back.len(), tone.len());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod pcm;
pub mod wav;

pub use error::{PcmError, Result};
