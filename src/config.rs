use anyhow::{bail, Context, Result};
#[cfg(test)]
use std::collections::HashMap;
use std::env;

use crate::pcm::analysis::DEFAULT_SILENCE_THRESHOLD;
use crate::pcm::format::{AudioFormat, VOICE_SAMPLE_RATE};

/// Highest sample rate accepted by `validate`
const MAX_SAMPLE_RATE: u32 = 384_000;

#[derive(Debug, Clone)]
pub struct Config {
    // Out-of-band format for decoded WAV output
    pub sample_rate: u32,
    pub channels: u16,

    // RMS below this is reported as silence
    pub silence_threshold: f32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env if present, ignore if missing
        Self::from_getter(|key| env::var(key).ok())
    }

    /// Parse config from a custom getter function (for testing)
    pub fn from_getter<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            sample_rate: get("VOICEPCM_SAMPLE_RATE")
                .unwrap_or_else(|| VOICE_SAMPLE_RATE.to_string())
                .trim()
                .parse()
                .context("VOICEPCM_SAMPLE_RATE must be a whole number of Hz")?,
            channels: get("VOICEPCM_CHANNELS")
                .unwrap_or_else(|| "1".to_string())
                .trim()
                .parse()
                .context("VOICEPCM_CHANNELS must be a small whole number")?,
            silence_threshold: get("VOICEPCM_SILENCE_THRESHOLD")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_SILENCE_THRESHOLD),
        })
    }

    /// Create config from a HashMap (convenience for testing)
    #[cfg(test)]
    pub fn from_map(map: &HashMap<&str, &str>) -> Result<Self> {
        Self::from_getter(|key| map.get(key).map(|v| v.to_string()))
    }

    /// Validate configuration values at startup.
    /// Returns Ok(()) if all validations pass, or Err with details of what failed.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        if self.sample_rate == 0 {
            errors.push("VOICEPCM_SAMPLE_RATE must be greater than 0.".to_string());
        } else if self.sample_rate > MAX_SAMPLE_RATE {
            errors.push(format!(
                "VOICEPCM_SAMPLE_RATE={} seems too high (max: {}).",
                self.sample_rate, MAX_SAMPLE_RATE
            ));
        }

        if self.channels == 0 {
            errors.push("VOICEPCM_CHANNELS must be greater than 0.".to_string());
        }

        if !self.silence_threshold.is_finite() || self.silence_threshold <= 0.0 {
            errors.push(format!(
                "VOICEPCM_SILENCE_THRESHOLD={} must be a positive number.",
                self.silence_threshold
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            bail!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )
        }
    }

    pub fn audio_format(&self) -> AudioFormat {
        AudioFormat::new(self.sample_rate, self.channels)
    }
}
