/// Out-of-band audio metadata
///
/// The transport string carries raw samples only. Sample rate and channel
/// count are tracked by the caller, and bit depth is always 16.

/// Sample rate used by the voice recorder (Hz)
pub const VOICE_SAMPLE_RATE: u32 = 16000;

/// Samples per buffer delivered by the recorder
pub const DEFAULT_RECORD_CHUNK_SAMPLES: usize = 4096;

/// Bit depth of every encoded sample
pub const BITS_PER_SAMPLE: u16 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    pub sample_rate: u32,
    pub channels: u16,
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self::VOICE
    }
}

impl AudioFormat {
    /// 16 kHz mono, as fixed by the recorder
    pub const VOICE: AudioFormat = AudioFormat {
        sample_rate: VOICE_SAMPLE_RATE,
        channels: 1,
    };

    pub fn new(sample_rate: u32, channels: u16) -> Self {
        Self {
            sample_rate,
            channels,
        }
    }

    #[inline]
    pub fn bits_per_sample(&self) -> u16 {
        BITS_PER_SAMPLE
    }

    /// Convert duration in milliseconds to number of interleaved samples
    #[inline]
    pub fn duration_to_samples(&self, duration_ms: u64) -> usize {
        let frames = duration_ms.saturating_mul(self.sample_rate as u64) / 1000;
        frames.saturating_mul(self.channels as u64) as usize
    }

    /// Convert number of interleaved samples to duration in milliseconds
    #[inline]
    pub fn samples_to_duration_ms(&self, samples: usize) -> u64 {
        let per_second = self.sample_rate as u64 * self.channels as u64;
        if per_second == 0 {
            return 0;
        }
        (samples as u64 * 1000) / per_second
    }
}

/// Format a duration as `mm:ss` for recording length display.
///
/// Minutes are not wrapped, so an hour reads `60:00`.
pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
