//! Output format options.

use crate::block::AudioBlock;
use crate::error::{ExportError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every stem is written as signed 24-bit integer PCM.
pub const BITS_PER_SAMPLE: u16 = 24;

/// Format of an output file, fixed when the file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcmFormat {
    /// Number of interleaved channels
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl Default for PcmFormat {
    fn default() -> Self {
        Self {
            channels: 2,
            sample_rate: 48000,
        }
    }
}

impl PcmFormat {
    /// Derive the output format from a block's channel count and sample rate.
    pub fn from_block<B: AudioBlock + ?Sized>(block: &B) -> Self {
        Self {
            channels: block.channel_count(),
            sample_rate: block.sample_rate(),
        }
    }

    /// Bytes one interleaved frame occupies in the file.
    pub fn bytes_per_frame(&self) -> u64 {
        self.channels as u64 * (BITS_PER_SAMPLE / 8) as u64
    }

    /// Reject formats no encoder can open.
    pub fn validate(&self) -> Result<()> {
        if self.channels == 0 {
            return Err(ExportError::InvalidData("block has no channels".into()));
        }
        if self.sample_rate == 0 {
            return Err(ExportError::InvalidData("block has a sample rate of 0 Hz".into()));
        }
        Ok(())
    }

    /// Whether a block in `other` format can be appended to output in this
    /// format.
    pub fn is_compatible(&self, other: &PcmFormat) -> bool {
        self == other
    }
}

impl fmt::Display for PcmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ch @ {} Hz, {} bit",
            self.channels, self.sample_rate, BITS_PER_SAMPLE
        )
    }
}
