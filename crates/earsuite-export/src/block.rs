//! Audio blocks consumed by the writer.

use crate::error::{ExportError, Result};

/// A block of interleaved audio frames.
///
/// Read-only view; the writer never takes ownership.
pub trait AudioBlock {
    /// Number of interleaved channels.
    fn channel_count(&self) -> u16;

    /// Sample rate in Hz.
    fn sample_rate(&self) -> u32;

    /// Number of frames (samples per channel).
    fn frame_count(&self) -> usize;

    /// Interleaved samples, `frame_count() * channel_count()` long.
    fn data(&self) -> &[f32];
}

/// Owned block of interleaved samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmBlock {
    data: Vec<f32>,
    channels: u16,
    sample_rate: u32,
}

impl PcmBlock {
    /// Wrap interleaved samples.
    ///
    /// Fails if `channels` is 0 or `data` is not a whole number of frames.
    pub fn new(data: Vec<f32>, channels: u16, sample_rate: u32) -> Result<Self> {
        if channels == 0 {
            return Err(ExportError::InvalidData("block has no channels".into()));
        }
        if data.len() % channels as usize != 0 {
            return Err(ExportError::InvalidData(format!(
                "{} samples is not a whole number of {}-channel frames",
                data.len(),
                channels
            )));
        }
        Ok(Self {
            data,
            channels,
            sample_rate,
        })
    }

    /// Interleave planar channel buffers into one block.
    pub fn from_channels(channels: &[&[f32]], sample_rate: u32) -> Result<Self> {
        let Some(first) = channels.first() else {
            return Err(ExportError::InvalidData("block has no channels".into()));
        };
        let frames = first.len();
        if channels.iter().any(|c| c.len() != frames) {
            return Err(ExportError::InvalidData(
                "channels have different lengths".into(),
            ));
        }
        let channel_count = u16::try_from(channels.len())
            .map_err(|_| ExportError::InvalidData("too many channels".into()))?;

        let mut data = Vec::with_capacity(frames * channels.len());
        for i in 0..frames {
            data.extend(channels.iter().map(|c| c[i]));
        }

        Ok(Self {
            data,
            channels: channel_count,
            sample_rate,
        })
    }

    /// A block of silence.
    pub fn silence(channels: u16, frames: usize, sample_rate: u32) -> Self {
        Self {
            data: vec![0.0; frames * channels as usize],
            channels,
            sample_rate,
        }
    }

    /// Samples of one channel, de-interleaved. `None` if `index` is not a
    /// channel of this block.
    pub fn channel(&self, index: u16) -> Option<impl Iterator<Item = f32> + '_> {
        if index >= self.channels {
            return None;
        }
        Some(
            self.data
                .iter()
                .skip(index as usize)
                .step_by(self.channels as usize)
                .copied(),
        )
    }
}

impl AudioBlock for PcmBlock {
    fn channel_count(&self) -> u16 {
        self.channels
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn frame_count(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.data.len() / self.channels as usize
        }
    }

    fn data(&self) -> &[f32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_partial_frames() {
        assert!(PcmBlock::new(vec![0.0; 5], 2, 48000).is_err());
        assert!(PcmBlock::new(vec![0.0; 4], 0, 48000).is_err());
        let block = PcmBlock::new(vec![0.0; 6], 2, 48000).unwrap();
        assert_eq!(block.frame_count(), 3);
    }

    #[test]
    fn test_from_channels_interleaves() {
        let left = [0.1f32, 0.2, 0.3];
        let right = [-0.1f32, -0.2, -0.3];
        let block = PcmBlock::from_channels(&[&left[..], &right[..]], 44100).unwrap();

        assert_eq!(block.channel_count(), 2);
        assert_eq!(block.frame_count(), 3);
        assert_eq!(block.data(), &[0.1f32, -0.1, 0.2, -0.2, 0.3, -0.3]);
        assert_eq!(block.channel(1).unwrap().collect::<Vec<_>>(), right.to_vec());
    }

    #[test]
    fn test_channel_out_of_range() {
        let left = [0.1f32, 0.2];
        let right = [0.3f32, 0.4];
        let block = PcmBlock::from_channels(&[&left[..], &right[..]], 48000).unwrap();

        assert!(block.channel(2).is_none());
        assert!(block.channel(u16::MAX).is_none());
        assert_eq!(block.channel(0).unwrap().collect::<Vec<_>>(), left.to_vec());
    }

    #[test]
    fn test_from_channels_mismatched_lengths() {
        let a = [0.0f32; 4];
        let b = [0.0f32; 3];
        assert!(PcmBlock::from_channels(&[&a[..], &b[..]], 48000).is_err());
        assert!(PcmBlock::from_channels(&[], 48000).is_err());
    }

    #[test]
    fn test_silence() {
        let block = PcmBlock::silence(4, 64, 96000);
        assert_eq!(block.frame_count(), 64);
        assert_eq!(block.data().len(), 256);
        assert!(block.data().iter().all(|&s| s == 0.0));
    }
}
