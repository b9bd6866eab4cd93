//! Lazily opened PCM block writer.
//!
//! The output file is created on the first [`write`](PcmWriter::write), with
//! the first block's channel count and sample rate at 24 bits. From then on
//! the format is fixed: every block is appended in call order and a block in
//! a different format is rejected.
//!
//! ```text
//!   Unopened ──write(block)──▶ Open(format) ──write(block)──▶ Open(format)
//!       │                           │
//!       └─ open fails: stays        └─ format mismatch: error, nothing written
//!          Unopened, error returned
//! ```
//!
//! The writer is a single-owner, append-only sink: no reordering, buffering
//! across blocks, or rollback of frames already written.

use crate::block::AudioBlock;
use crate::error::{ExportError, Result};
use crate::format::PcmEncoder;
use crate::options::PcmFormat;
use std::path::{Path, PathBuf};

#[cfg(feature = "wav")]
use crate::format::wav::WavEncoder;

enum WriterState<E> {
    Unopened,
    Open { format: PcmFormat, encoder: E },
}

/// Streams audio blocks into one output file.
///
/// # Example
///
/// ```no_run
/// use earsuite_export::{PcmBlock, PcmWriter};
///
/// let mut writer = PcmWriter::new("stem.wav");
/// let block = PcmBlock::silence(2, 512, 48000);
/// writer.write(&block)?;
/// writer.finalize()?;
/// # Ok::<(), earsuite_export::ExportError>(())
/// ```
#[cfg(feature = "wav")]
pub struct PcmWriter<E: PcmEncoder = WavEncoder> {
    name: PathBuf,
    state: WriterState<E>,
    frames_written: u64,
}

/// Streams audio blocks into one output file.
#[cfg(not(feature = "wav"))]
pub struct PcmWriter<E: PcmEncoder> {
    name: PathBuf,
    state: WriterState<E>,
    frames_written: u64,
}

#[cfg(feature = "wav")]
impl PcmWriter {
    /// Create a WAV writer for `name`. Nothing is opened until the first write.
    pub fn new(name: impl Into<PathBuf>) -> Self {
        Self::with_encoder(name)
    }
}

impl<E: PcmEncoder> PcmWriter<E> {
    /// Create a writer for `name` that encodes with `E`.
    pub fn with_encoder(name: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            state: WriterState::Unopened,
            frames_written: 0,
        }
    }

    /// Destination path, exactly as given at construction.
    pub fn file_name(&self) -> &Path {
        &self.name
    }

    /// Format the output was opened with, if any block has been written.
    pub fn format(&self) -> Option<PcmFormat> {
        match &self.state {
            WriterState::Unopened => None,
            WriterState::Open { format, .. } => Some(*format),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, WriterState::Open { .. })
    }

    /// Total frames the encoder reported as written.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Append a block.
    ///
    /// The first call opens the output. Returns the number of frames the
    /// encoder reports as written, which is not checked against the block's
    /// frame count.
    ///
    /// # Errors
    ///
    /// - the output cannot be created (the writer stays unopened)
    /// - the first block has no channels or a zero sample rate
    /// - a later block's channel count or sample rate differs from the
    ///   opened format
    /// - the encoder fails; frames written before remain in the file
    pub fn write<B: AudioBlock + ?Sized>(&mut self, block: &B) -> Result<u64> {
        let frames = block.frame_count();
        let encoder = self.encoder_for(block)?;
        let written = encoder.write_frames(block.data(), frames)?;

        if written < frames as u64 {
            log::debug!(
                "short write to {}: {} of {} frames",
                self.name.display(),
                written,
                frames
            );
        }

        self.frames_written += written;
        Ok(written)
    }

    /// Flush and close the output. Returns the total frames written.
    ///
    /// Dropping an open writer also closes it, logging any error.
    pub fn finalize(mut self) -> Result<u64> {
        if let WriterState::Open { encoder, .. } =
            std::mem::replace(&mut self.state, WriterState::Unopened)
        {
            encoder.finalize()?;
            log::debug!(
                "closed {} after {} frames",
                self.name.display(),
                self.frames_written
            );
        }
        Ok(self.frames_written)
    }

    fn encoder_for<B: AudioBlock + ?Sized>(&mut self, block: &B) -> Result<&mut E> {
        let found = PcmFormat::from_block(block);

        if let WriterState::Unopened = self.state {
            found.validate()?;
            let encoder = E::open(&self.name, &found)?;
            log::debug!("opened {} ({})", self.name.display(), found);
            self.state = WriterState::Open {
                format: found,
                encoder,
            };
        }

        match &mut self.state {
            WriterState::Open { format, encoder } => {
                if !format.is_compatible(&found) {
                    return Err(ExportError::FormatMismatch {
                        expected: *format,
                        found,
                    });
                }
                Ok(encoder)
            }
            WriterState::Unopened => Err(ExportError::InvalidData(format!(
                "{} is not open",
                self.name.display()
            ))),
        }
    }
}

impl<E: PcmEncoder> Drop for PcmWriter<E> {
    fn drop(&mut self) {
        if let WriterState::Open { encoder, .. } =
            std::mem::replace(&mut self.state, WriterState::Unopened)
        {
            if let Err(e) = encoder.finalize() {
                log::error!("failed to close {}: {}", self.name.display(), e);
            }
        }
    }
}
