//! Format-specific encoders.
//!
//! Each encoder streams interleaved frames into one output file. The
//! [`PcmWriter`](crate::PcmWriter) decides when the file is opened and with
//! which [`PcmFormat`].

use crate::error::Result;
use crate::options::PcmFormat;
use std::path::Path;

#[cfg(feature = "wav")]
pub mod wav;

/// Streaming encoder capability used by the writer.
pub trait PcmEncoder: Sized + Send {
    /// Create the output at `path`. Fails if the file cannot be created.
    fn open(path: &Path, format: &PcmFormat) -> Result<Self>;

    /// Append `frames` interleaved frames from `samples`.
    ///
    /// Returns the number of frames actually consumed.
    fn write_frames(&mut self, samples: &[f32], frames: usize) -> Result<u64>;

    /// Flush and close the output.
    fn finalize(self) -> Result<()>;
}
