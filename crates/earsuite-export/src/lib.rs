//! # earsuite Export
//!
//! Streams rendered audio blocks into per-stem output files.
//!
//! - [`PcmWriter`]: opens its file on the first block and appends every block after it
//! - [`AudioBlock`] / [`PcmBlock`]: interleaved input blocks
//! - [`PcmEncoder`]: encoder capability, [`WavEncoder`] by default
//!
//! ## Feature Flags
//!
//! - `wav` (default): WAV encoding via hound (pure Rust)

pub mod error;
mod options;

mod block;
pub mod format;
mod writer;

pub use block::{AudioBlock, PcmBlock};
pub use error::{ExportError, Result};
pub use format::PcmEncoder;
pub use options::{PcmFormat, BITS_PER_SAMPLE};
pub use writer::PcmWriter;

#[cfg(feature = "wav")]
pub use format::wav::{WavEncoder, RIFF_DATA_LIMIT};
