//! WAV format encoder using hound
//!
//! Writes signed 24-bit integer PCM. RIFF sizes are 32-bit, so the data
//! chunk is capped at [`RIFF_DATA_LIMIT`]; a block that would cross it is
//! rejected whole with [`ExportError::SizeLimit`] and the file stays valid.

use crate::error::{ExportError, Result};
use crate::format::PcmEncoder;
use crate::options::{PcmFormat, BITS_PER_SAMPLE};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

/// Largest data chunk a RIFF file can hold, less room for the
/// extensible-format header and the pad byte.
pub const RIFF_DATA_LIMIT: u64 = u32::MAX as u64 - 128;

/// Streaming WAV encoder.
pub struct WavEncoder {
    writer: WavWriter<BufWriter<File>>,
    format: PcmFormat,
    data_bytes: u64,
    data_limit: u64,
}

impl WavEncoder {
    /// Format the file was opened with.
    pub fn format(&self) -> &PcmFormat {
        &self.format
    }

    /// Bytes of sample data written so far.
    pub fn data_bytes(&self) -> u64 {
        self.data_bytes
    }

    #[cfg(test)]
    fn with_data_limit(mut self, limit: u64) -> Self {
        self.data_limit = limit;
        self
    }
}

impl PcmEncoder for WavEncoder {
    fn open(path: &Path, format: &PcmFormat) -> Result<Self> {
        let writer = WavWriter::create(path, create_wav_spec(format))?;
        Ok(Self {
            writer,
            format: *format,
            data_bytes: 0,
            data_limit: RIFF_DATA_LIMIT,
        })
    }

    fn write_frames(&mut self, samples: &[f32], frames: usize) -> Result<u64> {
        let channels = self.format.channels.max(1) as usize;
        let frames = frames.min(samples.len() / channels);

        let bytes = frames as u64 * self.format.bytes_per_frame();
        if self.data_bytes + bytes > self.data_limit {
            return Err(ExportError::SizeLimit {
                limit: self.data_limit,
                written: self.data_bytes,
            });
        }

        write_samples(&mut self.writer, &samples[..frames * channels])?;
        self.data_bytes += bytes;
        Ok(frames as u64)
    }

    fn finalize(self) -> Result<()> {
        self.writer.finalize()?;
        Ok(())
    }
}

/// Create hound WavSpec from our format
fn create_wav_spec(format: &PcmFormat) -> WavSpec {
    WavSpec {
        channels: format.channels,
        sample_rate: format.sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Write interleaved samples to the writer
fn write_samples<W: Write + Seek>(writer: &mut WavWriter<W>, samples: &[f32]) -> Result<()> {
    for &sample in samples {
        writer.write_sample(float_to_i24(sample))?;
    }
    Ok(())
}

/// Convert float sample to 24-bit integer (stored as i32) with clipping
#[inline]
pub(crate) fn float_to_i24(sample: f32) -> i32 {
    let clamped = sample.clamp(-1.0, 1.0);
    (clamped * 8388607.0) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn stereo() -> PcmFormat {
        PcmFormat {
            channels: 2,
            sample_rate: 44100,
        }
    }

    #[test]
    fn test_float_to_i24() {
        assert_eq!(float_to_i24(0.0), 0);
        assert_eq!(float_to_i24(1.0), 8388607);
        assert_eq!(float_to_i24(-1.0), -8388607);
        assert_eq!(float_to_i24(2.0), 8388607);
    }

    #[test]
    fn test_spec_is_24_bit_int() {
        let spec = create_wav_spec(&PcmFormat {
            channels: 4,
            sample_rate: 48000,
        });
        assert_eq!(spec.channels, 4);
        assert_eq!(spec.sample_rate, 48000);
        assert_eq!(spec.bits_per_sample, 24);
        assert_eq!(spec.sample_format, SampleFormat::Int);
    }

    #[test]
    fn test_write_frames_reports_consumed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enc.wav");

        let mut encoder = WavEncoder::open(&path, &stereo()).unwrap();
        assert_eq!(encoder.write_frames(&[0.0; 8], 4).unwrap(), 4);
        // Fewer samples than requested frames: only whole frames are written
        assert_eq!(encoder.write_frames(&[0.5; 5], 4).unwrap(), 2);
        assert_eq!(encoder.data_bytes(), 6 * 6);
        encoder.finalize().unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.duration(), 6);
        assert_eq!(reader.spec().bits_per_sample, 24);
    }

    #[test]
    fn test_data_limit_rejects_whole_block() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("capped.wav");

        // Room for three stereo 24-bit frames
        let mut encoder = WavEncoder::open(&path, &stereo())
            .unwrap()
            .with_data_limit(18);
        assert_eq!(encoder.write_frames(&[0.25; 4], 2).unwrap(), 2);

        let err = encoder.write_frames(&[0.25; 4], 2).unwrap_err();
        assert!(matches!(
            err,
            ExportError::SizeLimit {
                limit: 18,
                written: 12
            }
        ));

        // Exactly filling the limit is allowed
        assert_eq!(encoder.write_frames(&[0.25; 2], 1).unwrap(), 1);
        encoder.finalize().unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.duration(), 3);
    }

    #[test]
    fn test_open_fails_for_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.wav");
        let result = WavEncoder::open(&path, &PcmFormat::default());
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
