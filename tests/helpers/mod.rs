//! Test helpers and fixtures for earsuite integration tests.

#![allow(dead_code)]

pub mod tolerances;

use earsuite::export::PcmBlock;
use std::path::Path;

/// Default test sample rate
pub const TEST_SAMPLE_RATE: u32 = 48000;

/// Frames per rendered block
pub const TEST_BLOCK_FRAMES: usize = 512;

/// Generate a sine wave at `frequency`, starting at frame `offset`.
pub fn generate_sine(frequency: f64, sample_rate: u32, offset: usize, frames: usize) -> Vec<f32> {
    (offset..offset + frames)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            (0.5 * (2.0 * std::f64::consts::PI * frequency * t).sin()) as f32
        })
        .collect()
}

/// Render `count` consecutive stereo blocks: a sine on the left and its
/// negation on the right, so channel order is observable after decoding.
pub fn sine_blocks(count: usize, frames: usize) -> Vec<PcmBlock> {
    (0..count)
        .map(|n| {
            let left = generate_sine(440.0, TEST_SAMPLE_RATE, n * frames, frames);
            let right: Vec<f32> = left.iter().map(|s| -s).collect();
            PcmBlock::from_channels(&[&left[..], &right[..]], TEST_SAMPLE_RATE)
                .expect("valid stereo block")
        })
        .collect()
}

/// Read every sample of a 24-bit WAV back as f32 in -1..1.
pub fn read_int24(path: &Path) -> (hound::WavSpec, Vec<f32>) {
    let mut reader = hound::WavReader::open(path).expect("readable wav");
    let spec = reader.spec();
    let samples = reader
        .samples::<i32>()
        .map(|s| s.expect("valid sample") as f32 / tolerances::INT24_FULL_SCALE)
        .collect();
    (spec, samples)
}
