//! Tolerance constants for comparing decoded stems with their source blocks.

/// Floating point rounding errors for exact operations.
pub const FLOAT_EPSILON: f32 = 1e-6;

/// 24-bit quantization step size.
///
/// Decoded 24-bit samples differ from their source by at most one step
/// (truncation toward zero).
pub const INT24_EPSILON: f32 = 1.0 / 8388608.0;

/// Full scale of a signed 24-bit sample.
pub const INT24_FULL_SCALE: f32 = 8388607.0;
