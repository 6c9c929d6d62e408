//! Keyframe synthesis.
//!
//! A [`ShapeSampler`](crate::waveform::shape::ShapeSampler) is sampled at sorted random times,
//! and each key receives the tangent profile of its family.

/// Keyframe and curve data model.
pub mod keyframe;
/// Per-family key profiles and default key counts.
pub mod profile;
/// Random and scaled synthesis entry points.
pub mod synthesizer;
