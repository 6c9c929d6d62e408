//! Curve sampling and the RGBA preview image.

pub mod composite;
pub mod preview;
pub mod sample;
