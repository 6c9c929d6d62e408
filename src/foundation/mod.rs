//! Shared building blocks: the error taxonomy, numeric helpers and timestamps.

/// Crate-wide error type.
pub mod error;
/// numpy-compatible numeric helpers and Fresnel integrals.
pub mod math;
/// UTC timestamp formatting.
pub mod time;
