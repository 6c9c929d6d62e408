//! Four-channel record assembly and the engine export transform.

/// Random, request-driven and catalog assembly.
pub mod assembler;
/// Engine import format (`floatCurves` as an ordered list).
pub mod export;
/// Record data model and wire format.
pub mod record;
/// Flat request descriptor for request-driven assembly.
pub mod spec;
