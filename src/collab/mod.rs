//! Boundary helpers for outer services: responses, field updates and remote previews.

pub mod service;
