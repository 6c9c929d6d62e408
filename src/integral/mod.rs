//! Grayscale reduction of sampled curves into prefix sums.

pub mod reduce;
