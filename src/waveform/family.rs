use std::{fmt, str::FromStr};

use rand::Rng;

use crate::foundation::error::{CurveError, CurveResult};

/// Named shape family of a single-channel curve.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeFamily {
    Parabolic,
    Sinusoidal,
    Exponential,
    Logarithmic,
    Bell,
    Cubic,
    Step,
    Random,
    Quadratic,
    Hyperbolic,
    Lerp,
    Dragon,
    Cycle,
    Rainbow,
    EulerSpiral,
    FibonacciWeighted,
}

impl ShapeFamily {
    /// Every family, in catalog order.
    pub const ALL: [ShapeFamily; 16] = [
        Self::Parabolic,
        Self::Sinusoidal,
        Self::Exponential,
        Self::Logarithmic,
        Self::Bell,
        Self::Cubic,
        Self::Step,
        Self::Random,
        Self::Quadratic,
        Self::Hyperbolic,
        Self::Lerp,
        Self::Dragon,
        Self::Cycle,
        Self::Rainbow,
        Self::EulerSpiral,
        Self::FibonacciWeighted,
    ];

    /// Upper-case identifier, as used in type signatures and requests.
    pub fn name(self) -> &'static str {
        match self {
            Self::Parabolic => "PARABOLIC",
            Self::Sinusoidal => "SINUSOIDAL",
            Self::Exponential => "EXPONENTIAL",
            Self::Logarithmic => "LOGARITHMIC",
            Self::Bell => "BELL",
            Self::Cubic => "CUBIC",
            Self::Step => "STEP",
            Self::Random => "RANDOM",
            Self::Quadratic => "QUADRATIC",
            Self::Hyperbolic => "HYPERBOLIC",
            Self::Lerp => "LERP",
            Self::Dragon => "DRAGON",
            Self::Cycle => "CYCLE",
            Self::Rainbow => "RAINBOW",
            Self::EulerSpiral => "EULER_SPIRAL",
            Self::FibonacciWeighted => "FIBONACCI_WEIGHTED",
        }
    }

    /// Resolve an optional request name, falling back to [`ShapeFamily::Parabolic`]
    /// when the name is missing or unknown.
    pub fn from_name_or_default(name: Option<&str>) -> Self {
        name.and_then(|n| n.parse().ok())
            .unwrap_or(Self::Parabolic)
    }

    /// Pick a family uniformly at random.
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeFamily {
    type Err = CurveError;

    fn from_str(s: &str) -> CurveResult<Self> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|family| family.name() == wanted)
            .ok_or_else(|| CurveError::validation(format!("unknown shape family '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/family.rs"]
mod tests;
