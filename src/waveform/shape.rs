//! Per-family value functions mapping `t` in `[0, 1]` to a normalized value.
//!
//! Functions are left unclamped unless their construction clamps; callers
//! clamp after adding noise.

use std::f64::consts::{E, PI};

use rand::Rng;

use crate::{foundation::math::fresnel, waveform::family::ShapeFamily};

/// Range the Step threshold is drawn from, once per curve.
pub const STEP_THRESHOLD_RANGE: (f64, f64) = (0.3, 0.7);

const BELL_SIGMA: f64 = 0.05;
const LOGISTIC_STEEPNESS: f64 = 10.0;

pub fn parabolic(t: f64) -> f64 {
    (t - 0.5).powi(2)
}

pub fn sinusoidal(t: f64) -> f64 {
    ((t * PI - PI / 2.0).sin() + 1.0) / 2.0
}

pub fn exponential(t: f64) -> f64 {
    t.powi(3)
}

pub fn logarithmic(t: f64) -> f64 {
    (t * (E - 1.0)).ln_1p() / E.ln()
}

pub fn bell(t: f64) -> f64 {
    (-(t - 0.5).powi(2) / (2.0 * BELL_SIGMA * BELL_SIGMA)).exp()
}

pub fn cubic(t: f64) -> f64 {
    4.0 * (t - 0.5).powi(3) + 0.5
}

pub fn step(t: f64, threshold: f64) -> f64 {
    if t < threshold { 0.0 } else { 1.0 }
}

pub fn quadratic(t: f64) -> f64 {
    t * t
}

/// Logistic curve centred on 0.5.
pub fn hyperbolic(t: f64) -> f64 {
    1.0 / (1.0 + (-LOGISTIC_STEEPNESS * (t - 0.5)).exp())
}

pub fn lerp(t: f64) -> f64 {
    t
}

/// Three odd sine harmonics over two periods, rescaled and clamped.
pub fn dragon(t: f64) -> f64 {
    let theta = t * 4.0 * PI;
    let v = 0.3 * theta.sin()
        + 0.2 * (3.0 * theta + PI / 4.0).sin()
        + 0.1 * (5.0 * theta + PI / 2.0).sin();
    ((v + 0.6) / 1.2).clamp(0.0, 1.0)
}

pub fn cycle(t: f64) -> f64 {
    ((2.0 * PI * t).sin() + 1.0) / 2.0
}

pub fn rainbow(t: f64) -> f64 {
    (((2.0 * PI * t - PI / 2.0).sin() + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// Twice the Fresnel cosine integral, clamped.
pub fn euler_spiral(t: f64) -> f64 {
    let (_s, c) = fresnel(t);
    (2.0 * c).clamp(0.0, 1.0)
}

/// Golden-ratio weighted S-curve `t^φ / (t^φ + (1 - t)^φ)`.
pub fn fibonacci_weighted(t: f64) -> f64 {
    let phi = (1.0 + 5f64.sqrt()) / 2.0;
    let a = t.powf(phi);
    let b = (1.0 - t).powf(phi);
    (a / (a + b)).clamp(0.0, 1.0)
}

/// The deterministic formula of a family, if it has one.
///
/// `Step` needs a per-curve threshold and `Random` ignores `t`; both go
/// through [`ShapeSampler`].
pub fn formula(family: ShapeFamily) -> Option<fn(f64) -> f64> {
    let f: fn(f64) -> f64 = match family {
        ShapeFamily::Parabolic => parabolic,
        ShapeFamily::Sinusoidal => sinusoidal,
        ShapeFamily::Exponential => exponential,
        ShapeFamily::Logarithmic => logarithmic,
        ShapeFamily::Bell => bell,
        ShapeFamily::Cubic => cubic,
        ShapeFamily::Quadratic => quadratic,
        ShapeFamily::Hyperbolic => hyperbolic,
        ShapeFamily::Lerp => lerp,
        ShapeFamily::Dragon => dragon,
        ShapeFamily::Cycle => cycle,
        ShapeFamily::Rainbow => rainbow,
        ShapeFamily::EulerSpiral => euler_spiral,
        ShapeFamily::FibonacciWeighted => fibonacci_weighted,
        ShapeFamily::Step | ShapeFamily::Random => return None,
    };
    Some(f)
}

/// Per-curve evaluator for one family.
#[derive(Clone, Copy, Debug)]
pub struct ShapeSampler {
    family: ShapeFamily,
    kind: SamplerKind,
}

#[derive(Clone, Copy, Debug)]
enum SamplerKind {
    Formula(fn(f64) -> f64),
    Step { threshold: f64 },
    Random,
}

impl ShapeSampler {
    /// Prepare a sampler. For `Step` this draws the threshold from `rng`;
    /// other families draw nothing here.
    pub fn new<R: Rng + ?Sized>(family: ShapeFamily, rng: &mut R) -> Self {
        let kind = match (family, formula(family)) {
            (_, Some(f)) => SamplerKind::Formula(f),
            (ShapeFamily::Step, None) => SamplerKind::Step {
                threshold: rng.random_range(STEP_THRESHOLD_RANGE.0..=STEP_THRESHOLD_RANGE.1),
            },
            (_, None) => SamplerKind::Random,
        };
        Self { family, kind }
    }

    /// Step sampler with a fixed threshold.
    pub fn step_at(threshold: f64) -> Self {
        Self {
            family: ShapeFamily::Step,
            kind: SamplerKind::Step { threshold },
        }
    }

    pub fn family(&self) -> ShapeFamily {
        self.family
    }

    /// Threshold of a `Step` sampler.
    pub fn step_threshold(&self) -> Option<f64> {
        match self.kind {
            SamplerKind::Step { threshold } => Some(threshold),
            _ => None,
        }
    }

    /// Value at `t`. Only `Random` consumes `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, t: f64, rng: &mut R) -> f64 {
        match self.kind {
            SamplerKind::Formula(f) => f(t),
            SamplerKind::Step { threshold } => step(t, threshold),
            SamplerKind::Random => rng.random_range(0.0..=1.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/shape.rs"]
mod tests;
