//! Per-family keyframe metadata: interpolation/tangent modes, tangent ranges
//! and default key counts for scaled synthesis.

use rand::Rng;

use crate::{
    synth::keyframe::{InterpMode, TangentMode, TangentWeightMode},
    waveform::family::ShapeFamily,
};

/// Closed range a tangent scalar is drawn from. Zero-width spans draw nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub lo: f64,
    pub hi: f64,
}

impl Span {
    pub const ZERO: Span = Span { lo: 0.0, hi: 0.0 };

    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// `[-half_width, half_width]`.
    pub const fn symmetric(half_width: f64) -> Self {
        Self {
            lo: -half_width,
            hi: half_width,
        }
    }

    pub fn contains(self, v: f64) -> bool {
        self.lo <= v && v <= self.hi
    }

    pub fn draw<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        if self.lo < self.hi {
            rng.random_range(self.lo..=self.hi)
        } else {
            self.lo
        }
    }
}

/// The four tangent scalars drawn for every key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TangentDraw {
    pub arrive: f64,
    pub leave: f64,
    pub arrive_weight: f64,
    pub leave_weight: f64,
}

/// Modes and tangent ranges attached to every key of one family.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyProfile {
    pub interp_mode: InterpMode,
    pub tangent_mode: TangentMode,
    pub tangent_weight_mode: TangentWeightMode,
    pub arrive: Span,
    pub leave: Span,
    pub arrive_weight: Span,
    pub leave_weight: Span,
}

impl KeyProfile {
    /// Draw order: arrive, leave, arrive weight, leave weight.
    pub fn draw_tangents<R: Rng + ?Sized>(&self, rng: &mut R) -> TangentDraw {
        TangentDraw {
            arrive: self.arrive.draw(rng),
            leave: self.leave.draw(rng),
            arrive_weight: self.arrive_weight.draw(rng),
            leave_weight: self.leave_weight.draw(rng),
        }
    }
}

const fn cubic_auto_both(tangent: f64, weight: Span) -> KeyProfile {
    KeyProfile {
        interp_mode: InterpMode::Cubic,
        tangent_mode: TangentMode::Auto,
        tangent_weight_mode: TangentWeightMode::WeightedBoth,
        arrive: Span::symmetric(tangent),
        leave: Span::symmetric(tangent),
        arrive_weight: weight,
        leave_weight: weight,
    }
}

const fn cubic_user_both(tangent: f64) -> KeyProfile {
    KeyProfile {
        interp_mode: InterpMode::Cubic,
        tangent_mode: TangentMode::User,
        tangent_weight_mode: TangentWeightMode::WeightedBoth,
        arrive: Span::symmetric(tangent),
        leave: Span::symmetric(tangent),
        arrive_weight: Span::new(0.3, 0.7),
        leave_weight: Span::new(0.3, 0.7),
    }
}

const SINE_PROFILE: KeyProfile = KeyProfile {
    interp_mode: InterpMode::Cubic,
    tangent_mode: TangentMode::Auto,
    tangent_weight_mode: TangentWeightMode::WeightedArrive,
    arrive: Span::symmetric(0.2),
    leave: Span::symmetric(0.2),
    arrive_weight: Span::new(0.3, 0.7),
    leave_weight: Span::new(0.3, 0.7),
};

const FLAT_BREAK: KeyProfile = KeyProfile {
    interp_mode: InterpMode::Linear,
    tangent_mode: TangentMode::Break,
    tangent_weight_mode: TangentWeightMode::None,
    arrive: Span::ZERO,
    leave: Span::ZERO,
    arrive_weight: Span::ZERO,
    leave_weight: Span::ZERO,
};

/// Key metadata for `family`.
pub fn key_profile(family: ShapeFamily) -> KeyProfile {
    match family {
        ShapeFamily::Parabolic => cubic_auto_both(0.2, Span::new(0.2, 0.6)),
        ShapeFamily::Quadratic => cubic_auto_both(0.3, Span::new(0.2, 0.6)),
        ShapeFamily::Cubic => cubic_auto_both(0.2, Span::new(0.3, 0.7)),
        ShapeFamily::Bell => cubic_auto_both(0.1, Span::new(0.2, 0.5)),
        ShapeFamily::Hyperbolic => cubic_auto_both(0.4, Span::new(0.3, 0.7)),
        ShapeFamily::Sinusoidal | ShapeFamily::Cycle => SINE_PROFILE,
        ShapeFamily::Exponential => KeyProfile {
            interp_mode: InterpMode::Linear,
            tangent_mode: TangentMode::Break,
            tangent_weight_mode: TangentWeightMode::WeightedLeave,
            arrive: Span::new(0.0, 0.3),
            leave: Span::new(0.5, 1.0),
            arrive_weight: Span::new(0.1, 0.4),
            leave_weight: Span::new(0.5, 1.0),
        },
        ShapeFamily::Logarithmic => KeyProfile {
            interp_mode: InterpMode::Linear,
            tangent_mode: TangentMode::Break,
            tangent_weight_mode: TangentWeightMode::WeightedArrive,
            arrive: Span::new(0.1, 0.5),
            leave: Span::new(0.1, 0.5),
            arrive_weight: Span::new(0.1, 0.3),
            leave_weight: Span::new(0.1, 0.3),
        },
        ShapeFamily::Step => KeyProfile {
            interp_mode: InterpMode::Constant,
            ..FLAT_BREAK
        },
        ShapeFamily::Lerp => FLAT_BREAK,
        ShapeFamily::Random => KeyProfile {
            arrive: Span::symmetric(0.5),
            leave: Span::symmetric(0.5),
            arrive_weight: Span::new(0.0, 1.0),
            leave_weight: Span::new(0.0, 1.0),
            ..FLAT_BREAK
        },
        ShapeFamily::Dragon | ShapeFamily::Rainbow => cubic_user_both(0.3),
        ShapeFamily::EulerSpiral => cubic_user_both(0.4),
        ShapeFamily::FibonacciWeighted => cubic_user_both(0.5),
    }
}

/// Key count of scaled synthesis at `resolution_scale == 1.0`, before clamping.
///
/// `Random` is listed for completeness; scaled synthesis redraws its count.
pub fn default_key_count(family: ShapeFamily) -> u32 {
    match family {
        ShapeFamily::Parabolic => 120,
        ShapeFamily::Sinusoidal => 130,
        ShapeFamily::Exponential => 115,
        ShapeFamily::Logarithmic => 115,
        ShapeFamily::Bell => 125,
        ShapeFamily::Cubic => 120,
        ShapeFamily::Step => 110,
        ShapeFamily::Quadratic => 120,
        ShapeFamily::Hyperbolic => 115,
        ShapeFamily::Lerp => 110,
        ShapeFamily::Dragon => 140,
        ShapeFamily::Cycle => 130,
        ShapeFamily::Rainbow => 150,
        ShapeFamily::EulerSpiral => 135,
        ShapeFamily::FibonacciWeighted => 125,
        ShapeFamily::Random => 150,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/profile.rs"]
mod tests;
