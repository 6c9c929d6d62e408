use rand::Rng;

use crate::{
    config::KeyBounds,
    foundation::error::{CurveError, CurveResult},
    synth::{
        keyframe::{FloatCurve, Keyframe},
        profile::{KeyProfile, default_key_count, key_profile},
    },
    waveform::{family::ShapeFamily, shape::ShapeSampler},
};

/// Half-width of the uniform noise added to each key, shrinking with key density.
pub fn noise_amplitude(key_count: usize) -> f64 {
    0.1 / ((key_count as f64 + 1.0).ln() + 1.0)
}

/// Key count of scaled synthesis for a non-random family:
/// `trunc(default * resolution_scale)` clamped to `bounds`.
pub fn scaled_key_count(family: ShapeFamily, resolution_scale: f64, bounds: KeyBounds) -> usize {
    let scaled = (f64::from(default_key_count(family)) * resolution_scale) as i64;
    scaled.clamp(i64::from(bounds.min_keys), i64::from(bounds.max_keys)) as usize
}

/// Random-mode synthesis: key count uniform in `bounds`, noise always applied
/// and the noisy value clamped to `[0, 1]`.
#[tracing::instrument(skip(rng))]
pub fn synthesize_random<R: Rng + ?Sized>(
    family: ShapeFamily,
    bounds: KeyBounds,
    rng: &mut R,
) -> CurveResult<FloatCurve> {
    bounds.validate()?;
    let sampler = ShapeSampler::new(family, rng);
    let n = rng.random_range(bounds.min_keys..=bounds.max_keys) as usize;
    let noise = Noise {
        amplitude: noise_amplitude(n),
        scale: 1.0,
    };
    build_curve(&sampler, n, Some(noise), rng)
}

/// Scaled-mode synthesis driven by a per-family default key count.
///
/// `Random` ignores `resolution_scale` and redraws its count in `bounds`.
/// Noise is applied only when `noise_scale != 0`; without noise values are the
/// raw shape values.
#[tracing::instrument(skip(rng))]
pub fn synthesize_scaled<R: Rng + ?Sized>(
    family: ShapeFamily,
    resolution_scale: f64,
    noise_scale: f64,
    bounds: KeyBounds,
    rng: &mut R,
) -> CurveResult<FloatCurve> {
    bounds.validate()?;
    if !resolution_scale.is_finite() || !noise_scale.is_finite() {
        return Err(CurveError::validation(
            "resolution_scale and noise_scale must be finite",
        ));
    }

    let sampler = ShapeSampler::new(family, rng);
    let n = if family == ShapeFamily::Random {
        rng.random_range(bounds.min_keys..=bounds.max_keys) as usize
    } else {
        scaled_key_count(family, resolution_scale, bounds)
    };
    let noise = (noise_scale != 0.0).then(|| Noise {
        amplitude: noise_amplitude(n),
        scale: noise_scale,
    });
    build_curve(&sampler, n, noise, rng)
}

#[derive(Clone, Copy, Debug)]
struct Noise {
    amplitude: f64,
    scale: f64,
}

fn build_curve<R: Rng + ?Sized>(
    sampler: &ShapeSampler,
    n: usize,
    noise: Option<Noise>,
    rng: &mut R,
) -> CurveResult<FloatCurve> {
    let profile = key_profile(sampler.family());

    let mut times: Vec<f64> = (0..n).map(|_| rng.random_range(0.0..=1.0)).collect();
    times.sort_by(f64::total_cmp);

    let keys: Vec<Keyframe> = times
        .into_iter()
        .map(|t| synth_key(sampler, &profile, t, noise, rng))
        .collect();

    tracing::debug!(family = %sampler.family(), keys = keys.len(), "synthesized curve");
    FloatCurve::from_keys(keys).map_err(|e| CurveError::synthesis(e.to_string()))
}

fn synth_key<R: Rng + ?Sized>(
    sampler: &ShapeSampler,
    profile: &KeyProfile,
    t: f64,
    noise: Option<Noise>,
    rng: &mut R,
) -> Keyframe {
    let mut value = sampler.sample(t, rng);
    let tangents = profile.draw_tangents(rng);
    if let Some(Noise { amplitude, scale }) = noise {
        let jitter = rng.random_range(-amplitude..=amplitude);
        value = (value + jitter * scale).clamp(0.0, 1.0);
    }

    Keyframe {
        interp_mode: profile.interp_mode,
        tangent_mode: profile.tangent_mode,
        tangent_weight_mode: profile.tangent_weight_mode,
        time: t,
        value,
        arrive_tangent: tangents.arrive,
        arrive_tangent_weight: tangents.arrive_weight,
        leave_tangent: tangents.leave,
        leave_tangent_weight: tangents.leave_weight,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/synthesizer.rs"]
mod tests;
