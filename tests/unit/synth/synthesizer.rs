use rand::{SeedableRng, rngs::StdRng};

use super::*;
use crate::{synth::profile::key_profile, waveform::shape::formula};

fn is_sorted(curve: &FloatCurve) -> bool {
    curve.keys.windows(2).all(|w| w[0].time <= w[1].time)
}

#[test]
fn noise_amplitude_shrinks_with_density() {
    assert!((noise_amplitude(1) - 0.1 / (2f64.ln() + 1.0)).abs() < 1e-15);
    assert!(noise_amplitude(100) < noise_amplitude(10));
}

#[test]
fn random_mode_respects_bounds_and_order() {
    let mut rng = StdRng::seed_from_u64(42);
    let bounds = KeyBounds::new(2, 100).unwrap();
    for family in ShapeFamily::ALL {
        for _ in 0..10 {
            let curve = synthesize_random(family, bounds, &mut rng).unwrap();
            assert!(bounds.contains(curve.len()), "{family}: {}", curve.len());
            assert!(is_sorted(&curve));
            for k in &curve.keys {
                assert!((0.0..=1.0).contains(&k.time));
                assert!((0.0..=1.0).contains(&k.value));
            }
        }
    }
}

#[test]
fn random_mode_noise_stays_within_amplitude() {
    let mut rng = StdRng::seed_from_u64(8);
    let curve = synthesize_random(ShapeFamily::Lerp, KeyBounds::default(), &mut rng).unwrap();
    let amp = noise_amplitude(curve.len());
    for k in &curve.keys {
        let expected = k.time.clamp(0.0, 1.0);
        assert!((k.value - expected).abs() <= amp + 1e-12);
    }
}

#[test]
fn random_mode_rejects_bad_bounds() {
    let mut rng = StdRng::seed_from_u64(0);
    let bad = KeyBounds {
        min_keys: 10,
        max_keys: 5,
    };
    assert!(synthesize_random(ShapeFamily::Bell, bad, &mut rng).is_err());
}

#[test]
fn scaled_mode_without_noise_uses_raw_shape_values() {
    let mut rng = StdRng::seed_from_u64(17);
    for family in ShapeFamily::ALL {
        if matches!(family, ShapeFamily::Random | ShapeFamily::Step) {
            continue;
        }
        let curve =
            synthesize_scaled(family, 1.0, 0.0, KeyBounds::default(), &mut rng).unwrap();
        let expected_count = (default_key_count(family) as usize).clamp(2, 100);
        assert_eq!(curve.len(), expected_count, "{family}");
        assert!(is_sorted(&curve));

        let f = formula(family).unwrap();
        let profile = key_profile(family);
        for k in &curve.keys {
            assert_eq!(k.value, f(k.time), "{family} at {}", k.time);
            assert_eq!(k.interp_mode, profile.interp_mode);
            assert_eq!(k.tangent_mode, profile.tangent_mode);
            assert_eq!(k.tangent_weight_mode, profile.tangent_weight_mode);
        }
    }
}

#[test]
fn scaled_step_is_two_level_with_one_threshold() {
    let mut rng = StdRng::seed_from_u64(2024);
    let curve =
        synthesize_scaled(ShapeFamily::Step, 1.0, 0.0, KeyBounds::default(), &mut rng).unwrap();

    let mut replay = StdRng::seed_from_u64(2024);
    let threshold: f64 = replay.random_range(0.3..=0.7);

    for k in &curve.keys {
        let expected = if k.time < threshold { 0.0 } else { 1.0 };
        assert_eq!(k.value, expected);
        assert_eq!(k.arrive_tangent, 0.0);
        assert_eq!(k.leave_tangent_weight, 0.0);
    }
}

#[test]
fn scaled_key_count_truncates_then_clamps() {
    let b = KeyBounds::default();
    assert_eq!(scaled_key_count(ShapeFamily::Parabolic, 0.5, b), 60);
    assert_eq!(scaled_key_count(ShapeFamily::Bell, 0.33, b), 41);
    assert_eq!(scaled_key_count(ShapeFamily::Step, 0.001, b), 2);
    assert_eq!(scaled_key_count(ShapeFamily::Step, -3.0, b), 2);
    assert_eq!(scaled_key_count(ShapeFamily::Rainbow, 10.0, b), 100);
}

#[test]
fn scaled_random_ignores_resolution() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        let curve =
            synthesize_scaled(ShapeFamily::Random, 0.0, 0.0, KeyBounds::default(), &mut rng)
                .unwrap();
        assert!((2..=100).contains(&curve.len()));
    }
}

#[test]
fn scaled_noise_is_scaled_and_clamped() {
    let mut rng = StdRng::seed_from_u64(77);
    let curve =
        synthesize_scaled(ShapeFamily::Lerp, 0.5, 2.0, KeyBounds::default(), &mut rng).unwrap();
    assert_eq!(curve.len(), 55);
    let amp = noise_amplitude(55) * 2.0;
    let mut any_moved = false;
    for k in &curve.keys {
        assert!((0.0..=1.0).contains(&k.value));
        assert!((k.value - k.time).abs() <= amp + 1e-12);
        any_moved |= k.value != k.time;
    }
    assert!(any_moved);
}

#[test]
fn scaled_rejects_non_finite_scales() {
    let mut rng = StdRng::seed_from_u64(1);
    let b = KeyBounds::default();
    assert!(synthesize_scaled(ShapeFamily::Bell, f64::NAN, 0.0, b, &mut rng).is_err());
    assert!(synthesize_scaled(ShapeFamily::Bell, 1.0, f64::INFINITY, b, &mut rng).is_err());
}

#[test]
fn same_seed_reproduces_curve() {
    let a = synthesize_random(
        ShapeFamily::Dragon,
        KeyBounds::default(),
        &mut StdRng::seed_from_u64(31),
    )
    .unwrap();
    let b = synthesize_random(
        ShapeFamily::Dragon,
        KeyBounds::default(),
        &mut StdRng::seed_from_u64(31),
    )
    .unwrap();
    assert_eq!(a, b);
}

#[test]
fn every_curve_carries_sentinel_and_constant_extrapolation() {
    let mut rng = StdRng::seed_from_u64(3);
    let curve =
        synthesize_scaled(ShapeFamily::Cycle, 1.0, 0.5, KeyBounds::default(), &mut rng).unwrap();
    assert_eq!(
        curve.default_value,
        crate::synth::keyframe::DEFAULT_VALUE_SENTINEL
    );
    assert_eq!(
        curve.post_infinity_extrap,
        crate::synth::keyframe::Extrapolation::Constant
    );
}
