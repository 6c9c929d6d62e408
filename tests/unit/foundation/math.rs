use super::*;

#[test]
fn linspace_covers_unit_interval() {
    let xs = linspace01(5);
    assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(linspace01(1), vec![0.0]);
    assert!(linspace01(0).is_empty());
}

#[test]
fn interp_matches_piecewise_linear_and_clamps_ends() {
    let xp = [0.2, 0.4, 0.8];
    let fp = [1.0, 3.0, 5.0];
    assert_eq!(interp(0.0, &xp, &fp), 1.0);
    assert_eq!(interp(1.0, &xp, &fp), 5.0);
    assert!((interp(0.3, &xp, &fp) - 2.0).abs() < 1e-12);
    assert!((interp(0.6, &xp, &fp) - 4.0).abs() < 1e-12);
    assert_eq!(interp(0.4, &xp, &fp), 3.0);
}

#[test]
fn interp_with_repeated_time_uses_later_segment() {
    let xp = [0.0, 0.5, 0.5, 1.0];
    let fp = [0.0, 0.0, 1.0, 1.0];
    assert_eq!(interp(0.5, &xp, &fp), 1.0);
    assert_eq!(interp(0.25, &xp, &fp), 0.0);
    assert!(interp(0.5, &[], &[]).is_nan());
}

#[test]
fn interp_with_nan_times_returns_nan_instead_of_indexing() {
    assert!(interp(0.5, &[f64::NAN, 1.0], &[0.0, 1.0]).is_nan());
    assert!(interp(0.5, &[f64::NAN, f64::NAN], &[0.0, 1.0]).is_nan());
}

#[test]
fn gradient_uses_central_differences_inside() {
    let g = gradient(&[0.0, 1.0, 4.0, 9.0]);
    assert_eq!(g, vec![1.0, 2.0, 4.0, 5.0]);
    assert_eq!(gradient(&[3.0]), vec![0.0]);
}

#[test]
fn all_close_is_relative_to_first() {
    assert!(all_close(&[0.4, 0.4, 0.400000001]));
    assert!(!all_close(&[0.4, 0.41]));
    assert!(all_close(&[]));
}

#[test]
fn population_statistics() {
    assert!((mean_abs(&[-1.0, 1.0, -2.0, 2.0]) - 1.5).abs() < 1e-12);
    assert!((population_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]) - 2.0).abs() < 1e-12);
}

#[test]
fn byte_conversion_rounds_and_clamps() {
    assert_eq!(unit_to_u8(0.4), 102);
    assert_eq!(unit_to_u8(1.5), 255);
    assert_eq!(unit_to_u8(-0.2), 0);
    assert_eq!(byte_from_f64(127.5), 128);
    assert_eq!(byte_from_f64(f64::NAN), 0);
}

#[test]
fn fresnel_reference_values() {
    let (s, c) = fresnel(0.0);
    assert_eq!((s, c), (0.0, 0.0));

    let (s, c) = fresnel(1.0);
    assert!((c - 0.779_893_400_376_822_8).abs() < 1e-12);
    assert!((s - 0.438_259_147_390_354_8).abs() < 1e-12);

    let (s, c) = fresnel(0.5);
    assert!((c - 0.492_344_225_871_446_3).abs() < 1e-12);
    assert!((s - 0.064_732_432_859_999_29).abs() < 1e-12);

    let (s_neg, c_neg) = fresnel(-1.0);
    assert!((c_neg + 0.779_893_400_376_822_8).abs() < 1e-12);
    assert!((s_neg + 0.438_259_147_390_354_8).abs() < 1e-12);
}

#[test]
fn fresnel_asymptotic_branch_approaches_one_half() {
    let (s, c) = fresnel(10.0);
    assert!((c - 0.499_898_694_205_515_7).abs() < 1e-6);
    assert!((s - 0.468_169_978_584_882_2).abs() < 1e-6);
}

#[test]
fn remap_is_affine() {
    assert_eq!(remap(0.5, 0.0, 1.0, 0.0, 255.0), 127.5);
    assert_eq!(remap(2.0, 1.0, 3.0, 0.0, 10.0), 5.0);
}
