use super::*;

#[test]
fn checkerboard_alternates_in_eight_pixel_squares() {
    let img = checkerboard(32, 16);
    assert_eq!(img.get_pixel(0, 0).0, CHECKER_LIGHT);
    assert_eq!(img.get_pixel(7, 7).0, CHECKER_LIGHT);
    assert_eq!(img.get_pixel(8, 0).0, CHECKER_WHITE);
    assert_eq!(img.get_pixel(0, 8).0, CHECKER_WHITE);
    assert_eq!(img.get_pixel(8, 8).0, CHECKER_LIGHT);
    assert_eq!(img.get_pixel(31, 15).0, CHECKER_LIGHT);
}

#[test]
fn over_extremes() {
    let dst = [10, 20, 30, 255];
    assert_eq!(over(dst, [1, 2, 3, 255]), [1, 2, 3, 255]);
    assert_eq!(over(dst, [1, 2, 3, 0]), dst);
    assert_eq!(over([0; 4], [0; 4]), [0; 4]);
}

#[test]
fn over_blends_half_alpha_on_opaque_matte() {
    let out = over(CHECKER_WHITE, [0, 0, 0, 128]);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 127);
    let out = over(CHECKER_LIGHT, [255, 0, 0, 102]);
    assert_eq!(out, [222, 120, 120, 255]);
}

#[test]
fn over_onto_transparent_keeps_source_color() {
    let out = over([0, 0, 0, 0], [90, 60, 30, 100]);
    assert_eq!(out, [90, 60, 30, 100]);
}

#[test]
fn over_in_place_checks_dimensions() {
    let mut dst = checkerboard(4, 4);
    let src = RgbaImage::new(2, 2);
    assert!(over_in_place(&mut dst, &src).is_err());

    let clear = RgbaImage::new(4, 4);
    let before = dst.clone();
    over_in_place(&mut dst, &clear).unwrap();
    assert_eq!(dst, before);
}
