use image::{Rgba, RgbaImage};

use crate::foundation::error::{CurveError, CurveResult};

/// Straight (non-premultiplied) RGBA8 pixel.
pub type StraightRgba8 = [u8; 4];

/// Edge length of one matte square in pixels.
pub const CHECKER_SQUARE: u32 = 8;
/// Matte color of squares with even `(x / 8 + y / 8)`.
pub const CHECKER_LIGHT: StraightRgba8 = [200, 200, 200, 255];
/// Matte color of squares with odd `(x / 8 + y / 8)`.
pub const CHECKER_WHITE: StraightRgba8 = [255, 255, 255, 255];

pub fn checker_color(x: u32, y: u32) -> StraightRgba8 {
    if (x / CHECKER_SQUARE + y / CHECKER_SQUARE).is_multiple_of(2) {
        CHECKER_LIGHT
    } else {
        CHECKER_WHITE
    }
}

/// Opaque checkerboard matte.
pub fn checkerboard(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| Rgba(checker_color(x, y)))
}

/// Porter-Duff source-over on straight-alpha pixels.
pub fn over(dst: StraightRgba8, src: StraightRgba8) -> StraightRgba8 {
    match src[3] {
        255 => return src,
        0 => return dst,
        _ => {}
    }

    let sa = u32::from(src[3]);
    let da = u32::from(mul_div255(u16::from(dst[3]), 255 - u16::from(src[3])));
    let out_a = sa + da;
    if out_a == 0 {
        return [0; 4];
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let num = u32::from(src[i]) * sa + u32::from(dst[i]) * da;
        out[i] = ((num + out_a / 2) / out_a).min(255) as u8;
    }
    out[3] = out_a.min(255) as u8;
    out
}

/// Composite `src` over `dst` pixel by pixel.
pub fn over_in_place(dst: &mut RgbaImage, src: &RgbaImage) -> CurveResult<()> {
    if dst.dimensions() != src.dimensions() {
        return Err(CurveError::raster(
            "over_in_place expects images of equal dimensions",
        ));
    }
    for (d, s) in dst.pixels_mut().zip(src.pixels()) {
        d.0 = over(d.0, s.0);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
