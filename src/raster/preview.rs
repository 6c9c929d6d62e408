use std::io::Cursor;

use image::{Rgba, RgbaImage};

use crate::{
    assemble::record::ColorCurveRecord,
    config::RasterSettings,
    foundation::{
        error::{CurveError, CurveResult},
        math::{byte_from_f64, gradient, mean_abs, population_std, unit_to_u8},
    },
    raster::{
        composite::{checkerboard, over_in_place},
        sample::SampledChannels,
    },
};

/// Smoothness summary of a sampled record.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStats {
    /// Mean absolute gradient of red in curve units per sample.
    pub red_gradient_mean: f64,
    pub green_gradient_mean: f64,
    pub blue_gradient_mean: f64,
    /// Population standard deviation of the remapped alpha gradient.
    pub alpha_spikiness: f64,
}

impl GradientStats {
    pub fn from_samples(sampled: &SampledChannels) -> Self {
        Self {
            red_gradient_mean: mean_abs(&gradient(&sampled.r)),
            green_gradient_mean: mean_abs(&gradient(&sampled.g)),
            blue_gradient_mean: mean_abs(&gradient(&sampled.b)),
            alpha_spikiness: population_std(&gradient(&sampled.a_remapped)),
        }
    }
}

/// A rendered preview and its gradient statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterPreview {
    pub image: RgbaImage,
    pub stats: GradientStats,
}

impl RasterPreview {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn encode_png(&self) -> CurveResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .map_err(|e| CurveError::raster(format!("png encode failed: {e}")))?;
        Ok(buf)
    }
}

/// Render a record's float curves. `None` when a channel cannot be sampled.
#[tracing::instrument(skip(record), fields(id = %record.id))]
pub fn rasterize(record: &ColorCurveRecord, settings: &RasterSettings) -> Option<RasterPreview> {
    let sampled = SampledChannels::from_record(record, settings.width as usize)?;
    rasterize_sampled(&sampled, settings)
}

/// Render an untyped `curve_json` document. `None` on a missing channel or
/// malformed key data.
#[tracing::instrument(skip(curve_json))]
pub fn rasterize_json(
    curve_json: &serde_json::Value,
    settings: &RasterSettings,
) -> Option<RasterPreview> {
    let sampled = SampledChannels::from_curve_json(curve_json, settings.width as usize)?;
    rasterize_sampled(&sampled, settings)
}

/// Build the preview from already-sampled channels.
///
/// Every row is identical. Unless the background is transparent, the row is
/// composited over the checkerboard matte.
pub fn rasterize_sampled(
    sampled: &SampledChannels,
    settings: &RasterSettings,
) -> Option<RasterPreview> {
    if settings.width == 0 || settings.height == 0 || sampled.width() != settings.width as usize {
        return None;
    }

    let row: Vec<[u8; 4]> = (0..sampled.width())
        .map(|x| {
            [
                unit_to_u8(sampled.r[x]),
                unit_to_u8(sampled.g[x]),
                unit_to_u8(sampled.b[x]),
                byte_from_f64(sampled.a_remapped[x]),
            ]
        })
        .collect();
    let curves = RgbaImage::from_fn(settings.width, settings.height, |x, _| Rgba(row[x as usize]));

    let image = if settings.transparent_background {
        curves
    } else {
        let mut matte = checkerboard(settings.width, settings.height);
        over_in_place(&mut matte, &curves).ok()?;
        matte
    };

    let stats = GradientStats::from_samples(sampled);
    tracing::debug!(
        red = stats.red_gradient_mean,
        green = stats.green_gradient_mean,
        blue = stats.blue_gradient_mean,
        spikiness = stats.alpha_spikiness,
        "rasterized curves"
    );
    Some(RasterPreview { image, stats })
}

#[cfg(test)]
#[path = "../../tests/unit/raster/preview.rs"]
mod tests;
