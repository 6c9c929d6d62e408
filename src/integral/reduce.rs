use crate::{
    assemble::record::ColorCurveRecord,
    raster::sample::SampledChannels,
};

/// Grayscale intensity per column: `round((R + G + B) / 3 * A / 255)`.
///
/// Channels are taken as clamped `[0, 255]` intensities.
pub fn grayscale_row(sampled: &SampledChannels) -> Vec<i64> {
    (0..sampled.width())
        .map(|x| {
            let rgb = [sampled.r[x], sampled.g[x], sampled.b[x]].map(|v| intensity(v * 255.0));
            let alpha = intensity(sampled.a_remapped[x]) / 255.0;
            ((rgb[0] + rgb[1] + rgb[2]) / 3.0 * alpha).round() as i64
        })
        .collect()
}

/// Running sum, `out[i] = values[0] + ... + values[i]`.
pub fn prefix_sum(values: &[i64]) -> Vec<i64> {
    values
        .iter()
        .scan(0i64, |acc, &v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// Prefix-summed grayscale row of a record. `None` when a channel cannot be sampled.
#[tracing::instrument(skip(record), fields(id = %record.id))]
pub fn compute_row_integral(record: &ColorCurveRecord, width: usize) -> Option<Vec<i64>> {
    let sampled = SampledChannels::from_record(record, width)?;
    Some(prefix_sum(&grayscale_row(&sampled)))
}

/// Prefix-summed grayscale row of an untyped `curve_json` document.
#[tracing::instrument(skip(curve_json))]
pub fn compute_row_integral_json(curve_json: &serde_json::Value, width: usize) -> Option<Vec<i64>> {
    let sampled = SampledChannels::from_curve_json(curve_json, width)?;
    Some(prefix_sum(&grayscale_row(&sampled)))
}

/// Already-sampled channel rows; alpha is in `[0, 1]`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChannelRows {
    #[serde(rename = "r_curve", default)]
    pub r: Option<Vec<f64>>,
    #[serde(rename = "g_curve", default)]
    pub g: Option<Vec<f64>>,
    #[serde(rename = "b_curve", default)]
    pub b: Option<Vec<f64>>,
    #[serde(rename = "a_curve", default)]
    pub a: Option<Vec<f64>>,
}

/// Row-major integral image whose rows are multiples of one prefix sum.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct IntegralImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<i64>,
}

impl IntegralImage {
    pub fn get(&self, x: usize, y: usize) -> Option<i64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    pub fn row(&self, y: usize) -> Option<&[i64]> {
        if y >= self.height {
            return None;
        }
        Some(&self.data[y * self.width..(y + 1) * self.width])
    }
}

/// 2-D integral image from already-sampled rows.
///
/// Grayscale is `round((r + g + b) / 3 * a)` over the first `width` samples;
/// row `y` holds `(y + 1) * prefix_sum`. `None` when a channel is missing, shorter
/// than `width`, or either dimension is zero.
#[tracing::instrument(skip(rows))]
pub fn compute_integral_image(rows: &ChannelRows, width: usize, height: usize) -> Option<IntegralImage> {
    if width == 0 || height == 0 {
        return None;
    }
    let r = rows.r.as_deref()?.get(..width)?;
    let g = rows.g.as_deref()?.get(..width)?;
    let b = rows.b.as_deref()?.get(..width)?;
    let a = rows.a.as_deref()?.get(..width)?;

    let gray: Vec<i64> = (0..width)
        .map(|x| ((r[x] + g[x] + b[x]) / 3.0 * a[x]).round() as i64)
        .collect();
    let row = prefix_sum(&gray);

    let data = (1..=height as i64)
        .flat_map(|k| row.iter().map(move |&v| v * k))
        .collect();
    Some(IntegralImage {
        width,
        height,
        data,
    })
}

fn intensity(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 255.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/integral/reduce.rs"]
mod tests;
