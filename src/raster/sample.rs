//! Keyframe extraction, linear resampling and the alpha remap shared by the
//! preview and the integral reducer.

use crate::{
    assemble::record::{Channel, ChannelCurves, ColorCurveRecord},
    foundation::math::{all_close, interp, linspace01, remap},
    synth::keyframe::FloatCurve,
};

/// Values closer to zero than this are snapped to exactly zero.
pub const ZERO_SNAP_EPSILON: f64 = 1e-6;

/// `(times, values)` extracted from one curve's keys.
#[derive(Clone, Debug, PartialEq)]
pub struct CurvePoints {
    pub times: Vec<f64>,
    pub values: Vec<f64>,
}

impl CurvePoints {
    /// Build from `(time, value)` pairs in key order.
    ///
    /// One pair expands to the constant `[(0, v), (1, v)]`. Returns `None` when
    /// there are no pairs or any time or value is not finite.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let (mut times, mut values): (Vec<f64>, Vec<f64>) = pairs
            .into_iter()
            .map(|(t, v)| {
                (t.is_finite() && v.is_finite())
                    .then_some((t, if v.abs() < ZERO_SNAP_EPSILON { 0.0 } else { v }))
            })
            .collect::<Option<Vec<_>>>()?
            .into_iter()
            .unzip();
        match times.len() {
            0 => None,
            1 => {
                let v = values[0];
                times = vec![0.0, 1.0];
                values = vec![v, v];
                Some(Self { times, values })
            }
            _ => Some(Self { times, values }),
        }
    }

    pub fn from_curve(curve: &FloatCurve) -> Option<Self> {
        Self::from_pairs(curve.keys.iter().map(|k| (k.time, k.value)))
    }

    pub fn value_at(&self, t: f64) -> f64 {
        interp(t, &self.times, &self.values)
    }

    /// `width` evenly spaced samples over `[0, 1]`.
    pub fn resample(&self, width: usize) -> Vec<f64> {
        linspace01(width)
            .into_iter()
            .map(|t| self.value_at(t))
            .collect()
    }
}

/// Map sampled alpha to `[0, 255]` intensities, rounded.
///
/// A numerically flat signal keeps its level (`round(a0 * 255)`); otherwise the
/// sampled range is stretched to the full 8-bit range.
pub fn remap_alpha(samples: &[f64]) -> Vec<f64> {
    let Some(&first) = samples.first() else {
        return Vec::new();
    };
    if all_close(samples) {
        return vec![(first * 255.0).round(); samples.len()];
    }

    let (lo, hi) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if lo == hi {
        return vec![255.0; samples.len()];
    }
    samples
        .iter()
        .map(|&v| remap(v, lo, hi, 0.0, 255.0).round())
        .collect()
}

/// Resampled R, G, B in curve units plus alpha before and after the remap.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledChannels {
    pub r: Vec<f64>,
    pub g: Vec<f64>,
    pub b: Vec<f64>,
    pub a: Vec<f64>,
    /// Alpha mapped to `[0, 255]` by [`remap_alpha`].
    pub a_remapped: Vec<f64>,
}

impl SampledChannels {
    pub fn from_points(points: [CurvePoints; 4], width: usize) -> Self {
        let [r, g, b, a] = points.map(|p| p.resample(width));
        let a_remapped = remap_alpha(&a);
        Self {
            r,
            g,
            b,
            a,
            a_remapped,
        }
    }

    pub fn from_curves(curves: &ChannelCurves, width: usize) -> Option<Self> {
        let [r, g, b, a] = Channel::ALL.map(|c| CurvePoints::from_curve(curves.get(c)));
        Some(Self::from_points([r?, g?, b?, a?], width))
    }

    pub fn from_record(record: &ColorCurveRecord, width: usize) -> Option<Self> {
        Self::from_curves(&record.float_curves, width)
    }

    /// Sample an untyped `curve_json` document.
    ///
    /// Only `floatCurves.{R,G,B,A}.keys[].{time,value}` are read. A missing
    /// channel or malformed key data yields `None`.
    pub fn from_curve_json(curve_json: &serde_json::Value, width: usize) -> Option<Self> {
        let float_curves = curve_json.get("floatCurves")?;
        let [r, g, b, a] = Channel::ALL.map(|c| json_points(float_curves.get(c.name())?));
        Some(Self::from_points([r?, g?, b?, a?], width))
    }

    pub fn width(&self) -> usize {
        self.r.len()
    }
}

fn json_points(channel: &serde_json::Value) -> Option<CurvePoints> {
    let keys = channel.get("keys")?.as_array()?;
    let pairs = keys
        .iter()
        .map(|k| Some((k.get("time")?.as_f64()?, k.get("value")?.as_f64()?)))
        .collect::<Option<Vec<_>>>()?;
    CurvePoints::from_pairs(pairs)
}

impl FloatCurve {
    /// `(t, value)` at `0, step, 2*step, ...`, ending exactly at `t = 1`.
    ///
    /// Values use the same linear interpolation as the preview. Empty when the
    /// curve has no keys or `step` is not positive.
    pub fn step_through(&self, step: f64) -> Vec<(f64, f64)> {
        let Some(points) = CurvePoints::from_curve(self) else {
            return Vec::new();
        };
        if !(step > 0.0 && step.is_finite()) {
            return Vec::new();
        }

        let n = (1.0 / step + 1e-9).floor() as usize;
        let mut ts: Vec<f64> = (0..=n).map(|i| (i as f64 * step).min(1.0)).collect();
        if ts.last().is_some_and(|&t| t < 1.0 - 1e-9) {
            ts.push(1.0);
        }
        ts.into_iter().map(|t| (t, points.value_at(t))).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/sample.rs"]
mod tests;
