use crate::{assemble::record::Channel, waveform::family::ShapeFamily};

/// Name used when a request carries none.
pub const UNNAMED_CURVE: &str = "Unnamed Curve";

/// Axis of a secondary offset curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffsetAxis {
    X,
    Y,
}

/// Resolved per-curve request: family plus scaled-synthesis knobs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveRequest {
    pub family: ShapeFamily,
    pub resolution_scale: f64,
    pub noise_scale: f64,
}

/// Flat request mapping for request-driven assembly.
///
/// Every key is optional. Family names are matched case-insensitively and
/// unknown names fall back to `PARABOLIC`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CurveSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "R_float_curve_type", skip_serializing_if = "Option::is_none")]
    pub r_float_curve_type: Option<String>,
    #[serde(rename = "G_float_curve_type", skip_serializing_if = "Option::is_none")]
    pub g_float_curve_type: Option<String>,
    #[serde(rename = "B_float_curve_type", skip_serializing_if = "Option::is_none")]
    pub b_float_curve_type: Option<String>,
    #[serde(rename = "A_float_curve_type", skip_serializing_if = "Option::is_none")]
    pub a_float_curve_type: Option<String>,

    #[serde(rename = "R_resolution_scale", skip_serializing_if = "Option::is_none")]
    pub r_resolution_scale: Option<f64>,
    #[serde(rename = "G_resolution_scale", skip_serializing_if = "Option::is_none")]
    pub g_resolution_scale: Option<f64>,
    #[serde(rename = "B_resolution_scale", skip_serializing_if = "Option::is_none")]
    pub b_resolution_scale: Option<f64>,
    #[serde(rename = "A_resolution_scale", skip_serializing_if = "Option::is_none")]
    pub a_resolution_scale: Option<f64>,

    #[serde(rename = "R_noise_scale", skip_serializing_if = "Option::is_none")]
    pub r_noise_scale: Option<f64>,
    #[serde(rename = "G_noise_scale", skip_serializing_if = "Option::is_none")]
    pub g_noise_scale: Option<f64>,
    #[serde(rename = "B_noise_scale", skip_serializing_if = "Option::is_none")]
    pub b_noise_scale: Option<f64>,
    #[serde(rename = "A_noise_scale", skip_serializing_if = "Option::is_none")]
    pub a_noise_scale: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_x_offset_curve_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_y_offset_curve_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_x_resolution_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_y_resolution_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_x_noise_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_y_noise_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_x_offset_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_y_offset_scale: Option<f64>,

    /// Upper bound of the uniform adjustment draws (default 0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub randomize_adjustments: Option<f64>,
}

impl CurveSpec {
    pub fn from_json_str(s: &str) -> crate::foundation::error::CurveResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn resolved_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_CURVE)
    }

    pub fn resolved_description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Raw family string of a channel as supplied by the caller.
    pub fn channel_family_name(&self, channel: Channel) -> Option<&str> {
        match channel {
            Channel::R => self.r_float_curve_type.as_deref(),
            Channel::G => self.g_float_curve_type.as_deref(),
            Channel::B => self.b_float_curve_type.as_deref(),
            Channel::A => self.a_float_curve_type.as_deref(),
        }
    }

    pub fn channel(&self, channel: Channel) -> CurveRequest {
        let (resolution, noise) = match channel {
            Channel::R => (self.r_resolution_scale, self.r_noise_scale),
            Channel::G => (self.g_resolution_scale, self.g_noise_scale),
            Channel::B => (self.b_resolution_scale, self.b_noise_scale),
            Channel::A => (self.a_resolution_scale, self.a_noise_scale),
        };
        CurveRequest {
            family: ShapeFamily::from_name_or_default(self.channel_family_name(channel)),
            resolution_scale: resolution.unwrap_or(1.0),
            noise_scale: noise.unwrap_or(0.0),
        }
    }

    pub fn offset(&self, axis: OffsetAxis) -> CurveRequest {
        let (family, resolution, noise) = match axis {
            OffsetAxis::X => (
                self.meta_x_offset_curve_type.as_deref(),
                self.meta_x_resolution_scale,
                self.meta_x_noise_scale,
            ),
            OffsetAxis::Y => (
                self.meta_y_offset_curve_type.as_deref(),
                self.meta_y_resolution_scale,
                self.meta_y_noise_scale,
            ),
        };
        CurveRequest {
            family: ShapeFamily::from_name_or_default(family),
            resolution_scale: resolution.unwrap_or(1.0),
            noise_scale: noise.unwrap_or(0.0),
        }
    }

    pub fn offset_scale(&self, axis: OffsetAxis) -> f64 {
        match axis {
            OffsetAxis::X => self.meta_x_offset_scale,
            OffsetAxis::Y => self.meta_y_offset_scale,
        }
        .unwrap_or(0.0)
    }

    /// `"{name}-{R}-{G}-{B}-{A}"` from the raw request strings, outer `-` trimmed.
    pub fn type_signature(&self) -> String {
        let parts = Channel::ALL.map(|c| self.channel_family_name(c).unwrap_or_default());
        format!("{}-{}", self.resolved_name(), parts.join("-"))
            .trim_matches('-')
            .to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/spec.rs"]
mod tests;
