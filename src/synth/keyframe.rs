use crate::foundation::error::{CurveError, CurveResult};

/// Placeholder stored in `defaultValue` (single-precision max).
pub const DEFAULT_VALUE_SENTINEL: f64 = f32::MAX as f64;

/// Interpolation mode declared on a keyframe.
///
/// Deserialization is lenient: unknown names become [`InterpMode::Linear`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String")]
pub enum InterpMode {
    #[serde(rename = "RCIM_Constant")]
    Constant,
    #[serde(rename = "RCIM_Linear")]
    Linear,
    #[serde(rename = "RCIM_Cubic")]
    Cubic,
}

impl InterpMode {
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Constant => "RCIM_Constant",
            Self::Linear => "RCIM_Linear",
            Self::Cubic => "RCIM_Cubic",
        }
    }

    /// Resolve a wire name, defaulting to `Linear`.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "RCIM_Constant" => Self::Constant,
            "RCIM_Cubic" => Self::Cubic,
            _ => Self::Linear,
        }
    }

    /// Kind name used by plotting front ends.
    pub fn plotting_kind(self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Linear => "linear",
            Self::Cubic => "cubic",
        }
    }
}

impl From<String> for InterpMode {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TangentMode {
    #[serde(rename = "RCTM_Auto")]
    Auto,
    #[serde(rename = "RCTM_Break")]
    Break,
    #[serde(rename = "RCTM_User")]
    User,
}

/// Which side(s) of a keyframe's tangent carry a weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TangentWeightMode {
    #[serde(rename = "RCTWM_WeightedNone")]
    None,
    #[serde(rename = "RCTWM_WeightedArrive")]
    WeightedArrive,
    #[serde(rename = "RCTWM_WeightedLeave")]
    WeightedLeave,
    #[serde(rename = "RCTWM_WeightedBoth")]
    WeightedBoth,
}

/// Behaviour outside the keyed time range. Only `Constant` exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Extrapolation {
    #[default]
    #[serde(rename = "RCCE_Constant")]
    Constant,
}

/// One control point of a single-channel curve.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    pub interp_mode: InterpMode,
    pub tangent_mode: TangentMode,
    pub tangent_weight_mode: TangentWeightMode,
    pub time: f64,
    pub value: f64,
    pub arrive_tangent: f64,
    pub arrive_tangent_weight: f64,
    pub leave_tangent: f64,
    pub leave_tangent_weight: f64,
}

/// A single-channel animation curve.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FloatCurve {
    #[serde(default)]
    pub keys: Vec<Keyframe>, // sorted by time
    #[serde(rename = "defaultValue", default = "default_value_sentinel")]
    pub default_value: f64,
    #[serde(rename = "preInfinityExtrap", default)]
    pub pre_infinity_extrap: Extrapolation,
    #[serde(rename = "postInfinityExtrap", default)]
    pub post_infinity_extrap: Extrapolation,
}

fn default_value_sentinel() -> f64 {
    DEFAULT_VALUE_SENTINEL
}

impl FloatCurve {
    /// Wrap keys with the sentinel default value and constant extrapolation.
    pub fn from_keys(keys: Vec<Keyframe>) -> CurveResult<Self> {
        let curve = Self {
            keys,
            default_value: DEFAULT_VALUE_SENTINEL,
            pre_infinity_extrap: Extrapolation::Constant,
            post_infinity_extrap: Extrapolation::Constant,
        };
        curve.validate()?;
        Ok(curve)
    }

    pub fn validate(&self) -> CurveResult<()> {
        if self.keys.is_empty() {
            return Err(CurveError::validation("FloatCurve must have at least one key"));
        }
        if !self.keys.windows(2).all(|w| w[0].time <= w[1].time) {
            return Err(CurveError::validation("FloatCurve keys must be sorted by time"));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Interpolation mode of the first key, which plotting uses for the whole curve.
    pub fn interp_mode(&self) -> InterpMode {
        self.keys
            .first()
            .map_or(InterpMode::Linear, |k| k.interp_mode)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/keyframe.rs"]
mod tests;
