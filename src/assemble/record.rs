use std::fmt;

use rand::Rng;
use uuid::Uuid;

use crate::{
    foundation::error::{CurveError, CurveResult},
    synth::keyframe::FloatCurve,
};

/// Engine class recorded in `assetImportData._ClassName`.
pub const ASSET_IMPORT_CLASS: &str = "/Script/Engine.AssetImportData";

/// Color channel of a curve record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    R,
    G,
    B,
    A,
}

impl Channel {
    /// Channels in export order.
    pub const ALL: [Channel; 4] = [Self::R, Self::G, Self::B, Self::A];

    pub fn name(self) -> &'static str {
        match self {
            Self::R => "R",
            Self::G => "G",
            Self::B => "B",
            Self::A => "A",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exactly one curve per channel, serialized as a `R`/`G`/`B`/`A` mapping.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChannelCurves {
    #[serde(rename = "R")]
    pub r: FloatCurve,
    #[serde(rename = "G")]
    pub g: FloatCurve,
    #[serde(rename = "B")]
    pub b: FloatCurve,
    #[serde(rename = "A")]
    pub a: FloatCurve,
}

impl ChannelCurves {
    pub fn get(&self, channel: Channel) -> &FloatCurve {
        match channel {
            Channel::R => &self.r,
            Channel::G => &self.g,
            Channel::B => &self.b,
            Channel::A => &self.a,
        }
    }

    /// Curves paired with their channel, in R, G, B, A order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &FloatCurve)> {
        Channel::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Build from four curves given in R, G, B, A order.
    pub fn from_ordered(curves: Vec<FloatCurve>) -> CurveResult<Self> {
        let [r, g, b, a]: [FloatCurve; 4] = curves.try_into().map_err(|v: Vec<FloatCurve>| {
            CurveError::validation(format!("expected 4 channel curves, got {}", v.len()))
        })?;
        Ok(Self { r, g, b, a })
    }
}

/// Global color-adjustment scalars.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Adjustments {
    #[serde(rename = "adjustHue")]
    pub hue: f64,
    #[serde(rename = "adjustSaturation")]
    pub saturation: f64,
    #[serde(rename = "adjustBrightness")]
    pub brightness: f64,
    #[serde(rename = "adjustBrightnessCurve")]
    pub brightness_curve: f64,
    #[serde(rename = "adjustVibrance")]
    pub vibrance: f64,
    #[serde(rename = "adjustMinAlpha")]
    pub min_alpha: f64,
    #[serde(rename = "adjustMaxAlpha")]
    pub max_alpha: f64,
}

impl Adjustments {
    /// Each scalar uniform in `[0, max]`, drawn in declaration order.
    pub fn draw<R: Rng + ?Sized>(max: f64, rng: &mut R) -> CurveResult<Self> {
        if !max.is_finite() {
            return Err(CurveError::validation("adjustment range must be finite"));
        }
        let max = max.max(0.0);
        let mut next = || rng.random_range(0.0..=max);
        Ok(Self {
            hue: next(),
            saturation: next(),
            brightness: next(),
            brightness_curve: next(),
            vibrance: next(),
            min_alpha: next(),
            max_alpha: next(),
        })
    }

    pub fn as_array(&self) -> [f64; 7] {
        [
            self.hue,
            self.saturation,
            self.brightness,
            self.brightness_curve,
            self.vibrance,
            self.min_alpha,
            self.max_alpha,
        ]
    }
}

/// Import stub expected by the engine-side asset importer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AssetImportData {
    #[serde(rename = "_ClassName", default = "default_import_class")]
    pub class_name: String,
    #[serde(rename = "sourceData", default)]
    pub source_data: serde_json::Map<String, serde_json::Value>,
}

fn default_import_class() -> String {
    ASSET_IMPORT_CLASS.to_string()
}

impl Default for AssetImportData {
    fn default() -> Self {
        Self {
            class_name: default_import_class(),
            source_data: serde_json::Map::new(),
        }
    }
}

/// Secondary x/y offset curves of a specified record.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MetaCurves {
    pub x_offset_curve: FloatCurve,
    pub y_offset_curve: FloatCurve,
    pub x_offset_scale: f64,
    pub y_offset_scale: f64,
}

/// How a record was assembled.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordOrigin {
    /// Generated without a request: no name, description or offset curves.
    Random,
    /// Generated from a caller request.
    Specified {
        name: String,
        description: String,
        meta_curves: MetaCurves,
    },
}

/// The serialized `curve_json` payload consumed by previews and importers.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveJson {
    #[serde(rename = "floatCurves")]
    pub float_curves: ChannelCurves,
    #[serde(flatten)]
    pub adjustments: Adjustments,
    #[serde(rename = "assetImportData", default)]
    pub asset_import_data: AssetImportData,
    pub created_at: String,
    #[serde(
        rename = "metaCurves",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub meta_curves: Option<MetaCurves>,
}

/// An assembled four-channel color curve with identity and adjustments.
///
/// Serializes as `{curve_id, [name, description], curve_type_comp, curve_json}`.
/// Deserialization rejects empty or unsorted key lists.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(into = "RecordWire", try_from = "RecordWire")]
pub struct ColorCurveRecord {
    pub id: Uuid,
    /// Coarse grouping key derived from the channel families or the request.
    pub type_signature: String,
    pub float_curves: ChannelCurves,
    pub adjustments: Adjustments,
    pub asset_import_data: AssetImportData,
    pub created_at: String,
    pub origin: RecordOrigin,
}

impl ColorCurveRecord {
    pub fn name(&self) -> Option<&str> {
        match &self.origin {
            RecordOrigin::Random => None,
            RecordOrigin::Specified { name, .. } => Some(name),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match &self.origin {
            RecordOrigin::Random => None,
            RecordOrigin::Specified { description, .. } => Some(description),
        }
    }

    pub fn meta_curves(&self) -> Option<&MetaCurves> {
        match &self.origin {
            RecordOrigin::Random => None,
            RecordOrigin::Specified { meta_curves, .. } => Some(meta_curves),
        }
    }

    /// The `curve_json` payload of this record.
    pub fn curve_json(&self) -> CurveJson {
        CurveJson {
            float_curves: self.float_curves.clone(),
            adjustments: self.adjustments,
            asset_import_data: self.asset_import_data.clone(),
            created_at: self.created_at.clone(),
            meta_curves: self.meta_curves().cloned(),
        }
    }

    pub fn to_json_value(&self) -> CurveResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn from_json_str(s: &str) -> CurveResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct RecordWire {
    curve_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    curve_type_comp: String,
    curve_json: CurveJson,
}

impl From<ColorCurveRecord> for RecordWire {
    fn from(record: ColorCurveRecord) -> Self {
        let (name, description, meta_curves) = match record.origin {
            RecordOrigin::Random => (None, None, None),
            RecordOrigin::Specified {
                name,
                description,
                meta_curves,
            } => (Some(name), Some(description), Some(meta_curves)),
        };
        Self {
            curve_id: record.id,
            name,
            description,
            curve_type_comp: record.type_signature,
            curve_json: CurveJson {
                float_curves: record.float_curves,
                adjustments: record.adjustments,
                asset_import_data: record.asset_import_data,
                created_at: record.created_at,
                meta_curves,
            },
        }
    }
}

impl TryFrom<RecordWire> for ColorCurveRecord {
    type Error = CurveError;

    fn try_from(wire: RecordWire) -> CurveResult<Self> {
        let CurveJson {
            float_curves,
            adjustments,
            asset_import_data,
            created_at,
            meta_curves,
        } = wire.curve_json;

        for (channel, curve) in float_curves.iter() {
            curve
                .validate()
                .map_err(|e| CurveError::serde(format!("floatCurves.{channel}: {e}")))?;
        }
        if let Some(meta) = &meta_curves {
            for (field, curve) in [
                ("x_offset_curve", &meta.x_offset_curve),
                ("y_offset_curve", &meta.y_offset_curve),
            ] {
                curve
                    .validate()
                    .map_err(|e| CurveError::serde(format!("metaCurves.{field}: {e}")))?;
            }
        }

        let origin = match (wire.name, meta_curves) {
            (None, None) => RecordOrigin::Random,
            (Some(name), Some(meta_curves)) => RecordOrigin::Specified {
                name,
                description: wire.description.unwrap_or_default(),
                meta_curves,
            },
            (Some(_), None) => {
                return Err(CurveError::serde(
                    "named record is missing curve_json.metaCurves",
                ));
            }
            (None, Some(_)) => {
                return Err(CurveError::serde("record with metaCurves must carry a name"));
            }
        };

        Ok(Self {
            id: wire.curve_id,
            type_signature: wire.curve_type_comp,
            float_curves,
            adjustments,
            asset_import_data,
            created_at,
            origin,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/record.rs"]
mod tests;
