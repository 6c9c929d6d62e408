//! Engine import format.
//!
//! The engine importer expects `floatCurves` as a list in fixed R, G, B, A order
//! instead of a channel-keyed mapping. Every other `curve_json` field passes through.

use std::collections::BTreeMap;

use crate::{
    assemble::record::{
        Adjustments, AssetImportData, Channel, ChannelCurves, CurveJson, MetaCurves,
    },
    foundation::error::{CurveError, CurveResult},
    synth::keyframe::FloatCurve,
};

/// Typed engine export of one record's `curve_json`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EngineExport {
    #[serde(rename = "floatCurves")]
    pub float_curves: Vec<FloatCurve>,
    #[serde(flatten)]
    pub adjustments: Adjustments,
    #[serde(rename = "assetImportData", default)]
    pub asset_import_data: AssetImportData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(
        rename = "metaCurves",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub meta_curves: Option<MetaCurves>,
}

impl EngineExport {
    pub fn from_curve_json(curve_json: &CurveJson) -> Self {
        Self {
            float_curves: curve_json
                .float_curves
                .iter()
                .map(|(_, c)| c.clone())
                .collect(),
            adjustments: curve_json.adjustments,
            asset_import_data: curve_json.asset_import_data.clone(),
            created_at: Some(curve_json.created_at.clone()),
            meta_curves: curve_json.meta_curves.clone(),
        }
    }

    /// Rebuild the channel mapping. Requires exactly four curves.
    pub fn into_channel_curves(self) -> CurveResult<ChannelCurves> {
        ChannelCurves::from_ordered(self.float_curves)
    }

    /// Inverse of [`EngineExport::from_curve_json`].
    pub fn into_curve_json(self) -> CurveResult<CurveJson> {
        let Self {
            float_curves,
            adjustments,
            asset_import_data,
            created_at,
            meta_curves,
        } = self;
        Ok(CurveJson {
            float_curves: ChannelCurves::from_ordered(float_curves)?,
            adjustments,
            asset_import_data,
            created_at: created_at.unwrap_or_default(),
            meta_curves,
        })
    }
}

/// Reshape a `curve_json` document into the engine import layout.
///
/// Lenient: absent channels are skipped, channel fields missing from a curve
/// and missing `adjust*` scalars get their defaults, a missing
/// `assetImportData` gets the stub. Unknown top-level fields pass through.
pub fn convert_to_engine_json(input: &str) -> CurveResult<String> {
    let mut doc: serde_json::Map<String, serde_json::Value> = serde_json::from_str(input)?;

    let mut channels: BTreeMap<String, FloatCurve> = match doc.remove("floatCurves") {
        Some(v) => serde_json::from_value(v)?,
        None => BTreeMap::new(),
    };
    let ordered: Vec<FloatCurve> = Channel::ALL
        .iter()
        .filter_map(|c| channels.remove(c.name()))
        .collect();
    doc.insert("floatCurves".to_string(), serde_json::to_value(ordered)?);

    let adjustments: Adjustments = serde_json::from_value(serde_json::Value::Object(doc.clone()))?;
    let serde_json::Value::Object(adjust_fields) = serde_json::to_value(adjustments)? else {
        return Err(CurveError::serde("adjustments did not serialize to an object"));
    };
    doc.extend(adjust_fields);

    if !doc.contains_key("assetImportData") {
        doc.insert(
            "assetImportData".to_string(),
            serde_json::to_value(AssetImportData::default())?,
        );
    }

    Ok(serde_json::to_string_pretty(&serde_json::Value::Object(doc))?)
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/export.rs"]
mod tests;
