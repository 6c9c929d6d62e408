use rand::{SeedableRng, rngs::StdRng};

use super::*;
use crate::assemble::{
    assembler::{NoMetadata, assemble_from_spec, assemble_random},
    spec::CurveSpec,
};

#[test]
fn export_orders_channels_and_inverts_exactly() {
    let record = assemble_random(&mut StdRng::seed_from_u64(31)).unwrap();
    let cj = record.curve_json();
    let export = EngineExport::from_curve_json(&cj);

    assert_eq!(export.float_curves.len(), 4);
    assert_eq!(export.float_curves[0], record.float_curves.r);
    assert_eq!(export.float_curves[3], record.float_curves.a);

    let text = serde_json::to_string(&export).unwrap();
    let parsed: EngineExport = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed.into_channel_curves().unwrap(), record.float_curves);
}

#[test]
fn export_keeps_meta_curves_of_specified_records() {
    let spec = CurveSpec {
        name: Some("meta".into()),
        meta_y_offset_scale: Some(0.4),
        ..CurveSpec::default()
    };
    let record = assemble_from_spec(&spec, &mut StdRng::seed_from_u64(2), &mut NoMetadata).unwrap();
    let cj = record.curve_json();
    let back = EngineExport::from_curve_json(&cj).into_curve_json().unwrap();
    assert_eq!(back, cj);
}

#[test]
fn string_transform_matches_typed_export() {
    let record = assemble_random(&mut StdRng::seed_from_u64(32)).unwrap();
    let input = serde_json::to_string(&record.curve_json()).unwrap();
    let out = convert_to_engine_json(&input).unwrap();

    let parsed: EngineExport = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, EngineExport::from_curve_json(&record.curve_json()));
}

#[test]
fn string_transform_fills_defaults_and_skips_absent_channels() {
    let input = r#"{
        "floatCurves": {
            "A": { "keys": [] },
            "R": { "keys": [] }
        },
        "adjustHue": 0.25,
        "note": "kept"
    }"#;
    let out: serde_json::Value =
        serde_json::from_str(&convert_to_engine_json(input).unwrap()).unwrap();

    let curves = out["floatCurves"].as_array().unwrap();
    assert_eq!(curves.len(), 2);
    assert_eq!(curves[0]["defaultValue"], 3.4028234663852886e38);
    assert_eq!(curves[1]["postInfinityExtrap"], "RCCE_Constant");

    assert_eq!(out["adjustHue"], 0.25);
    assert_eq!(out["adjustMaxAlpha"], 0.0);
    assert_eq!(out["assetImportData"]["_ClassName"], "/Script/Engine.AssetImportData");
    assert_eq!(out["note"], "kept");
}

#[test]
fn string_transform_rejects_non_objects() {
    assert!(matches!(
        convert_to_engine_json("[1, 2]"),
        Err(CurveError::Serde(_))
    ));
}

#[test]
fn inverse_requires_four_channels() {
    let export = EngineExport {
        float_curves: Vec::new(),
        adjustments: Adjustments::default(),
        asset_import_data: AssetImportData::default(),
        created_at: None,
        meta_curves: None,
    };
    assert!(export.into_channel_curves().is_err());
}
