use super::*;

fn key(time: f64, value: f64) -> Keyframe {
    Keyframe {
        interp_mode: InterpMode::Cubic,
        tangent_mode: TangentMode::Auto,
        tangent_weight_mode: TangentWeightMode::WeightedBoth,
        time,
        value,
        arrive_tangent: 0.1,
        arrive_tangent_weight: 0.2,
        leave_tangent: -0.1,
        leave_tangent_weight: 0.3,
    }
}

#[test]
fn keyframe_serializes_with_engine_field_names() {
    let v = serde_json::to_value(key(0.5, 0.25)).unwrap();
    assert_eq!(v["interpMode"], "RCIM_Cubic");
    assert_eq!(v["tangentMode"], "RCTM_Auto");
    assert_eq!(v["tangentWeightMode"], "RCTWM_WeightedBoth");
    assert_eq!(v["time"], 0.5);
    assert_eq!(v["value"], 0.25);
    assert_eq!(v["arriveTangent"], 0.1);
    assert_eq!(v["arriveTangentWeight"], 0.2);
    assert_eq!(v["leaveTangent"], -0.1);
    assert_eq!(v["leaveTangentWeight"], 0.3);
}

#[test]
fn float_curve_serializes_sentinel_and_extrapolation() {
    let curve = FloatCurve::from_keys(vec![key(0.0, 1.0)]).unwrap();
    let v = serde_json::to_value(&curve).unwrap();
    assert_eq!(v["defaultValue"], 3.4028234663852886e38);
    assert_eq!(v["preInfinityExtrap"], "RCCE_Constant");
    assert_eq!(v["postInfinityExtrap"], "RCCE_Constant");
    assert_eq!(v["keys"].as_array().unwrap().len(), 1);
}

#[test]
fn unknown_interp_mode_falls_back_to_linear() {
    let json = r#"{
        "interpMode": "RCIM_Akima",
        "tangentMode": "RCTM_Break",
        "tangentWeightMode": "RCTWM_WeightedNone",
        "time": 0.0,
        "value": 0.5,
        "arriveTangent": 0.0,
        "arriveTangentWeight": 0.0,
        "leaveTangent": 0.0,
        "leaveTangentWeight": 0.0
    }"#;
    let k: Keyframe = serde_json::from_str(json).unwrap();
    assert_eq!(k.interp_mode, InterpMode::Linear);
    assert_eq!(InterpMode::from_name("RCIM_Constant"), InterpMode::Constant);
    assert_eq!(InterpMode::Cubic.plotting_kind(), "cubic");
    assert_eq!(InterpMode::Constant.wire_name(), "RCIM_Constant");
}

#[test]
fn unknown_tangent_mode_is_rejected() {
    let json = r#""RCTM_Smart""#;
    assert!(serde_json::from_str::<TangentMode>(json).is_err());
}

#[test]
fn missing_curve_fields_take_defaults() {
    let json = r#"{ "keys": [] }"#;
    let curve: FloatCurve = serde_json::from_str(json).unwrap();
    assert_eq!(curve.default_value, DEFAULT_VALUE_SENTINEL);
    assert_eq!(curve.pre_infinity_extrap, Extrapolation::Constant);
    assert!(curve.validate().is_err());
}

#[test]
fn validation_requires_sorted_non_empty_keys() {
    assert!(FloatCurve::from_keys(Vec::new()).is_err());
    assert!(FloatCurve::from_keys(vec![key(0.6, 0.0), key(0.2, 0.0)]).is_err());
    let ok = FloatCurve::from_keys(vec![key(0.2, 0.0), key(0.2, 1.0), key(0.9, 0.5)]).unwrap();
    assert_eq!(ok.len(), 3);
    assert!(!ok.is_empty());
    assert_eq!(ok.interp_mode(), InterpMode::Cubic);
}
