use serde_json::json;

use super::*;

fn flat_doc(r: f64, g: f64, b: f64, a: f64) -> serde_json::Value {
    let ch = |v: f64| json!({ "keys": [{ "time": 0.0, "value": v }] });
    json!({ "floatCurves": { "R": ch(r), "G": ch(g), "B": ch(b), "A": ch(a) } })
}

#[test]
fn prefix_sum_accumulates() {
    assert_eq!(prefix_sum(&[1, 2, 3, 0, 4]), vec![1, 3, 6, 6, 10]);
    assert!(prefix_sum(&[]).is_empty());
}

#[test]
fn flat_curves_integrate_linearly() {
    let row = compute_row_integral_json(&flat_doc(1.0, 1.0, 1.0, 0.4), 10).unwrap();
    // 255 * 102 / 255 = 102 per column
    assert_eq!(row, (1..=10).map(|i| i * 102).collect::<Vec<_>>());
}

#[test]
fn row_integral_is_monotonic_and_ends_at_total() {
    let ramp = json!({ "keys": [
        { "time": 0.0, "value": 0.0 },
        { "time": 1.0, "value": 1.0 }
    ]});
    let d = json!({ "floatCurves": { "R": ramp, "G": ramp, "B": ramp, "A": ramp } });
    let row = compute_row_integral_json(&d, 128).unwrap();
    assert!(row.windows(2).all(|w| w[0] <= w[1]));

    let sampled = SampledChannels::from_curve_json(&d, 128).unwrap();
    let total: i64 = grayscale_row(&sampled).iter().sum();
    assert_eq!(*row.last().unwrap(), total);
}

#[test]
fn missing_channel_yields_nothing() {
    let mut d = flat_doc(0.5, 0.5, 0.5, 0.5);
    d["floatCurves"].as_object_mut().unwrap().remove("B");
    assert!(compute_row_integral_json(&d, 128).is_none());
}

#[test]
fn integral_image_replicates_scaled_rows() {
    let rows: ChannelRows = serde_json::from_value(json!({
        "r_curve": [30.0, 60.0, 90.0],
        "g_curve": [30.0, 60.0, 90.0],
        "b_curve": [30.0, 60.0, 90.0],
        "a_curve": [1.0, 0.5, 0.0]
    }))
    .unwrap();
    let img = compute_integral_image(&rows, 3, 2).unwrap();
    assert_eq!(img.row(0), Some(&[30, 60, 60][..]));
    assert_eq!(img.row(1), Some(&[60, 120, 120][..]));
    assert_eq!(img.get(2, 1), Some(120));
    assert_eq!(img.get(3, 0), None);
}

#[test]
fn integral_image_rejects_missing_or_short_channels() {
    let rows = ChannelRows {
        r: Some(vec![1.0; 4]),
        g: Some(vec![1.0; 4]),
        b: None,
        a: Some(vec![1.0; 4]),
    };
    assert!(compute_integral_image(&rows, 4, 4).is_none());

    let short = ChannelRows {
        b: Some(vec![1.0; 2]),
        ..rows
    };
    assert!(compute_integral_image(&short, 4, 4).is_none());
    assert!(compute_integral_image(&short, 2, 0).is_none());
    assert!(compute_integral_image(&short, 2, 1).is_some());
}
