use super::*;

#[test]
fn epoch_formats_as_midnight() {
    assert_eq!(format_iso8601(Duration::from_secs(0)), "1970-01-01T00:00:00Z");
}

#[test]
fn known_dates_including_leap_day() {
    // 2024-02-29 12:34:56 UTC
    assert_eq!(
        format_iso8601(Duration::from_secs(1_709_210_096)),
        "2024-02-29T12:34:56Z"
    );
    // 2000-12-31 23:59:59 UTC
    assert_eq!(
        format_iso8601(Duration::from_secs(978_307_199)),
        "2000-12-31T23:59:59Z"
    );
}

#[test]
fn now_has_fixed_shape() {
    let s = utc_now_iso8601();
    assert_eq!(s.len(), 20);
    assert!(s.ends_with('Z'));
    assert_eq!(&s[10..11], "T");
}
