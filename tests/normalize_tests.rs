use chrono::{TimeZone, Utc};
use dashchart::core::{RawSample, RawSeriesMap, SeriesDescriptor, normalize, parse_timestamp};

fn sample(label: &str, value: Option<f64>) -> RawSample {
    RawSample::new(label, value)
}

fn descriptor(key: &str, name: &str) -> SeriesDescriptor {
    SeriesDescriptor::new(key, name)
}

fn sensor_map() -> RawSeriesMap {
    let mut raw = RawSeriesMap::new();
    raw.insert(
        "s1".to_owned(),
        vec![
            sample("2024-01-01T00:00", Some(1.0)),
            sample("2024-01-01T01:00", None),
            sample("2024-01-01T02:00", Some(3.0)),
        ],
    );
    raw.insert(
        "e1".to_owned(),
        vec![
            sample("2024-01-01T00:00", Some(1.0)),
            sample("2024-01-01T02:00", Some(0.0)),
        ],
    );
    raw
}

#[test]
fn normalization_is_idempotent() {
    let raw = sensor_map();
    let lines = [descriptor("s1", "Sensor 1")];
    let bars = [descriptor("e1", "Relay 1")];

    let first = normalize(&raw, &lines, &bars).expect("normalize");
    let second = normalize(&raw, &lines, &bars).expect("normalize again");
    assert_eq!(first, second);
}

#[test]
fn null_values_bridge_gaps_instead_of_splitting_the_grid() {
    let raw = sensor_map();
    let data = normalize(&raw, &[descriptor("s1", "Sensor 1")], &[]).expect("normalize");

    let series = &data.line_series[0];
    assert_eq!(series.points.len(), 2, "null sample must be dropped");

    let t2 = Utc.with_ymd_and_hms(2024, 1, 1, 2, 0, 0).unwrap();
    assert_eq!(
        series.points[0].next_date, t2,
        "gap boundary must reference the nearest non-null neighbor"
    );
}

#[test]
fn trailing_points_and_bars_close_on_the_global_range_end() {
    let raw = sensor_map();
    let data = normalize(
        &raw,
        &[descriptor("s1", "Sensor 1")],
        &[descriptor("e1", "Relay 1")],
    )
    .expect("normalize");

    let range_end = data.date_range.end;
    assert_eq!(data.line_series[0].points.last().unwrap().next_date, range_end);
    assert_eq!(data.bar_series[0].bars.last().unwrap().end_date, range_end);
}

#[test]
fn date_range_spans_the_unfiltered_union_of_configured_series() {
    let mut raw = RawSeriesMap::new();
    raw.insert(
        "a".to_owned(),
        vec![
            sample("2024-01-01", None),
            sample("2024-01-05", Some(2.0)),
        ],
    );
    raw.insert(
        "b".to_owned(),
        vec![
            sample("2024-01-03", Some(1.0)),
            sample("2024-01-10", None),
        ],
    );

    let data = normalize(
        &raw,
        &[descriptor("a", "A")],
        &[descriptor("b", "B")],
    )
    .expect("normalize");

    assert_eq!(
        data.date_range.start,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        "null-valued samples still pin the range start"
    );
    assert_eq!(
        data.date_range.end,
        Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
        "null-valued samples still pin the range end"
    );
}

#[test]
fn descriptors_without_raw_data_are_silently_excluded() {
    let raw = sensor_map();
    let data = normalize(
        &raw,
        &[descriptor("s1", "Sensor 1"), descriptor("ghost", "Ghost")],
        &[descriptor("e1", "Relay 1"), descriptor("phantom", "Phantom")],
    )
    .expect("normalize");

    assert_eq!(data.line_series.len(), 1);
    assert_eq!(data.bar_series.len(), 1);
}

#[test]
fn bar_series_keep_null_samples_as_off_intervals() {
    let mut raw = sensor_map();
    raw.insert(
        "e2".to_owned(),
        vec![
            sample("2024-01-01T00:00", None),
            sample("2024-01-01T01:00", Some(5.0)),
            sample("2024-01-01T02:00", Some(-1.0)),
        ],
    );

    let data = normalize(&raw, &[], &[descriptor("e2", "Relay 2")]).expect("normalize");
    let bars = &data.bar_series[0].bars;
    assert_eq!(bars.len(), 3, "null bar samples are retained");
    assert!(!bars[0].is_on());
    assert!(bars[1].is_on());
    assert!(!bars[2].is_on(), "non-positive values count as off");
}

#[test]
fn all_null_line_series_yields_empty_points_without_error() {
    let mut raw = RawSeriesMap::new();
    raw.insert(
        "quiet".to_owned(),
        vec![
            sample("2024-01-01T00:00", None),
            sample("2024-01-01T01:00", None),
        ],
    );

    let data = normalize(&raw, &[descriptor("quiet", "Quiet")], &[]).expect("normalize");
    assert!(data.line_series[0].points.is_empty());
}

#[test]
fn empty_configured_union_is_rejected() {
    let raw = RawSeriesMap::new();
    let result = normalize(&raw, &[descriptor("s1", "Sensor 1")], &[]);
    assert!(result.is_err());
}

#[test]
fn unparseable_timestamp_labels_are_rejected() {
    let mut raw = RawSeriesMap::new();
    raw.insert(
        "s1".to_owned(),
        vec![sample("not-a-date", Some(1.0))],
    );

    let result = normalize(&raw, &[descriptor("s1", "Sensor 1")], &[]);
    assert!(result.is_err());
}

#[test]
fn timestamp_parsing_accepts_common_iso_forms() {
    let expected = Utc.with_ymd_and_hms(2024, 1, 1, 6, 30, 0).unwrap();
    assert_eq!(parse_timestamp("2024-01-01T06:30").unwrap(), expected);
    assert_eq!(parse_timestamp("2024-01-01T06:30:00").unwrap(), expected);
    assert_eq!(parse_timestamp("2024-01-01 06:30:00").unwrap(), expected);
    assert_eq!(parse_timestamp("2024-01-01T06:30:00Z").unwrap(), expected);
    assert_eq!(
        parse_timestamp("2024-01-01").unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    );
}
