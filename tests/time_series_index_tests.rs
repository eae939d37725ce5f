use chrono::{TimeZone, Utc};
use forecast_chart::ChartError;
use forecast_chart::core::{TimestampMap, index_series};

#[test]
fn index_series_sorts_unordered_keys() {
    let mut map = TimestampMap::new();
    map.insert("2019-03-01T07:00:00".to_owned(), 3.0);
    map.insert("2019-03-01T05:00:00".to_owned(), 1.0);
    map.insert("2019-03-01T06:00:00".to_owned(), 2.0);

    let series = index_series(&map).expect("index");
    let values: Vec<f64> = series.iter().map(|sample| sample.value).collect();
    assert_eq!(values, vec![1.0, 2.0, 3.0]);
    assert_eq!(
        series[0].time,
        Utc.with_ymd_and_hms(2019, 3, 1, 5, 0, 0).unwrap()
    );
}

#[test]
fn index_series_accepts_offset_and_naive_forms() {
    let mut map = TimestampMap::new();
    map.insert("2019-03-01T05:00:00Z".to_owned(), 1.0);
    map.insert("2019-03-01T01:00:00-03:00".to_owned(), 2.0);
    map.insert("2019-03-01T03:00:00.000".to_owned(), 0.5);

    let series = index_series(&map).expect("index");
    let hours: Vec<u32> = series
        .iter()
        .map(|sample| chrono::Timelike::hour(&sample.time))
        .collect();
    assert_eq!(hours, vec![3, 4, 5]);
}

#[test]
fn index_series_keeps_every_entry() {
    let mut map = TimestampMap::new();
    map.insert("2019-03-01T05:00:00Z".to_owned(), 1.0);
    map.insert("2019-03-01T05:00:00".to_owned(), 2.0);

    let series = index_series(&map).expect("index");
    assert_eq!(series.len(), 2);
}

#[test]
fn index_series_does_not_mutate_input() {
    let mut map = TimestampMap::new();
    map.insert("2019-03-01T07:00:00".to_owned(), 3.0);
    map.insert("2019-03-01T05:00:00".to_owned(), 1.0);
    let before = map.clone();

    let _ = index_series(&map).expect("index");
    assert_eq!(map, before);
}

#[test]
fn malformed_timestamp_aborts_the_series() {
    let mut map = TimestampMap::new();
    map.insert("2019-03-01T05:00:00".to_owned(), 1.0);
    map.insert("yesterday at noon".to_owned(), 2.0);

    let err = index_series(&map).expect_err("must fail");
    match err {
        ChartError::MalformedTimestamp { timestamp, .. } => {
            assert_eq!(timestamp, "yesterday at noon");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_map_yields_empty_series() {
    let map = TimestampMap::new();
    assert!(index_series(&map).expect("index").is_empty());
}
