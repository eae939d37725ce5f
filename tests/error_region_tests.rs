use chrono::{Duration, TimeZone, Utc};
use forecast_chart::core::{ERROR_REGION_STEP_MILLIS, TimestampMap, build_error_regions};

fn hour(offset: i64) -> String {
    (Utc.with_ymd_and_hms(2019, 3, 1, 0, 0, 0).unwrap() + Duration::hours(offset))
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

fn map(entries: &[(i64, f64)]) -> TimestampMap<f64> {
    entries
        .iter()
        .map(|(offset, value)| (hour(*offset), *value))
        .collect()
}

#[test]
fn hourly_errors_form_a_single_region() {
    let errors = map(&[(0, 1.0), (1, -0.5), (2, 0.25), (3, 2.0)]);
    let fcasts = map(&[(0, 11.0), (1, 9.5), (2, 10.25), (3, 12.0)]);
    let obs = map(&[(0, 10.0), (1, 10.0), (2, 10.0), (3, 10.0)]);

    let regions = build_error_regions(&errors, &fcasts, &obs).expect("regions");
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].len(), 4);

    let first = regions[0].points[0];
    assert_eq!(first.y, Some(11.0));
    assert_eq!(first.y0, Some(10.0));
    assert_eq!(first.amount, 1.0);
}

#[test]
fn gaps_split_regions() {
    let errors = map(&[(0, 1.0), (1, 1.0), (3, 1.0), (4, 1.0), (10, 1.0)]);
    let regions = build_error_regions(&errors, &TimestampMap::new(), &TimestampMap::new())
        .expect("regions");

    let sizes: Vec<usize> = regions.iter().map(|region| region.len()).collect();
    assert_eq!(sizes, vec![2, 2, 1]);
    for region in &regions {
        for pair in region.points.windows(2) {
            assert_eq!(
                (pair[1].x - pair[0].x).num_milliseconds(),
                ERROR_REGION_STEP_MILLIS
            );
        }
    }
}

#[test]
fn unordered_input_is_sorted_before_grouping() {
    let errors = map(&[(2, 3.0), (0, 1.0), (1, 2.0)]);
    let regions = build_error_regions(&errors, &TimestampMap::new(), &TimestampMap::new())
        .expect("regions");

    assert_eq!(regions.len(), 1);
    let amounts: Vec<f64> = regions[0].points.iter().map(|point| point.amount).collect();
    assert_eq!(amounts, vec![1.0, 2.0, 3.0]);
}

#[test]
fn sub_hour_spacing_starts_a_new_region() {
    let mut errors = TimestampMap::new();
    errors.insert("2019-03-01T00:00:00".to_owned(), 1.0);
    errors.insert("2019-03-01T00:30:00".to_owned(), 1.0);
    errors.insert("2019-03-01T01:30:00".to_owned(), 1.0);

    let regions = build_error_regions(&errors, &TimestampMap::new(), &TimestampMap::new())
        .expect("regions");
    let sizes: Vec<usize> = regions.iter().map(|region| region.len()).collect();
    assert_eq!(sizes, vec![1, 2]);
}

#[test]
fn missing_forecast_or_observation_leaves_coordinate_empty() {
    let errors = map(&[(0, 1.0), (1, 2.0)]);
    let fcasts = map(&[(0, 11.0)]);
    let obs = map(&[(1, 8.0)]);

    let regions = build_error_regions(&errors, &fcasts, &obs).expect("regions");
    let points = &regions[0].points;
    assert_eq!(points[0].y, Some(11.0));
    assert_eq!(points[0].y0, None);
    assert_eq!(points[1].y, None);
    assert_eq!(points[1].y0, Some(8.0));
}

#[test]
fn joins_by_instant_across_timestamp_spellings() {
    let mut errors = TimestampMap::new();
    errors.insert("2019-03-01T05:00:00".to_owned(), -1.5);
    let mut fcasts = TimestampMap::new();
    fcasts.insert("2019-03-01T05:00:00Z".to_owned(), 12.0);
    let mut obs = TimestampMap::new();
    obs.insert("2019-03-01T00:00:00-05:00".to_owned(), 13.5);

    let regions = build_error_regions(&errors, &fcasts, &obs).expect("regions");
    assert_eq!(regions[0].points[0].y, Some(12.0));
    assert_eq!(regions[0].points[0].y0, Some(13.5));
}

#[test]
fn empty_errors_yield_no_regions() {
    let regions = build_error_regions(
        &TimestampMap::new(),
        &map(&[(0, 1.0)]),
        &map(&[(0, 1.0)]),
    )
    .expect("regions");
    assert!(regions.is_empty());
}

#[test]
fn malformed_error_timestamp_fails() {
    let mut errors = TimestampMap::new();
    errors.insert("not-a-time".to_owned(), 1.0);
    assert!(build_error_regions(&errors, &TimestampMap::new(), &TimestampMap::new()).is_err());
}
