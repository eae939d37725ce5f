use forecast_chart::api::StaleResponsePolicy;
use forecast_chart::render::Color;
use forecast_chart::{ChartSession, ChartSessionConfig};

#[test]
fn config_json_fills_missing_fields_with_defaults() {
    let config = ChartSessionConfig::from_json_str(
        r#"{"marker_opacity": 0.1, "stale_response_policy": "IgnoreSuperseded"}"#,
    )
    .expect("config");

    assert_eq!(config.marker_opacity, 0.1);
    assert_eq!(
        config.stale_response_policy,
        StaleResponsePolicy::IgnoreSuperseded
    );
    assert_eq!(config.value_format.unit_suffix, "°C");
    assert_eq!(
        config.lead_day_palette,
        ChartSessionConfig::default().lead_day_palette
    );
}

#[test]
fn invalid_values_are_rejected() {
    let cases = [
        ChartSessionConfig::default().with_lead_day_palette(Vec::new()),
        ChartSessionConfig::default().with_lead_day_palette(vec![Color::rgb(1.5, 0.0, 0.0)]),
        ChartSessionConfig::default().with_marker_opacity(f64::NAN),
        ChartSessionConfig::default().with_fade_min_opacity(-0.1),
        ChartSessionConfig::default().with_header_time_pattern("%Q"),
        ChartSessionConfig::default().with_header_utc_offset_minutes(15 * 60),
    ];
    for config in cases {
        assert!(config.clone().validate().is_err(), "{config:?}");
        assert!(ChartSession::new(config).is_err());
    }
}

#[test]
fn palette_cycles_when_shorter_than_lead_days() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);
    let payload = forecast_chart::core::AnalysisPayload::from_json_str(
        r#"{"temperature": {
            "metadata": {"display_name": "Temperature", "prop_name": "temperature"},
            "lead_days": {"1": {}, "2": {}, "3": {}}
        }}"#,
    )
    .expect("payload");
    let config = ChartSessionConfig::default().with_lead_day_palette(vec![red, blue]);
    let session = ChartSession::with_payload(config, payload).expect("session");

    let styles = session.styles();
    assert_eq!(styles.get("1-Day").expect("1").style.color, red);
    assert_eq!(styles.get("2-Day").expect("2").style.color, blue);
    assert_eq!(styles.get("3-Day").expect("3").style.color, red);
}
