use forecast_chart::ChartError;
use forecast_chart::core::{
    LeadDayKey, ValueFormat, VariableAnalysis, select_stats, stats_display_values,
};

fn variable() -> VariableAnalysis {
    serde_json::from_str(
        r#"{
            "metadata": {"display_name": "Temperature", "prop_name": "temperature"},
            "lead_days": {
                "1": {"stats": {"bias": {"bias": -0.42, "n": 96}}},
                "2": {"stats": {"bias": {"bias": 1.1}}}
            },
            "cumulative_stats": {
                "accuracy": {"accuracy": 0.873, "count": 192, "accurate": 167},
                "bias": {"bias": 0.34},
                "mean absolute error": {"error": 1.96, "mean": null}
            }
        }"#,
    )
    .expect("variable json")
}

#[test]
fn cumulative_view_selects_cumulative_stats() {
    let variable = variable();
    let stats = select_stats(&variable, None).expect("stats");
    assert_eq!(stats, &variable.cumulative_stats);
}

#[test]
fn isolated_day_selects_its_own_stats() {
    let variable = variable();
    let day = LeadDayKey::new("2");
    let stats = select_stats(&variable, Some(&day)).expect("stats");
    assert_eq!(stats, &variable.lead_days[&day].stats);
}

#[test]
fn unknown_day_is_missing_series() {
    let variable = variable();
    let day = LeadDayKey::new("9");
    assert!(matches!(
        select_stats(&variable, Some(&day)),
        Err(ChartError::MissingSeries { .. })
    ));
}

#[test]
fn display_keeps_only_self_referential_properties() {
    let variable = variable();
    let values = stats_display_values(&variable.cumulative_stats, &ValueFormat::default());
    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "Accuracy: 87.3%".to_owned(),
            "Bias: 0.3°C".to_owned(),
            "Mean Absolute Error: 2.0°C".to_owned(),
        ]
    );
}

#[test]
fn lead_day_display_skips_auxiliary_counts() {
    let variable = variable();
    let day = LeadDayKey::new("1");
    let stats = select_stats(&variable, Some(&day)).expect("stats");
    let values = stats_display_values(stats, &ValueFormat::default());
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].to_string(), "Bias: -0.4°C");
}
