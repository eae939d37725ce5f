use forecast_chart::api::CHART_FRAME_JSON_SCHEMA_V1;
use forecast_chart::core::AnalysisPayload;
use forecast_chart::render::ChartFrame;
use forecast_chart::{ChartEvent, ChartSession, ChartSessionConfig};

fn isolated_session() -> ChartSession {
    let payload = AnalysisPayload::from_json_str(
        r#"{"temperature": {
            "metadata": {"display_name": "Temperature", "prop_name": "temperature"},
            "obs": {"2019-03-01T00:00:00": 10.0, "2019-03-01T01:00:00": 11.0},
            "lead_days": {"1": {
                "fcasts": {"2019-03-01T00:00:00": 9.0, "2019-03-01T01:00:00": 12.5},
                "errors": {"2019-03-01T00:00:00": -1.0, "2019-03-01T01:00:00": 1.5},
                "stats": {"bias": {"bias": 0.25}}
            }}
        }}"#,
    )
    .expect("payload");
    ChartSession::with_payload(ChartSessionConfig::default(), payload)
        .expect("session")
        .apply(ChartEvent::LegendClick {
            label: "1-Day".to_owned(),
        })
}

#[test]
fn frame_contract_v1_round_trips() {
    let session = isolated_session();
    let frame = session.frame().expect("frame");
    let json = session.frame_json_contract_v1_pretty().expect("json");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["schema_version"], CHART_FRAME_JSON_SCHEMA_V1);
    assert_eq!(value["frame"]["active_day"]["Isolated"], "1");

    let parsed = ChartFrame::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, frame);
}

#[test]
fn bare_frame_json_is_accepted() {
    let frame = isolated_session().frame().expect("frame");
    let bare = serde_json::to_string(&frame).expect("bare json");
    let parsed = ChartFrame::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed, frame);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let frame = isolated_session().frame().expect("frame");
    let json = serde_json::json!({ "schema_version": 99, "frame": frame }).to_string();
    assert!(ChartFrame::from_json_compat_str(&json).is_err());
}

#[test]
fn malformed_payload_json_is_invalid_data() {
    let err = AnalysisPayload::from_json_str(r#"{"temperature": {"obs": {}}}"#)
        .expect_err("missing metadata");
    assert!(err.to_string().contains("failed to parse analysis payload"));
}
