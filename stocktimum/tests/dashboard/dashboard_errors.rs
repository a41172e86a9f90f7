use std::time::Duration;

use stocktimum::{Applied, Dashboard, DashboardError, HeadlessChart, MalformedData, ViewState};
use stocktimum_mock::{DynamicMockSource, MockBehavior};

use crate::helpers::{AAPL, MSFT, dashboard_with, three_bars};

#[tokio::test]
async fn network_error_keeps_previous_content() {
    let (src, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_series_behavior(AAPL, MockBehavior::Return(three_bars()))
        .await;
    ctl.set_series_behavior(
        MSFT,
        MockBehavior::Fail(DashboardError::network("data", "connection refused")),
    )
    .await;
    let (mut dash, charts) = dashboard_with(src);

    let _ = dash.update().await;
    let table_before = dash.table().clone();
    let chart_before = dash.chart().cloned();

    dash.controls_mut().set_ticker(MSFT).unwrap();
    let out = dash.update().await;
    let Applied::Failed { error, .. } = out else {
        panic!("expected failure, got {out:?}");
    };
    assert!(error.is_network());

    assert!(matches!(dash.state(), ViewState::Error(_)));
    let msg = dash.error_message().expect("message shown");
    assert!(msg.starts_with("Unable to load stock data."), "{msg}");
    assert_eq!(dash.table(), &table_before);
    assert_eq!(dash.chart().cloned(), chart_before);
    assert_eq!(charts.live_count(), 1);
}

#[tokio::test]
async fn error_before_any_data_leaves_view_empty() {
    let (src, _ctl) = DynamicMockSource::new_with_controller("dyn");
    let (mut dash, charts) = dashboard_with(src);

    // no behavior configured: the mock answers 404
    let out = dash.update().await;
    assert!(matches!(
        out,
        Applied::Failed { error: DashboardError::Status { status: 404, .. }, .. }
    ));
    assert!(dash.table().is_empty());
    assert!(dash.chart().is_none());
    assert_eq!(charts.created(), 0);
}

#[tokio::test]
async fn malformed_payload_renders_nothing() {
    let (src, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_series_behavior(AAPL, MockBehavior::Return(three_bars()))
        .await;
    ctl.set_series_behavior(
        MSFT,
        MockBehavior::Json(serde_json::json!([
            ["2024-01-02", "2024-01-03"],
            [1.0, 2.0],
            [1.0, 2.0],
            [1.0, 2.0],
            [1.0],
            [10.0, 20.0]
        ])),
    )
    .await;
    let (mut dash, charts) = dashboard_with(src);
    let _ = dash.update().await;

    dash.controls_mut().set_ticker(MSFT).unwrap();
    let out = dash.update().await;
    let Applied::Failed { error, .. } = out else {
        panic!("expected failure, got {out:?}");
    };
    assert!(matches!(
        error,
        DashboardError::Malformed(MalformedData::LengthMismatch { .. })
    ));
    assert!(dash.error_message().unwrap().starts_with("Received malformed stock data"));
    assert_eq!(dash.table().len(), 3);
    assert_eq!(dash.chart().unwrap().dataset_label, "AAPL Price");
    assert_eq!(charts.created(), 1);
}

#[tokio::test(start_paused = true)]
async fn stalled_source_times_out() {
    let (src, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_series_behavior(AAPL, MockBehavior::Hang).await;
    let mut dash = Dashboard::builder()
        .with_source(src)
        .chart_backend(HeadlessChart::new())
        .show_banner(false)
        .request_timeout(Duration::from_millis(250))
        .build()
        .unwrap();

    let out = dash.update().await;
    let Applied::Failed { error, .. } = out else {
        panic!("expected timeout, got {out:?}");
    };
    assert_eq!(
        error,
        DashboardError::Timeout {
            endpoint: "data".into(),
            timeout_ms: 250
        }
    );
    assert!(dash.error_message().is_some());
}

#[tokio::test]
async fn recovery_after_error() {
    let (src, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_series_behavior(AAPL, MockBehavior::Fail(DashboardError::network("data", "down")))
        .await;
    let (mut dash, _charts) = dashboard_with(src);
    let _ = dash.update().await;
    assert!(dash.error_message().is_some());

    ctl.set_series_behavior(AAPL, MockBehavior::Return(three_bars()))
        .await;
    let _ = dash.update().await;
    assert!(dash.error_message().is_none());
    assert!(dash.state().series().is_some());
}
