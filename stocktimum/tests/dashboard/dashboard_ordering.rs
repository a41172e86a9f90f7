use std::time::Duration;

use stocktimum::Applied;
use stocktimum_mock::{DynamicMockSource, MockBehavior};

use crate::helpers::{AAPL, MSFT, bars, dashboard_with, three_bars};

#[tokio::test(start_paused = true)]
async fn later_submission_wins_when_earlier_arrives_last() {
    let (src, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_series_behavior(
        AAPL,
        MockBehavior::Return(three_bars()).after(Duration::from_millis(500)),
    )
    .await;
    ctl.set_series_behavior(
        MSFT,
        MockBehavior::Return(bars(&["2024-03-01"], 400.0)).after(Duration::from_millis(10)),
    )
    .await;
    let (mut dash, charts) = dashboard_with(src);

    let a = dash.submit().expect("ticker selected");
    dash.controls_mut().set_ticker(MSFT).unwrap();
    let b = dash.submit().expect("ticker selected");
    assert!(b.token() > a.token());
    assert_eq!(dash.state().awaiting(), Some(b.token()));

    let (ra, rb) = futures::join!(a.run(), b.run());
    // arrival order: b first, then a
    assert!(matches!(dash.apply(rb), Applied::Rendered { rows: 1, .. }));
    assert!(matches!(dash.apply(ra), Applied::Stale { .. }));

    assert_eq!(dash.chart().unwrap().dataset_label, "MSFT Price");
    assert_eq!(dash.table().len(), 1);
    assert_eq!(charts.created(), 1);
}

#[tokio::test]
async fn earlier_response_arriving_first_is_dropped() {
    let (src, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_series_behavior(AAPL, MockBehavior::Return(three_bars()))
        .await;
    ctl.set_series_behavior(MSFT, MockBehavior::Return(bars(&["2024-03-01"], 400.0)))
        .await;
    let (mut dash, charts) = dashboard_with(src);

    let a = dash.submit().unwrap();
    dash.controls_mut().set_ticker(MSFT).unwrap();
    let b = dash.submit().unwrap();

    let ra = a.run().await;
    assert!(matches!(dash.apply(ra), Applied::Stale { .. }));
    assert!(dash.state().is_loading());
    assert_eq!(charts.created(), 0);

    let rb = b.run().await;
    assert!(matches!(dash.apply(rb), Applied::Rendered { .. }));
    assert_eq!(dash.table().rows()[0].close, 400.0);
}

#[tokio::test]
async fn stale_failure_does_not_surface() {
    let (src, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_series_behavior(
        AAPL,
        MockBehavior::Fail(stocktimum::DashboardError::network("data", "reset")),
    )
    .await;
    ctl.set_series_behavior(MSFT, MockBehavior::Return(three_bars()))
        .await;
    let (mut dash, _charts) = dashboard_with(src);

    let a = dash.submit().unwrap();
    dash.controls_mut().set_ticker(MSFT).unwrap();
    let b = dash.submit().unwrap();
    let (ra, rb) = futures::join!(a.run(), b.run());

    let _ = dash.apply(rb);
    assert!(matches!(dash.apply(ra), Applied::Stale { .. }));
    assert!(dash.error_message().is_none());
}

#[tokio::test]
async fn completion_applies_at_most_once() {
    let (src, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_series_behavior(AAPL, MockBehavior::Return(three_bars()))
        .await;
    let (mut dash, charts) = dashboard_with(src);

    let done = dash.submit().unwrap().run().await;
    assert!(matches!(dash.apply(done.clone()), Applied::Rendered { .. }));
    assert!(matches!(dash.apply(done), Applied::Stale { .. }));
    assert_eq!(charts.created(), 1);
}
