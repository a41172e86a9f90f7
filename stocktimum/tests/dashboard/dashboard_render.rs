use std::sync::Arc;

use stocktimum::{Applied, Interval, Period, Table, TimeUnit, ViewState};
use stocktimum_mock::{DynamicMockSource, MockBehavior, MockSource};

use crate::helpers::{AAPL, MSFT, bars, dashboard_with, three_bars};

#[tokio::test]
async fn default_selection_renders_chart_and_table() {
    let (src, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_series_behavior(AAPL, MockBehavior::Return(three_bars()))
        .await;
    let (mut dash, charts) = dashboard_with(src);
    assert_eq!(dash.state(), &ViewState::Idle);

    let out = dash.mount().await;
    assert!(matches!(out, Applied::Rendered { rows: 3, .. }));
    assert!(matches!(dash.state(), ViewState::Displaying(_)));

    let q = &ctl.requests().await[0];
    assert_eq!(q.ticker(), AAPL);
    assert_eq!(q.period(), Period::Y10);
    assert_eq!(q.interval(), Interval::D1);

    let chart = dash.chart().expect("chart drawn");
    assert_eq!(chart.dataset_label, "AAPL Price");
    assert_eq!(chart.values, vec![10.0, 11.0, 12.0]);
    assert_eq!(chart.labels[0], "2024-01-02");
    assert_eq!(chart.time_unit, TimeUnit::Month);
    assert_eq!(chart.x_title, "Date");
    assert_eq!(chart.y_title, "Price (USD)");
    assert_eq!(charts.live_count(), 1);

    assert_eq!(dash.table().len(), 3);
    let first = dash.table().cells().next().expect("row");
    assert_eq!(first[0], "2024-01-02");
    assert_eq!(first[4], "10");
    assert_eq!(Table::HEADERS, ["Date", "Open", "High", "Low", "Close", "Volume"]);
}

#[tokio::test]
async fn short_periods_use_day_ticks() {
    let (src, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_series_behavior(MSFT, MockBehavior::Return(three_bars()))
        .await;
    let (mut dash, _charts) = dashboard_with(src);
    dash.controls_mut().set_ticker(MSFT).unwrap();

    for (period, unit) in [
        (Period::M1, TimeUnit::Day),
        (Period::M6, TimeUnit::Day),
        (Period::Y1, TimeUnit::Day),
        (Period::Y5, TimeUnit::Month),
        (Period::Y10, TimeUnit::Month),
    ] {
        dash.controls_mut().set_period(period);
        let _ = dash.update().await;
        assert_eq!(dash.chart().unwrap().time_unit, unit, "period {period}");
    }
}

#[tokio::test]
async fn repeated_renders_keep_one_live_chart() {
    let (src, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_series_behavior(AAPL, MockBehavior::Return(three_bars()))
        .await;
    let (mut dash, charts) = dashboard_with(src);

    for _ in 0..4 {
        let out = dash.update().await;
        assert!(matches!(out, Applied::Rendered { .. }));
    }
    assert_eq!(charts.live_count(), 1);
    assert_eq!(charts.created(), 4);
    assert_eq!(charts.disposed(), 3);
    assert_eq!(dash.table().len(), 3);
}

#[tokio::test]
async fn new_data_replaces_old_content() {
    let (src, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_series_behavior(AAPL, MockBehavior::Return(three_bars()))
        .await;
    ctl.set_series_behavior(
        MSFT,
        MockBehavior::Return(bars(&["2024-02-01", "2024-02-02"], 300.0)),
    )
    .await;
    let (mut dash, charts) = dashboard_with(src);

    let _ = dash.update().await;
    dash.controls_mut().set_ticker(MSFT).unwrap();
    let _ = dash.update().await;

    assert_eq!(dash.table().len(), 2);
    assert_eq!(dash.chart().unwrap().dataset_label, "MSFT Price");
    let live = charts.live_specs();
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].values, vec![300.0, 301.0]);
}

#[tokio::test]
async fn empty_series_renders_empty_view() {
    let (src, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_series_behavior(
        AAPL,
        MockBehavior::Json(serde_json::json!([[], [], [], [], [], []])),
    )
    .await;
    let (mut dash, _charts) = dashboard_with(src);
    let out = dash.update().await;
    assert!(matches!(out, Applied::Rendered { rows: 0, .. }));
    assert!(dash.table().is_empty());
    assert!(dash.chart().unwrap().is_empty());
}

#[tokio::test]
async fn static_mock_fixtures_render() {
    let (mut dash, _charts) = dashboard_with(Arc::new(MockSource::new()));
    let out = dash.mount().await;
    assert!(matches!(out, Applied::Rendered { rows: 3, .. }));
    assert_eq!(dash.table().rows()[0].date, "2023-01-03");
}
