use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use stocktimum::{
    Applied, Banner, Catalog, Dashboard, DashboardError, HeadlessChart, Hello, Interval, Period,
    Query, Series, SeriesSource, ViewState,
};
use stocktimum_mock::{DynamicMockSource, MOCK_HELLO, MockBehavior, MockSource};

use crate::helpers::{AAPL, dashboard_with, selection, three_bars};

#[tokio::test]
async fn mount_loads_banner_and_data() {
    let (src, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_series_behavior(AAPL, MockBehavior::Return(three_bars()))
        .await;
    ctl.set_hello(Ok(Hello::new("Hello from the data server")))
        .await;
    let mut dash = Dashboard::builder()
        .with_source(src)
        .chart_backend(HeadlessChart::new())
        .build()
        .unwrap();
    assert_eq!(dash.banner(), &Banner::Loading);
    assert_eq!(dash.banner().text().as_deref(), Some("Loading..."));

    let _ = dash.mount().await;
    assert_eq!(
        dash.banner().text().as_deref(),
        Some("Hello from the data server")
    );
    assert!(matches!(dash.state(), ViewState::Displaying(_)));
}

#[tokio::test]
async fn banner_failure_does_not_block_data() {
    let (src, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_series_behavior(AAPL, MockBehavior::Return(three_bars()))
        .await;
    let mut dash = Dashboard::builder()
        .with_source(src)
        .chart_backend(HeadlessChart::new())
        .build()
        .unwrap();

    let out = dash.mount().await;
    assert!(matches!(out, Applied::Rendered { .. }));
    let text = dash.banner().text().unwrap();
    assert!(text.starts_with("Error: "), "{text}");
}

/// Serves data immediately but never answers hello.
struct SilentHello;

#[async_trait]
impl SeriesSource for SilentHello {
    fn name(&self) -> &'static str {
        "silent-hello"
    }

    async fn fetch_series(&self, _query: &Query) -> Result<Series, DashboardError> {
        Ok(three_bars())
    }

    async fn hello(&self) -> Result<Hello, DashboardError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Hello::new("too late"))
    }
}

fn silent_hello_dashboard(charts: HeadlessChart) -> Dashboard<HeadlessChart> {
    Dashboard::builder()
        .with_source(Arc::new(SilentHello))
        .chart_backend(charts)
        .request_timeout(Duration::from_millis(250))
        .build()
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn stalled_banner_is_bounded_by_request_timeout() {
    let mut dash = silent_hello_dashboard(HeadlessChart::new());

    let started = tokio::time::Instant::now();
    let out = dash.mount().await;
    assert!(started.elapsed() <= Duration::from_millis(250));

    assert!(matches!(out, Applied::Rendered { rows: 3, .. }));
    assert!(matches!(dash.state(), ViewState::Displaying(_)));
    let text = dash.banner().text().unwrap();
    assert!(text.starts_with("Error: "), "{text}");
    assert!(text.contains("hello"), "{text}");

    let started = tokio::time::Instant::now();
    dash.load_banner().await;
    assert!(started.elapsed() <= Duration::from_millis(250));
}

#[tokio::test(start_paused = true)]
async fn chart_is_drawn_before_banner_settles() {
    let charts = HeadlessChart::new();
    let mut dash = silent_hello_dashboard(charts.clone());

    let task = tokio::spawn(async move {
        let _ = dash.mount().await;
        dash
    });
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(charts.live_count(), 1);
    assert!(!task.is_finished());

    let dash = task.await.unwrap();
    assert!(matches!(dash.banner(), Banner::Error(_)));
}

#[tokio::test]
async fn hidden_banner_is_never_fetched() {
    let (mut dash, _charts) = dashboard_with(Arc::new(MockSource::new()));
    let _ = dash.mount().await;
    dash.load_banner().await;
    assert_eq!(dash.banner(), &Banner::Hidden);
    assert!(dash.banner().text().is_none());
}

#[tokio::test]
async fn load_banner_from_static_mock() {
    let mut dash = Dashboard::builder()
        .with_source(Arc::new(MockSource::new()))
        .chart_backend(HeadlessChart::new())
        .build()
        .unwrap();
    dash.load_banner().await;
    assert_eq!(dash.banner(), &Banner::Message(MOCK_HELLO.to_string()));
}

#[tokio::test]
async fn empty_ticker_issues_no_request() {
    let (src, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_series_behavior(AAPL, MockBehavior::Return(three_bars()))
        .await;
    let (mut dash, charts) = dashboard_with(src);
    let _ = dash.update().await;
    assert_eq!(ctl.request_count().await, 1);

    dash.controls_mut().set_ticker("   ").unwrap();
    assert!(dash.submit().is_none());
    assert!(dash.refresh().is_none());
    assert!(matches!(dash.update().await, Applied::Skipped));

    assert_eq!(ctl.request_count().await, 1);
    assert!(matches!(dash.state(), ViewState::Displaying(_)));
    assert_eq!(dash.table().len(), 3);
    assert_eq!(charts.live_count(), 1);
}

#[tokio::test]
async fn refresh_forwards_force() {
    let (src, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_series_behavior(AAPL, MockBehavior::Return(three_bars()))
        .await;
    let (mut dash, _charts) = dashboard_with(src);

    let _ = dash.update().await;
    let pending = dash.refresh().unwrap();
    assert!(pending.query().force());
    let _ = dash.apply(pending.run().await);

    let reqs = ctl.requests().await;
    assert!(!reqs[0].force());
    assert!(reqs[1].force());
}

#[tokio::test]
async fn dropping_dashboard_disposes_chart() {
    let (src, ctl) = DynamicMockSource::new_with_controller("dyn");
    ctl.set_series_behavior(AAPL, MockBehavior::Return(three_bars()))
        .await;
    let (mut dash, charts) = dashboard_with(src);
    let _ = dash.update().await;
    assert_eq!(charts.live_count(), 1);

    drop(dash);
    assert_eq!(charts.live_count(), 0);
    assert_eq!(charts.disposed(), 1);
}

#[test]
fn builder_requires_source_and_backend() {
    let err = Dashboard::<HeadlessChart>::builder()
        .chart_backend(HeadlessChart::new())
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, DashboardError::InvalidArg(_)));

    let err = Dashboard::<HeadlessChart>::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, DashboardError::InvalidArg(_)));
}

#[test]
fn builder_rejects_zero_timeout_and_unknown_default() {
    let err = Dashboard::builder()
        .with_source(Arc::new(MockSource::new()))
        .chart_backend(HeadlessChart::new())
        .request_timeout(Duration::ZERO)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, DashboardError::InvalidArg(_)));

    let err = Dashboard::builder()
        .with_source(Arc::new(MockSource::new()))
        .chart_backend(HeadlessChart::new())
        .catalog(Catalog::new(["MSFT"]))
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, DashboardError::InvalidArg(_)));
}

#[test]
fn builder_takes_default_selection() {
    let dash = Dashboard::builder()
        .with_source(Arc::new(MockSource::new()))
        .chart_backend(HeadlessChart::new())
        .default_selection(selection("msft", Period::M6, Interval::W1))
        .build()
        .unwrap();
    let sel = dash.controls().selection();
    assert_eq!(sel.ticker, "MSFT");
    assert_eq!(sel.period, Period::M6);
    assert_eq!(sel.interval, Interval::W1);
    assert_eq!(dash.state(), &ViewState::Idle);
}
