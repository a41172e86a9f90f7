use std::time::Duration;

use stocktimum::{Applied, Dashboard};
use stocktimum_demos::text_chart::TextChart;
use stocktimum_mock::{DynamicMockSource, MockBehavior, MockSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A slow AAPL and a fast MSFT, scripted through the dynamic mock.
    let (source, ctl) = DynamicMockSource::new_with_controller("demo");
    if let Some(aapl) = MockSource::fixture("AAPL") {
        ctl.set_series_behavior("AAPL", MockBehavior::Return(aapl).after(Duration::from_millis(300)))
            .await;
    }
    if let Some(msft) = MockSource::fixture("MSFT") {
        ctl.set_series_behavior("MSFT", MockBehavior::Return(msft).after(Duration::from_millis(20)))
            .await;
    }

    let mut dash = Dashboard::builder()
        .with_source(source)
        .chart_backend(TextChart::new(30))
        .show_banner(false)
        .build()?;

    let slow = dash.submit().ok_or("no ticker")?;
    dash.controls_mut().set_ticker("MSFT")?;
    let fast = dash.submit().ok_or("no ticker")?;

    let (slow, fast) = futures::join!(slow.run(), fast.run());
    for done in [fast, slow] {
        let ticker = done.query().ticker().to_string();
        match dash.apply(done) {
            Applied::Rendered { rows, .. } => println!("{ticker}: rendered {rows} rows"),
            Applied::Stale { token } => println!("{ticker}: stale (token {})", token.get()),
            other => println!("{ticker}: {other:?}"),
        }
    }

    let shown = dash.chart().map(|c| c.dataset_label.clone()).unwrap_or_default();
    println!("showing: {shown}");
    Ok(())
}
