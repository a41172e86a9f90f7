use stocktimum::Dashboard;
use stocktimum_demos::common::get_source;
use stocktimum_demos::text_chart::TextChart;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,stocktimum=debug,stocktimum_http=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let mut dash = Dashboard::builder()
        .with_source(get_source()?)
        .chart_backend(TextChart::new(40))
        .build()?;

    let _ = dash.mount().await;
    dash.controls_mut().set_ticker("MSFT")?;
    let _ = dash.update().await;
    if let Some(pending) = dash.refresh() {
        let _ = dash.apply(pending.run().await);
    }

    Ok(())
}
