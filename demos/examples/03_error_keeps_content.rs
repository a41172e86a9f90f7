use stocktimum::{Applied, Catalog, Dashboard};
use stocktimum_demos::text_chart::{TextChart, render_table};
use stocktimum_mock::MockSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut dash = Dashboard::builder()
        .with_source(std::sync::Arc::new(MockSource::new()))
        .chart_backend(TextChart::new(30))
        .catalog(Catalog::new(["AAPL", "FAIL"]))
        .show_banner(false)
        .build()?;

    let _ = dash.update().await;
    println!("{}", render_table(dash.table(), 3));

    // The mock fails this ticker with a network error.
    dash.controls_mut().set_ticker("FAIL")?;
    if let Applied::Failed { error, .. } = dash.update().await {
        println!("fetch failed: {error}");
    }
    if let Some(msg) = dash.error_message() {
        println!("{msg}");
    }
    println!("{}", render_table(dash.table(), 3));
    Ok(())
}
