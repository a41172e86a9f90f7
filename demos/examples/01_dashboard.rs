use stocktimum::{Dashboard, DashboardConfig, Period};
use stocktimum_demos::common::get_source;
use stocktimum_demos::text_chart::{TextChart, render_table};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Configuration from STOCKTIMUM_* variables, defaults otherwise.
    let cfg = DashboardConfig::from_env()?;

    // 2. Build the dashboard over a source and a terminal chart.
    let mut dash = Dashboard::builder()
        .with_source(get_source()?)
        .chart_backend(TextChart::new(60))
        .config(cfg)
        .build()?;

    // 3. First load: banner plus the default selection.
    let outcome = dash.mount().await;
    if let Some(text) = dash.banner().text() {
        println!("{text}");
    }
    println!("mount: {outcome:?}");

    // 4. A shorter window on the same ticker.
    dash.controls_mut().set_period(Period::M6);
    let _ = dash.update().await;

    match dash.error_message() {
        Some(msg) => println!("{msg}"),
        None => println!("{}", render_table(dash.table(), 5)),
    }
    Ok(())
}
