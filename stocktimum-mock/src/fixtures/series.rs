use stocktimum_core::Series;

type Bar = (&'static str, f64, f64, f64, f64, u64);

pub fn by_symbol(s: &str) -> Option<Series> {
    match s {
        "AAPL" => Some(build(&[
            ("2023-01-03", 130.28, 130.90, 124.17, 125.07, 112_117_500),
            ("2023-01-04", 126.89, 128.66, 125.08, 126.36, 89_113_600),
            ("2023-01-05", 127.13, 127.77, 124.76, 125.02, 80_962_700),
        ])),
        "MSFT" => Some(build(&[
            ("2023-01-03", 243.08, 245.75, 237.40, 239.58, 25_740_000),
            ("2023-01-04", 232.28, 232.87, 225.96, 229.10, 50_623_400),
            ("2023-01-05", 227.20, 227.55, 221.76, 222.31, 39_585_600),
        ])),
        "GOOG" => Some(build(&[
            ("2023-01-03", 89.83, 91.55, 89.02, 89.70, 20_738_500),
            ("2023-01-04", 91.01, 91.24, 87.80, 88.71, 27_046_500),
        ])),
        "TSLA" => Some(build(&[
            ("2023-01-03", 118.47, 118.80, 104.64, 108.10, 231_402_800),
            ("2023-01-04", 109.11, 114.59, 107.52, 113.64, 180_389_000),
        ])),
        "SPY" => Some(build(&[
            ("2023-01-03", 384.37, 386.43, 377.83, 380.82, 74_850_700),
            ("2023-01-04", 383.18, 385.88, 380.00, 383.76, 85_934_100),
        ])),
        _ => None,
    }
}

fn build(bars: &[Bar]) -> Series {
    let col = |f: fn(&Bar) -> f64| bars.iter().map(f).collect::<Vec<f64>>();
    #[allow(clippy::cast_precision_loss)]
    let volume = bars.iter().map(|b| b.5 as f64).collect();
    Series::from_columns(
        bars.iter().map(|b| b.0.to_string()).collect(),
        col(|b| b.1),
        col(|b| b.2),
        col(|b| b.3),
        col(|b| b.4),
        volume,
    )
    .expect("valid fixture")
}
