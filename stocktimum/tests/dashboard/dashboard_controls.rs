use std::sync::Arc;

use proptest::prelude::*;
use stocktimum::{Catalog, Controls, DashboardError, Interval, Period, Selection};
use stocktimum_mock::MockSource;

use crate::helpers::{AAPL, TSLA, dashboard_with};

fn controls() -> Controls {
    Controls::new(Catalog::builtin(), Selection::default()).unwrap()
}

#[test]
fn ticker_must_be_in_catalog() {
    let mut c = controls();
    assert!(matches!(
        c.set_ticker("NOT-A-TICKER"),
        Err(DashboardError::InvalidArg(_))
    ));
    assert_eq!(c.selection().ticker, AAPL);

    c.set_ticker(" tsla ").unwrap();
    assert_eq!(c.selection().ticker, TSLA);

    c.set_ticker("brk.b").unwrap();
    assert_eq!(c.selection().ticker, "BRK-B");
}

#[test]
fn clearing_the_ticker() {
    let mut c = controls();
    c.clear_ticker();
    assert!(c.selection().is_empty());
    c.set_ticker(AAPL).unwrap();
    c.set_ticker("").unwrap();
    assert!(c.selection().is_empty());
}

#[test]
fn period_and_interval_by_wire_id() {
    let mut c = controls();
    c.set_period_str("6mo").unwrap();
    c.set_interval_str("1wk").unwrap();
    assert_eq!(c.selection().period, Period::M6);
    assert_eq!(c.selection().interval, Interval::W1);

    assert!(c.set_period_str("2y").is_err());
    assert!(c.set_interval_str("1h").is_err());
    assert_eq!(c.selection().period, Period::M6);
    assert_eq!(c.selection().interval, Interval::W1);
}

#[tokio::test]
async fn selection_changes_flow_into_queries() {
    let (mut dash, _charts) = dashboard_with(Arc::new(MockSource::new()));
    dash.controls_mut().set_ticker("msft").unwrap();
    dash.controls_mut().set_period(Period::Y1);
    dash.controls_mut().set_interval(Interval::M1);

    let pending = dash.submit().unwrap();
    let q = pending.query();
    assert_eq!(q.ticker(), "MSFT");
    assert_eq!(q.period(), Period::Y1);
    assert_eq!(q.interval(), Interval::M1);
    assert!(!q.force());
}

proptest! {
    #[test]
    fn any_catalog_symbol_is_selectable(
        sym in prop::sample::select(Catalog::builtin().symbols().to_vec()),
    ) {
        let mut c = Controls::new(Catalog::builtin(), Selection::default()).unwrap();
        c.set_ticker(&sym.to_lowercase()).unwrap();
        prop_assert_eq!(&c.selection().ticker, &sym);
    }
}
