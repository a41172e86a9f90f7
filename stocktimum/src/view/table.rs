use stocktimum_core::{Column, Row};

/// The data table under the chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Header row, fixed order.
    pub const HEADERS: [&'static str; 6] = [
        Column::Date.header(),
        Column::Open.header(),
        Column::High.header(),
        Column::Low.header(),
        Column::Close.header(),
        Column::Volume.header(),
    ];

    /// Replace every row with `rows`.
    pub fn replace(&mut self, rows: impl IntoIterator<Item = Row>) {
        self.rows.clear();
        self.rows.extend(rows);
    }

    /// Remove all rows.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Current rows.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Display text per row, in header order.
    pub fn cells(&self) -> impl Iterator<Item = [String; 6]> + '_ {
        self.rows.iter().map(Row::cells)
    }
}
