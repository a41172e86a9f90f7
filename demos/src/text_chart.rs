//! Terminal rendering: a one-line sparkline chart and a tab-separated table.
use stocktimum::{ChartBackend, ChartSpec, Table};

const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Draws each chart as a sparkline on stdout.
#[derive(Debug, Default)]
pub struct TextChart {
    width: usize,
    next: u32,
}

impl TextChart {
    /// Sparklines at most `width` cells wide.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            next: 0,
        }
    }

    /// Sparkline for `values`, sampled down to `width` cells.
    #[must_use]
    pub fn sparkline(values: &[f64], width: usize) -> String {
        if values.is_empty() {
            return String::new();
        }
        let step = values.len().div_ceil(width.max(1));
        let sampled: Vec<f64> = values.iter().step_by(step).copied().collect();
        let lo = sampled.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = sampled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = hi - lo;
        sampled
            .iter()
            .map(|v| {
                if span <= f64::EPSILON {
                    return BLOCKS[(BLOCKS.len() - 1) / 2];
                }
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let i = (((v - lo) / span) * (BLOCKS.len() - 1) as f64).round() as usize;
                BLOCKS[i.min(BLOCKS.len() - 1)]
            })
            .collect()
    }
}

impl ChartBackend for TextChart {
    type Handle = u32;

    fn create(&mut self, spec: &ChartSpec) -> u32 {
        self.next += 1;
        let first = spec.labels.first().map_or("-", String::as_str);
        let last = spec.labels.last().map_or("-", String::as_str);
        println!(
            "[chart #{}] {} ({} points, {} ticks, {} .. {})",
            self.next,
            spec.dataset_label,
            spec.len(),
            spec.time_unit,
            first,
            last,
        );
        println!("  {}", Self::sparkline(&spec.values, self.width));
        self.next
    }

    fn dispose(&mut self, handle: u32) {
        println!("[chart #{handle}] disposed");
    }
}

/// Render the header and at most `limit` rows.
#[must_use]
pub fn render_table(table: &Table, limit: usize) -> String {
    let mut out = Table::HEADERS.join("\t");
    for row in table.cells().take(limit) {
        out.push('\n');
        out.push_str(&row.join("\t"));
    }
    if table.len() > limit {
        out.push_str(&format!("\n... {} more rows", table.len() - limit));
    }
    out
}
