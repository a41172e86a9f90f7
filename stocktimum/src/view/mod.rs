mod banner;
mod chart;
mod controls;
mod headless;
mod state;
mod table;

pub use banner::Banner;
pub use chart::{ChartBackend, ChartSlot, ChartSpec, TimeUnit};
pub use controls::Controls;
pub use headless::{ChartId, HeadlessChart};
pub use state::{Event, ViewState};
pub use table::Table;
