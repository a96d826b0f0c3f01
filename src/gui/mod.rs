//! GUI module - User interface components

mod app;
mod chart_viewer;
mod header;
mod theme;

pub use app::DashboardApp;
pub use chart_viewer::ChartViewer;
pub use header::{HeaderAction, HeaderBar};
pub use theme::Theme;
