//! Charts module - bar chart rendering

mod plotter;

pub use plotter::{ChartPlotter, SubjectChart};
