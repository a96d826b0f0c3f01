//! Stats module - grade aggregation

mod calculator;

pub use calculator::{AggregateError, ChartSeries, GradeCalculator};
