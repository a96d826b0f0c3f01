//! Elevdashboard - Student Grade Dashboard
//!
//! Reads one student's grades from a JSON file beside the executable and shows
//! a bar chart per subject, plus an overview of the subject averages.

mod charts;
mod config;
mod data;
mod gui;
mod stats;

use anyhow::Context as _;
use charts::ChartPlotter;
use config::DashboardConfig;
use data::DataLoader;
use eframe::egui;
use gui::DashboardApp;
use stats::GradeCalculator;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("elevdashboard=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let program_dir = config::program_dir().context("Failed to locate program directory")?;
    let config = DashboardConfig::load_from_dir(&program_dir)?;

    // Everything below runs once, before the event loop
    let data_path = config.data_path(&program_dir);
    let record = DataLoader::load_grade_data(&data_path)
        .with_context(|| format!("Failed to load grades from {}", data_path.display()))?;

    let palette = ChartPlotter::parse_palette(&config.palette);
    let subject_charts = ChartPlotter::build_subject_charts(&record, &palette)?;
    let series = GradeCalculator::chart_series(&record, config.show_overall)?;
    if let Some(overall) = series.overall() {
        info!("computed overall average {:.2}", overall);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title(config.window_title.clone()),
        ..Default::default()
    };

    let window_title = config.window_title.clone();
    let student = record.display_name().to_string();
    eframe::run_native(
        &window_title,
        options,
        Box::new(move |cc| {
            Ok(Box::new(DashboardApp::new(
                cc,
                &student,
                subject_charts,
                series,
                palette,
                &config,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Dashboard window failed: {e}"))
}
