//! Elevdashboard Main Application
//! Window with the header bar and the subject chart cards.

use crate::charts::SubjectChart;
use crate::config::DashboardConfig;
use crate::gui::{ChartViewer, HeaderAction, HeaderBar, Theme};
use crate::stats::ChartSeries;
use egui::{Color32, TopBottomPanel};
use tracing::{debug, info};

/// Main application window. All data is computed before the event loop
/// starts; the only state that changes afterwards is the theme.
pub struct DashboardApp {
    header: HeaderBar,
    chart_viewer: ChartViewer,
    theme: Theme,
    alternate_theme: Theme,
}

impl DashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        student: &str,
        subject_charts: Vec<SubjectChart>,
        series: ChartSeries,
        palette: Vec<Color32>,
        config: &DashboardConfig,
    ) -> Self {
        let app = Self::build(student, subject_charts, series, palette, config);
        app.theme.apply(&cc.egui_ctx);
        app
    }

    fn build(
        student: &str,
        subject_charts: Vec<SubjectChart>,
        series: ChartSeries,
        palette: Vec<Color32>,
        config: &DashboardConfig,
    ) -> Self {
        let chart_viewer =
            ChartViewer::new(subject_charts, series, palette, config.grade_scale_max);
        debug!(rows = chart_viewer.row_count(), "laid out subject cards");

        Self {
            header: HeaderBar::new(student),
            chart_viewer,
            theme: config.theme,
            alternate_theme: config.alternate_theme,
        }
    }

    /// Switch to the alternate theme. Repeated presses keep it.
    fn handle_switch_theme(&mut self, ctx: &egui::Context) {
        if self.theme != self.alternate_theme {
            info!(
                from = self.theme.name(),
                to = self.alternate_theme.name(),
                "switching theme"
            );
            self.theme = self.alternate_theme;
        }
        self.theme.apply(ctx);
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let theme = self.theme;

        let action = TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(theme.dark())
                    .inner_margin(10.0),
            )
            .show(ctx, |ui| self.header.show(ui, theme))
            .inner;

        if action == HeaderAction::SwitchTheme {
            self.handle_switch_theme(ctx);
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(12.0),
            )
            .show(ctx, |ui| {
                self.chart_viewer.show(ui, self.theme);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartPlotter;
    use crate::data::DataLoader;
    use crate::stats::GradeCalculator;

    fn app() -> DashboardApp {
        let record = DataLoader::parse_grade_data(
            r#"{"student":"A","subjects":{"Math":{"t1":8,"t2":10},"Art":{"t1":4}}}"#,
        )
        .unwrap();
        let config = DashboardConfig::default();
        let palette = ChartPlotter::parse_palette(&config.palette);
        let charts = ChartPlotter::build_subject_charts(&record, &palette).unwrap();
        let series = GradeCalculator::chart_series(&record, config.show_overall).unwrap();
        DashboardApp::build(record.display_name(), charts, series, palette, &config)
    }

    #[test]
    fn theme_switch_is_one_way() {
        let ctx = egui::Context::default();
        let mut app = app();
        assert_eq!(app.theme, Theme::Flatly);

        app.handle_switch_theme(&ctx);
        assert_eq!(app.theme, Theme::Cosmo);

        app.handle_switch_theme(&ctx);
        assert_eq!(app.theme, Theme::Cosmo);
    }

    #[test]
    fn viewer_receives_overall_series() {
        let app = app();
        assert_eq!(app.chart_viewer.subject_charts.len(), 2);
        assert_eq!(app.chart_viewer.series.overall(), Some(6.5));
        assert_eq!(app.header.title, "Karakterer · A");
    }

    #[test]
    fn viewer_uses_palette_it_is_given() {
        let record = DataLoader::parse_grade_data(r#"{"subjects":{"Math":{"t1":8}}}"#).unwrap();
        let palette = vec![Color32::RED];
        let charts = ChartPlotter::build_subject_charts(&record, &palette).unwrap();
        let series = GradeCalculator::chart_series(&record, true).unwrap();

        let app = DashboardApp::build(
            record.display_name(),
            charts,
            series,
            palette.clone(),
            &DashboardConfig::default(),
        );
        assert_eq!(app.chart_viewer.palette, palette);
        assert_eq!(app.chart_viewer.subject_charts[0].color, Color32::RED);
    }
}
