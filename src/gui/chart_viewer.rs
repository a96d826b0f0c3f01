//! Chart Viewer Widget
//! Central scrollable area: one card per subject in rows of equal-width
//! columns, followed by an overview card with the subject averages.

use crate::charts::{ChartPlotter, SubjectChart};
use crate::gui::Theme;
use crate::stats::ChartSeries;
use egui::{Color32, RichText, ScrollArea};

const CARDS_PER_ROW: usize = 3;
const CARD_SPACING: f32 = 6.0;
const SUBJECT_CHART_HEIGHT: f32 = 220.0;
const OVERVIEW_CHART_HEIGHT: f32 = 260.0;

pub struct ChartViewer {
    pub subject_charts: Vec<SubjectChart>,
    pub series: ChartSeries,
    pub palette: Vec<Color32>,
    pub scale_max: f64,
}

impl ChartViewer {
    pub fn new(
        subject_charts: Vec<SubjectChart>,
        series: ChartSeries,
        palette: Vec<Color32>,
        scale_max: f64,
    ) -> Self {
        Self {
            subject_charts,
            series,
            palette,
            scale_max,
        }
    }

    /// Number of card rows needed for the subject cards.
    pub fn row_count(&self) -> usize {
        self.subject_charts.len().div_ceil(CARDS_PER_ROW)
    }

    pub fn show(&self, ui: &mut egui::Ui, theme: Theme) {
        if self.subject_charts.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("Ingen fag").size(20.0));
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for row in self.subject_charts.chunks(CARDS_PER_ROW) {
                    ui.columns(CARDS_PER_ROW, |columns| {
                        for (column, chart) in columns.iter_mut().zip(row) {
                            self.draw_subject_card(column, chart, theme);
                        }
                    });
                    ui.add_space(CARD_SPACING);
                }

                self.draw_overview_card(ui, theme);
            });
    }

    fn card_frame(theme: Theme) -> egui::Frame {
        egui::Frame::none()
            .rounding(6.0)
            .stroke(egui::Stroke::new(1.5, theme.info()))
            .inner_margin(10.0)
            .outer_margin(CARD_SPACING)
    }

    fn draw_subject_card(&self, ui: &mut egui::Ui, chart: &SubjectChart, theme: Theme) {
        Self::card_frame(theme).show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(&chart.subject)
                        .size(13.0)
                        .color(theme.info()),
                );
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Gennemsnit: {:.1}", chart.average))
                        .size(14.0)
                        .strong(),
                );
                ui.add_space(6.0);
                ChartPlotter::draw_subject_chart(ui, chart, self.scale_max, SUBJECT_CHART_HEIGHT);
            });
        });
    }

    fn draw_overview_card(&self, ui: &mut egui::Ui, theme: Theme) {
        Self::card_frame(theme).show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Oversigt").size(13.0).color(theme.info()));
                if let Some(overall) = self.series.overall() {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("Samlet gennemsnit: {:.1}", overall))
                            .size(14.0)
                            .strong(),
                    );
                }
                ui.add_space(6.0);
                ChartPlotter::draw_series_chart(
                    ui,
                    &self.series,
                    &self.palette,
                    theme.overall_bar(),
                    self.scale_max,
                    OVERVIEW_CHART_HEIGHT,
                );
            });
        });
    }
}
