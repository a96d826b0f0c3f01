//! Bar Chart Plotter
//! Draws grade bar charts with egui_plot on a fixed 0..scale_max axis.

use crate::data::GradeRecord;
use crate::stats::{AggregateError, ChartSeries, GradeCalculator};
use egui::Color32;
use egui_plot::{Bar, BarChart, GridMark, Plot};
use tracing::warn;

/// Fallback bar colours (sky blue, green, orange).
pub const DEFAULT_PALETTE: [Color32; 3] = [
    Color32::from_rgb(0x4C, 0xB5, 0xF5),
    Color32::from_rgb(0x7B, 0xC0, 0x43),
    Color32::from_rgb(0xFF, 0xA5, 0x00),
];

const BAR_WIDTH: f64 = 0.6;
const BAR_ALPHA: f32 = 0.85;
const Y_AXIS_LABEL: &str = "Karakter";
/// No vertical margin, so the grade axis spans exactly `0..=scale_max`.
const PLOT_MARGIN: egui::Vec2 = egui::vec2(0.05, 0.0);

/// Chart data for one subject card.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectChart {
    pub subject: String,
    /// Assessment labels, in file order.
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub average: f64,
    pub color: Color32,
}

pub struct ChartPlotter;

impl ChartPlotter {
    /// Parse `#RRGGBB` palette entries. Unparseable entries are skipped; an
    /// empty result falls back to [`DEFAULT_PALETTE`].
    pub fn parse_palette(entries: &[String]) -> Vec<Color32> {
        let colors: Vec<Color32> = entries
            .iter()
            .filter_map(|hex| match Color32::from_hex(hex) {
                Ok(color) => Some(color),
                Err(e) => {
                    warn!(color = %hex, error = ?e, "ignoring invalid palette colour");
                    None
                }
            })
            .collect();

        if colors.is_empty() {
            DEFAULT_PALETTE.to_vec()
        } else {
            colors
        }
    }

    /// Colour for the `idx`-th subject, cycling through the palette.
    pub fn get_color(palette: &[Color32], idx: usize) -> Color32 {
        if palette.is_empty() {
            DEFAULT_PALETTE[idx % DEFAULT_PALETTE.len()]
        } else {
            palette[idx % palette.len()]
        }
    }

    /// One chart per subject, in record order.
    pub fn build_subject_charts(
        record: &GradeRecord,
        palette: &[Color32],
    ) -> Result<Vec<SubjectChart>, AggregateError> {
        record
            .subjects
            .iter()
            .enumerate()
            .map(|(idx, (subject, grades))| {
                Ok(SubjectChart {
                    subject: subject.clone(),
                    labels: grades.keys().cloned().collect(),
                    values: grades.values().copied().collect(),
                    average: GradeCalculator::subject_average(subject, grades)?,
                    color: Self::get_color(palette, idx),
                })
            })
            .collect()
    }

    /// Category label for an x-axis grid mark, empty between categories.
    pub fn tick_label(labels: &[String], value: f64) -> String {
        let rounded = value.round();
        if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
            return String::new();
        }
        labels.get(rounded as usize).cloned().unwrap_or_default()
    }

    /// Draw a subject's per-assessment grades.
    pub fn draw_subject_chart(ui: &mut egui::Ui, chart: &SubjectChart, scale_max: f64, height: f32) {
        let colors = vec![chart.color; chart.values.len()];
        Self::draw_bar_chart(
            ui,
            &format!("subject_{}", chart.subject),
            &chart.labels,
            &chart.values,
            &colors,
            scale_max,
            height,
        );
    }

    /// Draw the averages series. Subject bars use the palette; the overall bar
    /// uses `overall_color`.
    pub fn draw_series_chart(
        ui: &mut egui::Ui,
        series: &ChartSeries,
        palette: &[Color32],
        overall_color: Color32,
        scale_max: f64,
        height: f32,
    ) {
        let labels = series.labels();
        let values: Vec<f64> = series.points.iter().map(|(_, v)| *v).collect();
        let has_overall = series.overall().is_some();
        let colors: Vec<Color32> = (0..series.len())
            .map(|idx| {
                if has_overall && idx + 1 == series.len() {
                    overall_color
                } else {
                    Self::get_color(palette, idx)
                }
            })
            .collect();

        Self::draw_bar_chart(ui, "averages", &labels, &values, &colors, scale_max, height);
    }

    fn draw_bar_chart(
        ui: &mut egui::Ui,
        id: &str,
        labels: &[String],
        values: &[f64],
        colors: &[Color32],
        scale_max: f64,
        height: f32,
    ) {
        let bars: Vec<Bar> = values
            .iter()
            .zip(labels)
            .zip(colors)
            .enumerate()
            .map(|(idx, ((&value, label), &color))| {
                Bar::new(idx as f64, value)
                    .name(label)
                    .width(BAR_WIDTH)
                    .fill(color.gamma_multiply(BAR_ALPHA))
                    .stroke(egui::Stroke::new(1.0, color))
            })
            .collect();

        let tick_labels = labels.to_vec();
        let tick_count = labels.len();

        Plot::new(id)
            .height(height)
            .y_axis_label(Y_AXIS_LABEL)
            .include_y(0.0)
            .include_y(scale_max)
            .include_x(-0.5)
            .include_x(tick_count.max(1) as f64 - 0.5)
            .set_margin_fraction(PLOT_MARGIN)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show_x(false)
            .show_grid([false, true])
            .clamp_grid(true)
            // one tick per category
            .x_grid_spacer(move |_input| {
                (0..tick_count)
                    .map(|idx| GridMark {
                        value: idx as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| Self::tick_label(&tick_labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataLoader;

    #[test]
    fn palette_skips_invalid_entries() {
        let palette = ChartPlotter::parse_palette(&[
            "#4CB5F5".to_string(),
            "not-a-colour".to_string(),
            "#FFA500".to_string(),
        ]);
        assert_eq!(palette, vec![DEFAULT_PALETTE[0], DEFAULT_PALETTE[2]]);
    }

    #[test]
    fn empty_palette_falls_back_to_defaults() {
        assert_eq!(ChartPlotter::parse_palette(&[]), DEFAULT_PALETTE.to_vec());
        assert_eq!(
            ChartPlotter::parse_palette(&["#zzz".to_string()]),
            DEFAULT_PALETTE.to_vec()
        );
    }

    #[test]
    fn colours_cycle_by_index() {
        let palette = DEFAULT_PALETTE.to_vec();
        assert_eq!(ChartPlotter::get_color(&palette, 0), DEFAULT_PALETTE[0]);
        assert_eq!(ChartPlotter::get_color(&palette, 4), DEFAULT_PALETTE[1]);
        assert_eq!(ChartPlotter::get_color(&[], 2), DEFAULT_PALETTE[2]);
    }

    #[test]
    fn grade_axis_has_no_vertical_margin() {
        assert_eq!(PLOT_MARGIN.y, 0.0);
        assert!(PLOT_MARGIN.x > 0.0);
    }

    #[test]
    fn tick_labels_only_on_categories() {
        let labels = vec!["test1".to_string(), "test2".to_string()];
        assert_eq!(ChartPlotter::tick_label(&labels, 0.0), "test1");
        assert_eq!(ChartPlotter::tick_label(&labels, 1.0), "test2");
        assert_eq!(ChartPlotter::tick_label(&labels, 0.5), "");
        assert_eq!(ChartPlotter::tick_label(&labels, 2.0), "");
        assert_eq!(ChartPlotter::tick_label(&labels, -1.0), "");
    }

    #[test]
    fn subject_charts_keep_file_order() {
        let record = DataLoader::parse_grade_data(
            r#"{"student":"A","subjects":{
                "Matematik":{"test1":7,"test2":10},
                "Dansk":{"test1":4},
                "Engelsk":{"test1":12},
                "Fysik":{"test1":2}
            }}"#,
        )
        .unwrap();

        let charts = ChartPlotter::build_subject_charts(&record, &DEFAULT_PALETTE).unwrap();
        let names: Vec<&str> = charts.iter().map(|c| c.subject.as_str()).collect();
        assert_eq!(names, ["Matematik", "Dansk", "Engelsk", "Fysik"]);
        assert_eq!(charts[0].labels, ["test1", "test2"]);
        assert_eq!(charts[0].values, [7.0, 10.0]);
        assert_eq!(charts[0].average, 8.5);
        assert_eq!(charts[3].color, DEFAULT_PALETTE[0]);
    }

    #[test]
    fn subject_chart_for_empty_subject_fails() {
        let record =
            DataLoader::parse_grade_data(r#"{"student":"A","subjects":{"Art":{}}}"#).unwrap();
        assert!(ChartPlotter::build_subject_charts(&record, &DEFAULT_PALETTE).is_err());
    }
}
