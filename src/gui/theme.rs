//! Dashboard themes, modelled on the Bootstrap "flatly" and "cosmo" palettes.

use egui::{Color32, Stroke, Visuals};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Flatly,
    Cosmo,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Flatly => "flatly",
            Theme::Cosmo => "cosmo",
        }
    }

    pub fn primary(self) -> Color32 {
        match self {
            Theme::Flatly => Color32::from_rgb(0x2C, 0x3E, 0x50),
            Theme::Cosmo => Color32::from_rgb(0x27, 0x80, 0xE3),
        }
    }

    /// Header bar background.
    pub fn dark(self) -> Color32 {
        match self {
            Theme::Flatly => Color32::from_rgb(0x21, 0x25, 0x29),
            Theme::Cosmo => Color32::from_rgb(0x37, 0x3A, 0x3C),
        }
    }

    /// Card borders and card headings.
    pub fn info(self) -> Color32 {
        match self {
            Theme::Flatly => Color32::from_rgb(0x34, 0x98, 0xDB),
            Theme::Cosmo => Color32::from_rgb(0x99, 0x54, 0xBB),
        }
    }

    /// Bar for the overall average in the overview chart.
    pub fn overall_bar(self) -> Color32 {
        self.primary()
    }

    pub fn visuals(self) -> Visuals {
        let mut visuals = Visuals::light();
        visuals.panel_fill = Color32::WHITE;
        visuals.window_fill = Color32::WHITE;
        visuals.override_text_color = Some(Color32::from_rgb(0x21, 0x25, 0x29));
        visuals.hyperlink_color = self.primary();
        visuals.selection.bg_fill = self.primary();
        visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);
        visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(0xF8, 0xF9, 0xFA);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.primary());
        visuals
    }

    pub fn apply(self, ctx: &egui::Context) {
        ctx.set_visuals(self.visuals());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_differ_in_primary_colour() {
        assert_ne!(Theme::Flatly.primary(), Theme::Cosmo.primary());
        assert_eq!(Theme::Cosmo.visuals().selection.bg_fill, Theme::Cosmo.primary());
        assert!(!Theme::Flatly.visuals().dark_mode);
    }

    #[test]
    fn overall_bar_stands_out_from_card_borders() {
        for theme in [Theme::Flatly, Theme::Cosmo] {
            assert_eq!(theme.overall_bar(), theme.primary());
            assert_ne!(theme.overall_bar(), theme.info());
        }
    }

    #[test]
    fn names_match_config_values() {
        for theme in [Theme::Flatly, Theme::Cosmo] {
            let parsed: Theme = serde_json::from_str(&format!("\"{}\"", theme.name())).unwrap();
            assert_eq!(parsed, theme);
        }
    }
}
