//! Header Bar Widget
//! Dark top bar with the student title and the theme switch button.

use crate::gui::Theme;
use egui::{Color32, RichText};

pub const THEME_BUTTON_TEXT: &str = "Skift tema";

/// Top bar showing whose grades are displayed.
pub struct HeaderBar {
    pub title: String,
}

impl HeaderBar {
    pub fn new(student: &str) -> Self {
        Self {
            title: Self::title_for(student),
        }
    }

    pub fn title_for(student: &str) -> String {
        format!("Karakterer · {}", student)
    }

    /// Draw the header contents. The caller provides the dark panel frame.
    pub fn show(&self, ui: &mut egui::Ui, theme: Theme) -> HeaderAction {
        let mut action = HeaderAction::None;

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&self.title)
                    .size(16.0)
                    .strong()
                    .color(Color32::WHITE),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(5.0);
                let button = egui::Button::new(
                    RichText::new(THEME_BUTTON_TEXT).color(theme.dark()),
                )
                .fill(Color32::from_rgb(0xF8, 0xF9, 0xFA));
                if ui.add(button).clicked() {
                    action = HeaderAction::SwitchTheme;
                }
            });
        });

        action
    }
}

/// Actions triggered from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    None,
    SwitchTheme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_includes_student_name() {
        assert_eq!(HeaderBar::new("Peter Jensen").title, "Karakterer · Peter Jensen");
    }
}
