//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use crate::ui::theme::Theme;

pub const FIELD_WIDTH: f32 = 320.0;

/// Render a labelled single-line text input
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    password: bool,
) -> egui::Response {
    ui.label(egui::RichText::new(label).size(14.0));
    ui.add_sized(
        [FIELD_WIDTH, 28.0],
        egui::TextEdit::singleline(value).password(password).hint_text(hint),
    )
}

/// Render a submit-style button that is greyed out while `enabled` is false
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    enabled: bool,
    theme: &Theme,
) -> egui::Response {
    let button = egui::Button::new(egui::RichText::new(text).size(15.0).strong())
        .fill(theme.colors.accent_dark)
        .min_size(egui::vec2(120.0, 32.0));
    ui.add_enabled(enabled, button)
}

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(egui::RichText::new(text).size(22.0).strong().color(theme.selected));
    ui.add_space(12.0);
}

pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).size(14.0).color(theme.error));
    ui.add_space(6.0);
}

pub fn render_success(ui: &mut egui::Ui, message: &str, theme: &Theme) {
    ui.label(egui::RichText::new(message).size(14.0).color(theme.success));
    ui.add_space(6.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).size(13.0).color(theme.dim));
}

/// Spinner with a caption, shown while a request is in flight
pub fn render_loading(ui: &mut egui::Ui, caption: &str, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(egui::RichText::new(caption).color(theme.dim));
    });
}
