//! # Payments Screen
//!
//! Payment methods (with the default switch) and payment history for a user id.

use chrono::Local;
use shared::{format_amount, mask_card};

use crate::app::{App, AppState, FeedbackKind};
use crate::core::LoadStatus;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let payments = &state.payments;

    forms::render_form_heading(ui, "Payments", &theme);

    let mut user_id = payments.user_id_input.clone();
    ui.horizontal(|ui| {
        ui.label("User id");
        ui.add_sized([120.0, 28.0], egui::TextEdit::singleline(&mut user_id).hint_text("e.g. 7"));
        let can_refresh = payments.user_id.is_some() && !payments.data.is_loading() && !payments.is_mutating();
        if ui.add_enabled(can_refresh, egui::Button::new("Refresh")).clicked() {
            app.refresh_payments();
        }
    });
    if user_id != payments.user_id_input {
        app.handle_user_id_change(user_id);
    }

    if payments.user_id.is_none() {
        ui.add_space(8.0);
        forms::render_hint(ui, "Enter a user id to see payment methods and history.", &theme);
        return;
    }
    ui.add_space(10.0);

    match payments.data.status {
        LoadStatus::Loading => forms::render_loading(ui, "Loading payment information...", &theme),
        LoadStatus::Failed => {
            if let Some(err) = &payments.data.error {
                forms::render_error(ui, err, &theme);
            }
        }
        _ => {}
    }

    if let Some(feedback) = &payments.feedback {
        match feedback.kind {
            FeedbackKind::Success => forms::render_success(ui, &feedback.text, &theme),
            FeedbackKind::Error => forms::render_error(ui, &feedback.text, &theme),
        }
    }

    render_methods(ui, state, app, &theme);
    ui.add_space(16.0);
    render_history(ui, state, &theme);
}

fn render_methods(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let payments = &state.payments;
    ui.label(egui::RichText::new("Payment methods").size(17.0).strong());
    ui.add_space(4.0);

    if payments.data.is_ready() && payments.data.data.methods.is_empty() {
        forms::render_hint(ui, "No payment methods saved.", theme);
        return;
    }

    egui::Grid::new("payment_methods").num_columns(3).striped(true).spacing([20.0, 8.0]).show(ui, |ui| {
        for method in &payments.data.data.methods {
            ui.label(&method.brand);
            ui.label(egui::RichText::new(mask_card(&method.last4)).monospace());
            if method.is_default {
                ui.label(egui::RichText::new("Default").strong().color(theme.success));
            } else if ui
                .add_enabled(
                    !payments.is_mutating() && !payments.data.is_loading(),
                    egui::Button::new("Make default"),
                )
                .clicked()
            {
                app.handle_set_default(method.id);
            }
            ui.end_row();
        }
    });
}

fn render_history(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    let history = &state.payments.data.data.history;
    ui.label(egui::RichText::new("Payment history").size(17.0).strong());
    ui.add_space(4.0);

    if state.payments.data.is_ready() && history.is_empty() {
        forms::render_hint(ui, "No payments yet.", theme);
        return;
    }

    egui::Grid::new("payment_history").num_columns(4).striped(true).spacing([20.0, 8.0]).show(ui, |ui| {
        for record in history {
            ui.label(format!("Appointment #{}", record.appointment_id));
            ui.label(record.processed_at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string());
            ui.label(format!("{} {}", format_amount(record.amount), record.currency));
            ui.label(record.status.label());
            ui.end_row();
        }
    });
}
