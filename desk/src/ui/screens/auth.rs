//! # Authentication Screen
//!
//! Login and register forms, and the account summary once signed in.

use crate::app::{App, AppState, AuthMode};
use crate::core::SubmitStatus;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render authentication screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.columns(2, |columns| {
        columns[0].vertical(|ui| render_form(ui, state, app, &theme));
        columns[1].vertical(|ui| render_account(ui, state, app, &theme));
    });
}

fn render_form(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let auth = &state.auth;

    ui.horizontal(|ui| {
        for (mode, label) in [(AuthMode::Login, "Log in"), (AuthMode::Register, "Register")] {
            if ui.selectable_label(auth.mode == mode, label).clicked() {
                app.handle_auth_mode_switch(mode);
            }
        }
    });
    ui.add_space(10.0);

    let heading = match auth.mode {
        AuthMode::Login => "Log in to your account",
        AuthMode::Register => "Create an account",
    };
    forms::render_form_heading(ui, heading, theme);

    // Local copies for the text inputs, written back below
    let mut name = auth.name.clone();
    let mut email = auth.email.clone();
    let mut password = auth.password.clone();
    let mut submit = false;

    if auth.mode == AuthMode::Register {
        forms::render_text_input(ui, "Full name", &mut name, "Your name", false);
        ui.add_space(6.0);
    }
    forms::render_text_input(ui, "Email", &mut email, "you@example.com", false);
    ui.add_space(6.0);
    let password_response = forms::render_text_input(ui, "Password", &mut password, "At least 8 characters", true);
    if password_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        submit = true;
    }

    if name != auth.name || email != auth.email || password != auth.password {
        let mut state = app.state.write();
        state.auth.name = name;
        state.auth.email = email;
        state.auth.password = password;
    }

    ui.add_space(10.0);
    if let Some(err) = &auth.form.error {
        forms::render_error(ui, err, theme);
    }

    let label = match (auth.form.is_submitting(), auth.mode) {
        (true, _) => "Please wait...",
        (false, AuthMode::Login) => "Log in",
        (false, AuthMode::Register) => "Register",
    };
    if forms::render_button(ui, label, auth.form.can_submit(), theme).clicked() || (submit && auth.form.can_submit()) {
        app.handle_auth_submit();
    }
}

fn render_account(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let Some(user) = &state.current_user else {
        forms::render_hint(ui, "Sign in to book appointments and manage payments.", theme);
        return;
    };

    egui::Frame::group(ui.style()).show(ui, |ui| {
        forms::render_form_heading(ui, "Account summary", theme);
        if state.auth.form.status == SubmitStatus::Succeeded {
            forms::render_success(ui, "You are signed in.", theme);
        }
        egui::Grid::new("account_summary").num_columns(2).spacing([24.0, 6.0]).show(ui, |ui| {
            ui.label(egui::RichText::new("Name").color(theme.dim));
            ui.label(&user.name);
            ui.end_row();
            ui.label(egui::RichText::new("Email").color(theme.dim));
            ui.label(&user.email);
            ui.end_row();
            ui.label(egui::RichText::new("User id").color(theme.dim));
            ui.label(user.id.to_string());
            ui.end_row();
        });
        ui.add_space(10.0);
        if ui.button("Log out").clicked() {
            app.handle_logout();
        }
    });
}
