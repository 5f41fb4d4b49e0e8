//! # Navigation Bar
//!
//! Links to the four screens, the current route and the signed-in account.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;

pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.set_height(34.0);

        if ui.button("<").clicked() {
            app.previous_screen();
        }
        if ui.button(">").clicked() {
            app.next_screen();
        }
        ui.add_space(10.0);

        for screen in Screen::all() {
            let selected = state.current_screen == *screen;
            if ui.selectable_label(selected, screen.title()).clicked() && !selected {
                app.handle_screen_change(*screen);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            match &state.current_user {
                Some(user) => {
                    if ui.button("Log out").clicked() {
                        app.handle_logout();
                    }
                    ui.label(egui::RichText::new(&user.name).color(theme.normal));
                }
                None => {
                    ui.label(egui::RichText::new("Not signed in").color(theme.dim));
                }
            }
            ui.separator();
            ui.label(egui::RichText::new(state.current_screen.path()).monospace().color(theme.dim));
        });
    });
}
