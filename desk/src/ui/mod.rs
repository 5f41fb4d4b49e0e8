//! # GUI Rendering
//!
//! Immediate-mode rendering of the current screen. Each frame renders from a
//! snapshot of [`AppState`](crate::app::AppState); user actions go through
//! [`App`] handlers, plain field edits are written straight back to state.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, Screen};

/// Main render function - called every frame by eframe
pub fn render(ctx: &egui::Context, app: &mut App) {
    let state = match app.state.try_read() {
        Some(guard) => guard.clone(),
        // Lock is held elsewhere, skip this frame
        None => return,
    };

    // Tab cycles screens unless a text field has focus
    let no_focus = ctx.memory(|m| m.focused().is_none());
    if no_focus {
        if ctx.input(|i| i.key_pressed(egui::Key::Tab) && !i.modifiers.shift) {
            app.next_screen();
        } else if ctx.input(|i| i.key_pressed(egui::Key::Tab) && i.modifiers.shift) {
            app.previous_screen();
        }
    }

    egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
        widgets::nav_bar::render_nav_bar(ui, &state, app);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            ui.add_space(8.0);
            match state.current_screen {
                Screen::Auth => screens::auth::render(ui, &state, app),
                Screen::Services => screens::services::render(ui, &state, app),
                Screen::Booking => screens::booking::render(ui, &state, app),
                Screen::Payments => screens::payments::render(ui, &state, app),
            }
        });
    });
}
