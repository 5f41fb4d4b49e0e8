//! # Services Screen
//!
//! The service catalog with a detail card for the selected entry.

use shared::{format_amount, Service};

use crate::app::{App, AppState};
use crate::core::LoadStatus;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let services = &state.catalog.services;

    ui.horizontal(|ui| {
        forms::render_form_heading(ui, "Our services", &theme);
        if ui.add_enabled(!services.is_loading(), egui::Button::new("Refresh")).clicked() {
            app.refresh_services();
        }
    });

    match services.status {
        LoadStatus::Loading if services.data.is_empty() => {
            forms::render_loading(ui, "Loading services...", &theme);
            return;
        }
        LoadStatus::Failed => {
            if let Some(err) = &services.error {
                forms::render_error(ui, err, &theme);
            }
        }
        LoadStatus::Ready if services.data.is_empty() => {
            forms::render_hint(ui, "No services are offered at the moment.", &theme);
        }
        _ => {}
    }

    egui::Grid::new("services_grid")
        .num_columns(4)
        .striped(true)
        .spacing([20.0, 8.0])
        .show(ui, |ui| {
            for service in &services.data {
                let selected = state.catalog.selected.as_ref().is_some_and(|s| s.id == service.id);
                if ui.selectable_label(selected, egui::RichText::new(&service.name).strong()).clicked() {
                    let next = if selected { None } else { Some(service.clone()) };
                    app.handle_service_select(next);
                }
                ui.label(format!("{} min", service.duration_minutes));
                ui.label(format!("{} IRT", format_amount(service.price)));
                if ui.button("Book").clicked() {
                    app.handle_book_service(service.clone());
                }
                ui.end_row();
            }
        });

    if let Some(service) = &state.catalog.selected {
        ui.add_space(14.0);
        render_detail(ui, service, app, &theme);
    }
}

fn render_detail(ui: &mut egui::Ui, service: &Service, app: &mut App, theme: &Theme) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(egui::RichText::new(&service.name).size(18.0).strong().color(theme.selected));
        ui.add_space(4.0);
        ui.label(&service.description);
        ui.add_space(6.0);
        ui.label(format!(
            "Duration: {} minutes    Price: {} IRT",
            service.duration_minutes,
            format_amount(service.price)
        ));
        ui.add_space(8.0);
        if ui.button("Book this service").clicked() {
            app.handle_book_service(service.clone());
        }
    });
}
