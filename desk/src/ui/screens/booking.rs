//! # Booking Screen

use shared::Service;

use crate::app::{App, AppState};
use crate::core::SubmitStatus;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::utils::validation::time_slots;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let booking = &state.booking;
    let services = &state.catalog.services;

    forms::render_form_heading(ui, "Book an appointment", &theme);

    if let Some(err) = &services.error {
        forms::render_error(ui, err, &theme);
    }

    // Service
    ui.label("Service");
    let mut selected: Option<Service> = booking.selected.clone();
    egui::ComboBox::from_id_salt("booking_service")
        .width(forms::FIELD_WIDTH)
        .selected_text(selected.as_ref().map_or("Choose a service", |s| s.name.as_str()))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, None, "None");
            for service in &services.data {
                ui.selectable_value(&mut selected, Some(service.clone()), &service.name);
            }
        });
    if selected != booking.selected {
        app.handle_booking_service_select(selected);
    }
    if services.is_loading() {
        forms::render_loading(ui, "Loading services...", &theme);
    }
    ui.add_space(6.0);

    let mut date = booking.date.clone();
    let mut time_slot = booking.time_slot.clone();
    let mut notes = booking.notes.clone();

    forms::render_text_input(ui, "Date", &mut date, "YYYY-MM-DD", false);
    ui.add_space(6.0);

    ui.label("Time");
    egui::ComboBox::from_id_salt("booking_slot")
        .width(forms::FIELD_WIDTH)
        .selected_text(time_slot.clone())
        .show_ui(ui, |ui| {
            for slot in time_slots() {
                ui.selectable_value(&mut time_slot, slot.clone(), slot);
            }
        });
    ui.add_space(6.0);

    ui.label("Notes");
    ui.add_sized(
        [forms::FIELD_WIDTH, 70.0],
        egui::TextEdit::multiline(&mut notes).hint_text("Anything we should know (optional)"),
    );

    if date != booking.date || time_slot != booking.time_slot || notes != booking.notes {
        let mut state = app.state.write();
        state.booking.date = date;
        state.booking.time_slot = time_slot;
        state.booking.notes = notes;
    }

    ui.add_space(10.0);
    if let Some(service) = &booking.selected {
        forms::render_hint(
            ui,
            &format!(
                "{} ({} minutes) on {} at {}",
                service.name, service.duration_minutes, booking.date, booking.time_slot
            ),
            &theme,
        );
        ui.add_space(6.0);
    }

    if let Some(err) = &booking.form.error {
        forms::render_error(ui, err, &theme);
    }
    if booking.form.status == SubmitStatus::Succeeded {
        let message = match &booking.last_booking {
            Some(appointment) => format!(
                "Your appointment was booked (reference #{}, {:?}).",
                appointment.id, appointment.status
            ),
            None => "Your appointment was booked.".to_string(),
        };
        forms::render_success(ui, &message, &theme);
    }

    let label = if booking.form.is_submitting() { "Booking..." } else { "Book" };
    if forms::render_button(ui, label, booking.form.can_submit(), &theme).clicked() {
        app.handle_booking_submit();
    }
}
