//! # Booking Handlers

use std::sync::Arc;

use async_channel::Sender;
use chrono::Local;
use parking_lot::RwLock;
use shared::{AppointmentRequest, Service};

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks::spawn_request;
use crate::core::{describe, AppError, ErrorContext, Result};
use crate::utils::validation::{parse_booking_date, validate_time_slot};

pub const SELECT_SERVICE_FIRST: &str = "Please select a service first.";

/// Select (or clear) the service on the Services screen detail card.
pub(crate) fn handle_service_select(state: Arc<RwLock<AppState>>, service: Option<Service>) {
    let mut state = state.write();
    state.catalog.selected = service;
}

/// Select (or clear) the service being booked.
pub(crate) fn handle_booking_service_select(state: Arc<RwLock<AppState>>, service: Option<Service>) {
    let mut state = state.write();
    state.booking.selected = service;
    state.booking.form.error = None;
}

/// Validate the booking form and build the request body.
fn build_request(state: &AppState) -> Result<AppointmentRequest> {
    let booking = &state.booking;
    let service = booking
        .selected
        .as_ref()
        .ok_or_else(|| AppError::Validation(SELECT_SERVICE_FIRST.to_string()))?;

    let date = parse_booking_date(&booking.date, Local::now().date_naive())?;
    validate_time_slot(&booking.time_slot).into_result()?;

    Ok(AppointmentRequest {
        service_id: service.id,
        date,
        time_slot: booking.time_slot.clone(),
        notes: Some(booking.notes.trim().to_string()),
    })
}

/// Handle the booking submit button
///
/// Internal handler function - use [`crate::app::App::handle_booking_submit`] instead.
pub(crate) fn handle_booking_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let mut state = state.write();

    let request = match build_request(&state) {
        Ok(request) => request,
        Err(err) => {
            state.booking.form.reject(describe(&err, ErrorContext::Booking));
            return;
        }
    };

    let Some(ticket) = state.booking.form.begin() else {
        tracing::debug!("Booking submit ignored, request already in flight");
        return;
    };
    state.booking.last_booking = None;

    tracing::info!(
        ticket = ticket.id(),
        service_id = request.service_id,
        date = %request.date,
        time_slot = %request.time_slot,
        "Submitting booking"
    );
    let api = state.api.clone();
    spawn_request(
        &event_tx,
        move |result| AppEvent::AppointmentResult { ticket, result },
        async move { api.create_appointment(request).await },
    );
}
