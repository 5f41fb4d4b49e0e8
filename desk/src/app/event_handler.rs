//! # Event Handler
//!
//! Applies background request results to application state. Every result
//! is checked against the ticket of the latest request for its slot first;
//! superseded and abandoned results change nothing.

use shared::{Appointment, AuthResponse, Service};

use crate::app::events::AppEvent;
use crate::app::handlers::payments::{apply_user_id, mark_default, DEFAULT_UPDATED};
use crate::app::state::{AuthMode, Feedback, PaymentsData, Screen};
use crate::app::App;
use crate::core::{describe, ErrorContext, LoadStatus, RequestTicket, Result, Settled};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Acquires the write lock per event, for the duration of the update only.
    fn handle_event_impl(&mut self, event: AppEvent) {
        tracing::trace!(event = event.name(), "Handling event");

        match event {
            AppEvent::AuthResult { ticket, result } => self.handle_auth_result(ticket, result),
            AppEvent::ServicesLoaded { ticket, result } => self.handle_services_loaded(ticket, result),
            AppEvent::AppointmentResult { ticket, result } => self.handle_appointment_result(ticket, result),
            AppEvent::PaymentsLoaded { ticket, result } => self.handle_payments_loaded(ticket, result),
            AppEvent::DefaultMethodResult {
                ticket,
                method_id,
                result,
            } => self.handle_default_method_result(ticket, method_id, result),
        }
    }
}

fn still_offered(services: &[Service], selected: Option<&Service>) -> Option<Service> {
    let selected = selected?;
    services.iter().find(|s| s.id == selected.id).cloned()
}

impl App {
    fn handle_auth_result(&mut self, ticket: RequestTicket, result: Result<AuthResponse>) {
        let mut state = self.state.write();
        let context = match state.auth.mode {
            AuthMode::Login => ErrorContext::Login,
            AuthMode::Register => ErrorContext::Register,
        };

        let Settled::Succeeded(auth) = state.auth.form.settle(ticket, result, context) else {
            return;
        };

        tracing::info!(user_id = auth.user.id, "Authenticated");
        state.session.set_token(auth.token);
        state.auth.password.clear();

        let prefill = state.payments.user_id_input.trim().is_empty();
        let user_id = auth.user.id;
        state.current_user = Some(auth.user);

        if prefill && apply_user_id(&mut state, user_id.to_string()) && state.current_screen == Screen::Payments {
            drop(state);
            crate::app::handlers::payments::refresh(self.state.clone(), self.event_tx.clone());
        }
    }

    fn handle_services_loaded(&mut self, ticket: RequestTicket, result: Result<Vec<Service>>) {
        let mut state = self.state.write();
        if !state.catalog.services.settle(ticket, result, ErrorContext::LoadServices) {
            return;
        }

        // A failed refetch says nothing about what is offered.
        if state.catalog.services.status == LoadStatus::Failed {
            return;
        }

        // Selections must refer to services still offered.
        let catalog_selected = still_offered(&state.catalog.services.data, state.catalog.selected.as_ref());
        let booking_selected = still_offered(&state.catalog.services.data, state.booking.selected.as_ref());
        state.catalog.selected = catalog_selected;
        state.booking.selected = booking_selected;

        tracing::debug!(count = state.catalog.services.data.len(), "Services updated");
    }

    fn handle_appointment_result(&mut self, ticket: RequestTicket, result: Result<Option<Appointment>>) {
        let mut state = self.state.write();
        if let Settled::Succeeded(appointment) = state.booking.form.settle(ticket, result, ErrorContext::Booking) {
            tracing::info!(appointment_id = ?appointment.as_ref().map(|a| a.id), "Appointment booked");
            state.booking.notes.clear();
            state.booking.last_booking = appointment;
        }
    }

    fn handle_payments_loaded(&mut self, ticket: RequestTicket, result: Result<PaymentsData>) {
        let mut state = self.state.write();
        if state.payments.data.settle(ticket, result, ErrorContext::LoadPayments) {
            tracing::debug!(
                methods = state.payments.data.data.methods.len(),
                history = state.payments.data.data.history.len(),
                "Payment data updated"
            );
        }
    }

    fn handle_default_method_result(&mut self, ticket: RequestTicket, method_id: i64, result: Result<()>) {
        let mut state = self.state.write();
        let payments = &mut state.payments;

        if !payments.mutations.is_current(ticket) {
            tracing::debug!(ticket = ticket.id(), method_id, "Dropping result of abandoned default change");
            return;
        }
        let Some(pending) = payments.pending_default.take() else {
            return;
        };

        match result {
            Ok(()) => {
                pending.snapshot.commit();
                mark_default(&mut payments.data.data.methods, method_id);
                payments.feedback = Some(Feedback::success(DEFAULT_UPDATED));
                tracing::info!(method_id, "Default payment method updated");
            }
            Err(err) => {
                tracing::warn!(error = %err, method_id, "Default change failed, rolling back");
                pending.snapshot.rollback(&mut payments.data.data.methods);
                payments.feedback = Some(Feedback::error(describe(&err, ErrorContext::SetDefault)));
            }
        }
    }
}
