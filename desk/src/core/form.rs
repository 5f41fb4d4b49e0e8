//! # Form Submission
//!
//! `Idle → Submitting → (Succeeded | Failed)`. While submitting, the trigger
//! control is disabled and a second submit is refused. Whatever the outcome
//! of the request, settling it leaves `Submitting`, which re-enables the
//! trigger. [`FormState::reset`] abandons an in-flight request so its late
//! response is dropped.

use crate::core::error::AppError;
use crate::core::messages::{describe, ErrorContext};
use crate::core::request::{RequestTicket, RequestTracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Outcome of settling a submission.
#[derive(Debug, PartialEq)]
pub enum Settled<T> {
    /// The response belonged to an abandoned request.
    Stale,
    Succeeded(T),
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub status: SubmitStatus,
    pub error: Option<String>,
    requests: RequestTracker,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.status != SubmitStatus::Submitting
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Enter `Submitting` and clear the previous error.
    ///
    /// Returns `None` if a submission is already in flight.
    pub fn begin(&mut self) -> Option<RequestTicket> {
        if self.is_submitting() {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        self.error = None;
        Some(self.requests.begin())
    }

    /// Record a client-side validation failure. No request was issued.
    pub fn reject(&mut self, message: impl Into<String>) {
        if !self.is_submitting() {
            self.status = SubmitStatus::Idle;
        }
        self.error = Some(message.into());
    }

    /// Apply the response of the request identified by `ticket`.
    pub fn settle<T>(
        &mut self,
        ticket: RequestTicket,
        result: Result<T, AppError>,
        context: ErrorContext,
    ) -> Settled<T> {
        if !self.requests.is_current(ticket) {
            tracing::debug!(ticket = ticket.id(), ?context, "Dropping response of abandoned submission");
            return Settled::Stale;
        }

        match result {
            Ok(value) => {
                self.status = SubmitStatus::Succeeded;
                self.error = None;
                Settled::Succeeded(value)
            }
            Err(err) => {
                tracing::warn!(error = %err, ?context, "Submission failed");
                self.status = SubmitStatus::Failed;
                self.error = Some(describe(&err, context));
                Settled::Failed
            }
        }
    }

    /// Back to `Idle`, clearing errors and abandoning any in-flight request.
    pub fn reset(&mut self) {
        self.requests.invalidate();
        self.status = SubmitStatus::Idle;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::messages::EMAIL_ALREADY_REGISTERED;

    #[test]
    fn test_second_submit_refused_while_in_flight() {
        let mut form = FormState::new();
        assert!(form.begin().is_some());
        assert!(!form.can_submit());
        assert!(form.begin().is_none());
    }

    #[test]
    fn test_failure_re_enables_and_sets_message() {
        let mut form = FormState::new();
        let ticket = form.begin().unwrap();

        let outcome: Settled<()> = form.settle(
            ticket,
            Err(AppError::Http { status: 409, body: None }),
            ErrorContext::Register,
        );

        assert_eq!(outcome, Settled::Failed);
        assert!(form.can_submit());
        assert_eq!(form.status, SubmitStatus::Failed);
        assert_eq!(form.error.as_deref(), Some(EMAIL_ALREADY_REGISTERED));
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut form = FormState::new();
        form.reject("Email is required");

        let ticket = form.begin().unwrap();
        assert_eq!(form.error, None);

        assert_eq!(form.settle(ticket, Ok(5), ErrorContext::Booking), Settled::Succeeded(5));
        assert_eq!(form.status, SubmitStatus::Succeeded);
        assert!(form.can_submit());
    }

    #[test]
    fn test_reset_drops_late_response() {
        let mut form = FormState::new();
        let ticket = form.begin().unwrap();
        form.reset();

        assert!(form.can_submit());
        assert_eq!(form.settle(ticket, Ok(()), ErrorContext::Login), Settled::Stale);
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_reject_keeps_form_enabled() {
        let mut form = FormState::new();
        form.reject("Please select a service first.");

        assert!(form.can_submit());
        assert_eq!(form.status, SubmitStatus::Idle);
        assert_eq!(form.error.as_deref(), Some("Please select a service first."));
    }
}
