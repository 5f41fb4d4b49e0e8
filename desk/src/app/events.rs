//! # Application Events
//!
//! Results of background requests, delivered to the UI thread. Each carries
//! the ticket it was issued under so a superseded result can be dropped.

use shared::{Appointment, AuthResponse, Service};

use crate::app::state::PaymentsData;
use crate::core::{RequestTicket, Result};

/// Async task results sent to main thread
#[derive(Debug)]
pub enum AppEvent {
    /// Login or register completed
    AuthResult {
        ticket: RequestTicket,
        result: Result<AuthResponse>,
    },
    /// Service list received
    ServicesLoaded {
        ticket: RequestTicket,
        result: Result<Vec<Service>>,
    },
    /// Appointment created (the body is optional)
    AppointmentResult {
        ticket: RequestTicket,
        result: Result<Option<Appointment>>,
    },
    /// Payment methods and history received
    PaymentsLoaded {
        ticket: RequestTicket,
        result: Result<PaymentsData>,
    },
    /// Set-default write completed
    DefaultMethodResult {
        ticket: RequestTicket,
        method_id: i64,
        result: Result<()>,
    },
}

impl AppEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::AuthResult { .. } => "AuthResult",
            AppEvent::ServicesLoaded { .. } => "ServicesLoaded",
            AppEvent::AppointmentResult { .. } => "AppointmentResult",
            AppEvent::PaymentsLoaded { .. } => "PaymentsLoaded",
            AppEvent::DefaultMethodResult { .. } => "DefaultMethodResult",
        }
    }
}
