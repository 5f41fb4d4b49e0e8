//! # User-Facing Error Messages
//!
//! One classifier turns any [`AppError`] into the message a screen shows.
//! Priority, first match wins:
//!
//! 1. server `detail`
//! 2. server `message`
//! 3. first entry of server `errors`
//! 4. canned message for known status codes of the context
//! 5. generic message of the context
//!
//! Validation errors are produced locally and shown verbatim.

use crate::core::error::AppError;

pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";
pub const EMAIL_ALREADY_REGISTERED: &str = "This email is already registered.";

/// Which operation failed. Selects canned and fallback messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorContext {
    Login,
    Register,
    Booking,
    LoadServices,
    LoadPayments,
    SetDefault,
}

impl ErrorContext {
    /// Fallback when nothing more specific is known.
    pub fn generic_message(&self) -> &'static str {
        match self {
            ErrorContext::Login | ErrorContext::Register => {
                "The request failed. Please try again."
            }
            ErrorContext::Booking => "Booking the appointment failed. Please try again.",
            ErrorContext::LoadServices => "Unable to load the list of services.",
            ErrorContext::LoadPayments => "Unable to load payment information.",
            ErrorContext::SetDefault => "Changing the default payment method failed.",
        }
    }

    fn canned_for_status(&self, status: u16) -> Option<&'static str> {
        match (self, status) {
            (ErrorContext::Login, 400 | 401) => Some(INVALID_CREDENTIALS),
            (ErrorContext::Register, 409) => Some(EMAIL_ALREADY_REGISTERED),
            _ => None,
        }
    }
}

/// Message to display for `error` raised while performing `context`.
pub fn describe(error: &AppError, context: ErrorContext) -> String {
    if let AppError::Validation(message) = error {
        return message.clone();
    }

    if let Some(body) = error.body() {
        let structured = non_blank(body.detail.as_deref())
            .or_else(|| non_blank(body.message.as_deref()))
            .or_else(|| body.first_error());
        if let Some(message) = structured {
            return message.to_string();
        }
    }

    if let Some(canned) = error.status().and_then(|status| context.canned_for_status(status)) {
        return canned.to_string();
    }

    context.generic_message().to_string()
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}
