//! Validation utilities for user input

use chrono::NaiveDate;

use crate::core::error::{AppError, Result};

/// First bookable time slot of the day
pub const FIRST_SLOT: &str = "09:00";
const FIRST_SLOT_MINUTES: u32 = 9 * 60;
const LAST_SLOT_MINUTES: u32 = 17 * 60 + 30;
const SLOT_STEP_MINUTES: u32 = 30;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into the crate error type, for chaining with `?`.
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(message) if !self.is_valid => Err(AppError::Validation(message)),
            _ => Ok(()),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let Some((local, domain)) = email.split_once('@') else {
        return ValidationResult::err("Invalid email format");
    };

    if local.is_empty() || domain.contains('@') {
        return ValidationResult::err("Invalid email format");
    }

    let dotted = domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty());
    if !dotted {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate a display name (register only)
pub fn validate_name(name: &str) -> ValidationResult {
    if name.trim().is_empty() {
        return ValidationResult::err("Name is required");
    }
    ValidationResult::ok()
}

/// Validate password length
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.chars().count() < 8 {
        return ValidationResult::err("Password must be at least 8 characters");
    }

    ValidationResult::ok()
}

/// Parse a `YYYY-MM-DD` booking date that is not before `today`.
pub fn parse_booking_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Enter the date as YYYY-MM-DD.".to_string()))?;

    if date < today {
        return Err(AppError::Validation("The date cannot be in the past.".to_string()));
    }
    Ok(date)
}

/// Bookable slots, 09:00 to 17:30 every 30 minutes.
pub fn time_slots() -> Vec<String> {
    (FIRST_SLOT_MINUTES..=LAST_SLOT_MINUTES)
        .step_by(SLOT_STEP_MINUTES as usize)
        .map(|m| format!("{:02}:{:02}", m / 60, m % 60))
        .collect()
}

pub fn validate_time_slot(slot: &str) -> ValidationResult {
    if slot.is_empty() {
        return ValidationResult::err("Please choose a time slot.");
    }
    if !time_slots().iter().any(|s| s == slot) {
        return ValidationResult::err("Please choose one of the offered time slots.");
    }
    ValidationResult::ok()
}

/// Parse the payments user id field. Anything but a positive integer is absent.
pub fn parse_user_id(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
