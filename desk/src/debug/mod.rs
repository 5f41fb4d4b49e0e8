//! # Logging Infrastructure
//!
//! File-based structured logging for the booking desk.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `booking_desk=debug,info`)
//! - `BOOKING_LOG_DIR`: Log directory (default: `logs`)
//! - `BOOKING_LOG_STDERR`: Mirror log output to stderr (1=on, 0=off)

pub mod config;
pub mod logger;

#[cfg(test)]
pub(crate) mod capture;

pub use config::DebugConfig;
pub use logger::init as init_logger;

/// Initialize logging. Call once at application startup.
pub fn init() {
    init_logger();
}
