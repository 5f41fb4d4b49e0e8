//! # Event Handlers
//!
//! User action handlers, one module per screen.

pub mod auth;
pub mod booking;
pub mod navigation;
pub mod payments;
