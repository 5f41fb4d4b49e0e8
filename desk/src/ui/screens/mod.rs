//! # Screens
//!
//! One module per route: `/auth`, `/services`, `/booking`, `/payments`.

pub mod auth;
pub mod booking;
pub mod payments;
pub mod services;
