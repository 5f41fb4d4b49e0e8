//! # Utility Functions
//!
//! - **[`validation`]**: client-side checks run before any request is issued
//!
//! Display formatting (amounts, card numbers) lives in [`shared::utils`].

pub mod validation;
