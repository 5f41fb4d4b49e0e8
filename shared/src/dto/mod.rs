//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration and the authenticated user summary
//! - [`catalog`] - Bookable services and appointments
//! - [`payments`] - Saved payment methods and payment records
//! - [`error`] - Structured error bodies returned on 4xx/5xx
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /auth/login/
//! Content-Type: application/json
//!
//! { "email": "a@x.com", "password": "secret-pass" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "token": "t1", "user": { "id": 7, "name": "Ali", "email": "a@x.com" } }
//! ```

pub mod auth;
pub mod catalog;
pub mod error;
pub mod payments;

pub use auth::*;
pub use catalog::*;
pub use error::*;
pub use payments::*;
