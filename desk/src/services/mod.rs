//! # External Services
//!
//! Backends the desk can talk to. Both implement
//! [`ApiService`](crate::core::service::ApiService).
//!
//! - **[`api`]**: REST client with session token handling
//! - **[`demo`]**: In-memory fixtures, enabled only with `BOOKING_DEMO_DATA=1`

pub mod api;
pub mod demo;

pub use api::{ApiClient, Session};
pub use demo::DemoApi;
