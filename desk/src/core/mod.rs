//! # Core Abstractions
//!
//! Error types, the backend service trait and the view-state building blocks
//! every screen is made of.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`service`]**: Backend trait for dependency injection (`ApiService`)
//! - **[`request`]**: Request generations so stale responses are dropped
//! - **[`remote`]**: Fetched data with loading status (`Remote<T>`)
//! - **[`optimistic`]**: Snapshot / apply / rollback (`Optimistic<T>`)
//! - **[`form`]**: Submission state machine (`FormState`)
//! - **[`messages`]**: The single error-to-message classifier
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use booking_desk::core::ApiService;
//!
//! // In production: the REST client
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(&config, session.clone()));
//!
//! // In tests: any mock implementation
//! let api: Arc<dyn ApiService> = Arc::new(MockApi::default());
//! ```

pub mod error;
pub mod form;
pub mod messages;
pub mod optimistic;
pub mod remote;
pub mod request;
pub mod service;

pub use error::{AppError, Result};
pub use form::{FormState, Settled, SubmitStatus};
pub use messages::{describe, ErrorContext};
pub use optimistic::Optimistic;
pub use remote::{LoadStatus, Remote};
pub use request::{RequestTicket, RequestTracker};
pub use service::ApiService;
