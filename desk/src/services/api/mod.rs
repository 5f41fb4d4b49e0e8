//! # Backend API Client Module
//!
//! HTTP client for the appointments REST API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports and documentation
//! ├── client.rs    - ApiClient struct, request building, status handling
//! ├── session.rs   - Bearer token slot shared with the application
//! ├── auth.rs      - Login and registration
//! ├── catalog.rs   - Services and appointments
//! └── payments.rs  - Payment methods and history
//! ```

pub mod auth;
pub mod catalog;
pub mod client;
pub mod payments;
pub mod session;

pub use client::ApiClient;
pub use session::Session;
