//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the booking desk and the
//! appointments REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, registration and user summary DTOs
//!   - **[`dto::catalog`]**: Services and appointments
//!   - **[`dto::payments`]**: Payment methods and payment history
//!   - **[`dto::error`]**: Optional structured error bodies
//! - **[`utils`]**: Display helpers shared by every screen
//!
//! ## Wire Format
//!
//! - Field names are **camelCase** in JSON (`durationMinutes`, `isDefault`, ...)
//! - Status enums serialize to lowercase strings
//! - Optional request fields are omitted from JSON when `None`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::catalog::Service;
//!
//! let json = r#"{"id":1,"name":"Consult","description":"...","durationMinutes":30,"price":450000}"#;
//! let service: Service = serde_json::from_str(json).unwrap();
//! assert_eq!(service.duration_minutes, 30);
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
