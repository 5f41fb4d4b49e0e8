//! # Booking Desk - Library Root
//!
//! A **native desktop GUI** for booking appointments and managing payment
//! methods against the booking REST API. This library crate holds all state
//! and logic; the binary (`main.rs`) only opens the window.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              booking-desk (this crate)                 │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI, native window     │
//! │  Tokio         - Async runtime for requests            │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!                          │ HTTP (JSON, bearer token)
//!                          ▼
//!                 ┌─────────────────┐
//!                 │  Booking API    │
//!                 └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: State, events, user action handlers and request tasks
//! - **config**: Environment configuration (`DeskConfig`)
//! - **core**: Errors, the `ApiService` trait and the view-state building
//!   blocks (`Remote`, `Optimistic`, `FormState`, request tickets)
//! - **debug**: Logging setup
//! - **services**: `api` (REST client and session) and `demo` (fixtures)
//! - **ui**: Screens and widgets
//! - **utils**: Input validation
//!
//! ## Screens
//!
//! Four screens with Tab navigation, each reachable by route path:
//! 1. **Auth** (`/auth`): login / register, account summary
//! 2. **Services** (`/services`, also `/`): the service catalog
//! 3. **Booking** (`/booking`): appointment form
//! 4. **Payments** (`/payments`): payment methods and history
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p booking-desk
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState, Screen};
pub use config::DeskConfig;
pub use core::{AppError, Result};
