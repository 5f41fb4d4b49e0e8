//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the egui rendering layer, background
//! requests and application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  App                                                        │
//! │  - on_tick()       drains request results every frame       │
//! │  - handle_*()      user actions, delegated to handlers      │
//! │  State: Arc<RwLock<AppState>>, locks held briefly           │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Request Tasks (Tokio)                          │
//! │  one task per request, result wrapped in an AppEvent        │
//! │  carrying the RequestTicket it was issued under             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Results are applied in [`event_handler`] only if their ticket is still
//! the latest for its slot, so a slow, superseded response never overwrites
//! a newer one.

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use handlers::booking::SELECT_SERVICE_FIRST;
pub use handlers::payments::{mark_default, DEFAULT_UPDATED, METHODS_NOT_LOADED, UNKNOWN_METHOD};
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::Service;

use crate::config::DeskConfig;
use crate::core::ApiService;
use crate::services::{ApiClient, DemoApi, Session};

/// Main application orchestrator.
///
/// Must be created inside a Tokio runtime: handlers spawn request tasks.
pub struct App {
    /// Shared application state. Hold locks for the shortest possible time.
    pub state: Arc<RwLock<AppState>>,

    /// Receives request results; polled in [`App::on_tick`].
    pub event_rx: Receiver<AppEvent>,

    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the application for `config` and start loading the initial screen.
    pub fn new(config: &DeskConfig) -> Self {
        let session = Session::new();
        let api: Arc<dyn ApiService> = if config.demo_data {
            tracing::warn!("Demo data enabled, no requests will reach the backend");
            Arc::new(DemoApi::new())
        } else {
            tracing::info!(base_url = %config.api_base_url, "Using REST backend");
            Arc::new(ApiClient::new(config, session.clone()))
        };

        let app = Self::with_api(api, session);
        let screen = app.state.read().current_screen;
        handlers::navigation::activate(app.state.clone(), app.event_tx.clone(), screen);
        app
    }

    /// Create the application around an existing API and session, without
    /// issuing any request.
    pub fn with_api(api: Arc<dyn ApiService>, session: Session) -> Self {
        let (event_tx, event_rx) = unbounded();
        Self {
            state: Arc::new(RwLock::new(AppState::new(api, session))),
            event_rx,
            event_tx,
        }
    }

    /// Called every frame: applies all pending request results.
    pub fn on_tick(&mut self) {
        let mut processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }
        if processed > 0 {
            tracing::trace!(processed, "on_tick: processed events");
        }
    }

    /// Whether any request is in flight, to keep the UI repainting.
    pub fn is_busy(&self) -> bool {
        let state = self.state.read();
        state.auth.form.is_submitting()
            || state.booking.form.is_submitting()
            || state.catalog.services.is_loading()
            || state.payments.data.is_loading()
            || state.payments.is_mutating()
    }

    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    // ========== Navigation ==========

    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), self.event_tx.clone(), screen);
    }

    /// Open the screen for a route path such as `/payments`.
    pub fn navigate(&mut self, path: &str) {
        handlers::navigation::handle_navigate(self.state.clone(), self.event_tx.clone(), path);
    }

    /// Navigate to next screen in Tab order
    pub fn next_screen(&mut self) {
        handlers::navigation::next_screen(self.state.clone(), self.event_tx.clone());
    }

    /// Navigate to previous screen in Tab order
    pub fn previous_screen(&mut self) {
        handlers::navigation::previous_screen(self.state.clone(), self.event_tx.clone());
    }

    // ========== Auth ==========

    pub fn handle_auth_submit(&mut self) {
        handlers::auth::handle_auth_submit(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_auth_mode_switch(&mut self, mode: AuthMode) {
        handlers::auth::handle_auth_mode_switch(self.state.clone(), mode);
    }

    pub fn handle_logout(&mut self) {
        handlers::auth::handle_logout(self.state.clone());
    }

    // ========== Services & booking ==========

    pub fn refresh_services(&mut self) {
        tasks::catalog::fetch_services(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_service_select(&mut self, service: Option<Service>) {
        handlers::booking::handle_service_select(self.state.clone(), service);
    }

    /// Open the booking screen with `service` preselected.
    pub fn handle_book_service(&mut self, service: Service) {
        handlers::booking::handle_booking_service_select(self.state.clone(), Some(service));
        self.handle_screen_change(Screen::Booking);
    }

    pub fn handle_booking_service_select(&mut self, service: Option<Service>) {
        handlers::booking::handle_booking_service_select(self.state.clone(), service);
    }

    pub fn handle_booking_submit(&mut self) {
        handlers::booking::handle_booking_submit(self.state.clone(), self.event_tx.clone());
    }

    // ========== Payments ==========

    pub fn handle_user_id_change(&mut self, input: String) {
        handlers::payments::handle_user_id_change(self.state.clone(), self.event_tx.clone(), input);
    }

    pub fn refresh_payments(&mut self) {
        handlers::payments::refresh(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_set_default(&mut self, method_id: i64) {
        handlers::payments::handle_set_default(self.state.clone(), self.event_tx.clone(), method_id);
    }
}
