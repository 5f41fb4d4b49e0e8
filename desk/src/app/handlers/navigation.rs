//! # Navigation Handlers
//!
//! Screen changes. Entering a screen refreshes the data it shows.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::app::tasks;

/// Handle screen change
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`] instead.
pub(crate) fn handle_screen_change(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, screen: Screen) {
    {
        let mut state = state.write();
        tracing::debug!(from = ?state.current_screen, to = ?screen, "Screen change");
        state.current_screen = screen;
    }
    activate(state, event_tx, screen);
}

/// Open the screen a route path names. Unknown paths are ignored.
pub(crate) fn handle_navigate(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, path: &str) {
    match Screen::from_path(path) {
        Some(screen) => handle_screen_change(state, event_tx, screen),
        None => tracing::warn!(path, "Unknown route"),
    }
}

/// Navigate to next screen in Tab order
pub(crate) fn next_screen(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let next = state.read().current_screen.next();
    handle_screen_change(state, event_tx, next);
}

/// Navigate to previous screen in Tab order
pub(crate) fn previous_screen(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let previous = state.read().current_screen.previous();
    handle_screen_change(state, event_tx, previous);
}

/// Run the fetches a screen needs when it becomes visible.
pub(crate) fn activate(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, screen: Screen) {
    match screen {
        Screen::Services | Screen::Booking => tasks::catalog::fetch_services(state, event_tx),
        Screen::Payments => super::payments::refresh(state, event_tx),
        Screen::Auth => {}
    }
}
