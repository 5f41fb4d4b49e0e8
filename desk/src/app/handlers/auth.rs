//! # Authentication Handlers
//!
//! Login, register, mode switching and logout.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::{LoginRequest, RegisterRequest};

use crate::app::events::AppEvent;
use crate::app::state::{AppState, AuthMode};
use crate::app::tasks::spawn_request;
use crate::utils::validation::{validate_email, validate_name, validate_password};

/// Handle the auth form submit button
///
/// Internal handler function - use [`crate::app::App::handle_auth_submit`] instead.
pub(crate) fn handle_auth_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let mut state = state.write();
    let mode = state.auth.mode;

    let mut checks = Vec::with_capacity(3);
    if mode == AuthMode::Register {
        checks.push(validate_name(&state.auth.name));
    }
    checks.push(validate_email(&state.auth.email));
    checks.push(validate_password(&state.auth.password));

    if let Some(message) = checks.into_iter().find_map(|check| check.error) {
        state.auth.form.reject(message);
        return;
    }

    let Some(ticket) = state.auth.form.begin() else {
        tracing::debug!("Auth submit ignored, request already in flight");
        return;
    };

    let api = state.api.clone();
    let email = state.auth.email.trim().to_string();
    let password = state.auth.password.clone();
    let wrap = move |result| AppEvent::AuthResult { ticket, result };

    match mode {
        AuthMode::Login => {
            tracing::info!(ticket = ticket.id(), "Submitting login");
            let request = LoginRequest { email, password };
            spawn_request(&event_tx, wrap, async move { api.login(request).await });
        }
        AuthMode::Register => {
            tracing::info!(ticket = ticket.id(), "Submitting registration");
            let request = RegisterRequest {
                name: state.auth.name.trim().to_string(),
                email,
                password,
            };
            spawn_request(&event_tx, wrap, async move { api.register(request).await });
        }
    }
}

/// Switch between login and register
///
/// Clears the fields and errors. A request still in flight for the old mode
/// is abandoned; its response, token included, is dropped.
pub(crate) fn handle_auth_mode_switch(state: Arc<RwLock<AppState>>, mode: AuthMode) {
    let mut state = state.write();
    if state.auth.mode == mode {
        return;
    }
    if state.auth.form.is_submitting() {
        tracing::info!(?mode, "Auth mode switched, abandoning in-flight request");
    }
    state.auth.reset(mode);
}

/// Forget the token and everything loaded for the signed-in user.
pub(crate) fn handle_logout(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.session.clear();
    state.current_user = None;
    state.auth.reset(AuthMode::Login);
    state.payments.reset_data();
    state.payments.user_id_input.clear();
    state.payments.user_id = None;
    tracing::info!("Logged out");
}
