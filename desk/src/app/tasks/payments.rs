//! # Payment Tasks
//!
//! Reads of the methods and history collections, and the set-default write.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use super::spawn_request;
use crate::app::events::AppEvent;
use crate::app::state::{AppState, PaymentsData};
use crate::core::RequestTicket;

/// Fetch both payment collections for the current user id.
///
/// Does nothing while no user id is set.
pub(crate) fn fetch_payments(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (ticket, user_id, api) = {
        let mut state = state.write();
        let Some(user_id) = state.payments.user_id else {
            return;
        };
        (state.payments.data.begin(), user_id, state.api.clone())
    };

    tracing::debug!(ticket = ticket.id(), user_id, "Fetching payment data");
    spawn_request(
        &event_tx,
        move |result| AppEvent::PaymentsLoaded { ticket, result },
        async move {
            let (methods, history) =
                tokio::try_join!(api.payment_methods(user_id), api.payment_history(user_id))?;
            Ok(PaymentsData { methods, history })
        },
    );
}

/// Issue the set-default write. The optimistic update is already applied.
pub(crate) fn set_default_method(
    state: &Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    ticket: RequestTicket,
    user_id: i64,
    method_id: i64,
) {
    let api = state.read().api.clone();

    tracing::info!(ticket = ticket.id(), user_id, method_id, "Setting default payment method");
    spawn_request(
        &event_tx,
        move |result| AppEvent::DefaultMethodResult { ticket, method_id, result },
        async move { api.set_default_payment_method(user_id, method_id).await },
    );
}
