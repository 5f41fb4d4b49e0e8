//! # Catalog Tasks

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use super::spawn_request;
use crate::app::events::AppEvent;
use crate::app::state::AppState;

/// (Re)fetch the service list. A newer fetch supersedes any in flight.
pub(crate) fn fetch_services(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (ticket, api) = {
        let mut state = state.write();
        (state.catalog.services.begin(), state.api.clone())
    };

    tracing::debug!(ticket = ticket.id(), "Fetching services");
    spawn_request(
        &event_tx,
        move |result| AppEvent::ServicesLoaded { ticket, result },
        async move { api.list_services().await },
    );
}
