//! # Payment Handlers
//!
//! The user id that keys both payment collections, and the optimistic
//! set-default mutation.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::PaymentMethod;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Feedback, PendingDefault};
use crate::app::tasks;
use crate::core::Optimistic;
use crate::utils::validation::parse_user_id;

pub const DEFAULT_UPDATED: &str = "Default payment method updated.";
pub const METHODS_NOT_LOADED: &str = "Payment methods are not loaded yet.";
pub const UNKNOWN_METHOD: &str = "That payment method is not in the list.";

/// Flag exactly one method as default.
pub fn mark_default(methods: &mut [PaymentMethod], method_id: i64) {
    for method in methods.iter_mut() {
        method.is_default = method.id == method_id;
    }
}

/// Store the user id field. Returns whether the parsed id changed.
///
/// A changed id abandons in-flight reads and any pending set-default, and
/// empties the view.
pub(crate) fn apply_user_id(state: &mut AppState, input: String) -> bool {
    let parsed = parse_user_id(&input);
    state.payments.user_id_input = input;

    if parsed == state.payments.user_id {
        return false;
    }
    tracing::debug!(old = ?state.payments.user_id, new = ?parsed, "Payments user id changed");
    state.payments.reset_data();
    state.payments.user_id = parsed;
    true
}

/// Handle edits of the user id field
///
/// Internal handler function - use [`crate::app::App::handle_user_id_change`] instead.
pub(crate) fn handle_user_id_change(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, input: String) {
    let changed = apply_user_id(&mut state.write(), input);
    if changed {
        refresh(state, event_tx);
    }
}

/// Refetch both collections for the current user id.
///
/// Skipped while a set-default write is in flight, so the rollback snapshot
/// stays the collection the user saw.
pub(crate) fn refresh(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    if state.read().payments.is_mutating() {
        tracing::debug!("Payments refresh skipped, default change in flight");
        return;
    }
    tasks::payments::fetch_payments(state, event_tx);
}

/// Handle a "make default" click
///
/// Applies the change locally, then issues the write. Only one write may be
/// in flight; choosing the current default, or clicking while the collection
/// refreshes, is a no-op.
pub(crate) fn handle_set_default(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, method_id: i64) {
    let (ticket, user_id) = {
        let mut guard = state.write();
        let payments = &mut guard.payments;

        if payments.is_mutating() {
            tracing::debug!(method_id, "Set default ignored, another change in flight");
            return;
        }
        if payments.data.is_loading() {
            tracing::debug!(method_id, "Set default ignored, payment data refreshing");
            return;
        }

        let user_id = match payments.user_id {
            Some(user_id) if payments.data.is_ready() => user_id,
            _ => {
                payments.feedback = Some(Feedback::error(METHODS_NOT_LOADED));
                return;
            }
        };

        let Some(target) = payments.data.data.methods.iter().find(|m| m.id == method_id) else {
            payments.feedback = Some(Feedback::error(UNKNOWN_METHOD));
            return;
        };
        if target.is_default {
            return;
        }

        let snapshot = Optimistic::apply(&mut payments.data.data.methods, |methods| {
            mark_default(methods, method_id)
        });
        let ticket = payments.mutations.begin();
        payments.pending_default = Some(PendingDefault {
            ticket,
            method_id,
            snapshot,
        });
        payments.feedback = None;
        (ticket, user_id)
    };

    tasks::payments::set_default_method(&state, event_tx, ticket, user_id, method_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method(id: i64, is_default: bool) -> PaymentMethod {
        PaymentMethod {
            id,
            brand: "Visa".to_string(),
            last4: format!("000{id}"),
            is_default,
        }
    }

    #[test]
    fn test_mark_default_leaves_exactly_one() {
        let mut methods = vec![method(1, true), method(2, false), method(3, true)];
        mark_default(&mut methods, 2);

        let defaults: Vec<i64> = methods.iter().filter(|m| m.is_default).map(|m| m.id).collect();
        assert_eq!(defaults, vec![2]);
    }

    #[test]
    fn test_mark_default_unknown_id_clears_all() {
        let mut methods = vec![method(1, true)];
        mark_default(&mut methods, 9);
        assert!(methods.iter().all(|m| !m.is_default));
    }
}
