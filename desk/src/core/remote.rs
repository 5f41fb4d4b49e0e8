//! # Remote Data Slots
//!
//! [`Remote<T>`] holds one piece of server data together with its loading
//! status. Activating the slot moves it to `Loading`; the matching response
//! either replaces the data (`Ready`) or empties it and records a message
//! (`Failed`). Responses for superseded requests are ignored.

use crate::core::error::AppError;
use crate::core::messages::{describe, ErrorContext};
use crate::core::request::{RequestTicket, RequestTracker};

/// Loading status of a [`Remote`] slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing requested yet (or the slot was reset)
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct Remote<T> {
    pub data: T,
    pub status: LoadStatus,
    pub error: Option<String>,
    requests: RequestTracker,
}

impl<T: Default> Remote<T> {
    pub fn new() -> Self {
        Self {
            data: T::default(),
            status: LoadStatus::Idle,
            error: None,
            requests: RequestTracker::new(),
        }
    }

    /// Start a (re)fetch. Previous data stays visible until the response lands.
    pub fn begin(&mut self) -> RequestTicket {
        self.status = LoadStatus::Loading;
        self.error = None;
        self.requests.begin()
    }

    /// Apply a response. Returns `false` if the response was stale and dropped.
    pub fn settle(
        &mut self,
        ticket: RequestTicket,
        result: Result<T, AppError>,
        context: ErrorContext,
    ) -> bool {
        if !self.requests.is_current(ticket) {
            tracing::debug!(ticket = ticket.id(), ?context, "Dropping superseded response");
            return false;
        }

        match result {
            Ok(data) => {
                self.data = data;
                self.status = LoadStatus::Ready;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, ?context, "Fetch failed");
                self.data = T::default();
                self.status = LoadStatus::Failed;
                self.error = Some(describe(&err, context));
            }
        }
        true
    }

    /// Drop data and abandon any in-flight request.
    pub fn reset(&mut self) {
        self.requests.invalidate();
        self.data = T::default();
        self.status = LoadStatus::Idle;
        self.error = None;
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn is_ready(&self) -> bool {
        self.status == LoadStatus::Ready
    }
}
