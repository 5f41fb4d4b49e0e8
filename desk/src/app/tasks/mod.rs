//! # Async Tasks
//!
//! Spawning of background requests. Every request owns a [`Completion`], so
//! the UI thread always receives exactly one event per request: the real
//! result, or an abandonment error if the task died first.

pub mod catalog;
pub mod payments;

use std::future::Future;

use async_channel::Sender;

use crate::app::events::AppEvent;
use crate::core::{AppError, Result};

type Wrap<T> = Box<dyn FnOnce(Result<T>) -> AppEvent + Send>;

/// Delivers the result of one request to the event channel.
///
/// Dropping an unsent completion (task cancelled or panicked) delivers
/// `AppError::State` instead, which re-enables whatever control started it.
pub(crate) struct Completion<T> {
    event_tx: Sender<AppEvent>,
    wrap: Option<Wrap<T>>,
}

impl<T> Completion<T> {
    pub(crate) fn new(
        event_tx: Sender<AppEvent>,
        wrap: impl FnOnce(Result<T>) -> AppEvent + Send + 'static,
    ) -> Self {
        Self {
            event_tx,
            wrap: Some(Box::new(wrap)),
        }
    }

    pub(crate) async fn send(mut self, result: Result<T>) {
        if let Some(wrap) = self.wrap.take() {
            if self.event_tx.send(wrap(result)).await.is_err() {
                tracing::debug!("Event channel closed, dropping request result");
            }
        }
    }
}

impl<T> Drop for Completion<T> {
    fn drop(&mut self) {
        if let Some(wrap) = self.wrap.take() {
            tracing::warn!("Request task ended without a result");
            let event = wrap(Err(AppError::State("request abandoned before completion".to_string())));
            if self.event_tx.try_send(event).is_err() {
                tracing::debug!("Event channel closed, dropping abandonment result");
            }
        }
    }
}

/// Run `request` on the runtime and deliver its result through `wrap`.
pub(crate) fn spawn_request<T, F, W>(event_tx: &Sender<AppEvent>, wrap: W, request: F)
where
    T: Send + 'static,
    F: Future<Output = Result<T>> + Send + 'static,
    W: FnOnce(Result<T>) -> AppEvent + Send + 'static,
{
    let completion = Completion::new(event_tx.clone(), wrap);
    tokio::spawn(async move {
        let result = request.await;
        completion.send(result).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RequestTracker;
    use crate::debug::capture::capture;

    #[tokio::test]
    async fn test_result_is_delivered_once() {
        let (tx, rx) = async_channel::unbounded();
        let ticket = RequestTracker::new().begin();

        spawn_request(&tx, move |result| AppEvent::ServicesLoaded { ticket, result }, async {
            Ok(Vec::new())
        });

        match rx.recv().await.unwrap() {
            AppEvent::ServicesLoaded { result, .. } => assert_eq!(result, Ok(Vec::new())),
            other => panic!("unexpected event {}", other.name()),
        }
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_panicking_task_still_completes() {
        let (tx, rx) = async_channel::unbounded();
        let ticket = RequestTracker::new().begin();

        spawn_request(
            &tx,
            move |result| AppEvent::DefaultMethodResult { ticket, method_id: 2, result },
            async {
                if true {
                    panic!("request task failed");
                }
                Ok(())
            },
        );

        match rx.recv().await.unwrap() {
            AppEvent::DefaultMethodResult { result, method_id, .. } => {
                assert_eq!(method_id, 2);
                assert!(matches!(result, Err(AppError::State(_))));
            }
            other => panic!("unexpected event {}", other.name()),
        }
    }

    #[test]
    fn test_abandoned_completion_on_closed_channel_is_logged() {
        let (tx, rx) = async_channel::unbounded();
        drop(rx);
        let ticket = RequestTracker::new().begin();
        let (logs, _guard) = capture();

        drop(Completion::new(tx, move |result| AppEvent::ServicesLoaded { ticket, result }));

        let logs = logs.contents();
        assert!(logs.contains("Request task ended without a result"), "{logs}");
        assert!(logs.contains("Event channel closed, dropping abandonment result"), "{logs}");
    }
}
