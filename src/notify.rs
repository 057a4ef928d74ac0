use std::sync::Mutex;

use serde::Serialize;
use tracing::{error, warn};

/// Categories for user-facing notifications. The original pages emitted ad hoc
/// toast copy per call site; every surface now reports through this one
/// interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationKind {
    Network,
    Validation,
    NotFound,
    Server,
    Document,
}

/// Sink for user-facing notifications. Pages report exactly one notification
/// per failed action.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// Notifier that forwards to the tracing subscriber.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Validation | NotificationKind::NotFound => {
                warn!(?kind, %message, "user notification");
            }
            _ => {
                error!(?kind, %message, "user notification");
            }
        }
    }
}

/// Test notifier that records every notification it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<(NotificationKind, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(NotificationKind, String)> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        if let Ok(mut events) = self.events.lock() {
            events.push((kind, message.to_string()));
        }
    }
}
