use std::collections::BTreeMap;

use serde::Serialize;

use crate::notify::NotificationKind;

/// Error taxonomy for every fallible operation in the crate.
///
/// Transport failures, non-success statuses, malformed payloads and rendering
/// failures are all recoverable: callers surface them as a single user-facing
/// notification and leave the page usable. Nothing here is retried
/// automatically.
#[derive(Debug, thiserror::Error, Serialize)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned status {status}")]
    Status { status: u16 },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Validation failed")]
    Validation(BTreeMap<String, String>),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Document generation failed: {0}")]
    Document(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Notification category shown to the user for this error.
    pub fn notification_kind(&self) -> NotificationKind {
        match self {
            ClientError::Network(_) => NotificationKind::Network,
            ClientError::Status { .. } => NotificationKind::Server,
            ClientError::NotFound(_) => NotificationKind::NotFound,
            ClientError::MalformedPayload(_) => NotificationKind::Server,
            ClientError::Validation(_) => NotificationKind::Validation,
            ClientError::Auth(_) => NotificationKind::Server,
            ClientError::Document(_) => NotificationKind::Document,
            ClientError::Config(_) => NotificationKind::Server,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            if status.as_u16() == 404 {
                return ClientError::NotFound(err.to_string());
            }
            return ClientError::Status {
                status: status.as_u16(),
            };
        }
        if err.is_decode() {
            return ClientError::MalformedPayload(err.to_string());
        }
        ClientError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::MalformedPayload(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_validation_kind() {
        let mut fields = BTreeMap::new();
        fields.insert("carrier".to_string(), "Carrier is required".to_string());
        let err = ClientError::Validation(fields);
        assert_eq!(err.notification_kind(), NotificationKind::Validation);
    }

    #[test]
    fn not_found_maps_to_not_found_kind() {
        let err = ClientError::NotFound("WR999".to_string());
        assert_eq!(err.notification_kind(), NotificationKind::NotFound);
    }
}
