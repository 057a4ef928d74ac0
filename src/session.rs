use serde::{Deserialize, Serialize};

/// User roles. Employees see every client's data; clients see only their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Employee,
    Client,
}

/// Explicit session-scoped context: who is signed in and which client's data
/// the pages are showing. Passed by value to whatever needs it, never held in
/// a hidden global.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub username: String,
    pub role: Role,
    /// The client whose records are in view. Always set for the client role;
    /// employees pick one per page.
    pub current_client: Option<String>,
}

impl SessionContext {
    pub fn employee(username: &str) -> Self {
        Self {
            username: username.to_string(),
            role: Role::Employee,
            current_client: None,
        }
    }

    pub fn client(username: &str, client: &str) -> Self {
        Self {
            username: username.to_string(),
            role: Role::Client,
            current_client: Some(client.to_string()),
        }
    }

    pub fn with_client(mut self, client: &str) -> Self {
        self.current_client = Some(client.to_string());
        self
    }
}
