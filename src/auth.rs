//! Session/identity gateway.
//!
//! Username/password authentication is fully delegated to a Cognito user
//! pool. No token is persisted and nothing is attached to subsequent gateway
//! calls; session continuity beyond the login page is out of scope.

use serde_json::{json, Value};
use tracing::instrument;

use crate::config::AppConfig;
use crate::errors::ClientError;

const AMZ_JSON: &str = "application/x-amz-json-1.1";
const INITIATE_AUTH_TARGET: &str = "AWSCognitoIdentityProviderService.InitiateAuth";

/// Outcome of a login attempt. `NewPasswordRequired` is reported but not
/// handled; the login page dead-ends with a fixed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated,
    NewPasswordRequired,
}

pub struct IdentityGateway {
    http: reqwest::Client,
    endpoint: String,
    client_id: String,
}

impl IdentityGateway {
    pub fn new(region: &str, client_id: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("https://cognito-idp.{}.amazonaws.com/", region),
            client_id: client_id.to_string(),
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(&cfg.cognito_region, &cfg.cognito_client_id)
    }

    /// Used by tests to point at a stub identity provider.
    #[doc(hidden)]
    pub fn with_endpoint(endpoint: &str, client_id: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            client_id: client_id.to_string(),
        }
    }

    /// Authenticates a username/password pair. Provider failures surface as
    /// `ClientError::Auth` with the provider's message.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthOutcome, ClientError> {
        let body = json!({
            "AuthFlow": "USER_PASSWORD_AUTH",
            "ClientId": self.client_id,
            "AuthParameters": {
                "USERNAME": username,
                "PASSWORD": password,
            },
        });

        let response = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", AMZ_JSON)
            .header("X-Amz-Target", INITIATE_AUTH_TARGET)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let payload: Value = response.json().await?;

        if !status.is_success() {
            let message = payload
                .get("message")
                .or_else(|| payload.get("Message"))
                .and_then(Value::as_str)
                .unwrap_or("Authentication failed")
                .to_string();
            return Err(ClientError::Auth(message));
        }

        if payload.get("ChallengeName").and_then(Value::as_str) == Some("NEW_PASSWORD_REQUIRED") {
            return Ok(AuthOutcome::NewPasswordRequired);
        }

        if payload.get("AuthenticationResult").is_some() {
            return Ok(AuthOutcome::Authenticated);
        }

        Err(ClientError::MalformedPayload(
            "identity provider response had neither a result nor a challenge".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;
    use wiremock::matchers::{header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn stubbed(response: ResponseTemplate) -> (MockServer, IdentityGateway) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("X-Amz-Target", INITIATE_AUTH_TARGET))
            .respond_with(response)
            .mount(&server)
            .await;
        let gateway = IdentityGateway::with_endpoint(&server.uri(), "client-id");
        (server, gateway)
    }

    #[tokio::test]
    async fn successful_login_authenticates() {
        let (_server, gateway) = stubbed(ResponseTemplate::new(200).set_body_json(json!({
            "AuthenticationResult": { "IdToken": "token" }
        })))
        .await;
        let outcome = gateway.login("user", "pass").await.unwrap();
        assert_eq!(outcome, AuthOutcome::Authenticated);
    }

    #[tokio::test]
    async fn provider_failure_surfaces_its_message() {
        let (_server, gateway) = stubbed(ResponseTemplate::new(400).set_body_json(json!({
            "__type": "NotAuthorizedException",
            "message": "Incorrect username or password."
        })))
        .await;
        let err = gateway.login("user", "wrong").await.unwrap_err();
        assert_matches!(err, ClientError::Auth(msg) if msg == "Incorrect username or password.");
    }

    #[tokio::test]
    async fn new_password_challenge_is_reported() {
        let (_server, gateway) = stubbed(ResponseTemplate::new(200).set_body_json(json!({
            "ChallengeName": "NEW_PASSWORD_REQUIRED",
            "Session": "opaque"
        })))
        .await;
        let outcome = gateway.login("user", "pass").await.unwrap();
        assert_eq!(outcome, AuthOutcome::NewPasswordRequired);
    }
}
