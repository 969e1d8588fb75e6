//! # sl-auth
//!
//! Salesforce authentication for Salesline.
//!
//! Implements the OAuth2 client-credentials flow against the instance's
//! `/services/oauth2/token` endpoint (`reqwest` form POST). Tokens are opaque
//! session ids, not JWTs — there is nothing to decode, so staleness is
//! tracked by issue time against an assumed session lifetime.

mod error;
mod token;

pub use error::AuthError;
pub use token::{AccessToken, STALENESS_BUFFER_SECS};

use sl_config::SalesforceConfig;

/// Token response from the Salesforce OAuth endpoint.
#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    /// Salesforce echoes the instance URL; may differ from the configured one
    /// for MyDomain redirects.
    instance_url: Option<String>,
}

/// Authenticate with the client-credentials flow.
///
/// # Errors
///
/// Returns [`AuthError::NotConfigured`] if the Salesforce section is missing
/// required fields, or [`AuthError::TokenRequest`] with the upstream status
/// and body if the token endpoint rejects the request.
pub async fn authenticate(config: &SalesforceConfig) -> Result<AccessToken, AuthError> {
    if !config.is_configured() {
        return Err(AuthError::NotConfigured);
    }

    let client = reqwest::Client::new();
    let response = client
        .post(config.token_url())
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
        ])
        .send()
        .await
        .map_err(|e| AuthError::TokenRequest(format!("send: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AuthError::TokenRequest(format!(
            "token endpoint returned {status}: {body}"
        )));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| AuthError::TokenRequest(format!("parse token response: {e}")))?;

    let instance_url = token
        .instance_url
        .unwrap_or_else(|| config.instance_url.clone());

    tracing::debug!(%instance_url, "obtained salesforce access token");

    Ok(AccessToken::new(token.access_token, instance_url))
}
