use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("salesforce credentials not configured — set SALESLINE_SALESFORCE__* variables")]
    NotConfigured,

    #[error("token request failed: {0}")]
    TokenRequest(String),
}
