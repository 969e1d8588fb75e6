//! # sl-handlers
//!
//! The six Salesline request/response handlers. Each one is a stateless
//! async function from a JSON request to a typed response: it validates its
//! input, issues one or a few calls through [`sl_sfdc::CrmGateway`], and
//! reshapes the result. No handler depends on another, and no state survives
//! between invocations.
//!
//! [`envelope::Envelope`] maps a handler result into the
//! `{"statusCode": .., "body": ..}` contract shared by the HTTP server and
//! the CLI.

pub mod address;
pub mod contact;
pub mod currency;
pub mod details;
pub mod envelope;
pub mod error;
mod links;
pub mod renewal;
pub mod stage;

pub use envelope::Envelope;
pub use error::HandlerError;

/// Reject a blank or missing `opportunity_id` before touching the CRM.
fn require_opportunity_id(opportunity_id: &str) -> Result<(), HandlerError> {
    if opportunity_id.is_empty() {
        return Err(HandlerError::Validation(
            "opportunity_id is required".into(),
        ));
    }
    Ok(())
}
