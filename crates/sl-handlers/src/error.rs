//! Handler error kinds and their HTTP status mapping.

use thiserror::Error;

use sl_sfdc::SfdcError;

/// Everything a handler can fail with. No kind triggers a retry; every
/// failure is reported synchronously in the response envelope.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Missing or invalid caller input — user-correctable.
    #[error("{0}")]
    Validation(String),

    /// A referenced CRM record does not exist.
    #[error("{entity_type} {id} not found")]
    NotFound { entity_type: String, id: String },

    /// The CRM call failed or returned malformed data. Surfaced as-is.
    #[error("{0}")]
    Upstream(String),
}

impl HandlerError {
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// The envelope status for this error kind.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound { .. } => 404,
            Self::Upstream(_) => 502,
        }
    }
}

impl From<SfdcError> for HandlerError {
    fn from(err: SfdcError) -> Self {
        Self::Upstream(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_per_kind() {
        assert_eq!(HandlerError::Validation("x".into()).status_code(), 400);
        assert_eq!(
            HandlerError::not_found("Opportunity", "006X").status_code(),
            404
        );
        assert_eq!(HandlerError::Upstream("boom".into()).status_code(), 502);
    }

    #[test]
    fn not_found_message_names_the_record() {
        let err = HandlerError::not_found("Opportunity", "006000000000001AAA");
        assert_eq!(err.to_string(), "Opportunity 006000000000001AAA not found");
    }
}
