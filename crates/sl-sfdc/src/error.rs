use thiserror::Error;

#[derive(Debug, Error)]
pub enum SfdcError {
    /// Transport-level failure (connect, TLS, timeout).
    #[error("salesforce request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status. The body is Salesforce's error
    /// JSON, surfaced as-is.
    #[error("salesforce API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The response parsed but was missing an expected field.
    #[error("malformed salesforce response: missing {0}")]
    MissingField(&'static str),

    /// The response body could not be parsed as JSON.
    #[error("malformed salesforce response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn api_error_names_status_and_body() {
        let err = SfdcError::Api {
            status: 403,
            body: r#"[{"errorCode":"INVALID_SESSION_ID"}]"#.into(),
        };
        assert_eq!(
            err.to_string(),
            r#"salesforce API error 403: [{"errorCode":"INVALID_SESSION_ID"}]"#
        );
    }

    #[test]
    fn decode_error_names_the_parse_failure() {
        let err = SfdcError::Decode("expected value at line 1 column 1".into());
        assert_eq!(
            err.to_string(),
            "malformed salesforce response: expected value at line 1 column 1"
        );
    }
}
