use chrono::{DateTime, Utc};

/// Assumed session lifetime for a client-credentials token. Salesforce does
/// not return `expires_in` for this flow; the real lifetime is the connected
/// app's session timeout, commonly two hours.
const ASSUMED_LIFETIME_SECS: i64 = 2 * 60 * 60;

/// Re-authenticate this long before the assumed expiry.
pub const STALENESS_BUFFER_SECS: i64 = 60;

/// An opaque Salesforce access token plus the instance it belongs to.
#[derive(Debug, Clone)]
pub struct AccessToken {
    token: String,
    instance_url: String,
    issued_at: DateTime<Utc>,
}

impl AccessToken {
    #[must_use]
    pub fn new(token: String, instance_url: String) -> Self {
        Self {
            token,
            instance_url,
            issued_at: Utc::now(),
        }
    }

    /// The bearer token value.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.token
    }

    /// The instance URL this token is valid against.
    #[must_use]
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Whether the token should be refreshed before the next call.
    ///
    /// Returns `true` once the token's age is within `buffer_secs` of the
    /// assumed lifetime. Long-lived `serve` processes call this per request
    /// and re-authenticate instead of sending a dead token.
    #[must_use]
    pub fn is_stale(&self, buffer_secs: i64) -> bool {
        let age = Utc::now().signed_duration_since(self.issued_at).num_seconds();
        age >= ASSUMED_LIFETIME_SECS - buffer_secs
    }

    #[cfg(test)]
    fn with_issued_at(mut self, issued_at: DateTime<Utc>) -> Self {
        self.issued_at = issued_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token() -> AccessToken {
        AccessToken::new("00Dxx!fake".into(), "https://acme.my.salesforce.com".into())
    }

    #[test]
    fn fresh_token_is_not_stale() {
        assert!(!token().is_stale(STALENESS_BUFFER_SECS));
    }

    #[test]
    fn old_token_is_stale() {
        let old = token().with_issued_at(Utc::now() - Duration::hours(3));
        assert!(old.is_stale(STALENESS_BUFFER_SECS));
    }

    #[test]
    fn token_near_expiry_is_stale() {
        let near =
            token().with_issued_at(Utc::now() - Duration::seconds(ASSUMED_LIFETIME_SECS - 30));
        assert!(near.is_stale(STALENESS_BUFFER_SECS));
    }

    #[test]
    fn accessors_return_constructed_values() {
        let t = token();
        assert_eq!(t.secret(), "00Dxx!fake");
        assert_eq!(t.instance_url(), "https://acme.my.salesforce.com");
    }

    // Long-lived serve loops read the buffer through the crate root.
    #[test]
    fn staleness_buffer_is_exported_at_crate_root() {
        assert_eq!(crate::STALENESS_BUFFER_SECS, STALENESS_BUFFER_SECS);
    }
}
