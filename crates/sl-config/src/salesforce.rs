//! Salesforce connected-app configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SalesforceConfig {
    /// Instance URL, e.g. `https://acme.my.salesforce.com`.
    #[serde(default)]
    pub instance_url: String,

    /// Connected-app consumer key for the client-credentials flow.
    #[serde(default)]
    pub client_id: String,

    /// Connected-app consumer secret.
    #[serde(default)]
    pub client_secret: String,

    /// REST API version path segment.
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

fn default_api_version() -> String {
    "v59.0".to_string()
}

impl Default for SalesforceConfig {
    fn default() -> Self {
        Self {
            instance_url: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            api_version: default_api_version(),
        }
    }
}

impl SalesforceConfig {
    /// Check if the Salesforce config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.instance_url.is_empty()
            && !self.client_id.is_empty()
            && !self.client_secret.is_empty()
    }

    /// The OAuth token endpoint for this instance.
    #[must_use]
    pub fn token_url(&self) -> String {
        format!("{}/services/oauth2/token", self.instance_url)
    }
}
