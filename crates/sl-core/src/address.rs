//! Postal address struct and the human-readable rendering.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A billing or shipping address as stored on an Account.
///
/// Every component is optional — Salesforce does not require any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl Address {
    /// Render the address as a newline-joined block:
    ///
    /// ```text
    /// {street}
    /// {city}, {state}, {postal_code}
    /// {country}
    /// ```
    ///
    /// Blank components are skipped rather than rendered as empty slots.
    /// Returns `None` when every component is absent.
    #[must_use]
    pub fn formatted(&self) -> Option<String> {
        let mut lines = Vec::new();

        if let Some(street) = non_blank(self.street.as_deref()) {
            lines.push(street.to_string());
        }

        let locality: Vec<&str> = [
            self.city.as_deref(),
            self.state.as_deref(),
            self.postal_code.as_deref(),
        ]
        .into_iter()
        .filter_map(non_blank)
        .collect();
        if !locality.is_empty() {
            lines.push(locality.join(", "));
        }

        if let Some(country) = non_blank(self.country.as_deref()) {
            lines.push(country.to_string());
        }

        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
