use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Statuses that count as a signed quote when reconciling renewal amounts.
pub const SIGNED_QUOTE_STATUSES: [&str; 3] = ["Accepted", "Signed", "Approved"];

/// A CPQ quote linked to an opportunity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Quote {
    #[serde(rename = "Id")]
    pub id: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "SBQQ__Status__c")]
    pub status: Option<String>,
    #[serde(rename = "SBQQ__NetAmount__c")]
    pub net_amount: Option<f64>,
    #[serde(rename = "SBQQ__StartDate__c")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "SBQQ__EndDate__c")]
    pub end_date: Option<NaiveDate>,
}

impl Quote {
    /// Whether the quote is in a signed/accepted status.
    #[must_use]
    pub fn is_signed(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| SIGNED_QUOTE_STATUSES.contains(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_statuses_recognized() {
        for status in SIGNED_QUOTE_STATUSES {
            let quote = Quote {
                status: Some(status.into()),
                ..Quote::default()
            };
            assert!(quote.is_signed(), "{status} should count as signed");
        }
    }

    #[test]
    fn draft_and_missing_statuses_are_not_signed() {
        let draft = Quote {
            status: Some("Draft".into()),
            ..Quote::default()
        };
        assert!(!draft.is_signed());
        assert!(!Quote::default().is_signed());
    }
}
