//! Custom-field discovery for the renewal validator.
//!
//! Orgs name the renewal custom fields inconsistently, so each logical field
//! has a candidate list of API names. The describe result picks the first
//! candidate present per logical field; the Opportunity query is then built
//! from the base fields plus whatever was discovered.

use std::collections::BTreeMap;

/// Standard fields always queried on the Opportunity.
pub const BASE_FIELDS: [&str; 9] = [
    "Id",
    "Name",
    "StageName",
    "AccountId",
    "Amount",
    "CloseDate",
    "Type",
    "IsClosed",
    "IsWon",
];

/// Logical field keys and the API name candidates tried for each, in
/// preference order.
pub const CANDIDATES: [(&str, &[&str]); 11] = [
    (
        "netsuite_id",
        &[
            "NetSuite_ID__c",
            "NetSuiteID__c",
            "Netsuite_Id__c",
            "NS_ID__c",
            "NetSuite_Internal_ID__c",
        ],
    ),
    (
        "parent_sub_id",
        &[
            "Parent_Subscription_ID__c",
            "Parent_Sub_ID__c",
            "ParentSubscriptionId__c",
            "Parent_Subscription__c",
        ],
    ),
    (
        "price_reset",
        &["Price_Reset__c", "Is_Price_Reset__c", "PriceReset__c"],
    ),
    (
        "auto_renewed_last_term",
        &[
            "Auto_Renewed_Last_Term__c",
            "AutoRenewedLastTerm__c",
            "Auto_Renewal_Last_Term__c",
        ],
    ),
    (
        "cancelled_before_renewal",
        &[
            "Cancelled_before_Renewal_Cycle__c",
            "Cancelled_Before_Renewal__c",
            "CancelledBeforeRenewal__c",
        ],
    ),
    (
        "cancellation_notice",
        &[
            "Cancellation_Notice__c",
            "CancellationNotice__c",
            "Cancellation_Notice_Link__c",
        ],
    ),
    (
        "auto_renewal_clause",
        &["Auto_Renewal_Clause__c", "AutoRenewalClause__c", "AR_Clause__c"],
    ),
    (
        "prev_quote_ar_clause",
        &[
            "Prev_Quote_w_AR_Clause__c",
            "Previous_Quote_AR_Clause__c",
            "Prev_Quote_AR__c",
        ],
    ),
    (
        "o2c_processed",
        &["O2C_Processed__c", "Processed_via_O2C__c", "O2C__c"],
    ),
    (
        "subscription_id",
        &[
            "SBQQ__RenewedContract__c",
            "Subscription__c",
            "Subscription_ID__c",
            "CPQ_Subscription__c",
        ],
    ),
    (
        "previous_quote",
        &[
            "Previous_Quote__c",
            "Prev_Quote__c",
            "Prior_Quote__c",
            "SBQQ__RenewedQuote__c",
        ],
    ),
];

/// Which API name was found for each logical field.
#[derive(Debug, Clone, Default)]
pub struct DiscoveredFields {
    found: BTreeMap<&'static str, String>,
}

impl DiscoveredFields {
    /// Resolve candidates against the field names an object describe
    /// returned. Pure — no network.
    #[must_use]
    pub fn discover(available: &[String]) -> Self {
        let mut found = BTreeMap::new();
        for (logical, candidates) in CANDIDATES {
            if let Some(name) = candidates
                .iter()
                .find(|c| available.iter().any(|a| a == *c))
            {
                found.insert(logical, (*name).to_string());
            }
        }
        Self { found }
    }

    /// The resolved API name for a logical field, if any candidate existed.
    #[must_use]
    pub fn api_name(&self, logical: &str) -> Option<&str> {
        self.found.get(logical).map(String::as_str)
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    #[must_use]
    pub const fn expected_count() -> usize {
        CANDIDATES.len()
    }

    /// Logical fields with no candidate present in the org.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        CANDIDATES
            .iter()
            .map(|(logical, _)| *logical)
            .filter(|logical| !self.found.contains_key(logical))
            .collect()
    }

    /// Logical-to-API mapping, for the field discovery report details.
    #[must_use]
    pub fn mapping(&self) -> &BTreeMap<&'static str, String> {
        &self.found
    }

    /// All fields to select on the Opportunity: base plus discovered.
    #[must_use]
    pub fn query_fields(&self) -> Vec<String> {
        BASE_FIELDS
            .iter()
            .map(|f| (*f).to_string())
            .chain(self.found.values().cloned())
            .collect()
    }

    /// The candidate list for a logical field, for "looked for" messages.
    #[must_use]
    pub fn candidates_for(logical: &str) -> &'static [&'static str] {
        CANDIDATES
            .iter()
            .find(|(key, _)| *key == logical)
            .map_or(&[], |(_, candidates)| candidates)
    }
}
