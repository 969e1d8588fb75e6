//! Field snapshot of the Opportunity under validation.

use super::fields::DiscoveredFields;

/// The queried Opportunity record paired with the discovered field mapping,
/// so checks can read logical fields without caring which API name the org
/// uses.
#[derive(Debug, Clone)]
pub struct OpportunitySnapshot {
    record: serde_json::Value,
    fields: DiscoveredFields,
}

impl OpportunitySnapshot {
    #[must_use]
    pub fn new(record: serde_json::Value, fields: DiscoveredFields) -> Self {
        Self { record, fields }
    }

    #[must_use]
    pub fn fields(&self) -> &DiscoveredFields {
        &self.fields
    }

    #[must_use]
    pub fn base_str(&self, field: &str) -> Option<&str> {
        self.record.get(field).and_then(serde_json::Value::as_str)
    }

    #[must_use]
    pub fn base_f64(&self, field: &str) -> Option<f64> {
        self.record.get(field).and_then(serde_json::Value::as_f64)
    }

    /// String value of a logical field; `None` if undiscovered, null, or
    /// blank.
    #[must_use]
    pub fn logical_str(&self, logical: &str) -> Option<&str> {
        let api_name = self.fields.api_name(logical)?;
        self.record
            .get(api_name)
            .and_then(serde_json::Value::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Boolean value of a logical field; undiscovered or null reads false.
    #[must_use]
    pub fn logical_bool(&self, logical: &str) -> bool {
        self.fields
            .api_name(logical)
            .and_then(|api_name| self.record.get(api_name))
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }

    /// Whether the org has any candidate for this logical field at all.
    #[must_use]
    pub fn is_discovered(&self, logical: &str) -> bool {
        self.fields.api_name(logical).is_some()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.base_str("Name")
    }

    #[must_use]
    pub fn stage(&self) -> Option<&str> {
        self.base_str("StageName")
    }

    #[must_use]
    pub fn account_id(&self) -> Option<&str> {
        self.base_str("AccountId")
    }

    #[must_use]
    pub fn amount(&self) -> Option<f64> {
        self.base_f64("Amount")
    }

    #[must_use]
    pub fn close_date(&self) -> Option<&str> {
        self.base_str("CloseDate")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> OpportunitySnapshot {
        let fields = DiscoveredFields::discover(&[
            "NetSuite_ID__c".to_string(),
            "Price_Reset__c".to_string(),
        ]);
        OpportunitySnapshot::new(
            serde_json::json!({
                "Id": "006000000000001AAA",
                "Name": "Acme Renewal",
                "StageName": "Engaged",
                "Amount": 1000.0,
                "NetSuite_ID__c": "NS-42",
                "Price_Reset__c": true,
            }),
            fields,
        )
    }

    #[test]
    fn logical_str_resolves_through_mapping() {
        assert_eq!(snapshot().logical_str("netsuite_id"), Some("NS-42"));
    }

    #[test]
    fn logical_str_blank_is_none() {
        let fields = DiscoveredFields::discover(&["NetSuite_ID__c".to_string()]);
        let snap = OpportunitySnapshot::new(
            serde_json::json!({"NetSuite_ID__c": "  "}),
            fields,
        );
        assert_eq!(snap.logical_str("netsuite_id"), None);
    }

    #[test]
    fn logical_bool_defaults_false_when_undiscovered() {
        assert!(!snapshot().logical_bool("o2c_processed"));
        assert!(snapshot().logical_bool("price_reset"));
    }

    #[test]
    fn base_accessors() {
        let snap = snapshot();
        assert_eq!(snap.stage(), Some("Engaged"));
        assert_eq!(snap.amount(), Some(1000.0));
        assert_eq!(snap.close_date(), None);
    }
}
