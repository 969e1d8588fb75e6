use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Join record linking a Contact to an Opportunity, with the contact's
/// identity fields flattened in for detail responses.
///
/// At most one primary role per Opportunity is the intent, but uniqueness is
/// the CRM's concern — nothing here enforces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContactRole {
    pub id: Option<String>,
    pub contact_id: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_title: Option<String>,
    pub role: Option<String>,
    pub is_primary: bool,
}

impl ContactRole {
    /// Build from an `OpportunityContactRole` query record with the nested
    /// `Contact` relationship selected.
    #[must_use]
    pub fn from_record(record: &serde_json::Value) -> Self {
        let contact = record.get("Contact").filter(|c| !c.is_null());
        let contact_str = |field: &str| -> Option<String> {
            contact
                .and_then(|c| c.get(field))
                .and_then(serde_json::Value::as_str)
                .map(String::from)
        };
        let record_str = |field: &str| -> Option<String> {
            record
                .get(field)
                .and_then(serde_json::Value::as_str)
                .map(String::from)
        };

        Self {
            id: record_str("Id"),
            contact_id: record_str("ContactId"),
            contact_name: contact_str("Name"),
            contact_email: contact_str("Email"),
            contact_phone: contact_str("Phone"),
            contact_title: contact_str("Title"),
            role: record_str("Role"),
            is_primary: record
                .get("IsPrimary")
                .and_then(serde_json::Value::as_bool)
                .unwrap_or(false),
        }
    }
}
