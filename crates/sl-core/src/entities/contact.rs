use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A person contact as read back from the CRM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Contact {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "FirstName")]
    pub first_name: Option<String>,
    #[serde(rename = "LastName")]
    pub last_name: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
}

/// Contact fields supplied by a caller creating a new contact. Only the last
/// name is required; everything else is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NewContact {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub title: Option<String>,
}

impl NewContact {
    /// The Salesforce sobject body for a Contact create, with the owning
    /// account attached when known.
    #[must_use]
    pub fn to_sobject(&self, account_id: Option<&str>) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        if let Some(first) = &self.first_name {
            body.insert("FirstName".into(), first.clone().into());
        }
        if let Some(last) = &self.last_name {
            body.insert("LastName".into(), last.clone().into());
        }
        if let Some(email) = &self.email {
            body.insert("Email".into(), email.clone().into());
        }
        if let Some(phone) = &self.phone {
            body.insert("Phone".into(), phone.clone().into());
        }
        if let Some(title) = &self.title {
            body.insert("Title".into(), title.clone().into());
        }
        if let Some(account_id) = account_id {
            body.insert("AccountId".into(), account_id.into());
        }
        serde_json::Value::Object(body)
    }
}
