use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A CPQ subscription record, resolved when validating a renewal's parent
/// subscription reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Subscription {
    #[serde(rename = "Id")]
    pub id: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "SBQQ__Contract__c")]
    pub contract_id: Option<String>,
}
