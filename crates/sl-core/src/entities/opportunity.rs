use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A sales deal, including renewals. Core identity fields only — the renewal
/// validator works from a dynamic field snapshot instead, because its custom
/// fields vary by org.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Opportunity {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "StageName")]
    pub stage: Option<String>,
    #[serde(rename = "AccountId")]
    pub account_id: Option<String>,
    #[serde(rename = "Amount")]
    pub amount: Option<f64>,
    #[serde(rename = "CloseDate")]
    pub close_date: Option<NaiveDate>,
    #[serde(rename = "CurrencyIsoCode")]
    #[serde(default)]
    pub currency_iso_code: Option<String>,
}
