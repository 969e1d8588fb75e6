//! Handler response types returned as JSON envelope bodies.
//!
//! These structs define the `body` shape for each handler; the
//! `{"statusCode": .., "body": ..}` envelope and the `success` flag are
//! added at the handler layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::entities::ContactRole;
use crate::report::ReportSummary;

/// Response from the address lookup handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AddressLookupResponse {
    pub opportunity_id: String,
    pub opportunity_name: Option<String>,
    pub account_id: Option<String>,
    pub account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response from the contact creator handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContactCreateResponse {
    pub contact_id: String,
    pub opportunity_contact_role_id: String,
    pub opportunity_name: Option<String>,
    pub is_primary: bool,
    pub message: String,
}

/// The NetSuite subscription cross-reference block in detail responses.
///
/// `show: false` with empty fields means the opportunity has no populated
/// subscription link — it is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NetSuiteSubscription {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
}

/// Response from the opportunity detail aggregator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OpportunityDetailsResponse {
    pub opportunity_id: String,
    pub opportunity_name: Option<String>,
    pub contact_roles: Vec<ContactRole>,
    pub netsuite_subscription: NetSuiteSubscription,
}

/// Response from the stage manager in read mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StageReadResponse {
    pub action: String,
    pub opportunity_id: String,
    pub opportunity_name: Option<String>,
    pub current_stage: Option<String>,
    pub valid_stages: Vec<String>,
}

/// Response from the stage manager in write mode. A no-op update (already at
/// the target) reports equal previous and new stages with a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StageUpdateResponse {
    pub action: String,
    pub opportunity_id: String,
    pub opportunity_name: Option<String>,
    pub previous_stage: Option<String>,
    pub new_stage: String,
    pub message: String,
}

/// Either stage manager response, selected by presence of the target stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum StageResponse {
    Read(StageReadResponse),
    Update(StageUpdateResponse),
}

/// Response from the currency lookup handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurrencyResponse {
    pub opportunity_id: String,
    pub opportunity_name: Option<String>,
    pub currency_iso_code: Option<String>,
    pub amount: Option<f64>,
}

/// Response from the renewal validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RenewalValidationResponse {
    pub opportunity_id: String,
    pub validation: ReportSummary,
}
