//! Address lookup: Opportunity -> Account -> formatted billing/shipping
//! addresses.

use serde::Deserialize;

use sl_core::entities::Account;
use sl_core::responses::AddressLookupResponse;
use sl_sfdc::{soql, CrmGateway};

use crate::error::HandlerError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressLookupRequest {
    #[serde(default)]
    pub opportunity_id: String,
}

/// Resolve the Opportunity's Account and both addresses in one relationship
/// query. An Opportunity without an Account is a success with a message, not
/// an error.
///
/// # Errors
///
/// `NotFound` if the Opportunity does not exist; `Upstream` on CRM failure.
pub async fn run(
    gateway: &dyn CrmGateway,
    request: &AddressLookupRequest,
) -> Result<AddressLookupResponse, HandlerError> {
    crate::require_opportunity_id(&request.opportunity_id)?;

    let query = format!(
        "SELECT Id, Name, AccountId, \
         Account.Id, Account.Name, Account.Phone, Account.Website, \
         Account.BillingStreet, Account.BillingCity, Account.BillingState, \
         Account.BillingPostalCode, Account.BillingCountry, \
         Account.ShippingStreet, Account.ShippingCity, Account.ShippingState, \
         Account.ShippingPostalCode, Account.ShippingCountry \
         FROM Opportunity WHERE Id = {}",
        soql::quoted(&request.opportunity_id)
    );

    let records = gateway.query(&query).await?;
    let Some(record) = records.first() else {
        return Err(HandlerError::not_found(
            "Opportunity",
            &request.opportunity_id,
        ));
    };

    let opportunity_name = record
        .get("Name")
        .and_then(serde_json::Value::as_str)
        .map(String::from);

    let account_value = record.get("Account").filter(|a| !a.is_null());
    let Some(account_value) = account_value else {
        return Ok(AddressLookupResponse {
            opportunity_id: request.opportunity_id.clone(),
            opportunity_name,
            message: Some("No Account associated with this Opportunity".into()),
            ..AddressLookupResponse::default()
        });
    };

    let account: Account = serde_json::from_value(account_value.clone())
        .map_err(|e| HandlerError::Upstream(format!("malformed Account record: {e}")))?;

    let billing = account.billing_address();
    let shipping = account.shipping_address();

    Ok(AddressLookupResponse {
        opportunity_id: request.opportunity_id.clone(),
        opportunity_name,
        account_id: account.id.clone(),
        account_name: account.name.clone(),
        phone: account.phone.clone(),
        website: account.website.clone(),
        billing_address_formatted: billing.formatted(),
        billing_address: Some(billing),
        shipping_address_formatted: shipping.formatted(),
        shipping_address: Some(shipping),
        message: None,
    })
}
