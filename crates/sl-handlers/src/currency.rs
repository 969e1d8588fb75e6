//! Currency lookup: ISO code and amount for an Opportunity.

use serde::Deserialize;

use sl_core::entities::Opportunity;
use sl_core::responses::CurrencyResponse;
use sl_sfdc::{soql, CrmGateway};

use crate::error::HandlerError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrencyRequest {
    #[serde(default)]
    pub opportunity_id: String,
}

/// # Errors
///
/// `NotFound` if the Opportunity does not exist; `Upstream` on CRM failure.
pub async fn run(
    gateway: &dyn CrmGateway,
    request: &CurrencyRequest,
) -> Result<CurrencyResponse, HandlerError> {
    crate::require_opportunity_id(&request.opportunity_id)?;

    let query = format!(
        "SELECT Id, Name, CurrencyIsoCode, Amount FROM Opportunity WHERE Id = {}",
        soql::quoted(&request.opportunity_id)
    );
    let records = gateway.query(&query).await?;
    let Some(record) = records.first() else {
        return Err(HandlerError::not_found(
            "Opportunity",
            &request.opportunity_id,
        ));
    };

    let opportunity: Opportunity = serde_json::from_value(record.clone())
        .map_err(|e| HandlerError::Upstream(format!("malformed Opportunity record: {e}")))?;

    Ok(CurrencyResponse {
        opportunity_id: request.opportunity_id.clone(),
        opportunity_name: opportunity.name,
        currency_iso_code: opportunity.currency_iso_code,
        amount: opportunity.amount,
    })
}
