//! Opportunity detail aggregator: contact roles plus the NetSuite
//! subscription cross-reference.

use serde::Deserialize;

use sl_core::entities::ContactRole;
use sl_core::responses::{NetSuiteSubscription, OpportunityDetailsResponse};
use sl_sfdc::{soql, CrmGateway};

use crate::error::HandlerError;
use crate::links;

const NETSUITE_LABEL: &str = "NetSuite Subscription";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpportunityDetailsRequest {
    #[serde(default)]
    pub opportunity_id: String,
}

/// Fetch all contact roles (primary first) and parse the NetSuite link field
/// into a cross-reference block. A blank link yields `show: false`; only a
/// missing Opportunity is an error.
///
/// # Errors
///
/// `NotFound` if the Opportunity does not exist; `Upstream` on CRM failure.
pub async fn run(
    gateway: &dyn CrmGateway,
    request: &OpportunityDetailsRequest,
) -> Result<OpportunityDetailsResponse, HandlerError> {
    crate::require_opportunity_id(&request.opportunity_id)?;

    let opp_query = format!(
        "SELECT Id, Name, NetSuite_Sub_Link__c FROM Opportunity WHERE Id = {}",
        soql::quoted(&request.opportunity_id)
    );
    let opp_records = gateway.query(&opp_query).await?;
    let Some(opportunity) = opp_records.first() else {
        return Err(HandlerError::not_found(
            "Opportunity",
            &request.opportunity_id,
        ));
    };

    let roles_query = format!(
        "SELECT Id, ContactId, Contact.Name, Contact.Email, Contact.Phone, \
         Contact.Title, Role, IsPrimary \
         FROM OpportunityContactRole WHERE OpportunityId = {} \
         ORDER BY IsPrimary DESC",
        soql::quoted(&request.opportunity_id)
    );
    let contact_roles: Vec<ContactRole> = gateway
        .query(&roles_query)
        .await?
        .iter()
        .map(ContactRole::from_record)
        .collect();

    let raw_link = opportunity
        .get("NetSuite_Sub_Link__c")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();
    let (url, subscription_id) = links::extract_anchor(raw_link);

    let netsuite_subscription = match url {
        Some(url) => NetSuiteSubscription {
            show: true,
            label: Some(NETSUITE_LABEL.into()),
            url: Some(url),
            subscription_id,
        },
        None => NetSuiteSubscription::default(),
    };

    Ok(OpportunityDetailsResponse {
        opportunity_id: request.opportunity_id.clone(),
        opportunity_name: opportunity
            .get("Name")
            .and_then(serde_json::Value::as_str)
            .map(String::from),
        contact_roles,
        netsuite_subscription,
    })
}
