//! Contact creator: a new Contact plus the OpportunityContactRole join.

use serde::Deserialize;

use sl_core::entities::NewContact;
use sl_core::responses::ContactCreateResponse;
use sl_sfdc::CrmGateway;

use crate::error::HandlerError;

#[derive(Debug, Clone, Deserialize)]
pub struct ContactCreateRequest {
    #[serde(default)]
    pub opportunity_id: String,
    #[serde(default)]
    pub contact: NewContact,
    /// Role label for the join record, e.g. "Decision Maker".
    #[serde(default)]
    pub role: Option<String>,
    /// Whether the new role is the primary one. Defaults to true.
    #[serde(default = "default_primary")]
    pub primary: bool,
}

const fn default_primary() -> bool {
    true
}

/// Create the Contact, then the role join.
///
/// The two writes are not transactional: if the role create fails the
/// Contact stays behind, and primary-flag uniqueness is left to the CRM
/// (concurrent primaries are last-write-wins there).
///
/// # Errors
///
/// `Validation` if the last name is missing, `NotFound` if the Opportunity
/// does not exist, `Upstream` on CRM failure.
pub async fn run(
    gateway: &dyn CrmGateway,
    request: &ContactCreateRequest,
) -> Result<ContactCreateResponse, HandlerError> {
    crate::require_opportunity_id(&request.opportunity_id)?;

    if request
        .contact
        .last_name
        .as_deref()
        .map_or(true, |n| n.trim().is_empty())
    {
        return Err(HandlerError::Validation(
            "contact.last_name is required".into(),
        ));
    }

    let opportunity = gateway
        .get_record(
            "Opportunity",
            &request.opportunity_id,
            &["AccountId", "Name"],
        )
        .await?
        .ok_or_else(|| HandlerError::not_found("Opportunity", &request.opportunity_id))?;

    let account_id = opportunity
        .get("AccountId")
        .and_then(serde_json::Value::as_str)
        .map(String::from);
    let opportunity_name = opportunity
        .get("Name")
        .and_then(serde_json::Value::as_str)
        .map(String::from);

    let contact_body = request.contact.to_sobject(account_id.as_deref());
    let contact_id = gateway.create_record("Contact", &contact_body).await?;

    let mut role_body = serde_json::json!({
        "OpportunityId": request.opportunity_id,
        "ContactId": contact_id,
        "IsPrimary": request.primary,
    });
    if let Some(role) = &request.role {
        role_body["Role"] = role.clone().into();
    }
    let role_id = gateway
        .create_record("OpportunityContactRole", &role_body)
        .await?;

    let message = match &opportunity_name {
        Some(name) => format!("Contact created and linked to opportunity: {name}"),
        None => "Contact created and linked to opportunity".to_string(),
    };

    Ok(ContactCreateResponse {
        contact_id,
        opportunity_contact_role_id: role_id,
        opportunity_name,
        is_primary: request.primary,
        message,
    })
}
