//! Stage manager: read the current pipeline stage or move to a new one.
//!
//! Write mode validates strict membership in the eight-stage enumeration.
//! There is no transition graph — any valid stage may follow any other.

use serde::Deserialize;

use sl_core::enums::Stage;
use sl_core::responses::{StageReadResponse, StageResponse, StageUpdateResponse};
use sl_sfdc::CrmGateway;

use crate::error::HandlerError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StageRequest {
    #[serde(default)]
    pub opportunity_id: String,
    /// Target stage. Absent selects read mode.
    #[serde(default)]
    pub stage: Option<String>,
}

/// Read or update the Opportunity's stage, selected by presence of `stage`.
///
/// # Errors
///
/// `Validation` for a target outside the enumeration (exact label match —
/// case or whitespace variants are rejected), `NotFound` for a missing
/// Opportunity, `Upstream` on CRM failure.
pub async fn run(
    gateway: &dyn CrmGateway,
    request: &StageRequest,
) -> Result<StageResponse, HandlerError> {
    crate::require_opportunity_id(&request.opportunity_id)?;

    let opportunity = gateway
        .get_record(
            "Opportunity",
            &request.opportunity_id,
            &["Id", "Name", "StageName"],
        )
        .await?
        .ok_or_else(|| HandlerError::not_found("Opportunity", &request.opportunity_id))?;

    let current_stage = opportunity
        .get("StageName")
        .and_then(serde_json::Value::as_str)
        .map(String::from);
    let opportunity_name = opportunity
        .get("Name")
        .and_then(serde_json::Value::as_str)
        .map(String::from);

    let Some(target_label) = request.stage.as_deref() else {
        return Ok(StageResponse::Read(StageReadResponse {
            action: "get".into(),
            opportunity_id: request.opportunity_id.clone(),
            opportunity_name,
            current_stage,
            valid_stages: Stage::labels().iter().map(ToString::to_string).collect(),
        }));
    };

    let Some(target) = Stage::parse(target_label) else {
        return Err(HandlerError::Validation(format!(
            "Invalid stage: \"{target_label}\". Valid stages: {}",
            Stage::labels().join(", ")
        )));
    };

    if current_stage.as_deref() == Some(target.as_str()) {
        return Ok(StageResponse::Update(StageUpdateResponse {
            action: "update".into(),
            opportunity_id: request.opportunity_id.clone(),
            opportunity_name,
            previous_stage: current_stage,
            new_stage: target.as_str().into(),
            message: format!("Opportunity is already at stage: {target}"),
        }));
    }

    gateway
        .update_record(
            "Opportunity",
            &request.opportunity_id,
            &serde_json::json!({ "StageName": target.as_str() }),
        )
        .await?;

    let message = match current_stage.as_deref() {
        Some(previous) => format!("Stage updated from \"{previous}\" to \"{target}\""),
        None => format!("Stage set to \"{target}\""),
    };

    Ok(StageResponse::Update(StageUpdateResponse {
        action: "update".into(),
        opportunity_id: request.opportunity_id.clone(),
        opportunity_name,
        previous_stage: current_stage,
        new_stage: target.as_str().into(),
        message,
    }))
}
