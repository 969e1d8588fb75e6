//! Renewal validator: a fixed, ordered checklist evaluated against an
//! Opportunity and its related records.
//!
//! The report always contains exactly ten checks in a fixed order; for the
//! same underlying record state the sequence and statuses are fully
//! reproducible. The only fail-fast is a missing Opportunity, which returns
//! `NotFound` instead of a report.

mod checks;
pub mod fields;
mod snapshot;

pub use snapshot::OpportunitySnapshot;

use serde::Deserialize;

use sl_core::report::ValidationReport;
use sl_core::responses::RenewalValidationResponse;
use sl_sfdc::{soql, CrmGateway};

use crate::error::HandlerError;
use fields::DiscoveredFields;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenewalValidationRequest {
    #[serde(default)]
    pub opportunity_id: String,
}

/// Number of checks every report contains.
pub const CHECK_COUNT: usize = 10;

/// Run the checklist and build the report.
///
/// # Errors
///
/// `NotFound` if the Opportunity does not exist; `Upstream` if the describe
/// or the Opportunity query itself fails. Failures in per-check lookups are
/// absorbed into the report as WARNING/SKIP instead.
pub async fn run(
    gateway: &dyn CrmGateway,
    request: &RenewalValidationRequest,
) -> Result<RenewalValidationResponse, HandlerError> {
    crate::require_opportunity_id(&request.opportunity_id)?;

    let available = gateway.describe_fields("Opportunity").await?;
    let discovered = DiscoveredFields::discover(&available);

    let query = format!(
        "SELECT {} FROM Opportunity WHERE Id = {}",
        discovered.query_fields().join(", "),
        soql::quoted(&request.opportunity_id)
    );
    let records = gateway.query(&query).await?;
    let Some(record) = records.first() else {
        return Err(HandlerError::not_found(
            "Opportunity",
            &request.opportunity_id,
        ));
    };

    let snapshot = OpportunitySnapshot::new(record.clone(), discovered);
    let mut report = ValidationReport::new();

    checks::opportunity_found(&snapshot, &mut report);
    checks::netsuite_id(&snapshot, &mut report);
    checks::parent_subscription(gateway, &snapshot, &mut report).await;
    checks::signed_quote(gateway, &request.opportunity_id, &snapshot, &mut report).await;
    checks::open_upsells(gateway, &request.opportunity_id, &snapshot, &mut report).await;
    checks::price_reset(&snapshot, &mut report);
    checks::auto_renewed_last_term(&snapshot, &mut report);
    checks::cancellation(&snapshot, &mut report);
    checks::auto_renewal_clause(&snapshot, &mut report);
    checks::field_discovery(&snapshot, &mut report);

    debug_assert_eq!(report.checks().len(), CHECK_COUNT);
    tracing::debug!(
        opportunity_id = %request.opportunity_id,
        failures = report.has_failures(),
        "renewal validation complete"
    );

    Ok(RenewalValidationResponse {
        opportunity_id: request.opportunity_id.clone(),
        validation: report.summary(),
    })
}
