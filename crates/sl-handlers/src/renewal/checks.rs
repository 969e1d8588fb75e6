//! The ten renewal validation checks, in evaluation order.
//!
//! Every check appends exactly one result and never short-circuits the
//! others — a FAIL in one check still lets the rest run. Checks that need
//! extra CRM lookups degrade to WARNING or SKIP on query failure instead of
//! aborting the report.

use sl_core::entities::{Quote, Subscription};
use sl_core::enums::{CheckStatus, Stage};
use sl_core::report::ValidationReport;
use sl_sfdc::{soql, CrmGateway};

use super::snapshot::OpportunitySnapshot;
use crate::renewal::fields::DiscoveredFields;

const AMOUNT_TOLERANCE: f64 = 0.01;

/// Check 1: confirm the record under validation (always INFO — absence is
/// handled before the report starts).
pub(super) fn opportunity_found(snapshot: &OpportunitySnapshot, report: &mut ValidationReport) {
    report.add_check_with_details(
        "Opportunity Found",
        CheckStatus::Info,
        format!("Validating: {}", snapshot.name().unwrap_or("(unnamed)")),
        serde_json::json!({
            "stage": snapshot.stage(),
            "amount": snapshot.amount(),
            "close_date": snapshot.close_date(),
        }),
    );
}

/// Check 2: NetSuite ID must be populated.
pub(super) fn netsuite_id(snapshot: &OpportunitySnapshot, report: &mut ValidationReport) {
    match snapshot.logical_str("netsuite_id") {
        Some(id) => report.add_check_with_details(
            "NetSuite ID",
            CheckStatus::Pass,
            format!("NetSuite ID is populated: {id}"),
            serde_json::json!({ "netsuite_id": id }),
        ),
        None if snapshot.is_discovered("netsuite_id") => report.add_check(
            "NetSuite ID",
            CheckStatus::Fail,
            "NetSuite ID is not populated - should point to a valid draft renewal subscription",
        ),
        None => report.add_check(
            "NetSuite ID",
            CheckStatus::Fail,
            format!(
                "NetSuite ID field not found. Looked for: {}",
                DiscoveredFields::candidates_for("netsuite_id").join(", ")
            ),
        ),
    }
}

/// Check 3: parent subscription id populated and resolvable.
pub(super) async fn parent_subscription(
    gateway: &dyn CrmGateway,
    snapshot: &OpportunitySnapshot,
    report: &mut ValidationReport,
) {
    let Some(parent_id) = snapshot.logical_str("parent_sub_id") else {
        report.add_check(
            "Parent Subscription",
            CheckStatus::Fail,
            "Parent Subscription ID is not populated",
        );
        return;
    };

    let query = format!(
        "SELECT Id, Name, SBQQ__Contract__c FROM SBQQ__Subscription__c WHERE Id = {} LIMIT 1",
        soql::quoted(parent_id)
    );
    match gateway.query(&query).await {
        Ok(records) => match records.first() {
            Some(record) => {
                let subscription: Subscription =
                    serde_json::from_value(record.clone()).unwrap_or_default();
                report.add_check_with_details(
                    "Parent Subscription",
                    CheckStatus::Pass,
                    format!(
                        "Parent Subscription is valid: {}",
                        subscription.name.as_deref().unwrap_or(parent_id)
                    ),
                    serde_json::json!({ "subscription_id": parent_id }),
                );
            }
            None => report.add_check(
                "Parent Subscription",
                CheckStatus::Fail,
                format!("Parent Subscription ID {parent_id} not found in system"),
            ),
        },
        Err(err) => report.add_check_with_details(
            "Parent Subscription",
            CheckStatus::Warning,
            format!("Could not validate subscription: {err}"),
            serde_json::json!({ "parent_sub_id": parent_id }),
        ),
    }
}

/// Check 4: renewal amount reconciles with the signed quote.
pub(super) async fn signed_quote(
    gateway: &dyn CrmGateway,
    opportunity_id: &str,
    snapshot: &OpportunitySnapshot,
    report: &mut ValidationReport,
) {
    const NAME: &str = "Renewal Amount vs Signed Quote";

    let query = format!(
        "SELECT Id, Name, SBQQ__Status__c, SBQQ__NetAmount__c, SBQQ__StartDate__c, \
         SBQQ__EndDate__c FROM SBQQ__Quote__c WHERE SBQQ__Opportunity2__c = {} \
         ORDER BY CreatedDate DESC",
        soql::quoted(opportunity_id)
    );
    let records = match gateway.query(&query).await {
        Ok(records) => records,
        Err(err) => {
            report.add_check(NAME, CheckStatus::Skip, format!("Could not query quotes: {err}"));
            return;
        }
    };

    let quotes: Vec<Quote> = records
        .iter()
        .map(|r| serde_json::from_value(r.clone()).unwrap_or_default())
        .collect();

    if quotes.is_empty() {
        report.add_check(NAME, CheckStatus::Skip, "No quote linked to this opportunity");
        return;
    }

    let Some(signed) = quotes.iter().find(|q| q.is_signed()) else {
        let names: Vec<&str> = quotes
            .iter()
            .take(5)
            .filter_map(|q| q.name.as_deref())
            .collect();
        report.add_check_with_details(
            NAME,
            CheckStatus::Warning,
            format!(
                "No signed/accepted quote found. {} quote(s) in other statuses.",
                quotes.len()
            ),
            serde_json::json!({ "available_quotes": names }),
        );
        return;
    };

    match (signed.net_amount, snapshot.amount()) {
        (Some(quote_amount), Some(opp_amount)) => {
            let difference = (quote_amount - opp_amount).abs();
            if difference < AMOUNT_TOLERANCE {
                report.add_check_with_details(
                    NAME,
                    CheckStatus::Pass,
                    "Opportunity amount matches signed quote",
                    serde_json::json!({
                        "quote": signed.name,
                        "quote_amount": quote_amount,
                        "opp_amount": opp_amount,
                    }),
                );
            } else {
                report.add_check_with_details(
                    NAME,
                    CheckStatus::Warning,
                    format!("Amount mismatch between Opp ({opp_amount}) and Quote ({quote_amount})"),
                    serde_json::json!({
                        "quote": signed.name,
                        "quote_amount": quote_amount,
                        "opp_amount": opp_amount,
                        "difference": difference,
                    }),
                );
            }
        }
        _ => report.add_check_with_details(
            NAME,
            CheckStatus::Info,
            format!(
                "Signed quote found: {}",
                signed.name.as_deref().unwrap_or("(unnamed)")
            ),
            serde_json::json!({ "quote_status": signed.status }),
        ),
    }
}

/// Check 5: open upsell/expansion opportunities on the same account.
pub(super) async fn open_upsells(
    gateway: &dyn CrmGateway,
    opportunity_id: &str,
    snapshot: &OpportunitySnapshot,
    report: &mut ValidationReport,
) {
    const NAME: &str = "Open Upsells in Current Term";

    let Some(account_id) = snapshot.account_id() else {
        report.add_check(NAME, CheckStatus::Skip, "Opportunity has no account");
        return;
    };

    let query = format!(
        "SELECT Id, Name, Amount, StageName, Type, CloseDate FROM Opportunity \
         WHERE AccountId = {} AND Id != {} \
         AND (Type LIKE '%Upsell%' OR Type LIKE '%Expansion%' OR Type LIKE '%Add-on%') \
         AND IsClosed = false ORDER BY CloseDate DESC LIMIT 10",
        soql::quoted(account_id),
        soql::quoted(opportunity_id)
    );
    match gateway.query(&query).await {
        Ok(upsells) if upsells.is_empty() => report.add_check(
            NAME,
            CheckStatus::Pass,
            "No open upsell/expansion opportunities found",
        ),
        Ok(upsells) => {
            let listed: Vec<serde_json::Value> = upsells
                .iter()
                .map(|u| {
                    serde_json::json!({
                        "name": u.get("Name"),
                        "amount": u.get("Amount"),
                        "stage": u.get("StageName"),
                        "close_date": u.get("CloseDate"),
                    })
                })
                .collect();
            report.add_check_with_details(
                NAME,
                CheckStatus::Warning,
                format!(
                    "Found {} open upsell/expansion opportunities - ensure they're included in renewal",
                    upsells.len()
                ),
                serde_json::json!({ "upsells": listed }),
            );
        }
        Err(err) => report.add_check(
            NAME,
            CheckStatus::Skip,
            format!("Could not query upsells: {err}"),
        ),
    }
}

/// Check 6: price-reset cases must have the checkbox set.
pub(super) fn price_reset(snapshot: &OpportunitySnapshot, report: &mut ValidationReport) {
    const NAME: &str = "Price Reset Checkbox";

    if !snapshot.is_discovered("price_reset") {
        report.add_check(
            NAME,
            CheckStatus::Skip,
            format!(
                "Price Reset field not found. Looked for: {}",
                DiscoveredFields::candidates_for("price_reset").join(", ")
            ),
        );
        return;
    }

    let name = snapshot.name().unwrap_or_default().to_lowercase();
    let name_indicates = name.contains("price reset") || name.contains("price-reset");
    let checked = snapshot.logical_bool("price_reset");

    if checked {
        report.add_check(NAME, CheckStatus::Pass, "Price Reset checkbox is checked");
    } else if name_indicates {
        report.add_check(
            NAME,
            CheckStatus::Fail,
            "This appears to be a Price Reset opportunity but the checkbox is NOT checked",
        );
    } else {
        report.add_check(NAME, CheckStatus::Skip, "Not a Price Reset opportunity");
    }
}

/// Check 7: auto-renewed-last-term flag, reported but never failed.
pub(super) fn auto_renewed_last_term(snapshot: &OpportunitySnapshot, report: &mut ValidationReport) {
    const NAME: &str = "Auto-Renewed Last Term";

    if snapshot.is_discovered("auto_renewed_last_term") {
        let value = snapshot.logical_bool("auto_renewed_last_term");
        report.add_check_with_details(
            NAME,
            CheckStatus::Info,
            format!(
                "Auto-Renewed Last Term: {}",
                if value { "Yes" } else { "No" }
            ),
            serde_json::json!({ "value": value }),
        );
    } else {
        report.add_check(
            NAME,
            CheckStatus::Info,
            format!(
                "Field not found. Looked for: {}",
                DiscoveredFields::candidates_for("auto_renewed_last_term").join(", ")
            ),
        );
    }
}

/// Check 8: a cancelled renewal needs the notice attached and a Closed Lost
/// stage.
pub(super) fn cancellation(snapshot: &OpportunitySnapshot, report: &mut ValidationReport) {
    const NAME: &str = "Cancellation Handling";

    if !snapshot.logical_bool("cancelled_before_renewal") {
        report.add_check(NAME, CheckStatus::Skip, "Customer did not send cancellation");
        return;
    }

    let mut issues = Vec::new();
    let mut details = serde_json::Map::new();
    details.insert("cancelled_before_renewal".into(), true.into());

    match snapshot.logical_str("cancellation_notice") {
        Some(notice) => {
            details.insert("cancellation_notice".into(), notice.into());
        }
        None => issues.push("Cancellation Notice not attached".to_string()),
    }

    let stage = snapshot.stage().unwrap_or_default();
    if Stage::parse(stage).is_some_and(Stage::is_lost) {
        details.insert("stage".into(), stage.into());
    } else {
        issues.push(format!("Stage is '{stage}' - should use Lost Button"));
    }

    if issues.is_empty() {
        report.add_check_with_details(
            NAME,
            CheckStatus::Pass,
            "Cancellation properly documented",
            serde_json::Value::Object(details),
        );
    } else {
        report.add_check_with_details(
            NAME,
            CheckStatus::Fail,
            format!("Cancellation issues: {}", issues.join("; ")),
            serde_json::Value::Object(details),
        );
    }
}

/// Check 9: an auto-renewal clause needs the prior-quote link populated.
pub(super) fn auto_renewal_clause(snapshot: &OpportunitySnapshot, report: &mut ValidationReport) {
    const NAME: &str = "Auto-Renewal Clause";

    if !snapshot.logical_bool("auto_renewal_clause") {
        report.add_check(
            NAME,
            CheckStatus::Skip,
            "Previous quote does not have an auto-renewal clause",
        );
        return;
    }

    if !snapshot.is_discovered("prev_quote_ar_clause") {
        report.add_check_with_details(
            NAME,
            CheckStatus::Warning,
            "AR Clause is checked. Could not verify the previous-quote link field.",
            serde_json::json!({ "ar_clause": true }),
        );
        return;
    }

    match snapshot.logical_str("prev_quote_ar_clause") {
        Some(link) => report.add_check_with_details(
            NAME,
            CheckStatus::Pass,
            "AR Clause checked and previous quote link provided",
            serde_json::json!({ "ar_clause": true, "prev_quote_link": link }),
        ),
        None => report.add_check(
            NAME,
            CheckStatus::Fail,
            "AR Clause is checked but the previous-quote link is missing",
        ),
    }
}

/// Check 10: how much of the expected custom-field set the org actually has.
pub(super) fn field_discovery(snapshot: &OpportunitySnapshot, report: &mut ValidationReport) {
    let fields = snapshot.fields();
    report.add_check_with_details(
        "Field Discovery",
        CheckStatus::Info,
        format!(
            "Found {} of {} expected custom fields",
            fields.found_count(),
            DiscoveredFields::expected_count()
        ),
        serde_json::json!({
            "found_fields": fields.mapping(),
            "missing_fields": fields.missing(),
        }),
    );
}
