mod common;

use pretty_assertions::assert_eq;

use common::{opportunity_with_account, FixtureGateway, OPP_ID};
use sl_core::responses::StageResponse;
use sl_handlers::stage::{self, StageRequest};
use sl_handlers::HandlerError;

fn read_request(id: &str) -> StageRequest {
    StageRequest {
        opportunity_id: id.to_string(),
        stage: None,
    }
}

fn update_request(id: &str, stage: &str) -> StageRequest {
    StageRequest {
        opportunity_id: id.to_string(),
        stage: Some(stage.to_string()),
    }
}

#[tokio::test]
async fn read_mode_returns_current_stage_and_all_labels() {
    let gateway = FixtureGateway::new().with_opportunity(opportunity_with_account());

    let response = stage::run(&gateway, &read_request(OPP_ID)).await.unwrap();

    let StageResponse::Read(read) = response else {
        panic!("expected read response");
    };
    assert_eq!(read.action, "get");
    assert_eq!(read.current_stage.as_deref(), Some("Outreach"));
    assert_eq!(read.valid_stages.len(), 8);
    assert_eq!(read.valid_stages[0], "Pending");
    assert_eq!(read.valid_stages[7], "Closed Lost");
}

#[tokio::test]
async fn update_moves_to_target_stage() {
    let gateway = FixtureGateway::new().with_opportunity(opportunity_with_account());

    let response = stage::run(&gateway, &update_request(OPP_ID, "Engaged"))
        .await
        .unwrap();

    let StageResponse::Update(update) = response else {
        panic!("expected update response");
    };
    assert_eq!(update.previous_stage.as_deref(), Some("Outreach"));
    assert_eq!(update.new_stage, "Engaged");
    assert_eq!(update.message, "Stage updated from \"Outreach\" to \"Engaged\"");

    let updates = gateway.updates();
    assert_eq!(updates.len(), 1);
    let (sobject, id, body) = &updates[0];
    assert_eq!(sobject, "Opportunity");
    assert_eq!(id, OPP_ID);
    assert_eq!(body["StageName"], "Engaged");
}

#[tokio::test]
async fn update_then_read_reflects_the_new_stage() {
    let gateway = FixtureGateway::new().with_opportunity(opportunity_with_account());

    stage::run(&gateway, &update_request(OPP_ID, "Quote Follow-Up"))
        .await
        .unwrap();
    let response = stage::run(&gateway, &read_request(OPP_ID)).await.unwrap();

    let StageResponse::Read(read) = response else {
        panic!("expected read response");
    };
    assert_eq!(read.current_stage.as_deref(), Some("Quote Follow-Up"));
}

#[tokio::test]
async fn already_at_target_stage_skips_the_write() {
    let gateway = FixtureGateway::new().with_opportunity(opportunity_with_account());

    let response = stage::run(&gateway, &update_request(OPP_ID, "Outreach"))
        .await
        .unwrap();

    let StageResponse::Update(update) = response else {
        panic!("expected update response");
    };
    assert_eq!(update.previous_stage.as_deref(), Some("Outreach"));
    assert_eq!(update.new_stage, "Outreach");
    assert_eq!(update.message, "Opportunity is already at stage: Outreach");
    assert!(gateway.updates().is_empty());
}

#[tokio::test]
async fn stage_labels_are_matched_exactly() {
    for label in ["outreach", "ENGAGED", " Outreach", "Closed  Won"] {
        let gateway = FixtureGateway::new().with_opportunity(opportunity_with_account());
        let err = stage::run(&gateway, &update_request(OPP_ID, label))
            .await
            .unwrap_err();
        assert!(
            matches!(err, HandlerError::Validation(_)),
            "{label:?} should be rejected"
        );
        assert!(gateway.updates().is_empty());
    }
}

#[tokio::test]
async fn invalid_stage_error_lists_valid_labels() {
    let gateway = FixtureGateway::new().with_opportunity(opportunity_with_account());

    let err = stage::run(&gateway, &update_request(OPP_ID, "Bogus"))
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("Invalid stage: \"Bogus\"."));
    assert!(message.contains("Closed Lost"));
}

#[tokio::test]
async fn unknown_opportunity_is_not_found() {
    let gateway = FixtureGateway::new();
    let err = stage::run(&gateway, &read_request("006000000000999AAA"))
        .await
        .unwrap_err();
    assert!(matches!(err, HandlerError::NotFound { .. }));
}
