//! Deterministic in-memory stand-in for the CRM gateway.
//!
//! Queries are routed by the sobject in the FROM clause, then filtered by
//! whether the stored record's id appears in the WHERE clause. Writes mutate
//! the stored records so read-after-write flows can be exercised end to end.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use sl_sfdc::{CrmGateway, SfdcError};

#[derive(Default)]
struct FixtureState {
    opportunities: Vec<Value>,
    contact_roles: Vec<Value>,
    quotes: Vec<Value>,
    subscriptions: Vec<Value>,
    upsells: Vec<Value>,
    describe: Vec<String>,
    created: Vec<(String, Value)>,
    updates: Vec<(String, String, Value)>,
    next_id: u32,
}

#[derive(Default)]
pub struct FixtureGateway {
    state: Mutex<FixtureState>,
    /// Queries containing this substring return an API error.
    fail_queries_containing: Option<String>,
}

impl FixtureGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_opportunity(self, record: Value) -> Self {
        self.state.lock().unwrap().opportunities.push(record);
        self
    }

    pub fn with_contact_role(self, record: Value) -> Self {
        self.state.lock().unwrap().contact_roles.push(record);
        self
    }

    pub fn with_quote(self, record: Value) -> Self {
        self.state.lock().unwrap().quotes.push(record);
        self
    }

    pub fn with_subscription(self, record: Value) -> Self {
        self.state.lock().unwrap().subscriptions.push(record);
        self
    }

    pub fn with_upsell(self, record: Value) -> Self {
        self.state.lock().unwrap().upsells.push(record);
        self
    }

    pub fn with_describe(self, fields: &[&str]) -> Self {
        self.state.lock().unwrap().describe = fields.iter().map(ToString::to_string).collect();
        self
    }

    pub fn failing_queries_containing(mut self, needle: &str) -> Self {
        self.fail_queries_containing = Some(needle.to_string());
        self
    }

    /// Every `(sobject, body)` pair passed to `create_record`, in order.
    pub fn created(&self) -> Vec<(String, Value)> {
        self.state.lock().unwrap().created.clone()
    }

    /// Every `(sobject, id, body)` triple passed to `update_record`, in order.
    pub fn updates(&self) -> Vec<(String, String, Value)> {
        self.state.lock().unwrap().updates.clone()
    }

    fn record_matches(record: &Value, soql: &str) -> bool {
        record
            .get("Id")
            .and_then(Value::as_str)
            .is_some_and(|id| soql.contains(id))
    }
}

#[async_trait]
impl CrmGateway for FixtureGateway {
    async fn query(&self, soql: &str) -> Result<Vec<Value>, SfdcError> {
        if let Some(needle) = &self.fail_queries_containing {
            if soql.contains(needle.as_str()) {
                return Err(SfdcError::Api {
                    status: 500,
                    body: "fixture query failure".into(),
                });
            }
        }

        let state = self.state.lock().unwrap();
        let records = if soql.contains("FROM OpportunityContactRole") {
            state
                .contact_roles
                .iter()
                .filter(|r| {
                    r.get("OpportunityId")
                        .and_then(Value::as_str)
                        .is_some_and(|id| soql.contains(id))
                })
                .cloned()
                .collect()
        } else if soql.contains("FROM SBQQ__Quote__c") {
            state
                .quotes
                .iter()
                .filter(|r| {
                    r.get("SBQQ__Opportunity2__c")
                        .and_then(Value::as_str)
                        .is_some_and(|id| soql.contains(id))
                })
                .cloned()
                .collect()
        } else if soql.contains("FROM SBQQ__Subscription__c") {
            state
                .subscriptions
                .iter()
                .filter(|r| Self::record_matches(r, soql))
                .cloned()
                .collect()
        } else if soql.contains("FROM Opportunity") {
            // The upsell scan is the only Opportunity query keyed by account.
            if soql.contains("AccountId =") {
                state.upsells.clone()
            } else {
                state
                    .opportunities
                    .iter()
                    .filter(|r| Self::record_matches(r, soql))
                    .cloned()
                    .collect()
            }
        } else {
            Vec::new()
        };
        Ok(records)
    }

    async fn get_record(
        &self,
        sobject: &str,
        id: &str,
        _fields: &[&str],
    ) -> Result<Option<Value>, SfdcError> {
        let state = self.state.lock().unwrap();
        let pool = match sobject {
            "Opportunity" => &state.opportunities,
            _ => return Ok(None),
        };
        Ok(pool
            .iter()
            .find(|r| r.get("Id").and_then(Value::as_str) == Some(id))
            .cloned())
    }

    async fn create_record(&self, sobject: &str, body: &Value) -> Result<String, SfdcError> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let prefix = match sobject {
            "Contact" => "003",
            "OpportunityContactRole" => "00K",
            _ => "000",
        };
        let id = format!("{prefix}FIX{:09}AAA", state.next_id);
        state.created.push((sobject.to_string(), body.clone()));
        Ok(id)
    }

    async fn update_record(&self, sobject: &str, id: &str, body: &Value) -> Result<(), SfdcError> {
        let mut state = self.state.lock().unwrap();
        if sobject == "Opportunity" {
            if let Some(record) = state
                .opportunities
                .iter_mut()
                .find(|r| r.get("Id").and_then(Value::as_str) == Some(id))
            {
                if let (Some(target), Some(patch)) = (record.as_object_mut(), body.as_object()) {
                    for (key, value) in patch {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        state
            .updates
            .push((sobject.to_string(), id.to_string(), body.clone()));
        Ok(())
    }

    async fn describe_fields(&self, _sobject: &str) -> Result<Vec<String>, SfdcError> {
        Ok(self.state.lock().unwrap().describe.clone())
    }
}

pub const OPP_ID: &str = "006000000000001AAA";

/// A fully-populated Opportunity with an Account relationship.
pub fn opportunity_with_account() -> Value {
    serde_json::json!({
        "Id": OPP_ID,
        "Name": "Acme Corp Renewal 2026",
        "StageName": "Outreach",
        "AccountId": "001000000000001AAA",
        "Amount": 42000.0,
        "CloseDate": "2026-11-30",
        "Type": "Renewal",
        "IsClosed": false,
        "IsWon": false,
        "Account": {
            "Id": "001000000000001AAA",
            "Name": "Acme Corp",
            "Phone": "+1 555 0100",
            "Website": "https://acme.example",
            "BillingStreet": "1 Main St",
            "BillingCity": "Springfield",
            "BillingState": "IL",
            "BillingPostalCode": "62701",
            "BillingCountry": "USA",
            "ShippingStreet": "2 Dock Rd",
            "ShippingCity": "Portland",
            "ShippingState": "OR",
            "ShippingPostalCode": "97201",
            "ShippingCountry": "USA"
        }
    })
}
