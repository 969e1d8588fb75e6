use async_trait::async_trait;

use crate::error::SfdcError;

/// Data-access operations the handlers need from the CRM.
///
/// Handlers take `&dyn CrmGateway` so the checklist logic and the other
/// handlers can run against deterministic fixture data in tests instead of a
/// live org.
#[async_trait]
pub trait CrmGateway: Send + Sync {
    /// Run a SOQL query and return the `records` array.
    async fn query(&self, soql: &str) -> Result<Vec<serde_json::Value>, SfdcError>;

    /// Fetch a single record by id with an explicit field list.
    ///
    /// Returns `Ok(None)` when the record does not exist (HTTP 404).
    async fn get_record(
        &self,
        sobject: &str,
        id: &str,
        fields: &[&str],
    ) -> Result<Option<serde_json::Value>, SfdcError>;

    /// Create a record and return its new id.
    async fn create_record(
        &self,
        sobject: &str,
        body: &serde_json::Value,
    ) -> Result<String, SfdcError>;

    /// Patch fields on an existing record.
    async fn update_record(
        &self,
        sobject: &str,
        id: &str,
        body: &serde_json::Value,
    ) -> Result<(), SfdcError>;

    /// Field API names from the sobject describe.
    async fn describe_fields(&self, sobject: &str) -> Result<Vec<String>, SfdcError>;
}
