//! Production [`CrmGateway`] over the Salesforce REST API.

use async_trait::async_trait;

use sl_auth::AccessToken;

use crate::error::SfdcError;
use crate::gateway::CrmGateway;

/// REST client bound to one authenticated instance + API version.
pub struct RestGateway {
    client: reqwest::Client,
    token: AccessToken,
    api_version: String,
}

impl RestGateway {
    #[must_use]
    pub fn new(token: AccessToken, api_version: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            api_version: api_version.into(),
        }
    }

    fn data_url(&self, path: &str) -> String {
        format!(
            "{}/services/data/{}{path}",
            self.token.instance_url(),
            self.api_version
        )
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token.secret())
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, SfdcError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(SfdcError::Api {
            status: status.as_u16(),
            body,
        })
    }

    /// Parse a successful response body, distinguishing a malformed body
    /// from a transport failure.
    async fn decode(response: reqwest::Response) -> Result<serde_json::Value, SfdcError> {
        response
            .json()
            .await
            .map_err(|e| SfdcError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CrmGateway for RestGateway {
    async fn query(&self, soql: &str) -> Result<Vec<serde_json::Value>, SfdcError> {
        let url = self.data_url(&format!("/query?q={}", urlencoding::encode(soql)));
        tracing::debug!(soql, "salesforce query");

        let response = self
            .client
            .get(url)
            .header("Authorization", self.bearer())
            .send()
            .await?;
        let response = Self::check(response).await?;

        let body: serde_json::Value = Self::decode(response).await?;
        let records = body
            .get("records")
            .and_then(serde_json::Value::as_array)
            .ok_or(SfdcError::MissingField("records"))?;
        Ok(records.clone())
    }

    async fn get_record(
        &self,
        sobject: &str,
        id: &str,
        fields: &[&str],
    ) -> Result<Option<serde_json::Value>, SfdcError> {
        let url = self.data_url(&format!(
            "/sobjects/{sobject}/{id}?fields={}",
            fields.join(",")
        ));

        let response = self
            .client
            .get(url)
            .header("Authorization", self.bearer())
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check(response).await?;
        Ok(Some(Self::decode(response).await?))
    }

    async fn create_record(
        &self,
        sobject: &str,
        body: &serde_json::Value,
    ) -> Result<String, SfdcError> {
        let url = self.data_url(&format!("/sobjects/{sobject}"));
        tracing::debug!(sobject, "salesforce create");

        let response = self
            .client
            .post(url)
            .header("Authorization", self.bearer())
            .json(body)
            .send()
            .await?;
        let response = Self::check(response).await?;

        let created: serde_json::Value = Self::decode(response).await?;
        created
            .get("id")
            .and_then(serde_json::Value::as_str)
            .map(String::from)
            .ok_or(SfdcError::MissingField("id"))
    }

    async fn update_record(
        &self,
        sobject: &str,
        id: &str,
        body: &serde_json::Value,
    ) -> Result<(), SfdcError> {
        let url = self.data_url(&format!("/sobjects/{sobject}/{id}"));
        tracing::debug!(sobject, id, "salesforce update");

        let response = self
            .client
            .patch(url)
            .header("Authorization", self.bearer())
            .json(body)
            .send()
            .await?;
        // 204 No Content on success
        Self::check(response).await?;
        Ok(())
    }

    async fn describe_fields(&self, sobject: &str) -> Result<Vec<String>, SfdcError> {
        let url = self.data_url(&format!("/sobjects/{sobject}/describe"));

        let response = self
            .client
            .get(url)
            .header("Authorization", self.bearer())
            .send()
            .await?;
        let response = Self::check(response).await?;

        let describe: serde_json::Value = Self::decode(response).await?;
        let fields = describe
            .get("fields")
            .and_then(serde_json::Value::as_array)
            .ok_or(SfdcError::MissingField("fields"))?;

        Ok(fields
            .iter()
            .filter_map(|f| f.get("name").and_then(serde_json::Value::as_str))
            .map(String::from)
            .collect())
    }
}
