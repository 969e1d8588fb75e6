//! Config loading and Salesforce session setup shared by every command.

use anyhow::Context;

use sl_config::SaleslineConfig;
use sl_sfdc::RestGateway;

/// Load layered configuration, including `.env` discovery.
pub fn load_config() -> anyhow::Result<SaleslineConfig> {
    let config = SaleslineConfig::load_with_dotenv().context("failed to load configuration")?;

    if !config.salesforce.is_configured() {
        tracing::warn!(
            "salesforce credentials are not configured; set SALESLINE_SALESFORCE__INSTANCE_URL, \
             SALESLINE_SALESFORCE__CLIENT_ID and SALESLINE_SALESFORCE__CLIENT_SECRET, or write \
             them to .salesline/config.toml"
        );
    }

    Ok(config)
}

/// Authenticate and return a gateway bound to the live instance.
pub async fn connect(config: &SaleslineConfig) -> anyhow::Result<RestGateway> {
    let token = sl_auth::authenticate(&config.salesforce)
        .await
        .context("salesforce authentication failed")?;

    tracing::info!(instance = %token.instance_url(), "authenticated");

    Ok(RestGateway::new(
        token,
        config.salesforce.api_version.clone(),
    ))
}
