//! HTTP front end for the handlers.
//!
//! `tiny_http` is a blocking server, so the accept loop runs in
//! `spawn_blocking` and hops back onto the runtime per request with
//! `Handle::block_on`. Requests are handled one at a time; each POST body is
//! parsed as JSON, routed by path, and answered with the response envelope.
//!
//! The access token is re-checked before every request and refreshed once it
//! nears the assumed session lifetime, so long-lived `sln serve` processes
//! never send a dead token.

use anyhow::Context;
use tokio::runtime::Handle;

use sl_auth::STALENESS_BUFFER_SECS;
use sl_config::SaleslineConfig;
use sl_handlers::{Envelope, HandlerError};
use sl_sfdc::RestGateway;

pub async fn serve(config: SaleslineConfig) -> anyhow::Result<()> {
    let handle = Handle::current();
    tokio::task::spawn_blocking(move || accept_loop(&handle, &config))
        .await
        .context("server thread panicked")?
}

fn accept_loop(handle: &Handle, config: &SaleslineConfig) -> anyhow::Result<()> {
    let addr = config.server.addr();
    let server = tiny_http::Server::http(&addr)
        .map_err(|error| anyhow::anyhow!("failed to bind {addr}: {error}"))?;

    let mut token = handle.block_on(sl_auth::authenticate(&config.salesforce))?;
    eprintln!("Salesline listening on http://{addr}");

    loop {
        let mut request = match server.recv() {
            Ok(request) => request,
            Err(error) => {
                tracing::warn!(%error, "accept failed");
                continue;
            }
        };

        if token.is_stale(STALENESS_BUFFER_SECS) {
            match handle.block_on(sl_auth::authenticate(&config.salesforce)) {
                Ok(fresh) => {
                    tracing::info!("access token refreshed");
                    token = fresh;
                }
                Err(error) => {
                    tracing::error!(%error, "re-authentication failed");
                    let envelope = Envelope::error(&HandlerError::Upstream(format!(
                        "re-authentication failed: {error}"
                    )));
                    respond(request, &envelope);
                    continue;
                }
            }
        }

        let gateway = RestGateway::new(token.clone(), config.salesforce.api_version.clone());
        let envelope = handle.block_on(dispatch(&gateway, &mut request));
        respond(request, &envelope);
    }
}

async fn dispatch(gateway: &RestGateway, request: &mut tiny_http::Request) -> Envelope {
    if *request.method() != tiny_http::Method::Post {
        return Envelope {
            status_code: 405,
            body: serde_json::json!({
                "success": false,
                "error": "Method Not Allowed - all handlers take POST",
            }),
        };
    }

    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or(&url).to_string();

    let body = match std::io::read_to_string(request.as_reader()) {
        Ok(body) => body,
        Err(error) => {
            return Envelope::error(&HandlerError::Validation(format!(
                "unreadable request body: {error}"
            )));
        }
    };

    let payload: serde_json::Value = if body.trim().is_empty() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(error) => {
                return Envelope::error(&HandlerError::Validation(format!(
                    "invalid JSON body: {error}"
                )));
            }
        }
    };

    route(gateway, &path, payload).await
}

async fn route(gateway: &RestGateway, path: &str, payload: serde_json::Value) -> Envelope {
    // Deserialize the payload into the handler's request type and run it.
    macro_rules! handle {
        ($module:ident) => {
            match serde_json::from_value(payload) {
                Ok(request) => {
                    Envelope::from_result(&sl_handlers::$module::run(gateway, &request).await)
                }
                Err(error) => Envelope::error(&HandlerError::Validation(format!(
                    "invalid request body: {error}"
                ))),
            }
        };
    }

    match path {
        "/address" => handle!(address),
        "/contacts" => handle!(contact),
        "/details" => handle!(details),
        "/stage" => handle!(stage),
        "/currency" => handle!(currency),
        "/validate-renewal" => handle!(renewal),
        _ => Envelope {
            status_code: 404,
            body: serde_json::json!({
                "success": false,
                "error": format!("no handler at {path}"),
            }),
        },
    }
}

fn respond(request: tiny_http::Request, envelope: &Envelope) {
    let body = match envelope.to_json() {
        Ok(json) => json,
        Err(error) => {
            tracing::error!(%error, "failed to serialize response envelope");
            r#"{"statusCode":500,"body":{"success":false,"error":"serialization failure"}}"#
                .to_string()
        }
    };

    let mut response =
        tiny_http::Response::from_string(body).with_status_code(envelope.status_code);
    if let Ok(header) =
        tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
    {
        response = response.with_header(header);
    }

    if let Err(error) = request.respond(response) {
        tracing::warn!(%error, "failed to send response");
    }
}
