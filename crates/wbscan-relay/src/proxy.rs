//! The relay: a stateless pass-through that performs upstream HTTP GETs on
//! behalf of the pipeline.
//!
//! The marketplace's catalog endpoints reject requests from non-browser
//! clients and send no cross-origin headers, so the pipeline routes every
//! fetch through `GET /proxy?url=<target>`. The relay fetches the target
//! with a browser user-agent and returns the body verbatim — including
//! upstream error bodies — with a forced JSON content type and permissive
//! CORS headers. No caching, no rate limiting (pacing is the pipeline's
//! job), no auth.

use axum::{
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// User-agent presented to the upstream. The catalog endpoints serve
/// browser-looking clients only.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Clone)]
pub struct RelayState {
    client: reqwest::Client,
}

impl RelayState {
    /// Builds the outbound HTTP client the relay fetches through.
    ///
    /// # Errors
    ///
    /// Returns the underlying `reqwest` error if the client cannot be
    /// constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(10))
            .user_agent(BROWSER_USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[derive(Debug, Deserialize)]
struct ProxyQuery {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
}

pub fn build_app(state: RelayState) -> Router {
    Router::new()
        .route("/proxy", get(proxy))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors())
        .with_state(state)
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE])
}

async fn health() -> Json<HealthData> {
    Json(HealthData { status: "ok" })
}

/// `GET /proxy?url=<absolute url>`.
///
/// 200 with the upstream body verbatim on a completed fetch (whatever status
/// the upstream returned — the pipeline decides what the body means), 400
/// when the `url` parameter is missing or empty, 500 with the failure
/// description when the upstream fetch itself fails.
async fn proxy(State(state): State<RelayState>, Query(query): Query<ProxyQuery>) -> Response {
    let Some(target) = query.url.filter(|u| !u.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "missing url parameter").into_response();
    };

    tracing::debug!(url = %target, "forwarding upstream fetch");

    let upstream = state
        .client
        .get(&target)
        .header(header::ACCEPT, "application/json")
        .send()
        .await;

    match upstream {
        Ok(response) => {
            let status = response.status();
            match response.text().await {
                Ok(body) => {
                    tracing::debug!(upstream_status = %status, bytes = body.len(), "upstream responded");
                    (
                        StatusCode::OK,
                        [(header::CONTENT_TYPE, "application/json")],
                        body,
                    )
                        .into_response()
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read upstream body");
                    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
                }
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "upstream fetch failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
