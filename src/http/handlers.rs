//! HTTP request handlers for the gateway API
//!
//! Implements the heartbeat and readiness checks plus one handler per
//! gateway operation. Request bodies nest their fields under `Data`;
//! a missing or unparseable body is treated as an empty `Data` object
//! so that required-field validation produces the error envelope.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::core::error::GatewayError;
use crate::core::types::{Request, ResponseEnvelope};
use crate::http::server::AppState;

/// Wire request: `{"Data": {...}}`
#[derive(Debug, Default, Deserialize)]
pub struct RpcRequest<T> {
    #[serde(rename = "Data")]
    pub data: Option<T>,
}

/// `Data` payload carrying a path (`init`, `get_file_content`)
#[derive(Debug, Default, Deserialize)]
pub struct PathData {
    pub path: Option<String>,
}

/// `Data` payload for `find_symbols`
#[derive(Debug, Default, Deserialize)]
pub struct SymbolData {
    pub symbol: Option<String>,
    pub symbol_type: Option<String>,
}

/// Failed envelopes carry their [`ErrorKind`] as a response extension
/// for the request logger.
///
/// [`ErrorKind`]: crate::core::error::ErrorKind
impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let kind = self.error_kind();

        let mut response = (status, Json(self)).into_response();
        if let Some(kind) = kind {
            response.extensions_mut().insert(kind);
        }
        response
    }
}

fn payload<T: Default>(body: Option<Json<RpcRequest<T>>>) -> T {
    body.and_then(|Json(req)| req.data).unwrap_or_default()
}

/// Run a request on the blocking pool; repository access is synchronous I/O
async fn dispatch(state: &AppState, request: Request) -> ResponseEnvelope {
    let gateway = Arc::clone(&state.gateway);
    match tokio::task::spawn_blocking(move || gateway.dispatch(request)).await {
        Ok(envelope) => envelope,
        Err(e) => ResponseEnvelope::failure(&GatewayError::Internal(format!(
            "gateway task failed: {e}"
        ))),
    }
}

/// Liveness check, answers whether or not a repository is bound
pub async fn heartbeat_handler() -> impl IntoResponse {
    Json(json!({ "Result": "Heartbeat" }))
}

/// Readiness check, reflects the listener startup state
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    if state.readiness.is_ready() {
        Json(json!({ "Result": "Ready" })).into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "server not ready" })),
        )
            .into_response()
    }
}

/// Bind the session to `Data.path`
///
/// # Errors
///
/// - 400 `path is required`: `Data.path` missing or blank
/// - 400 binding error: path does not exist or is not a directory
pub async fn init_handler(
    State(state): State<AppState>,
    body: Option<Json<RpcRequest<PathData>>>,
) -> ResponseEnvelope {
    let data = payload(body);
    dispatch(&state, Request::Init { path: data.path }).await
}

/// File tree of the bound repository
pub async fn file_tree_handler(State(state): State<AppState>) -> ResponseEnvelope {
    dispatch(&state, Request::FileTree).await
}

/// Usages of `Data.symbol` as a `Data.symbol_type`
///
/// An unknown symbol yields `"Result": []`, not an error.
pub async fn find_symbols_handler(
    State(state): State<AppState>,
    body: Option<Json<RpcRequest<SymbolData>>>,
) -> ResponseEnvelope {
    let data = payload(body);
    dispatch(
        &state,
        Request::FindSymbols {
            symbol: data.symbol,
            symbol_type: data.symbol_type,
        },
    )
    .await
}

/// Full text of `Data.path` within the bound repository
///
/// # Errors
///
/// - 400 `path is required`
/// - 400 `repository not initialized`
/// - 404 `file not found: <path>`
pub async fn get_file_content_handler(
    State(state): State<AppState>,
    body: Option<Json<RpcRequest<PathData>>>,
) -> ResponseEnvelope {
    let data = payload(body);
    dispatch(&state, Request::GetFileContent { path: data.path }).await
}
