use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::debug;

use crate::{
    models::{AgentError, InboundPayload, RpcResponse},
    AppState,
};

use super::lookup_country;

const SUPPORTED_METHOD: &str = "getCountry";

/// JSON-RPC 2.0 agent endpoint. Stricter than the chat surface: the payload
/// must look like a request (a `method` or a `params` object), and a declared
/// method must be `getCountry`.
pub async fn rpc(
    State(state): State<AppState>,
    Json(payload): Json<InboundPayload>,
) -> (StatusCode, Json<RpcResponse>) {
    debug!(?payload, "rpc payload received");
    let id = payload.id.clone();

    if payload.method.is_none() && payload.params.is_none() {
        return reject(AgentError::InvalidRequestShape, id);
    }

    if let Some(method) = payload.method.as_deref() {
        if method != SUPPORTED_METHOD {
            return reject(AgentError::UnsupportedMethod(method.to_string()), id);
        }
    }

    let Some(query) = payload.resolve_query() else {
        return reject(AgentError::MissingQuery, id);
    };

    match lookup_country(&state, &query).await {
        Ok(result) => {
            let message = result.summary();
            let body = json!({
                "place": result.place,
                "country": result.country,
                "lat": result.lat,
                "lon": result.lon,
                "message": message,
            });
            (StatusCode::OK, Json(RpcResponse::success(body, id)))
        }
        Err(err) => reject(err, id),
    }
}

fn reject(err: AgentError, id: Option<Value>) -> (StatusCode, Json<RpcResponse>) {
    (err.rpc_status(), Json(RpcResponse::error(&err, id)))
}
