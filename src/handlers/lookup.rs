use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::AppState;

use super::lookup_country;

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub location: Option<String>,
}

/// Query-string lookup variant: `GET /agent?location=Lagos`.
pub async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> (StatusCode, Json<Value>) {
    debug!(?params, "lookup request received");

    let location = params
        .location
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let Some(query) = location else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing required parameter: location"})),
        );
    };

    match lookup_country(&state, query).await {
        Ok(result) => (
            StatusCode::OK,
            Json(json!({
                "location": result.place,
                "country": result.country,
            })),
        ),
        Err(err) => (err.lookup_status(), Json(json!({"error": err.to_string()}))),
    }
}
