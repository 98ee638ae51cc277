use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    models::{AgentError, CountryResult, InboundPayload},
    AppState,
};

use super::lookup_country;

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CountryResult>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl ChatResponse {
    fn answer(result: CountryResult, id: Option<Value>) -> Self {
        Self {
            message: result.summary(),
            result: Some(result),
            id,
        }
    }

    fn prompt(message: String, id: Option<Value>) -> Self {
        Self {
            result: None,
            message,
            id,
        }
    }
}

/// Chat-style agent endpoint. This surface never hard-fails: whatever
/// happens, the caller gets HTTP 200 with a human-readable message.
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<InboundPayload>,
) -> impl IntoResponse {
    debug!(?payload, "chat payload received");
    let id = payload.id.clone();

    let Some(query) = payload.resolve_query() else {
        return Json(ChatResponse::prompt(
            "Please provide the name of a city or town you'd like to know the country for!"
                .to_string(),
            id,
        ));
    };

    match lookup_country(&state, &query).await {
        Ok(result) => Json(ChatResponse::answer(result, id)),
        Err(AgentError::NoMatchFound(query)) => Json(ChatResponse::prompt(
            format!("Sorry, I couldn't find the country for '{}'.", query),
            id,
        )),
        Err(err) => Json(ChatResponse::prompt(err.to_string(), id)),
    }
}
