pub mod chat;
pub mod lookup;
pub mod rpc;

use axum::{response::IntoResponse, Json};
use tracing::{error, info};

use crate::{
    models::{AgentError, CountryResult},
    AppState,
};

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "geonation-agent",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Agent manifest served at the root, describing the service to the
/// agent platform.
pub async fn manifest() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "GeoNation",
        "version": env!("CARGO_PKG_VERSION"),
        "description": env!("CARGO_PKG_DESCRIPTION"),
        "author": env!("CARGO_PKG_AUTHORS"),
        "repository": env!("CARGO_PKG_REPOSITORY")
    }))
}

/// One resolved query, one upstream call, one answer. Shared by every
/// endpoint variant; the variants only differ in how they render the result.
pub(crate) async fn lookup_country(
    state: &AppState,
    query: &str,
) -> Result<CountryResult, AgentError> {
    match state.geocoder.search(query).await {
        Ok(Some(place)) => {
            let result = CountryResult {
                place: query.to_string(),
                country: place.country(),
                lat: place.lat,
                lon: place.lon,
            };
            info!(place = %result.place, country = %result.country, "resolved country");
            Ok(result)
        }
        Ok(None) => {
            info!(%query, "no match from Nominatim");
            Err(AgentError::NoMatchFound(query.to_string()))
        }
        Err(e) => {
            error!(%query, error = %e, "upstream lookup failed");
            Err(AgentError::UpstreamUnavailable)
        }
    }
}
