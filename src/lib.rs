use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;

use config::Config;
use services::GeocodeClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub geocoder: Arc<GeocodeClient>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let geocoder = GeocodeClient::new(&config)?;
        Ok(Self {
            config,
            geocoder: Arc::new(geocoder),
        })
    }
}

/// Assemble the HTTP surface over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::manifest).post(handlers::chat::chat))
        .route(
            "/agent",
            post(handlers::rpc::rpc).get(handlers::lookup::lookup),
        )
        .route(
            "/agent/",
            post(handlers::rpc::rpc).get(handlers::lookup::lookup),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
