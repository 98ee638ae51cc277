use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::Config;

/// Longest body prefix we are willing to put in a log record.
const LOG_PREVIEW_CHARS: usize = 500;

/// One entry of Nominatim's search response, ordered by relevance.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Place {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lon: String,
    #[serde(default)]
    pub address: Option<Address>,
}

/// Structured address block returned when `addressdetails=1` is requested.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Address {
    pub country: Option<String>,
}

impl Place {
    /// Country of this place. The structured `address.country` field is
    /// authoritative when present; otherwise the last comma-separated
    /// segment of `display_name` is taken. Falls back to "Unknown".
    pub fn country(&self) -> String {
        if let Some(country) = self.address.as_ref().and_then(|a| a.country.as_deref()) {
            let trimmed = country.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }

        let segment = self
            .display_name
            .rsplit(',')
            .next()
            .map(str::trim)
            .unwrap_or("");
        if segment.is_empty() {
            "Unknown".to_string()
        } else {
            segment.to_string()
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("request to Nominatim failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Nominatim returned an unparseable body")]
    MalformedBody(#[source] serde_json::Error),
}

/// Shared Nominatim search client. Built once at startup; the provider
/// rejects anonymous traffic, so the identifying User-Agent is mandatory.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeocodeClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.nominatim_url.trim_end_matches('/').to_string(),
        })
    }

    /// Run one search against Nominatim and return the best match.
    /// `Ok(None)` means the provider had no result for the query; that also
    /// covers non-success provider statuses.
    pub async fn search(&self, query: &str) -> Result<Option<Place>, GeocodeError> {
        let url = format!("{}/search", self.base_url);
        info!(%query, "querying Nominatim");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("limit", "1"),
                ("addressdetails", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, %query, "Nominatim returned non-success status");
            return Ok(None);
        }

        let body = response.text().await?;
        debug!(body = %log_preview(&body), "Nominatim response");

        let places: Vec<Place> = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, body = %log_preview(&body), "failed to parse Nominatim body");
            GeocodeError::MalformedBody(e)
        })?;

        Ok(places.into_iter().next())
    }
}

fn log_preview(body: &str) -> String {
    body.chars().take(LOG_PREVIEW_CHARS).collect()
}
