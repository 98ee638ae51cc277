use serde::{Deserialize, Serialize};

/// The answer to one lookup: the place the caller asked about and the
/// country it resolved to, with the provider's coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryResult {
    pub place: String,
    pub country: String,
    pub lat: String,
    pub lon: String,
}

impl CountryResult {
    /// Human-readable sentence for chat surfaces.
    pub fn summary(&self) -> String {
        format!("{} is located in {}.", self.place, self.country)
    }
}
