use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // Base URL of the Nominatim instance to query
    #[serde(default = "default_nominatim_url")]
    pub nominatim_url: String,

    // Nominatim's usage policy requires an identifying User-Agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            nominatim_url: default_nominatim_url(),
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_nominatim_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_user_agent() -> String {
    format!(
        "geonation-agent/{} (https://github.com/geonation/geonation-agent)",
        env!("CARGO_PKG_VERSION")
    )
}

fn default_request_timeout_secs() -> u64 {
    10
}
