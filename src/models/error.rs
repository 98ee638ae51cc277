use axum::http::StatusCode;

/// Everything that can go wrong between receiving a payload and answering it.
/// Every handler maps one of these into the response shape its surface
/// promises; nothing else crosses a handler boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AgentError {
    #[error("Missing required parameter: query")]
    MissingQuery,

    #[error("Request must carry a 'method' or 'params' object.")]
    InvalidRequestShape,

    #[error("Unsupported method '{0}'. Only 'getCountry' is available.")]
    UnsupportedMethod(String),

    #[error("Could not find the country for '{0}'.")]
    NoMatchFound(String),

    #[error("Failed to fetch data from OpenStreetMap.")]
    UpstreamUnavailable,

    #[error("Internal server error.")]
    Internal,
}

impl AgentError {
    /// JSON-RPC error code for the RPC surface.
    pub fn rpc_code(&self) -> i64 {
        match self {
            AgentError::MissingQuery => -32602,
            AgentError::InvalidRequestShape => -32600,
            AgentError::UnsupportedMethod(_) => -32601,
            AgentError::NoMatchFound(_) => -32004,
            AgentError::UpstreamUnavailable => -32000,
            AgentError::Internal => -32603,
        }
    }

    /// HTTP status on the strict surfaces. The RPC surface keeps
    /// missing-query and no-match at 200 inside the error envelope.
    pub fn rpc_status(&self) -> StatusCode {
        match self {
            AgentError::MissingQuery | AgentError::NoMatchFound(_) => StatusCode::OK,
            AgentError::InvalidRequestShape | AgentError::UnsupportedMethod(_) => {
                StatusCode::BAD_REQUEST
            }
            AgentError::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
            AgentError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP status on the plain `{error}` surface.
    pub fn lookup_status(&self) -> StatusCode {
        match self {
            AgentError::MissingQuery
            | AgentError::InvalidRequestShape
            | AgentError::UnsupportedMethod(_) => StatusCode::BAD_REQUEST,
            AgentError::NoMatchFound(_) => StatusCode::NOT_FOUND,
            AgentError::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
            AgentError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
