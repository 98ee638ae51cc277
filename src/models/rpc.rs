use serde::Serialize;
use serde_json::Value;

use super::error::AgentError;

/// Request id to use when the caller did not supply one. The envelope always
/// carries an id, never null.
pub fn fallback_id() -> Value {
    Value::String("1".to_string())
}

#[derive(Debug, Clone, Serialize)]
pub struct RpcResponse {
    pub jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    pub id: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl RpcResponse {
    pub fn success(result: Value, id: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            result: Some(result),
            error: None,
            id: id.unwrap_or_else(fallback_id),
        }
    }

    pub fn error(err: &AgentError, id: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            result: None,
            error: Some(RpcError {
                code: err.rpc_code(),
                message: err.to_string(),
            }),
            id: id.unwrap_or_else(fallback_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_omits_error() {
        let resp = RpcResponse::success(json!({"country": "France"}), Some(json!(7)));
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["result"]["country"], "France");
        assert_eq!(value["id"], 7);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_error_envelope_omits_result() {
        let resp = RpcResponse::error(&AgentError::MissingQuery, None);
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["error"]["code"], -32602);
        assert_eq!(value["error"]["message"], "Missing required parameter: query");
        assert!(value.get("result").is_none());
    }

    #[test]
    fn test_missing_id_defaults_to_fixed_fallback() {
        let resp = RpcResponse::success(json!({}), None);
        assert_eq!(resp.id, json!("1"));
    }

    #[test]
    fn test_id_echoed_verbatim() {
        let resp = RpcResponse::error(&AgentError::UpstreamUnavailable, Some(json!("abc-123")));
        assert_eq!(resp.id, json!("abc-123"));
    }
}
