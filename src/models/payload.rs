use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound agent payload. Telex and plain JSON-RPC callers send different
/// shapes, so every field is optional and `{}` deserializes cleanly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundPayload {
    pub method: Option<String>,
    pub params: Option<Params>,
    pub query: Option<String>,
    pub message: Option<MessageBody>,
    pub data: Option<DataBody>,
    // Opaque request identifier, echoed back verbatim
    pub id: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Params {
    pub query: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataBody {
    pub query: Option<String>,
}

/// A `message` field is either a bare string or a structured chat message
/// with an ordered list of parts.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MessageBody {
    Text(String),
    Structured {
        #[serde(default)]
        parts: Vec<MessagePart>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePart {
    #[serde(default)]
    pub kind: String,
    pub text: Option<String>,
}

impl InboundPayload {
    /// Extract the place-name query, first non-empty match wins:
    /// `params.query`, then top-level `query`, then `message`, then
    /// `data.query`.
    pub fn resolve_query(&self) -> Option<String> {
        if let Some(q) = self.params.as_ref().and_then(|p| p.query.as_deref()) {
            if let Some(q) = non_empty(q) {
                return Some(q);
            }
        }

        if let Some(q) = self.query.as_deref().and_then(non_empty) {
            return Some(q);
        }

        if let Some(q) = self.message.as_ref().and_then(MessageBody::resolve_text) {
            return Some(q);
        }

        self.data
            .as_ref()
            .and_then(|d| d.query.as_deref())
            .and_then(non_empty)
    }
}

impl MessageBody {
    fn resolve_text(&self) -> Option<String> {
        match self {
            MessageBody::Text(text) => non_empty(text),
            MessageBody::Structured { parts } => parts
                .iter()
                .find(|part| part.kind == "text")
                .and_then(|part| part.text.as_deref())
                .map(strip_command_prefix)
                .and_then(non_empty),
        }
    }
}

/// Chat surfaces prepend the agent's slash command (`/geonation_agent Paris`).
/// Drop one leading slash token; the rest is the query.
fn strip_command_prefix(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.starts_with('/') {
        match trimmed.split_once(char::is_whitespace) {
            Some((_, rest)) => rest,
            None => "",
        }
    } else {
        trimmed
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> InboundPayload {
        serde_json::from_value(value).expect("payload should deserialize")
    }

    #[test]
    fn test_params_query_wins_over_everything() {
        let p = payload(json!({
            "params": {"query": "Lagos"},
            "query": "Berlin",
            "message": "Madrid",
            "data": {"query": "Oslo"}
        }));
        assert_eq!(p.resolve_query().as_deref(), Some("Lagos"));
    }

    #[test]
    fn test_top_level_query_beats_message() {
        let p = payload(json!({
            "query": "Berlin",
            "message": "Madrid"
        }));
        assert_eq!(p.resolve_query().as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_plain_string_message() {
        let p = payload(json!({"message": "Nairobi"}));
        assert_eq!(p.resolve_query().as_deref(), Some("Nairobi"));
    }

    #[test]
    fn test_structured_message_strips_command_prefix() {
        let p = payload(json!({
            "message": {
                "parts": [
                    {"kind": "image", "text": null},
                    {"kind": "text", "text": "/geonation_agent Paris"}
                ]
            }
        }));
        assert_eq!(p.resolve_query().as_deref(), Some("Paris"));
    }

    #[test]
    fn test_structured_message_without_command_prefix() {
        let p = payload(json!({
            "message": {"parts": [{"kind": "text", "text": "Addis Ababa"}]}
        }));
        assert_eq!(p.resolve_query().as_deref(), Some("Addis Ababa"));
    }

    #[test]
    fn test_bare_command_token_is_not_a_query() {
        let p = payload(json!({
            "message": {"parts": [{"kind": "text", "text": "/geonation_agent"}]}
        }));
        assert_eq!(p.resolve_query(), None);
    }

    #[test]
    fn test_structured_message_without_parts_resolves_nothing() {
        let p = payload(json!({"message": {}}));
        assert_eq!(p.resolve_query(), None);
    }

    #[test]
    fn test_data_query_is_last_resort() {
        let p = payload(json!({"data": {"query": "Oslo"}}));
        assert_eq!(p.resolve_query().as_deref(), Some("Oslo"));
    }

    #[test]
    fn test_empty_params_query_falls_through() {
        let p = payload(json!({
            "params": {"query": "   "},
            "query": "Berlin"
        }));
        assert_eq!(p.resolve_query().as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_empty_payload_resolves_nothing() {
        let p = payload(json!({}));
        assert_eq!(p.resolve_query(), None);
    }

    #[test]
    fn test_whitespace_query_is_trimmed() {
        let p = payload(json!({"query": "  Tokyo  "}));
        assert_eq!(p.resolve_query().as_deref(), Some("Tokyo"));
    }

    #[test]
    fn test_id_round_trips_arbitrary_values() {
        let p = payload(json!({"id": 42}));
        assert_eq!(p.id, Some(json!(42)));

        let p = payload(json!({"id": "req-7"}));
        assert_eq!(p.id, Some(json!("req-7")));
    }
}
