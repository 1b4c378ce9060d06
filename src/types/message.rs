//! Uniform message format shared by every provider driver

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Role attached to messages produced by `parse_response`.
pub const ASSISTANT_ROLE: &str = "assistant";

/// Unified message structure.
///
/// `role` is a free-form label and is never validated. Fields other than
/// `role` and `content` are kept in `extra`; only pass-through drivers emit
/// them on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
            extra: Map::new(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new("system", text)
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new("user", text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(ASSISTANT_ROLE, text)
    }

    /// Attach an additional field (e.g. `name`) to the message.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Wire form carrying only `role` and `content`.
    pub fn to_role_content(&self) -> Value {
        serde_json::json!({ "role": self.role, "content": self.content })
    }

    /// Wire form carrying every field, including `extra`.
    pub fn to_passthrough(&self) -> Value {
        let mut obj = self.extra.clone();
        obj.insert("role".into(), Value::String(self.role.clone()));
        obj.insert("content".into(), Value::String(self.content.clone()));
        Value::Object(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_keeps_extra_fields() {
        let msg: Message = serde_json::from_value(json!({
            "role": "user",
            "content": "hi",
            "name": "alice"
        }))
        .unwrap();
        assert_eq!(msg.role, "user");
        assert_eq!(msg.content, "hi");
        assert_eq!(msg.extra.get("name"), Some(&json!("alice")));
    }

    #[test]
    fn test_role_content_drops_extra() {
        let msg = Message::user("hi").with_extra("name", "alice");
        assert_eq!(msg.to_role_content(), json!({"role": "user", "content": "hi"}));
        assert_eq!(
            msg.to_passthrough(),
            json!({"role": "user", "content": "hi", "name": "alice"})
        );
    }

    #[test]
    fn test_free_form_role() {
        let msg = Message::new("narrator", "");
        assert_eq!(msg.role, "narrator");
        assert!(msg.content.is_empty());
    }
}
