//! Echo driver used by test harnesses.
//!
//! Messages pass through unchanged, extra fields included. Parsing never fails:
//! a missing or empty `content` becomes [`ECHO_FALLBACK`]. Only string content is
//! echoed back; a non-string `content` (number, object, ...) also yields the
//! fallback, since [`Message::content`] is text.

use serde_json::Value;

use crate::types::{Message, UsageInfo};
use crate::Result;

use super::{FormatDriver, ProviderKind};

pub const ECHO_FALLBACK: &str = "Echo response";

#[derive(Debug, Clone, Copy, Default)]
pub struct EchoDriver;

impl FormatDriver for EchoDriver {
    fn provider_id(&self) -> &str {
        ProviderKind::Echo.key()
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Echo
    }

    fn format_messages(&self, messages: &[Message]) -> Vec<Value> {
        messages.iter().map(Message::to_passthrough).collect()
    }

    fn parse_response(&self, response: &Value) -> Result<Vec<Message>> {
        let content = response
            .get("content")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(ECHO_FALLBACK);
        Ok(vec![Message::assistant(content)])
    }

    // Echo backends report no token counts.
    fn parse_usage(&self, _response: &Value) -> Result<UsageInfo> {
        Ok(UsageInfo::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_echo_passes_extra_fields() {
        let msgs = vec![
            Message::system("be brief"),
            Message::user("hi").with_extra("name", "alice"),
        ];
        let out = EchoDriver.format_messages(&msgs);
        assert_eq!(out[0], json!({"role": "system", "content": "be brief"}));
        assert_eq!(out[1], json!({"role": "user", "content": "hi", "name": "alice"}));
    }

    #[test]
    fn test_echo_fallback_content() {
        for body in [
            json!({}),
            json!({"content": ""}),
            json!({"content": null}),
            json!({"content": 42}),
            json!("raw"),
        ] {
            let msgs = EchoDriver.parse_response(&body).unwrap();
            assert_eq!(msgs, vec![Message::assistant(ECHO_FALLBACK)]);
        }
    }

    #[test]
    fn test_echo_uses_content() {
        let msgs = EchoDriver.parse_response(&json!({"content": "pong"})).unwrap();
        assert_eq!(msgs[0].content, "pong");
    }

    #[test]
    fn test_echo_usage_is_zero() {
        assert_eq!(EchoDriver.parse_usage(&json!({})).unwrap(), UsageInfo::default());
    }
}
