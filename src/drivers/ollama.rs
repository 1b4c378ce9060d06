//! Ollama chat API driver
//!
//! Request messages use the OpenAI `{role, content}` shape. The reply sits at
//! `message.content` and token counts at `prompt_eval_count` / `eval_count`.
//! `/api/chat` streams unless told otherwise, so request bodies pin `stream: false`.

use serde_json::Value;

use crate::types::{Message, UsageInfo};
use crate::Result;

use super::{required_content, required_count, usage_logged, FormatDriver, ProviderKind};

#[derive(Debug, Clone, Copy, Default)]
pub struct OllamaDriver;

impl FormatDriver for OllamaDriver {
    fn provider_id(&self) -> &str {
        ProviderKind::Ollama.key()
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Ollama
    }

    fn format_messages(&self, messages: &[Message]) -> Vec<Value> {
        messages.iter().map(Message::to_role_content).collect()
    }

    fn parse_response(&self, response: &Value) -> Result<Vec<Message>> {
        let content =
            required_content(ProviderKind::Ollama, response, "/message/content", "message.content")?;
        Ok(vec![Message::assistant(content)])
    }

    fn parse_usage(&self, response: &Value) -> Result<UsageInfo> {
        let prompt = required_count(
            ProviderKind::Ollama,
            response,
            "/prompt_eval_count",
            "prompt_eval_count",
        )?;
        let completion =
            required_count(ProviderKind::Ollama, response, "/eval_count", "eval_count")?;
        Ok(usage_logged(ProviderKind::Ollama, prompt, completion))
    }

    fn build_request_body(&self, messages: &[Message], model: &str) -> Value {
        serde_json::json!({
            "model": model,
            "messages": self.format_messages(messages),
            "stream": false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ollama_round_trip() {
        let driver = OllamaDriver;
        let formatted = driver.format_messages(&[Message::user("hi")]);
        assert_eq!(formatted, vec![json!({"role": "user", "content": "hi"})]);

        let msgs = driver
            .parse_response(&json!({"model": "llama3", "message": {"role": "assistant", "content": "hello"}, "done": true}))
            .unwrap();
        assert_eq!(msgs, vec![Message::assistant("hello")]);
    }

    #[test]
    fn test_ollama_missing_message_fails() {
        let err = OllamaDriver.parse_response(&json!({"done": true})).unwrap_err();
        assert!(err.to_string().starts_with("Invalid Ollama response format"));
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("message.content")
        );
    }

    #[test]
    fn test_ollama_empty_content_fails() {
        assert!(OllamaDriver
            .parse_response(&json!({"message": {"content": ""}}))
            .is_err());
    }

    #[test]
    fn test_ollama_usage() {
        let usage = OllamaDriver
            .parse_usage(&json!({"prompt_eval_count": 26, "eval_count": 298}))
            .unwrap();
        assert_eq!(usage.prompt_tokens, 26);
        assert_eq!(usage.completion_tokens, 298);
        assert_eq!(usage.total_tokens, 324);
    }

    #[test]
    fn test_ollama_request_disables_streaming() {
        let body = OllamaDriver.build_request_body(&[Message::user("hi")], "llama3");
        assert_eq!(body["stream"], json!(false));
        assert_eq!(body["model"], "llama3");
    }
}
