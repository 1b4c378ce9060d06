//! llama.cpp server driver. Replies are read from the top-level `content` field.

use serde_json::Value;

use crate::types::{Message, UsageInfo};
use crate::Result;

use super::{required_content, required_count, usage_logged, FormatDriver, ProviderKind};

#[derive(Debug, Clone, Copy, Default)]
pub struct LlamaCppDriver;

impl FormatDriver for LlamaCppDriver {
    fn provider_id(&self) -> &str {
        ProviderKind::LlamaCpp.key()
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::LlamaCpp
    }

    fn format_messages(&self, messages: &[Message]) -> Vec<Value> {
        messages.iter().map(Message::to_role_content).collect()
    }

    fn parse_response(&self, response: &Value) -> Result<Vec<Message>> {
        let content = required_content(ProviderKind::LlamaCpp, response, "/content", "content")?;
        Ok(vec![Message::assistant(content)])
    }

    fn parse_usage(&self, response: &Value) -> Result<UsageInfo> {
        let prompt = required_count(
            ProviderKind::LlamaCpp,
            response,
            "/tokens_evaluated",
            "tokens_evaluated",
        )?;
        let completion = required_count(
            ProviderKind::LlamaCpp,
            response,
            "/tokens_predicted",
            "tokens_predicted",
        )?;
        Ok(usage_logged(ProviderKind::LlamaCpp, prompt, completion))
    }
}
