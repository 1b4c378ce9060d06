//! Provider format drivers — one registry entry per supported provider
//!
//! Each driver converts the uniform [`Message`] sequence into the wire shape its
//! provider expects and parses that provider's response back. The provider set is
//! closed: [`ProviderKind`] enumerates it and maps every variant to a `'static`
//! driver behind `&dyn FormatDriver`, so lookups never allocate and the registry
//! can be shared across threads without coordination.

pub mod echo;
pub mod llamacpp;
pub mod ollama;

use serde_json::Value;
use std::fmt;
use tracing::debug;

use crate::error::{Error, ErrorContext};
use crate::types::{Message, UsageInfo};
use crate::Result;

pub use echo::EchoDriver;
pub use llamacpp::LlamaCppDriver;
pub use ollama::OllamaDriver;

/// Core trait for provider-specific message adaptation.
///
/// Implementations are pure: no I/O, no interior state. `format_messages` must
/// return a sequence of the same length and order as its input.
pub trait FormatDriver: Send + Sync + fmt::Debug {
    /// Registry key this driver is bound to.
    fn provider_id(&self) -> &str;

    fn kind(&self) -> ProviderKind;

    /// Convert uniform messages into provider wire messages.
    fn format_messages(&self, messages: &[Message]) -> Vec<Value>;

    /// Extract the assistant reply from a non-streaming provider response.
    fn parse_response(&self, response: &Value) -> Result<Vec<Message>>;

    /// Extract prompt/completion token counts from a provider response.
    fn parse_usage(&self, response: &Value) -> Result<UsageInfo>;

    /// Assemble a chat request body for `model`.
    fn build_request_body(&self, messages: &[Message], model: &str) -> Value {
        serde_json::json!({
            "model": model,
            "messages": self.format_messages(messages),
        })
    }
}

/// Supported providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderKind {
    /// OpenAI chat completions; also the fallback for unknown keys.
    #[default]
    OpenAi,
    Ollama,
    DeepSeek,
    LlamaCpp,
    /// Pass-through driver for test harnesses. Never fails.
    Echo,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 5] = [
        ProviderKind::OpenAi,
        ProviderKind::Ollama,
        ProviderKind::DeepSeek,
        ProviderKind::LlamaCpp,
        ProviderKind::Echo,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Ollama => "ollama",
            ProviderKind::DeepSeek => "deepseek",
            ProviderKind::LlamaCpp => "llamacpp",
            ProviderKind::Echo => "echo",
        }
    }

    /// Human-readable name used in error messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::Ollama => "Ollama",
            ProviderKind::DeepSeek => "DeepSeek",
            ProviderKind::LlamaCpp => "Llama.cpp",
            ProviderKind::Echo => "Echo",
        }
    }

    /// Exact, case-sensitive key match.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    /// Like [`from_key`](Self::from_key), but unknown keys map to the default provider.
    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            debug!(
                provider_key = key,
                fallback = Self::default().key(),
                "unknown provider key, using default format"
            );
            Self::default()
        })
    }

    pub fn driver(self) -> &'static dyn FormatDriver {
        match self {
            ProviderKind::OpenAi => &OPENAI,
            ProviderKind::Ollama => &OLLAMA,
            ProviderKind::DeepSeek => &DEEPSEEK,
            ProviderKind::LlamaCpp => &LLAMACPP,
            ProviderKind::Echo => &ECHO,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

static OPENAI: OpenAiDriver = OpenAiDriver::new(ProviderKind::OpenAi);
static DEEPSEEK: OpenAiDriver = OpenAiDriver::new(ProviderKind::DeepSeek);
static OLLAMA: OllamaDriver = OllamaDriver;
static LLAMACPP: LlamaCppDriver = LlamaCppDriver;
static ECHO: EchoDriver = EchoDriver;

/// Resolve a provider key to its driver, falling back to the OpenAI format.
///
/// Never fails: unrecognized keys are an expected case.
pub fn get_formatter(provider_key: &str) -> &'static dyn FormatDriver {
    ProviderKind::resolve(provider_key).driver()
}

/// OpenAI-compatible chat completions driver — shared by OpenAI and DeepSeek.
#[derive(Debug)]
pub struct OpenAiDriver {
    kind: ProviderKind,
}

impl OpenAiDriver {
    pub const fn new(kind: ProviderKind) -> Self {
        Self { kind }
    }
}

impl FormatDriver for OpenAiDriver {
    fn provider_id(&self) -> &str {
        self.kind.key()
    }

    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn format_messages(&self, messages: &[Message]) -> Vec<Value> {
        messages.iter().map(Message::to_role_content).collect()
    }

    fn parse_response(&self, response: &Value) -> Result<Vec<Message>> {
        if response.get("choices").is_none() {
            return Err(Error::format_with_context(
                self.kind.display_name(),
                "missing choices",
                ErrorContext::new()
                    .with_field_path("choices")
                    .with_source(self.provider_id()),
            ));
        }
        let content = required_content(
            self.kind,
            response,
            "/choices/0/message/content",
            "choices[0].message.content",
        )?;
        Ok(vec![Message::assistant(content)])
    }

    fn parse_usage(&self, response: &Value) -> Result<UsageInfo> {
        let prompt = required_count(
            self.kind,
            response,
            "/usage/prompt_tokens",
            "usage.prompt_tokens",
        )?;
        let completion = required_count(
            self.kind,
            response,
            "/usage/completion_tokens",
            "usage.completion_tokens",
        )?;
        Ok(usage_logged(self.kind, prompt, completion))
    }
}

/// Non-empty string at `pointer`, or a format error naming `field_path`.
///
/// Empty content is rejected the same as missing content.
pub(crate) fn required_content<'a>(
    kind: ProviderKind,
    response: &'a Value,
    pointer: &str,
    field_path: &str,
) -> Result<&'a str> {
    match response.pointer(pointer) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.as_str()),
        found => {
            let details = match found {
                None | Some(Value::Null) => "absent",
                Some(Value::String(_)) => "empty string",
                Some(_) => "not a string",
            };
            Err(Error::format_with_context(
                kind.display_name(),
                format!("missing {}", field_path),
                ErrorContext::new()
                    .with_field_path(field_path)
                    .with_details(details)
                    .with_source(kind.key()),
            ))
        }
    }
}

pub(crate) fn required_count(
    kind: ProviderKind,
    response: &Value,
    pointer: &str,
    field_path: &str,
) -> Result<u64> {
    response
        .pointer(pointer)
        .and_then(Value::as_u64)
        .ok_or_else(|| Error::Usage {
            provider: kind.key().to_string(),
            field: field_path.to_string(),
        })
}

pub(crate) fn usage_logged(kind: ProviderKind, prompt: u64, completion: u64) -> UsageInfo {
    let usage = UsageInfo::new(prompt, completion);
    debug!(
        provider = kind.key(),
        prompt_tokens = usage.prompt_tokens,
        completion_tokens = usage.completion_tokens,
        "parsed token usage"
    );
    usage
}
