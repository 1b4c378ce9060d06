use thiserror::Error;

/// Where a parse or configuration failure happened.
///
/// Drivers fill `field_path` with the JSON path they looked up and `source` with
/// their provider key; the config loader uses `models[i].parser` and `format_config`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    pub field_path: Option<String>,
    /// Why the value was rejected, e.g. "absent", "empty string", "not a string".
    pub details: Option<String>,
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Unified error type for format drivers and their configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// A provider response did not carry content at the expected location.
    #[error("Invalid {provider} response format: {message}{}", format_context(.context))]
    Format {
        provider: String,
        message: String,
        context: ErrorContext,
    },

    #[error("Missing or invalid {field} in {provider} usage")]
    Usage { provider: String, field: String },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Renders `" (field: .., details: .., source: ..)"`, or nothing for an empty context.
fn format_context(ctx: &ErrorContext) -> String {
    let parts: Vec<String> = [
        ("field", &ctx.field_path),
        ("details", &ctx.details),
        ("source", &ctx.source),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.as_ref().map(|v| format!("{label}: {v}")))
    .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a response format error for `provider` with structured context
    pub fn format_with_context(
        provider: impl Into<String>,
        msg: impl Into<String>,
        context: ErrorContext,
    ) -> Self {
        Error::Format {
            provider: provider.into(),
            message: msg.into(),
            context,
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Context attached to `Format` and `Configuration` errors
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Format { context, .. } | Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Whether this is a response format error.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::Format { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display_names_provider() {
        let err = Error::format_with_context(
            "Ollama",
            "missing message.content",
            ErrorContext::new().with_field_path("message.content"),
        );
        assert_eq!(
            err.to_string(),
            "Invalid Ollama response format: missing message.content (field: message.content)"
        );
        assert!(err.is_format_error());
    }

    #[test]
    fn test_configuration_error_lists_full_context() {
        let err = Error::configuration_with_context(
            "unknown parser 'mistral' for model 'b'",
            ErrorContext::new()
                .with_field_path("models[1].parser")
                .with_details("not a provider key")
                .with_source("format_config"),
        );
        assert_eq!(
            err.to_string(),
            "Configuration error: unknown parser 'mistral' for model 'b' \
             (field: models[1].parser, details: not a provider key, source: format_config)"
        );
    }

    #[test]
    fn test_context_only_on_structured_variants() {
        let err = Error::Usage {
            provider: "openai".into(),
            field: "usage.prompt_tokens".into(),
        };
        assert!(err.context().is_none());
        assert!(!err.is_format_error());
    }
}
