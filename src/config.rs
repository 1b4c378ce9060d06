//! Model → provider format bindings
//!
//! A gateway fronting several backends declares which response format each model
//! speaks. The table is loaded from YAML:
//!
//! ```yaml
//! models:
//!   - model_name: llama3
//!     location: /ollama
//!     parser: ollama
//!   - model_name: gpt-4o
//! ```
//!
//! An empty or omitted `parser` selects the default (OpenAI) format.

use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::path::Path;

use crate::drivers::{FormatDriver, ProviderKind};
use crate::error::{Error, ErrorContext};
use crate::Result;

/// Environment variable holding the path of the bindings file.
pub const CONFIG_ENV: &str = "AI_FORMAT_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelBinding {
    pub model_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub parser: String,
}

impl ModelBinding {
    /// Provider this binding selects. Empty or unknown parser keys select the default.
    pub fn provider(&self) -> ProviderKind {
        if self.parser.is_empty() {
            return ProviderKind::default();
        }
        ProviderKind::resolve(&self.parser)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default)]
    pub models: Vec<ModelBinding>,
}

impl FormatConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content).map_err(|e| {
            Error::configuration_with_context(
                format!("unable to parse {}", path.display()),
                ErrorContext::new()
                    .with_details(e.to_string())
                    .with_source("format_config"),
            )
        })
    }

    /// Load from the file named by [`CONFIG_ENV`]; `None` when the variable is unset.
    pub fn from_env() -> Result<Option<Self>> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path).map(Some),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(raw)) => Err(Error::configuration_with_context(
                format!("{} is not valid unicode", CONFIG_ENV),
                ErrorContext::new()
                    .with_details(raw.to_string_lossy())
                    .with_source("format_config"),
            )),
        }
    }

    /// Reject bindings whose non-empty `parser` names no known provider.
    pub fn validate(&self) -> Result<()> {
        for (i, binding) in self.models.iter().enumerate() {
            if !binding.parser.is_empty() && ProviderKind::from_key(&binding.parser).is_none() {
                return Err(Error::configuration_with_context(
                    format!(
                        "unknown parser '{}' for model '{}'",
                        binding.parser, binding.model_name
                    ),
                    ErrorContext::new()
                        .with_field_path(format!("models[{}].parser", i))
                        .with_source("format_config"),
                ));
            }
        }
        Ok(())
    }

    pub fn binding(&self, model_name: &str) -> Option<&ModelBinding> {
        self.models.iter().find(|b| b.model_name == model_name)
    }

    /// Driver for `model_name`; unbound models use the default format.
    pub fn formatter_for(&self, model_name: &str) -> &'static dyn FormatDriver {
        self.binding(model_name)
            .map(ModelBinding::provider)
            .unwrap_or_default()
            .driver()
    }
}
