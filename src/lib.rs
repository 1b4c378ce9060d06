//! # ai-format-rust
//!
//! Per-provider chat message formatting and response parsing for LLM backends.
//!
//! ## Overview
//!
//! Callers keep conversations in one uniform [`Message`] shape. Before a request
//! goes out, the provider's driver turns those messages into the wire shape that
//! provider expects. When the response comes back, the same driver pulls the
//! assistant reply (and token usage) out of it.
//!
//! Transport, retries and credentials stay with the caller. Every operation here
//! is a pure function over in-memory values.
//!
//! ## Quick Start
//!
//! ```rust
//! use ai_format_rust::{get_formatter, Message};
//! use serde_json::json;
//!
//! let driver = get_formatter("ollama");
//! let wire = driver.format_messages(&[Message::user("hi")]);
//! assert_eq!(wire, vec![json!({"role": "user", "content": "hi"})]);
//!
//! let reply = driver.parse_response(&json!({"message": {"content": "hello"}}))?;
//! assert_eq!(reply, vec![Message::assistant("hello")]);
//! # Ok::<(), ai_format_rust::Error>(())
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`drivers`] | Provider registry and format drivers |
//! | [`types`] | Uniform message and usage types |
//! | [`config`] | YAML model → provider bindings |
//! | [`error`] | Error type with structured context |

pub mod config;
pub mod drivers;
pub mod error;
pub mod types;

pub use config::{FormatConfig, ModelBinding};
pub use drivers::{get_formatter, FormatDriver, ProviderKind};
pub use error::{Error, ErrorContext};
pub use types::{Message, UsageInfo};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
