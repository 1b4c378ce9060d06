//! # Types Module
//!
//! Provider-agnostic data types passed into and returned from the format drivers.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Message`] | Chat message with free-form role and text content |
//! | [`UsageInfo`] | Prompt/completion token counts reported by a provider |
//!
//! ## Example
//!
//! ```rust
//! use ai_format_rust::types::Message;
//!
//! let system = Message::system("You are a helpful assistant");
//! let user = Message::user("What's the weather?").with_extra("name", "alice");
//! assert_eq!(user.role, "user");
//! ```

pub mod message;
pub mod usage;

pub use message::{Message, ASSISTANT_ROLE};
pub use usage::UsageInfo;
