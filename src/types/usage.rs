//! Token usage reported by a provider response

use serde::{Deserialize, Serialize};

/// Token usage information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageInfo {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

impl UsageInfo {
    pub fn new(prompt_tokens: u64, completion_tokens: u64) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum() {
        let u = UsageInfo::new(28, 14);
        assert_eq!(u.total_tokens, 42);
    }

    #[test]
    fn test_total_saturates() {
        let u = UsageInfo::new(u64::MAX, 1);
        assert_eq!(u.total_tokens, u64::MAX);
    }
}
