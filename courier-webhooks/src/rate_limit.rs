//! Rate-limit response parsing

use serde::Deserialize;

/// Body of an HTTP 429 answer
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RateLimitResponse {
    #[serde(default)]
    pub message: String,

    /// Seconds to wait before retrying (may be fractional)
    pub retry_after: f64,

    /// Whether the limit applies to every route
    #[serde(default)]
    pub global: bool,
}

impl RateLimitResponse {
    /// Parse a 429 body; `None` if it does not carry a usable `retry_after`
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|response| response.retry_after.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_body() {
        let response =
            RateLimitResponse::parse(r#"{"retry_after":1,"message":"x","global":false}"#).unwrap();
        assert_eq!(response.retry_after, 1.0);
        assert_eq!(response.message, "x");
        assert!(!response.global);
    }

    #[test]
    fn test_parse_fractional() {
        let response = RateLimitResponse::parse(r#"{"retry_after":0.25}"#).unwrap();
        assert_eq!(response.retry_after, 0.25);
        assert!(response.message.is_empty());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(RateLimitResponse::parse("slow down").is_none());
        assert!(RateLimitResponse::parse(r#"{"message":"no delay"}"#).is_none());
        assert!(RateLimitResponse::parse("").is_none());
    }
}
