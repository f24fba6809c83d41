//! DTOs for link shortening endpoint.

use serde::Deserialize;
use validator::Validate;

use crate::domain::expiration::ExpirationOption;

/// Request to shorten a URL.
///
/// Alias rules are enforced by the service so the error names the exact
/// rule; only the URL shape is checked here.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,

    /// How long the short link stays resolvable.
    pub expires_in: ExpirationOption,

    /// Optional caller-chosen short code.
    #[serde(default)]
    pub custom_alias: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let req: ShortenRequest = serde_json::from_str(
            r#"{"original_url": "https://example.com", "expires_in": "never"}"#,
        )
        .unwrap();

        assert_eq!(req.expires_in, ExpirationOption::Indefinite);
        assert!(req.custom_alias.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_invalid_url_fails_validation() {
        let req: ShortenRequest = serde_json::from_str(
            r#"{"original_url": "not a url", "expires_in": "1h", "custom_alias": "mine"}"#,
        )
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_unknown_expiration_rejected() {
        let result = serde_json::from_str::<ShortenRequest>(
            r#"{"original_url": "https://example.com", "expires_in": "2w"}"#,
        );

        assert!(result.is_err());
    }
}
