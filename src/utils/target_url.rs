//! Syntactic checks for target URLs.

use url::Url;

/// Errors that can occur when checking a target URL.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute HTTP(S) URL and returns its
/// serialized form.
///
/// The returned string is what `url` serializes: inner tabs and newlines are
/// dropped, non-ASCII is percent-encoded, and an empty path becomes `/`. It
/// is always a valid `Location` header value.
///
/// # Errors
///
/// Returns [`TargetUrlError::InvalidFormat`] for strings `url` cannot parse.
/// Returns [`TargetUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`TargetUrlError::MissingHost`] if there is no host.
pub fn parse_target_url(input: &str) -> Result<String, TargetUrlError> {
    let trimmed = input.trim();
    let url = Url::parse(trimmed).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(TargetUrlError::MissingHost);
    }

    Ok(url.to_string())
}
