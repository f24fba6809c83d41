//! QR renderer trait and error types.

use thiserror::Error;

/// Errors that can occur while rendering a QR image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("payload cannot be encoded as a QR code: {0}")]
    Encode(String),

    #[error("failed to write image: {0}")]
    Image(String),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Turns a string payload into image bytes.
///
/// Rendering is CPU-bound and synchronous; payloads are short links, so it
/// runs inline on the request task.
///
/// # Implementations
///
/// - [`crate::infrastructure::qr::PngQrRenderer`] - Grayscale PNG output
pub trait QrRenderer: Send + Sync {
    /// Encodes `payload` and returns the image bytes.
    fn render(&self, payload: &str) -> RenderResult<Vec<u8>>;

    /// MIME type of the bytes returned by [`QrRenderer::render`].
    fn content_type(&self) -> &'static str;
}
