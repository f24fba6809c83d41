//! PNG QR renderer built on `qrcode` and `image`.

use image::{ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;
use tracing::debug;

use super::renderer::{QrRenderer, RenderError, RenderResult};

/// Smallest edge length of rendered images, in pixels.
pub const DEFAULT_MIN_DIMENSION: u32 = 256;

/// Renders black-on-white grayscale PNGs with a quiet zone.
#[derive(Debug, Clone)]
pub struct PngQrRenderer {
    min_dimension: u32,
}

impl PngQrRenderer {
    pub fn new() -> Self {
        Self {
            min_dimension: DEFAULT_MIN_DIMENSION,
        }
    }

    /// Sets the minimum width and height of the output image.
    pub fn with_min_dimension(mut self, min_dimension: u32) -> Self {
        self.min_dimension = min_dimension;
        self
    }
}

impl Default for PngQrRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl QrRenderer for PngQrRenderer {
    fn render(&self, payload: &str) -> RenderResult<Vec<u8>> {
        let code = QrCode::new(payload.as_bytes()).map_err(|e| RenderError::Encode(e.to_string()))?;

        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(self.min_dimension, self.min_dimension)
            .build();

        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| RenderError::Image(e.to_string()))?;

        debug!(
            payload_len = payload.len(),
            width = image.width(),
            png_bytes = bytes.len(),
            "Rendered QR code"
        );

        Ok(bytes)
    }

    fn content_type(&self) -> &'static str {
        "image/png"
    }
}
