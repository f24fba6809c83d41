//! QR image rendering for short links.

pub mod png_renderer;
pub mod renderer;

pub use png_renderer::PngQrRenderer;
pub use renderer::{QrRenderer, RenderError, RenderResult};
