//! LucidNote Render Library
//!
//! Projects canvas state into a layered draw list and renders it.
//! The bundled backend writes SVG.

pub mod projection;
mod renderer;
mod svg;

pub use projection::{DrawCommand, DrawItem, DrawList, PendingStroke, TextRun, project};
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
pub use svg::SvgRenderer;
