use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::viewport::Viewport;

/// Snapshot of everything one render pass needs. Navigation after submission
/// does not affect a request already queued.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub canvas: CanvasSize,
}
