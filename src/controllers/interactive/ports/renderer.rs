use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render::render::{render_cancelable, RenderError};
use crate::core::data::pixel_buffer::PixelBuffer;

/// Turns a request into a frame on the controller's worker thread.
pub trait FrameRendererPort: Send + Sync {
    fn render(
        &self,
        request: &RenderRequest,
        cancel: &dyn CancelToken,
    ) -> Result<PixelBuffer, RenderError>;
}

/// Renders the viewport snapshot with the rayon pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct ViewportFrameRenderer;

impl FrameRendererPort for ViewportFrameRenderer {
    fn render(
        &self,
        request: &RenderRequest,
        cancel: &dyn CancelToken,
    ) -> Result<PixelBuffer, RenderError> {
        render_cancelable(&request.viewport, request.canvas, cancel)
    }
}
