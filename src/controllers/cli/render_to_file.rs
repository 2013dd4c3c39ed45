use std::error::Error;
use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render::render::render;
use crate::core::config::explorer_config::ExplorerConfig;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::command::NavigationCommand;

/// Renders a single frame and hands it to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    config: ExplorerConfig,
    viewport: Viewport,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, config: ExplorerConfig) -> Result<Self, Box<dyn Error>> {
        let viewport = Viewport::new(&config)?;

        Ok(Self {
            presenter,
            config,
            viewport,
            buffer: None,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Applies commands in order before the next render; a refused command
    /// stops the sequence.
    pub fn navigate(
        &mut self,
        commands: impl IntoIterator<Item = NavigationCommand>,
    ) -> Result<(), Box<dyn Error>> {
        let canvas = self.config.canvas()?;

        for command in commands {
            self.viewport.apply(command, canvas)?;
        }

        Ok(())
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn Error>> {
        let width = self.config.canvas_width;
        let height = self.config.canvas_height;

        tracing::info!(
            width,
            height,
            max_iterations = self.viewport.max_iterations(),
            zoom = self.viewport.zoom_ratio(),
            "rendering mandelbrot view"
        );

        let start = Instant::now();
        let buffer = render(&self.viewport, width, height)?;

        tracing::info!(duration = ?start.elapsed(), "render complete");

        self.buffer = Some(buffer);

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Fails with [`std::io::ErrorKind::NotFound`] when nothing was generated.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let Some(buffer) = &self.buffer else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no frame generated yet",
            ));
        };

        self.presenter.present(buffer, filepath.as_ref())?;
        tracing::info!(path = %filepath.as_ref().display(), "saved frame");

        Ok(())
    }
}
