use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary (P6) PPM writer. Missing parent directories are created.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(std::fs::File::create(filepath)?);
        let canvas = buffer.canvas();

        // P6: binary RGB, then width height and the max channel value
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", canvas.width(), canvas.height())?;
        writeln!(file, "255")?;
        file.write_all(buffer.buffer())?;
        file.flush()?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::canvas_size::CanvasSize;

    #[test]
    fn test_writes_header_and_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.ppm");
        let canvas = CanvasSize::new(2, 1).unwrap();
        let buffer = PixelBuffer::from_data(canvas, vec![255, 0, 0, 0, 0, 255]).unwrap();

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 0, 0, 255]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("output").join("frame.ppm");
        let buffer = PixelBuffer::new(CanvasSize::new(3, 3).unwrap());

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        assert_eq!(std::fs::metadata(&path).unwrap().len(), 11 + 27);
    }
}
