use std::error::Error;
use std::path::Path;

use fractal_navigator::{CliRenderController, ExplorerConfig, PpmFilePresenter, init_logging};

const OUTPUT_PATH: &str = "output/mandelbrot.ppm";

fn run(config: ExplorerConfig, path: &Path) -> Result<(), Box<dyn Error>> {
    let presenter = PpmFilePresenter::new();
    let mut controller = CliRenderController::new(presenter, config)?;

    controller.generate()?;
    controller.write(path)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    run(ExplorerConfig::default(), Path::new(OUTPUT_PATH))?;

    tracing::info!(path = OUTPUT_PATH, "image written");

    Ok(())
}
