use fractal_navigator::{ExplorerConfig, PixelsPresenterFactory, RunGuiCommand, init_logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let presenter_factory = PixelsPresenterFactory::new();
    let command = RunGuiCommand::new(presenter_factory, ExplorerConfig::default());

    command.execute()
}
