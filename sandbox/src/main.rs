use learn_opengl::prelude::*;
use learn_opengl::triangles::HelloTriangle;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut app = App::create(WindowBuilder::new())?;
    let mut layer = HelloTriangle::new();

    if let Err(err) = app.run(&mut layer) {
        log::error!("{err}");
        return Err(err.into());
    }

    Ok(())
}
