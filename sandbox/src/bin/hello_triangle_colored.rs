use std::path::Path;

use learn_opengl::prelude::*;
use learn_opengl::triangles::HelloTriangleColored;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let shaders = Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/shaders");
    let mut layer =
        HelloTriangleColored::from_files(shaders.join("colored.vert"), shaders.join("colored.frag"));

    let mut app = App::create(WindowBuilder::new().with_title("LearnOpenGL - Shaders"))?;
    if let Err(err) = app.run(&mut layer) {
        log::error!("{err}");
        return Err(err.into());
    }

    Ok(())
}
