use std::env;

use anyhow::Result;

use full_example::renderer;
use full_example::settings::Settings;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Use the default settings unless a settings file is given
    let settings = match env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    renderer::render(&settings)
}
