mod app;
mod config;
mod data;
mod error;
mod state;
mod ui;

use anyhow::{Context, Result};

use config::DumpConfig;
use data::loader;
use data::preview::Preview;

fn main() -> Result<()> {
    env_logger::init();

    let config = DumpConfig::default();

    let sequence = loader::read_samples(&config.path, config.max_samples)
        .with_context(|| format!("loading samples from {}", config.path.display()))?;

    println!("{}", Preview::new(sequence.preview(config.preview_len)));

    app::run(&config, sequence)
}
