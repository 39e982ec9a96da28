use std::sync::Arc;

use anyhow::{Context, Result};
use zmotion_engine::config::AdapterConfig;

mod gui;
mod source;
mod util;
mod zmotion;

fn main() -> Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let config = match std::env::args().nth(1) {
        Some(path) => {
            AdapterConfig::load(&path).with_context(|| format!("failed to load config {}", path))?
        }
        None => AdapterConfig::default(),
    };

    let mut zmotion = zmotion::ZMotion::new(config)?;

    zmotion.add_source(Arc::new(source::synthetic::Synthetic::new()), true);
    zmotion.add_source(Arc::new(source::replay::Replay::new()), false);

    zmotion.run()
}
