#![warn(clippy::all)]

use anyhow::Result;
use rule110::{Config, BOARD_SIZE};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries the generations only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut stdout = std::io::stdout().lock();
    rule110::run::<BOARD_SIZE>(&Config::default(), &mut stdout)?;
    Ok(())
}
