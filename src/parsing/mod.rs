pub mod cameras;
pub mod config;

use self::config::{Config, TOMLConfig};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing::info;

pub fn load_arbitrary<T>(filepath: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    info!("loading file at {}", filepath.to_string_lossy());
    let mut input = String::new();
    let read_count = File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read {}", filepath.to_string_lossy()))?;
    info!("done: {} bytes", read_count);

    let data: T = toml::from_str(&input)
        .with_context(|| format!("failed to parse {}", filepath.to_string_lossy()))?;
    Ok(data)
}

/// Reads and validates a render config. A missing thread count defaults to the number of cpus.
pub fn get_settings(filepath: impl AsRef<Path>) -> anyhow::Result<Config> {
    let mut settings: TOMLConfig = load_arbitrary(filepath.as_ref())?;
    if settings.render.threads.is_none() {
        settings.render.threads = Some(u16::try_from(num_cpus::get()).unwrap_or(u16::MAX));
    }
    let config = Config::try_from(settings).context("invalid render config")?;
    Ok(config)
}
