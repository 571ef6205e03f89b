use crate::config::LogConfig;
use anyhow::Context;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Send log messages to the file given by `path_override` or, failing that,
/// the file in `config`.  If neither names a file, logging stays disabled,
/// as the terminal is occupied by the game.
pub(crate) fn init(config: &LogConfig, path_override: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = path_override.or(config.file.as_deref()) else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = fs_err::File::create(path)?;
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter)
            .with_context(|| format!("invalid log filter {:?}", config.filter))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;
    Ok(())
}
