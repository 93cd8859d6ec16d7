//! File logging.
//!
//! The terminal belongs to the UI, so records go to `~/.lexigrid/lexigrid.log`.
//! The level defaults to `info` and can be changed with `RUST_LOG`.

use env_logger::{Env, Target};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

/// Path of the log file (`~/.lexigrid/lexigrid.log`).
pub fn log_path() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    Ok(home.join(".lexigrid").join("lexigrid.log"))
}

/// Install the global logger. Call once, before the terminal is taken over.
pub fn init() -> io::Result<()> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(io::Error::other)?;

    log::info!("lexigrid {} started", env!("CARGO_PKG_VERSION"));
    Ok(())
}
