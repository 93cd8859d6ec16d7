//! Writes the printable puzzle to `~/.lexigrid/prints/`.

use chrono::{Local, NaiveDateTime};
use lexigrid_core::{Puzzle, print::render_print_layout};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// Directory receiving printed puzzles (`~/.lexigrid/prints`).
pub fn prints_dir() -> Result<PathBuf, PrintError> {
    let home = dirs::home_dir().ok_or(PrintError::NoHomeDir)?;
    Ok(home.join(".lexigrid").join("prints"))
}

/// File name for a print made at `stamp`.
pub fn print_file_name(stamp: NaiveDateTime) -> String {
    format!("crossword-{}.txt", stamp.format("%Y%m%d-%H%M%S"))
}

/// Write the puzzle and its answer key to `dir`, returning the file path.
pub fn print_to(dir: &Path, puzzle: &Puzzle, stamp: NaiveDateTime) -> Result<PathBuf, PrintError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(print_file_name(stamp));
    std::fs::write(&path, render_print_layout(puzzle))?;
    log::info!("printed puzzle to {}", path.display());
    Ok(path)
}

pub fn print_puzzle(puzzle: &Puzzle) -> Result<PathBuf, PrintError> {
    print_to(&prints_dir()?, puzzle, Local::now().naive_local())
}
