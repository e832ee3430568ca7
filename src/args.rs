use tbl::Result;

use std::{
    env,
    fs,
    path::PathBuf,
};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Parses the input arguments. The first argument, when present, must be a valid filepath to a
/// command file, otherwise the interactive menu is used.
pub fn parse_input_arg() -> Result<Option<PathBuf>> {
    let filename = match env::args().nth(1) {
        Some(filename) => filename,
        None => return Ok(None),
    };

    let path = fs::canonicalize(filename.clone())
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    Ok(Some(path))
}
