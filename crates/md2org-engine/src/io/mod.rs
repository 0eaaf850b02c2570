use std::fs;
use std::path::{Path, PathBuf};

use crate::convert::convert_document;
use crate::models::ConvertOptions;

/// Extension of every converted document.
pub const OUTPUT_EXTENSION: &str = "org";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input path: {0}")]
    InvalidInput(PathBuf),
}

/// Read a markdown file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// The sibling `.org` path of a markdown file, made absolute.
pub fn output_path(input: &Path) -> Result<PathBuf, IoError> {
    let absolute = std::path::absolute(input)?;
    if absolute.file_stem().is_none() {
        return Err(IoError::InvalidInput(input.to_path_buf()));
    }

    let output = absolute.with_extension(OUTPUT_EXTENSION);
    if output == absolute {
        return Err(IoError::InvalidInput(input.to_path_buf()));
    }
    Ok(output)
}

/// A note is a daily note when the name of its directory occurs in `daily_path`.
pub fn is_daily_note(input: &Path, daily_path: &str) -> bool {
    let absolute = std::path::absolute(input).unwrap_or_else(|_| input.to_path_buf());
    absolute
        .parent()
        .and_then(Path::file_name)
        .map(|dir| daily_path.contains(dir.to_string_lossy().as_ref()))
        .unwrap_or(false)
}

/// Convert one markdown file into its sibling `.org` file and return the path written.
pub fn convert_file(input: &Path, daily_path: &str, asset_path: &str) -> Result<PathBuf, IoError> {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| IoError::InvalidInput(input.to_path_buf()))?;
    let output = output_path(input)?;

    let options =
        ConvertOptions::new(daily_path, asset_path).daily(is_daily_note(input, daily_path));
    log::info!(
        "converting {} (daily note: {})",
        input.display(),
        options.is_daily
    );

    let text = read_file(input)?;
    let converted = convert_document(&text, &file_name, &options);
    write_file(&output, &converted)?;
    Ok(output)
}
