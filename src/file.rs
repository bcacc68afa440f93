// src/file.rs

use std::{
    fs,
    path::{ Path, PathBuf },
};

use crate::config::options::{ ExportFormat, ExportOptions };
use crate::csv::to_export_string;
use crate::data::Petition;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot encode petitions: {0}")]
    Encode(#[from] serde_json::Error),
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> ExportError + '_ {
    move |source| ExportError::Io { path: path.to_path_buf(), source }
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir).map_err(io_err(dir))?; }
    Ok(())
}

/// Render petitions in the configured format.
pub fn render(export: &ExportOptions, petitions: &[Petition]) -> Result<String, ExportError> {
    match export.format.delim() {
        Some(sep) => Ok(to_export_string(petitions, export.include_headers, sep)),
        None => {
            debug_assert_eq!(export.format, ExportFormat::Json);
            Ok(serde_json::to_string_pretty(petitions)?)
        }
    }
}

/// Write one export file at `export.out_path()`, creating its directory.
/// Returns the final path written to.
pub fn export_petitions(export: &ExportOptions, petitions: &[Petition]) -> Result<PathBuf, ExportError> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = render(export, petitions)?;
    fs::write(&path, contents).map_err(io_err(&path))?;
    logf!("Exported {} petitions to {}", petitions.len(), path.display());
    Ok(path)
}
