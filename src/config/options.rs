// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use std::time::Duration;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub ingest: IngestOptions,
    pub export: ExportOptions,
}

/// Upstream locations and request settings.
/// Defaults point at the production sites; override for mirrors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestOptions {
    pub open_data_query: String,
    pub catalog_origin: String,
    pub cabinet_url: String,
    pub president_url: String,
    pub president_origin: String,
    /// `None` leaves the HTTP client's own default in place.
    pub timeout: Option<Duration>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            open_data_query: s!(DEFAULT_QUERY),
            catalog_origin: s!(CATALOG_ORIGIN),
            cabinet_url: s!(CABINET_API_URL),
            president_url: s!(PRESIDENT_LANDING_URL),
            president_origin: s!(PRESIDENT_ORIGIN),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl IngestOptions {
    pub fn catalog_search_url(&self) -> String {
        join!(self.catalog_origin.trim_end_matches('/'), CATALOG_SEARCH_PATH)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        path.push(join!(stem, ".", self.format.ext()));
        path
    }

    /// Split user text into dir + stem. Ignores a typed extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
