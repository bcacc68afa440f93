// src/specs/open_data.rs
//! Extraction *spec* for the open-data catalog (CKAN `package_search`).
//!
//! This source is a **raw passthrough**: the catalog's dataset schemas are not
//! ours, so nothing is normalized into `Petition`s. This module only decides
//! *which* resource to read and how much of it to keep.
//!
//! Selection: scan at most the first `CATALOG_TOP_N` packages in listed order;
//! inside each, the first resource whose `format` is json/csv
//! (case-insensitive) or whose `mimetype` mentions json/csv. The first package
//! with such a resource wins.

use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::config::consts::{CATALOG_TOP_N, CSV_PREVIEW_LINES, JSON_PREVIEW_ENTRIES};
use crate::data::RawData;
use crate::error::IngestError;

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub result: Option<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub results: Vec<Package>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Package {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Package {
    /// Display title; falls back to the package slug.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => &self.name,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Resource {
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub mimetype: Option<String>,
    #[serde(default)]
    pub url: String,
}

impl Resource {
    fn format_is(&self, want: &str) -> bool {
        self.format.as_deref().is_some_and(|f| f.trim().eq_ignore_ascii_case(want))
    }

    fn mimetype_mentions(&self, want: &str) -> bool {
        self.mimetype.as_deref().is_some_and(|m| m.to_ascii_lowercase().contains(want))
    }

    pub fn is_readable(&self) -> bool {
        self.format_is("json") || self.format_is("csv") || self.mimetype_mentions("json") || self.mimetype_mentions("csv")
    }

    pub fn declares_json(&self) -> bool {
        self.format_is("json")
    }
}

/// Build the search URL with `q` and `rows` query parameters.
pub fn search_url(endpoint: &str, query: &str) -> Result<String, IngestError> {
    let rows = CATALOG_TOP_N.to_string();
    Url::parse_with_params(endpoint, &[("q", query), ("rows", rows.as_str())])
        .map(String::from)
        .map_err(|e| IngestError::Internal(format!("bad catalog endpoint `{endpoint}`: {e}")))
}

/// Packages from a search body. An unsuccessful or empty search is `NotFound`.
pub fn parse_search(body: &str, query: &str) -> Result<Vec<Package>, IngestError> {
    let resp: SearchResponse = serde_json::from_str(body)?;
    let packages = match resp.result {
        Some(r) if resp.success => r.results,
        _ => Vec::new(),
    };
    if packages.is_empty() {
        return Err(IngestError::NotFound(format!("No datasets found for '{query}'")));
    }
    Ok(packages)
}

/// First readable resource within the top `CATALOG_TOP_N` packages.
pub fn select_resource(packages: &[Package]) -> Option<(&Package, &Resource)> {
    packages
        .iter()
        .take(CATALOG_TOP_N)
        .find_map(|pkg| pkg.resources.iter().find(|r| r.is_readable()).map(|r| (pkg, r)))
}

/// Trim a resource body to a preview.
/// JSON lists keep their first entries; any other JSON value is kept whole.
/// Everything else is treated as CSV and kept as literal lines.
pub fn preview(body: &str, as_json: bool) -> Result<RawData, IngestError> {
    if as_json {
        let value: Value = serde_json::from_str(body)?;
        let value = match value {
            Value::Array(mut items) => {
                items.truncate(JSON_PREVIEW_ENTRIES);
                Value::Array(items)
            }
            other => other,
        };
        return Ok(RawData::Json(value));
    }

    let lines = body.split('\n').take(CSV_PREVIEW_LINES).map(str::to_string).collect();
    Ok(RawData::CsvLines(lines))
}
