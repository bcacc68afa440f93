// src/data.rs
//
// Canonical records and the payloads handed to the envelope layer.
//
// - Petition:       one normalized record; built once per run, never mutated.
// - Payload:        what a successful adapter produced. Structured petitions and
//                   raw catalog passthrough are separate variants so raw data can
//                   never be mistaken for normalized records.
// - Extraction:     petitions plus the side channel of records that were dropped.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde::ser::{SerializeStruct, Serializer};

use crate::config::consts::{CABINET_LABEL, PRESIDENT_LABEL};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    OpenData,
    Cabinet,
    President,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::OpenData, Source::Cabinet, Source::President];

    /// Human-facing label used in response envelopes.
    pub fn label(&self) -> &'static str {
        match self {
            Source::OpenData => "Open Data Portal",
            Source::Cabinet => CABINET_LABEL,
            Source::President => PRESIDENT_LABEL,
        }
    }

    /// Wire tag, e.g. `open_data`.
    pub fn tag(&self) -> &'static str {
        match self {
            Source::OpenData => "open_data",
            Source::Cabinet => "cabinet",
            Source::President => "president",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Petition {
    pub id: String,
    pub number: Option<String>,
    pub title: String,
    /// Source-native text; `None` when the upstream had no date.
    pub date: Option<String>,
    pub status: String,
    pub votes: u64,
    pub url: String,
    pub source: Source,
}

/// A raw record that did not make it into the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skipped {
    /// Position of the record in the upstream listing.
    pub index: usize,
    pub reason: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub petitions: Vec<Petition>,
    pub skipped: Vec<Skipped>,
}

impl Extraction {
    pub fn keep(&mut self, p: Petition) {
        self.petitions.push(p);
    }

    pub fn skip(&mut self, index: usize, reason: impl Into<String>) {
        self.skipped.push(Skipped { index, reason: reason.into() });
    }

    /// Records seen in the upstream listing, kept or not.
    pub fn seen(&self) -> usize {
        self.petitions.len() + self.skipped.len()
    }
}

/// Body of an open-data resource, trimmed to a preview.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawData {
    Json(serde_json::Value),
    CsvLines(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RawPassthrough {
    pub source_package: String,
    pub resource_url: String,
    pub data: RawData,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Petitions { source: Source, data: Vec<Petition> },
    Raw(RawPassthrough),
}

impl Payload {
    /// Normalized records, if this payload carries any.
    pub fn petitions(&self) -> Option<&[Petition]> {
        match self {
            Payload::Petitions { data, .. } => Some(data),
            Payload::Raw(_) => None,
        }
    }
}

// `{source: <label>, data}` for petitions, the passthrough fields as-is for raw.
impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payload::Petitions { source, data } => {
                let mut st = serializer.serialize_struct("Payload", 2)?;
                st.serialize_field("source", source.label())?;
                st.serialize_field("data", data)?;
                st.end()
            }
            Payload::Raw(raw) => raw.serialize(serializer),
        }
    }
}
