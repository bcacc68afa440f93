// src/aggregate.rs
//! Run several sources one after another and keep every outcome.
//!
//! Sources are independent: one failing never stops the next. Structured
//! petitions can be merged into a single list keyed by `(source, id)`.

use std::collections::HashMap;

use crate::{
    config::options::IngestOptions,
    core::net::Fetch,
    data::{ Payload, Petition, RawData, Source },
    error::IngestError,
    progress::Progress,
    scrape,
};

pub struct SourceOutcome {
    pub source: Source,
    pub result: Result<Payload, IngestError>,
    /// Records dropped during extraction (0 for failed or raw sources).
    pub skipped: usize,
}

impl SourceOutcome {
    fn produced(&self) -> usize {
        match &self.result {
            Ok(Payload::Petitions { data, .. }) => data.len(),
            Ok(Payload::Raw(raw)) => match &raw.data {
                RawData::Json(serde_json::Value::Array(items)) => items.len(),
                RawData::Json(_) => 1,
                RawData::CsvLines(lines) => lines.len(),
            },
            Err(_) => 0,
        }
    }
}

pub struct Report {
    pub outcomes: Vec<SourceOutcome>,
}

impl Report {
    pub fn all_ok(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (Source, &IngestError)> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().err().map(|e| (o.source, e)))
    }

    /// Structured petitions from every successful source, upserted by
    /// `(source, id)`: a later duplicate replaces the earlier record but keeps
    /// its slot. Order follows first appearance.
    pub fn merged(&self) -> Vec<Petition> {
        let mut slots: HashMap<(Source, &str), usize> = HashMap::new();
        let mut out: Vec<Petition> = Vec::new();
        for outcome in &self.outcomes {
            let Ok(Payload::Petitions { data, .. }) = &outcome.result else { continue };
            for p in data {
                match slots.get(&(p.source, p.id.as_str())) {
                    Some(&i) => out[i] = p.clone(),
                    None => {
                        slots.insert((p.source, p.id.as_str()), out.len());
                        out.push(p.clone());
                    }
                }
            }
        }
        out
    }

    /// Records dropped during extraction across every source.
    pub fn skipped(&self) -> usize {
        self.outcomes.iter().map(|o| o.skipped).sum()
    }
}

/// Run a single source adapter.
pub fn run_one(
    source: Source,
    fetch: &dyn Fetch,
    opts: &IngestOptions,
    progress: Option<&mut (dyn Progress + '_)>,
) -> SourceOutcome {
    match source {
        Source::President => match scrape::collect_president(fetch, opts, progress) {
            Ok(ex) => SourceOutcome {
                source,
                skipped: ex.skipped.len(),
                result: Ok(Payload::Petitions { source, data: ex.petitions }),
            },
            Err(e) => SourceOutcome { source, skipped: 0, result: Err(e) },
        },
        Source::Cabinet => match scrape::collect_cabinet(fetch, opts, progress) {
            Ok(ex) => SourceOutcome {
                source,
                skipped: ex.skipped.len(),
                result: Ok(Payload::Petitions { source, data: ex.petitions }),
            },
            Err(e) => SourceOutcome { source, skipped: 0, result: Err(e) },
        },
        Source::OpenData => SourceOutcome {
            source,
            skipped: 0,
            result: scrape::collect_open_data(fetch, opts, progress).map(Payload::Raw),
        },
    }
}

/// Run `sources` in order. Never fails as a whole; see `Report::failures`.
pub fn run_all(
    sources: &[Source],
    fetch: &dyn Fetch,
    opts: &IngestOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Report {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(sources.len());
    }

    let mut outcomes = Vec::with_capacity(sources.len());
    for &source in sources {
        let outcome = run_one(source, fetch, opts, progress.as_deref_mut());
        match &outcome.result {
            Ok(_) => {
                logf!("{source}: ok, {} produced, {} skipped", outcome.produced(), outcome.skipped);
                if let Some(p) = progress.as_deref_mut() {
                    p.source_done(source, outcome.produced());
                }
            }
            Err(e) => {
                loge!("{source}: {} ({})", e, e.kind());
                if let Some(p) = progress.as_deref_mut() {
                    p.source_failed(source, e);
                }
            }
        }
        outcomes.push(outcome);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Report { outcomes }
}
