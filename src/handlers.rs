// src/handlers.rs
//! One entry point per logical endpoint. Each runs exactly one adapter and
//! turns its outcome into a [`Response`].

use crate::{
    config::options::IngestOptions,
    core::net::Fetch,
    data::{ Payload, Source },
    envelope::{ self, Response },
    error::IngestError,
    scrape,
};

pub fn president(fetch: &dyn Fetch, opts: &IngestOptions) -> Result<Payload, IngestError> {
    let ex = scrape::collect_president(fetch, opts, None)?;
    Ok(Payload::Petitions { source: Source::President, data: ex.petitions })
}

pub fn cabinet(fetch: &dyn Fetch, opts: &IngestOptions) -> Result<Payload, IngestError> {
    let ex = scrape::collect_cabinet(fetch, opts, None)?;
    Ok(Payload::Petitions { source: Source::Cabinet, data: ex.petitions })
}

pub fn open_data(fetch: &dyn Fetch, opts: &IngestOptions) -> Result<Payload, IngestError> {
    scrape::collect_open_data(fetch, opts, None).map(Payload::Raw)
}

/// Run the adapter for `source` and return its raw outcome.
pub fn run(source: Source, fetch: &dyn Fetch, opts: &IngestOptions) -> Result<Payload, IngestError> {
    match source {
        Source::OpenData => open_data(fetch, opts),
        Source::Cabinet => cabinet(fetch, opts),
        Source::President => president(fetch, opts),
    }
}

pub fn get_president(fetch: &dyn Fetch, opts: &IngestOptions) -> Response {
    logf!("Handler invoked: president");
    envelope::build(&president(fetch, opts))
}

pub fn get_cabinet(fetch: &dyn Fetch, opts: &IngestOptions) -> Response {
    logf!("Handler invoked: cabinet");
    envelope::build(&cabinet(fetch, opts))
}

/// `query = None` searches with the configured default query.
pub fn get_open_data(fetch: &dyn Fetch, opts: &IngestOptions, query: Option<&str>) -> Response {
    logf!("Handler invoked: open data");
    match query {
        Some(q) => {
            let mut opts = opts.clone();
            opts.open_data_query = s!(q);
            envelope::build(&open_data(fetch, &opts))
        }
        None => envelope::build(&open_data(fetch, opts)),
    }
}
