// src/scrape/scrape.rs
//! Source adapters: one sequential fetch chain per call, then the matching spec.
//!
//! Status codes are classified here; the specs never see a failed reply.

use crate::{
    config::consts::{ ACCEPT_JSON, BROWSER_UA, CATALOG_TOP_N },
    config::options::IngestOptions,
    core::net::{ absolute_url, Fetch, Reply },
    data::{ Extraction, RawPassthrough, Source },
    error::IngestError,
    progress::Progress,
    specs,
};

fn upstream(reply: &Reply, message: String) -> IngestError {
    loge!("{message}");
    IngestError::Upstream { status: reply.status, message }
}

fn report_skips(progress: Option<&mut (dyn Progress + '_)>, source: Source, ex: &Extraction) {
    if let Some(p) = progress {
        for skipped in &ex.skipped {
            p.item_skipped(source, skipped);
        }
    }
}

/// President landing page → petitions. Item-level problems never fail the page.
pub fn collect_president(
    fetch: &dyn Fetch,
    opts: &IngestOptions,
    progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Extraction, IngestError> {
    let reply = fetch.get(&opts.president_url, &[("User-Agent", BROWSER_UA)])?;
    if !reply.is_success() {
        return Err(upstream(&reply, format!("Upstream returned {}", reply.status)));
    }

    let ex = specs::president::parse_listing(&reply.body, &opts.president_origin)?;
    logf!("President: {} petitions", ex.petitions.len());
    report_skips(progress, Source::President, &ex);
    Ok(ex)
}

/// Cabinet API → petitions.
pub fn collect_cabinet(
    fetch: &dyn Fetch,
    opts: &IngestOptions,
    progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Extraction, IngestError> {
    let headers = [("User-Agent", BROWSER_UA), ("Accept", ACCEPT_JSON)];
    let reply = fetch.get(&opts.cabinet_url, &headers)?;
    if !reply.is_success() {
        return Err(upstream(&reply, format!("Cabinet API returned {}", reply.status)));
    }

    let ex = specs::cabinet::parse_rows(&reply.body)?;
    logf!("Cabinet: {} petitions", ex.petitions.len());
    report_skips(progress, Source::Cabinet, &ex);
    Ok(ex)
}

/// Catalog search → first readable resource → preview of its body.
pub fn collect_open_data(
    fetch: &dyn Fetch,
    opts: &IngestOptions,
    progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RawPassthrough, IngestError> {
    use specs::open_data::{ parse_search, preview, search_url, select_resource };

    let query = opts.open_data_query.as_str();
    let url = search_url(&opts.catalog_search_url(), query)?;
    logf!("Open data: searching '{query}'");

    let reply = fetch.get(&url, &[("Accept", ACCEPT_JSON)])?;
    if !reply.is_success() {
        return Err(upstream(&reply, format!("Catalog search returned {}", reply.status)));
    }

    let packages = parse_search(&reply.body, query)?;
    let (package, resource) = select_resource(&packages).ok_or_else(|| {
        IngestError::NotFound(format!(
            "No JSON/CSV resource found in the top {CATALOG_TOP_N} datasets. Please try a different query."
        ))
    })?;

    let title = package.display_title();
    logf!("Open data: package '{title}', resource format {:?}", resource.format);
    if let Some(p) = progress {
        p.log(&format!("Open data: using package '{title}'"));
    }

    let resource_url = absolute_url(&opts.catalog_origin, &resource.url).ok_or_else(|| {
        IngestError::UnexpectedFormat(format!("Resource URL `{}` is not usable", resource.url))
    })?;

    let reply = fetch.get(&resource_url, &[])?;
    if !reply.is_success() {
        return Err(upstream(&reply, format!("Failed to fetch resource: {}", reply.status_text())));
    }

    let as_json = resource.declares_json() || reply.content_type_contains("json");
    let data = preview(&reply.body, as_json)?;

    Ok(RawPassthrough {
        source_package: s!(title),
        resource_url,
        data,
    })
}
