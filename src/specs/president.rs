// src/specs/president.rs
//! Extraction *spec* for the President of Ukraine petition site.
//!
//! Purpose:
//! - Parse the **landing page HTML** and extract one `Petition` per `.pet_item`.
//! - The anchor `.pet_link` carries both the link and the title; items without it
//!   are skipped (partial listings are expected).
//!
//! Field sources inside an item:
//! - `id`      last path segment of `.pet_link[href]`
//! - `title`   `.pet_link` text, inner whitespace runs collapsed
//! - `number`  `.pet_number` text, else `"N/A"`
//! - `date`    `.pet_date` text minus the "Дата оприлюднення:" label, else `None`
//! - `status`  `.pet_status` text, else `"Unknown"`
//! - `votes`   digits of `.pet_counts` text, else `0`
//! - `url`     origin + href
//!
//! Non-Responsibilities: no networking, no status-code handling.

use scraper::{ElementRef, Selector};

use crate::config::consts::{NUMBER_FALLBACK, PRESIDENT_DATE_LABEL, STATUS_FALLBACK};
use crate::core::html::{self, SelectorError};
use crate::core::net::absolute_url;
use crate::core::sanitize::{last_path_segment, non_empty, parse_votes, strip_label};
use crate::data::{Extraction, Petition, Source};

struct Selectors {
    item: Selector,
    link: Selector,
    number: Selector,
    date: Selector,
    status: Selector,
    counts: Selector,
}

impl Selectors {
    fn new() -> Result<Self, SelectorError> {
        Ok(Self {
            item: html::selector(".pet_item")?,
            link: html::selector(".pet_link")?,
            number: html::selector(".pet_number")?,
            date: html::selector(".pet_date")?,
            status: html::selector(".pet_status")?,
            counts: html::selector(".pet_counts")?,
        })
    }
}

/// Why one item was dropped.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("no .pet_link anchor")]
    NoAnchor,
    #[error("anchor has no href")]
    NoHref,
    #[error("no id in href `{0}`")]
    NoId(String),
    #[error("cannot resolve href `{0}`")]
    BadUrl(String),
}

/// Parse a landing page. Never fails on item-level problems; those are
/// collected in `Extraction::skipped`.
pub fn parse_listing(doc: &str, origin: &str) -> Result<Extraction, SelectorError> {
    let sel = Selectors::new()?;
    let tree = html::parse_document(doc);
    let items = html::select_all(&tree, &sel.item);
    logd!("President: {} items on page", items.len());

    let mut out = Extraction::default();
    for (i, item) in items.into_iter().enumerate() {
        match parse_item(item, &sel, origin) {
            Ok(p) => out.keep(p),
            Err(e) => {
                logd!("President: item #{i} dropped: {e}");
                out.skip(i, e.to_string());
            }
        }
    }

    if !out.skipped.is_empty() {
        logf!("President: kept {} of {} items ({} skipped)", out.petitions.len(), out.seen(), out.skipped.len());
    }
    Ok(out)
}

fn parse_item(item: ElementRef<'_>, sel: &Selectors, origin: &str) -> Result<Petition, ItemError> {
    let link = html::select_first(item, &sel.link).ok_or(ItemError::NoAnchor)?;
    let href = html::attr(link, "href").map(str::trim).ok_or(ItemError::NoHref)?;
    let id = last_path_segment(href).ok_or_else(|| ItemError::NoId(s!(href)))?;
    let url = absolute_url(origin, href).ok_or_else(|| ItemError::BadUrl(s!(href)))?;

    let number = match html::first_text(item, &sel.number).and_then(non_empty) {
        Some(n) => n,
        None => s!(NUMBER_FALLBACK),
    };
    let date = match html::first_text(item, &sel.date) {
        Some(d) => non_empty(strip_label(&d, PRESIDENT_DATE_LABEL)),
        None => None,
    };
    let status = match html::first_text(item, &sel.status).and_then(non_empty) {
        Some(st) => st,
        None => s!(STATUS_FALLBACK),
    };
    let votes = match html::first_text(item, &sel.counts) {
        Some(raw) => parse_votes(&raw),
        None => 0,
    };

    Ok(Petition {
        id: s!(id),
        number: Some(number),
        title: html::text_of(link),
        date,
        status,
        votes,
        url,
        source: Source::President,
    })
}
