// src/core/html.rs
//! Typed lookups over a parsed HTML tree.
//!
//! Every lookup returns `Option`; callers spell out their own defaults.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

#[derive(Debug, thiserror::Error)]
#[error("invalid selector `{css}`: {reason}")]
pub struct SelectorError {
    pub css: String,
    pub reason: String,
}

pub fn parse_document(doc: &str) -> Html {
    Html::parse_document(doc)
}

pub fn selector(css: &str) -> Result<Selector, SelectorError> {
    Selector::parse(css).map_err(|e| SelectorError { css: s!(css), reason: e.to_string() })
}

/// All matches in document order.
pub fn select_all<'a>(doc: &'a Html, sel: &Selector) -> Vec<ElementRef<'a>> {
    doc.select(sel).collect()
}

/// First descendant of `el` matching `sel`.
pub fn select_first<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}

/// Visible text of an element, whitespace collapsed and trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    normalize_ws(&raw)
}

/// Text of the first match under `el`, or `None` when nothing matches.
pub fn first_text(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    select_first(el, sel).map(text_of)
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}
