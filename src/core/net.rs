// src/core/net.rs
//! One blocking GET per call. No retries, no cache, no shared pool.
//!
//! Upstreams are reached through the [`Fetch`] trait so adapters can be driven
//! by canned replies offline. [`HttpFetcher`] is the real implementation.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

/// Raw upstream answer. Non-2xx statuses are data here, not errors;
/// adapters decide what a status means for their source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn content_type_contains(&self, needle: &str) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains(needle))
    }

    /// Reason phrase for the status, e.g. "Service Unavailable".
    pub fn status_text(&self) -> String {
        reqwest::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .map(str::to_string)
            .unwrap_or_else(|| self.status.to_string())
    }
}

/// Transport-level failure: the upstream never produced a status line.
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

pub trait Fetch {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Reply, NetError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Reply, NetError> {
        (**self).get(url, headers)
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// `timeout = None` keeps reqwest's default.
    pub fn new(timeout: Option<Duration>) -> Result<Self, NetError> {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(NetError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Reply, NetError> {
        let transport = |source| NetError::Transport { url: s!(url), source };

        let mut req = self.client.get(url);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        logd!("GET {url}");
        let resp = req.send().map_err(transport)?;
        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.text().map_err(transport)?;
        logd!("GET {url} -> {status} ({} bytes)", body.len());

        Ok(Reply { status, content_type, body })
    }
}

/// Resolve `href` against a fixed origin. Absolute hrefs pass through.
pub fn absolute_url(origin: &str, href: &str) -> Option<String> {
    let base = Url::parse(origin).ok()?;
    base.join(href.trim()).ok().map(String::from)
}
