// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;

use petition_ingest::core::net::{ Fetch, NetError, Reply };

/// Offline upstream: the first route whose prefix matches the URL answers.
/// Unrouted URLs get a bare 404.
#[derive(Default)]
pub struct Canned {
    routes: Vec<(String, Reply)>,
    pub calls: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl Canned {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, prefix: &str, status: u16, content_type: Option<&str>, body: &str) -> Self {
        let reply = Reply {
            status,
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        };
        self.routes.push((prefix.to_string(), reply));
        self
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(u, _)| u.clone()).collect()
    }

    pub fn header_sent(&self, url_prefix: &str, name: &str) -> Option<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|(u, _)| u.starts_with(url_prefix))
            .flat_map(|(_, hs)| hs.iter())
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.clone())
    }
}

impl Fetch for Canned {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Reply, NetError> {
        let hs = headers.iter().map(|(n, v)| (n.to_string(), v.to_string())).collect();
        self.calls.borrow_mut().push((url.to_string(), hs));

        let reply = self
            .routes
            .iter()
            .find(|(prefix, _)| url.starts_with(prefix.as_str()))
            .map(|(_, r)| r.clone())
            .unwrap_or(Reply { status: 404, content_type: None, body: String::new() });
        Ok(reply)
    }
}

pub const CABINET: &str = "https://petition.kmu.gov.ua/api/petitions";
pub const PRESIDENT: &str = "https://petition.president.gov.ua/";
pub const SEARCH: &str = "https://data.gov.ua/api/3/action/package_search";

pub const CABINET_ONE_ROW: &str = r#"{"count":1,"rows":[{"id":42,"code":"P-42","title":"Test","createdAt":"2024-01-01","status":"active","signaturesNumber":17}]}"#;

pub const PRESIDENT_PAGE: &str = r#"<html><body>
<div class="pet_item">
  <a class="pet_link" href="/petition/231145">Про скасування мобілізації</a>
  <span class="pet_number">№22/231145-еп</span>
  <span class="pet_date">Дата оприлюднення: 12.03.2024</span>
  <span class="pet_status">Триває збір підписів</span>
  <span class="pet_counts">1 234 підписи</span>
</div>
<div class="pet_item"><span class="pet_number">№22/0-еп</span></div>
<div class="pet_item">
  <a class="pet_link" href="/petition/230001">Про ремонт доріг</a>
  <span class="pet_status">Розглянуто</span>
  <span class="pet_counts">25 000</span>
</div>
</body></html>"#;

/// A search body with one package per entry of `formats`; `None` = no resources.
pub fn search_body(formats: &[Option<(&str, &str)>]) -> String {
    let results: Vec<serde_json::Value> = formats
        .iter()
        .enumerate()
        .map(|(i, f)| {
            let resources = match f {
                Some((format, url)) => serde_json::json!([{ "format": format, "mimetype": null, "url": url }]),
                None => serde_json::json!([]),
            };
            serde_json::json!({ "name": format!("pkg-{}", i + 1), "title": format!("Package {}", i + 1), "resources": resources })
        })
        .collect();
    serde_json::json!({ "success": true, "result": { "count": results.len(), "results": results } }).to_string()
}
