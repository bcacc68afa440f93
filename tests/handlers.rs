// tests/handlers.rs
mod common;

use common::*;
use serde_json::json;

use petition_ingest::config::options::IngestOptions;
use petition_ingest::core::net::HttpFetcher;
use petition_ingest::handlers;

fn opts() -> IngestOptions {
    IngestOptions::default()
}

/* ---------------- cabinet ---------------- */

#[test]
fn cabinet_single_row_envelope() {
    let fetch = Canned::new().route(CABINET, 200, Some("application/json"), CABINET_ONE_ROW);
    let r = handlers::get_cabinet(&fetch, &opts());

    assert_eq!(r.status, 200);
    assert_eq!(r.content_type, "application/json");
    assert_eq!(
        r.body,
        json!({
            "source": "Cabinet of Ministers",
            "data": [{
                "id": "42", "number": "P-42", "title": "Test", "date": "2024-01-01",
                "status": "active", "votes": 17,
                "url": "https://petition.kmu.gov.ua/kmu/petition/42",
                "source": "cabinet"
            }]
        })
    );
    assert_eq!(fetch.header_sent(CABINET, "Accept").as_deref(), Some("application/json"));
    assert!(fetch.header_sent(CABINET, "User-Agent").is_some());
}

#[test]
fn cabinet_service_unavailable_is_bad_gateway() {
    let fetch = Canned::new().route(CABINET, 503, Some("text/html"), "<h1>down</h1>");
    let r = handlers::get_cabinet(&fetch, &opts());
    assert_eq!(r.status, 502);
    assert_eq!(r.body, json!({ "error": "Cabinet API returned 503" }));
}

#[test]
fn cabinet_html_with_ok_status_is_internal() {
    let fetch = Canned::new().route(CABINET, 200, Some("text/html"), "<html>maintenance</html>");
    let r = handlers::get_cabinet(&fetch, &opts());
    assert_eq!(r.status, 500);
    assert!(r.body["error"].is_string());
}

/* ---------------- president ---------------- */

#[test]
fn president_listing_skips_item_without_anchor() {
    let fetch = Canned::new().route(PRESIDENT, 200, Some("text/html; charset=utf-8"), PRESIDENT_PAGE);
    let r = handlers::get_president(&fetch, &opts());

    assert_eq!(r.status, 200);
    assert_eq!(r.body["source"], "President of Ukraine");
    let data = r.body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);

    assert_eq!(data[0]["id"], "231145");
    assert_eq!(data[0]["votes"], 1234);
    assert_eq!(data[0]["date"], "12.03.2024");
    assert_eq!(data[0]["url"], "https://petition.president.gov.ua/petition/231145");

    assert_eq!(data[1]["id"], "230001");
    assert_eq!(data[1]["number"], "N/A");
    assert_eq!(data[1]["date"], serde_json::Value::Null);
    assert_eq!(data[1]["votes"], 25000);
    assert!(fetch.header_sent(PRESIDENT, "User-Agent").is_some());
}

#[test]
fn president_server_error_is_bad_gateway() {
    let fetch = Canned::new().route(PRESIDENT, 500, None, "");
    let r = handlers::get_president(&fetch, &opts());
    assert_eq!(r.status, 502);
    assert_eq!(r.body, json!({ "error": "Upstream returned 500" }));
}

#[test]
fn transport_failure_is_internal() {
    let mut o = opts();
    o.cabinet_url = "not a url".to_string();
    let fetch = HttpFetcher::new(o.timeout).unwrap();
    let r = handlers::get_cabinet(&fetch, &o);
    assert_eq!(r.status, 500);
    assert!(r.body["error"].as_str().unwrap().contains("not a url"));
}

/* ---------------- open data ---------------- */

#[test]
fn open_data_without_packages_is_not_found() {
    let fetch = Canned::new().route(SEARCH, 200, Some("application/json"), &search_body(&[]));
    let r = handlers::get_open_data(&fetch, &opts(), None);
    assert_eq!(r.status, 404);
    assert_eq!(r.body, json!({ "error": "No datasets found for 'петиції'" }));
}

#[test]
fn open_data_without_readable_resource_is_not_found() {
    let body = search_body(&[Some(("PDF", "https://data.gov.ua/a.pdf")), None]);
    let fetch = Canned::new().route(SEARCH, 200, Some("application/json"), &body);
    let r = handlers::get_open_data(&fetch, &opts(), None);
    assert_eq!(r.status, 404);
    assert_eq!(
        r.body["error"],
        "No JSON/CSV resource found in the top 10 datasets. Please try a different query."
    );
    assert_eq!(fetch.urls().len(), 1);
}

#[test]
fn open_data_tenth_package_json_preview() {
    let mut formats: Vec<Option<(&str, &str)>> = vec![None; 9];
    formats.push(Some(("JSON", "https://data.gov.ua/dataset/ten/resource.json")));
    let items = serde_json::to_string(&(1..=15).collect::<Vec<u32>>()).unwrap();
    let fetch = Canned::new()
        .route(SEARCH, 200, Some("application/json"), &search_body(&formats))
        .route("https://data.gov.ua/dataset/ten/", 200, Some("application/octet-stream"), &items);

    let r = handlers::get_open_data(&fetch, &opts(), None);
    assert_eq!(r.status, 200);
    assert_eq!(
        r.body,
        json!({
            "source_package": "Package 10",
            "resource_url": "https://data.gov.ua/dataset/ten/resource.json",
            "data": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
        })
    );
}

#[test]
fn open_data_csv_preview_keeps_eleven_lines() {
    let body = search_body(&[Some(("CSV", "/dataset/p/petitions.csv"))]);
    let csv: String = std::iter::once(String::from("id,title\n"))
        .chain((1..=40).map(|i| format!("{i},row {i}\n")))
        .collect();
    let fetch = Canned::new()
        .route(SEARCH, 200, Some("application/json"), &body)
        .route("https://data.gov.ua/dataset/p/", 200, Some("text/csv"), &csv);

    let r = handlers::get_open_data(&fetch, &opts(), None);
    assert_eq!(r.status, 200);
    assert_eq!(r.body["resource_url"], "https://data.gov.ua/dataset/p/petitions.csv");
    let lines = r.body["data"].as_array().unwrap();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "id,title");
    assert_eq!(lines[10], "10,row 10");
}

#[test]
fn open_data_json_detected_from_content_type() {
    let body = json!({ "success": true, "result": { "results": [
        { "name": "api", "title": "API feed", "resources": [
            { "format": "API", "mimetype": "application/json", "url": "https://data.gov.ua/feed" }
        ]}
    ]}})
    .to_string();
    let fetch = Canned::new()
        .route(SEARCH, 200, Some("application/json"), &body)
        .route("https://data.gov.ua/feed", 200, Some("application/json; charset=utf-8"), r#"{"total":3}"#);

    let r = handlers::get_open_data(&fetch, &opts(), None);
    assert_eq!(r.status, 200);
    assert_eq!(r.body["data"], json!({ "total": 3 }));
}

#[test]
fn open_data_resource_failure_is_bad_gateway() {
    let body = search_body(&[Some(("json", "https://data.gov.ua/gone.json"))]);
    let fetch = Canned::new().route(SEARCH, 200, Some("application/json"), &body);

    let r = handlers::get_open_data(&fetch, &opts(), None);
    assert_eq!(r.status, 502);
    assert_eq!(r.body, json!({ "error": "Failed to fetch resource: Not Found" }));
}

#[test]
fn open_data_query_override_reaches_search() {
    let fetch = Canned::new().route(SEARCH, 200, Some("application/json"), &search_body(&[]));
    let r = handlers::get_open_data(&fetch, &opts(), Some("бюджет"));

    assert_eq!(r.body, json!({ "error": "No datasets found for 'бюджет'" }));
    let url = &fetch.urls()[0];
    assert!(url.starts_with(SEARCH));
    assert!(url.contains("rows=10"));
    assert!(!url.contains("петиції"));
}

#[test]
fn open_data_search_failure_is_bad_gateway() {
    let fetch = Canned::new().route(SEARCH, 500, None, "oops");
    let r = handlers::get_open_data(&fetch, &opts(), None);
    assert_eq!(r.status, 502);
    assert_eq!(r.body, json!({ "error": "Catalog search returned 500" }));
}

#[test]
fn open_data_search_html_is_internal() {
    let fetch = Canned::new().route(SEARCH, 200, Some("text/html"), "<html>captcha</html>");
    let r = handlers::get_open_data(&fetch, &opts(), None);
    assert_eq!(r.status, 500);
    assert!(r.body["error"].is_string());
    assert_eq!(r.body.as_object().unwrap().len(), 1);
    assert_eq!(fetch.urls().len(), 1);
}

#[test]
fn open_data_bad_json_resource_is_internal() {
    let body = search_body(&[Some(("JSON", "https://data.gov.ua/broken.json"))]);
    let fetch = Canned::new()
        .route(SEARCH, 200, Some("application/json"), &body)
        .route("https://data.gov.ua/broken.json", 200, Some("application/json"), "{\"rows\": [1, 2,");

    let r = handlers::get_open_data(&fetch, &opts(), None);
    assert_eq!(r.status, 500);
    assert!(r.body["error"].is_string());
    assert_eq!(r.body.as_object().unwrap().len(), 1);
}

#[test]
fn open_data_unusable_resource_url_is_internal() {
    let body = search_body(&[Some(("CSV", "https://data.gov.ua:99999/petitions.csv"))]);
    let fetch = Canned::new().route(SEARCH, 200, Some("application/json"), &body);

    let r = handlers::get_open_data(&fetch, &opts(), None);
    assert_eq!(r.status, 500);
    assert_eq!(
        r.body,
        json!({ "error": "Resource URL `https://data.gov.ua:99999/petitions.csv` is not usable" })
    );
    // the resource itself is never requested
    assert_eq!(fetch.urls().len(), 1);
}
