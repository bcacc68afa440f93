// src/specs/cabinet.rs
//! Extraction *spec* for the Cabinet of Ministers petition API.
//!
//! The API answers `{ count: N, rows: [...] }`. A missing (or null) `rows` is an
//! empty listing. Fields are passed through with little shaping: `code` and
//! `createdAt` are not reformatted, `signaturesNumber` is already numeric.

use serde_json::Value;

use crate::config::consts::{CABINET_PETITION_URL, STATUS_FALLBACK};
use crate::data::{Extraction, Petition, Source};
use crate::error::IngestError;

pub fn petition_url(id: &str) -> String {
    CABINET_PETITION_URL.replace("{id}", id)
}

/// Parse an API body into petitions. Fails only when the body itself is not
/// the expected JSON object; individual rows without an id are skipped.
pub fn parse_rows(body: &str) -> Result<Extraction, IngestError> {
    let root: Value = serde_json::from_str(body)?;
    let obj = root
        .as_object()
        .ok_or_else(|| IngestError::UnexpectedFormat(s!("Cabinet API: expected a JSON object")))?;

    let rows: &[Value] = match obj.get("rows") {
        None | Some(Value::Null) => &[],
        Some(Value::Array(rows)) => rows.as_slice(),
        Some(_) => return Err(IngestError::UnexpectedFormat(s!("Cabinet API: `rows` is not a list"))),
    };

    let mut out = Extraction::default();
    for (i, row) in rows.iter().enumerate() {
        match normalize(row) {
            Ok(p) => out.keep(p),
            Err(reason) => {
                logd!("Cabinet: row #{i} dropped: {reason}");
                out.skip(i, reason);
            }
        }
    }
    if !out.skipped.is_empty() {
        logf!("Cabinet: kept {} of {} rows", out.petitions.len(), out.seen());
    }
    Ok(out)
}

fn normalize(row: &Value) -> Result<Petition, &'static str> {
    let row = row.as_object().ok_or("row is not an object")?;

    let id = match row.get("id") {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        _ => return Err("missing id"),
    };

    let number = match row.get("code") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };
    let title = match row.get("title").and_then(Value::as_str) {
        Some(t) => t.trim().to_string(),
        None => s!(),
    };
    let date = row.get("createdAt").and_then(Value::as_str).map(str::to_string);
    let status = match row.get("status").and_then(Value::as_str) {
        Some(st) if !st.trim().is_empty() => s!(st),
        _ => s!(STATUS_FALLBACK),
    };
    let votes = row.get("signaturesNumber").and_then(Value::as_u64).unwrap_or(0);

    Ok(Petition {
        url: petition_url(&id),
        id,
        number,
        title,
        date,
        status,
        votes,
        source: Source::Cabinet,
    })
}
