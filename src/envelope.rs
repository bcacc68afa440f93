// src/envelope.rs
//! HTTP-facing result shape: a status code plus a JSON body.
//!
//! Success is `200` with the payload as-is. Failure is `{ "error": <message> }`
//! with 404 / 502 / 500 depending on the failure kind.

use serde_json::{ json, Value };

use crate::data::Payload;
use crate::error::IngestError;

pub const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Value,
}

impl Response {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Body as sent on the wire. Non-ASCII stays unescaped.
    pub fn body_string(&self) -> String {
        self.body.to_string()
    }

    pub fn body_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.body).unwrap_or_else(|_| self.body_string())
    }
}

pub fn success(payload: &Payload) -> Response {
    match serde_json::to_value(payload) {
        Ok(body) => Response { status: 200, content_type: CONTENT_TYPE_JSON, body },
        Err(e) => failure(&IngestError::Internal(format!("could not encode payload: {e}"))),
    }
}

pub fn failure(err: &IngestError) -> Response {
    Response {
        status: err.status_code(),
        content_type: CONTENT_TYPE_JSON,
        body: json!({ "error": err.to_string() }),
    }
}

pub fn build(result: &Result<Payload, IngestError>) -> Response {
    match result {
        Ok(payload) => success(payload),
        Err(err) => failure(err),
    }
}
