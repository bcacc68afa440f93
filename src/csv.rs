// src/csv.rs
use std::io::{self, Write};

use crate::data::Petition;

pub const PETITION_HEADERS: [&str; 8] = ["Source", "Id", "Number", "Title", "Date", "Status", "Votes", "Url"];

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Petition rows ---------------- */

/// One flat row in `PETITION_HEADERS` order. Absent values become empty cells.
pub fn petition_row(p: &Petition) -> Vec<String> {
    vec![
        s!(p.source.tag()),
        p.id.clone(),
        p.number.clone().unwrap_or_default(),
        p.title.clone(),
        p.date.clone().unwrap_or_default(),
        p.status.clone(),
        p.votes.to_string(),
        p.url.clone(),
    ]
}

/// Full export text for a batch of petitions.
pub fn to_export_string(petitions: &[Petition], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, &PETITION_HEADERS, sep);
    }
    for p in petitions {
        let _ = write_row(&mut buf, &petition_row(p), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
