// src/progress.rs
use crate::data::{ Skipped, Source };
use crate::error::IngestError;

/// Lightweight progress reporting for multi-source runs.
/// Frontends implement this to surface status (and skipped records) to users.
pub trait Progress {
    /// Called at the start with the number of sources to run.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One upstream record was dropped during extraction.
    fn item_skipped(&mut self, _source: Source, _skipped: &Skipped) {}

    /// One source finished; `count` is records (or preview entries) produced.
    fn source_done(&mut self, _source: Source, _count: usize) {}

    fn source_failed(&mut self, _source: Source, _err: &IngestError) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
