// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod specs;
pub mod scrape;

pub mod aggregate;
pub mod csv;
pub mod envelope;
pub mod file;
pub mod handlers;
pub mod progress;
pub mod validate;

#[cfg(feature = "cli")]
pub mod cli;

pub use data::{Extraction, Payload, Petition, RawData, RawPassthrough, Skipped, Source};
pub use error::IngestError;
