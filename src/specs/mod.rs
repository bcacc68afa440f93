// src/specs/mod.rs
//! # Extraction “specs” module
//!
//! This module hosts the **source-specific extraction rules**. Each spec
//! focuses on a single upstream and encodes *where the ground truth lives in its
//! payload* and *how to turn it into canonical records*.
//!
//! ## What lives here
//! - **Pure parsing** of already-fetched bodies: the president landing page HTML,
//!   the cabinet API JSON, the open-data catalog search JSON.
//! - **Field rules**: vote digit scrubbing, date label stripping, `"N/A"` /
//!   `"Unknown"` defaults, absolute URL construction.
//! - **Selection policy** for the catalog (first readable resource in the first
//!   package that has one, top 10 only).
//!
//! ## What does **not** live here
//! - **Networking** and status-code interpretation: `scrape::collect_*` fetches,
//!   classifies failures and hands bodies to the specs.
//! - **Envelopes / HTTP statuses**: see `envelope`.
//!
//! ## Typical call chain
//! ```text
//! handlers::get_* → scrape::collect_* → core::net (GET)
//!                                    ↘ specs::<source>::parse_*  → Extraction
//!                 → envelope::build
//! ```
//!
//! ## Conventions & invariants
//! - A record without a natural id is **dropped and recorded** in
//!   `Extraction::skipped`, never emitted with a guessed id.
//! - One bad record never fails the whole listing.
//! - Dates are passed through as text; a missing date stays `None`.
//!
//! ## Testing notes
//! Specs are testable **offline** against inline fixtures.
pub mod cabinet;
pub mod open_data;
pub mod president;
