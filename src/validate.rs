// src/validate.rs
//! Data-quality checks over a batch of normalized petitions.
//!
//! Errors flag records that point at a broken extraction (label lookups that
//! silently fell back). Warnings flag gaps that upstreams legitimately have.

use crate::config::consts::{ ERROR_RATE_FAIL_PCT, ERROR_RATE_WARN_PCT, STATUS_ACTIVE, STATUS_FALLBACK };
use crate::data::Petition;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![s!(if self.passed() { "PASSED" } else { "FAILED" })];
        if !self.errors.is_empty() {
            lines.push(format!("Errors ({}):", self.errors.len()));
            lines.extend(self.errors.iter().map(|e| join!("  - ", e)));
        }
        if !self.warnings.is_empty() {
            lines.push(format!("Warnings ({}):", self.warnings.len()));
            lines.extend(self.warnings.iter().map(|w| join!("  - ", w)));
        }
        lines.join("\n")
    }
}

fn ids(ps: &[&Petition]) -> String {
    ps.iter().map(|p| format!("{}:{}", p.source, p.id)).collect::<Vec<_>>().join(", ")
}

/// `skipped` is the number of upstream records dropped during extraction; it
/// feeds the error-rate check over `petitions.len() + skipped` seen records.
pub fn check(petitions: &[Petition], skipped: usize) -> ValidationReport {
    let mut report = ValidationReport::default();

    let unknown: Vec<&Petition> = petitions.iter().filter(|p| p.status == STATUS_FALLBACK).collect();
    if !unknown.is_empty() {
        report.errors.push(format!("{} petitions with status '{STATUS_FALLBACK}' ({})", unknown.len(), ids(&unknown)));
    }

    let silent: Vec<&Petition> = petitions.iter().filter(|p| p.status == STATUS_ACTIVE && p.votes == 0).collect();
    if !silent.is_empty() {
        report.errors.push(format!("{} active petitions with 0 votes ({})", silent.len(), ids(&silent)));
    }

    let untitled: Vec<&Petition> = petitions.iter().filter(|p| p.title.trim().is_empty()).collect();
    if !untitled.is_empty() {
        report.warnings.push(format!("{} petitions without a title ({})", untitled.len(), ids(&untitled)));
    }

    let undated: Vec<&Petition> = petitions.iter().filter(|p| p.date.is_none()).collect();
    if !undated.is_empty() {
        report.warnings.push(format!("{} petitions without a date ({})", undated.len(), ids(&undated)));
    }

    let seen = petitions.len() + skipped;
    if seen > 0 {
        let rate = skipped as f64 / seen as f64 * 100.0;
        // integer comparisons keep the 10% / 20% boundaries exact
        if skipped * 100 > seen * ERROR_RATE_FAIL_PCT {
            report.errors.push(format!("Error rate too high: {rate:.1}% (>{ERROR_RATE_FAIL_PCT}%), {skipped} of {seen} records dropped"));
        } else if skipped * 100 > seen * ERROR_RATE_WARN_PCT {
            report.warnings.push(format!("Error rate elevated: {rate:.1}%, {skipped} of {seen} records dropped"));
        }
    }

    if !report.passed() {
        loge!("Validation failed: {} errors", report.errors.len());
    }
    report
}
