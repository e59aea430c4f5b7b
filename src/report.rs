//! Flat report record consumed by storage and export layers.
//!
//! Field names and value spellings are a stable contract; downstream
//! database rows and spreadsheets key on them.

use crate::analysis::{AggregateTimestamp, AnalysisResult, SignatureStatus};
use crate::compliance::CheckStatus;
use crate::error::Result;
use crate::signatures::{SignatureRecord, SignerSource, TimestampKind};
use serde::{Deserialize, Serialize};

/// Placeholder for absent values.
pub const MISSING: &str = "—";

/// One signature in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureEntry {
    /// Signer and authorization number both present
    pub valid: bool,
    /// Signer name or `—`
    pub name: String,
    /// Authorization number or `—`
    pub ckait_number: String,
    /// Authorization class label (`ČKAIT`, `ČKA`)
    pub signature_type: Option<String>,
    /// Timestamp authority token present
    pub timestamp_valid: bool,
    /// Signer name came from the certificate itself
    pub certificate_valid: bool,
    /// `YYYY-MM-DD HH:MM` or `—`
    pub date: String,
}

impl From<&SignatureRecord> for SignatureEntry {
    fn from(record: &SignatureRecord) -> Self {
        Self {
            valid: record.is_valid(),
            name: record.signer().unwrap_or(MISSING).to_string(),
            ckait_number: record.authorization_number().unwrap_or(MISSING).to_string(),
            signature_type: record.authorization_class().map(|c| c.label().to_string()),
            timestamp_valid: record.timestamp_kind() == TimestampKind::Tsa,
            certificate_valid: record.signer_source() == Some(SignerSource::Certificate),
            date: record
                .signed_at_display()
                .unwrap_or_else(|| MISSING.to_string()),
        }
    }
}

/// Document report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureReport {
    /// Declared PDF/A part, 1 to 3
    pub pdfa_version: Option<u8>,
    /// `OK` only for PDF/A-3
    pub pdfa_status: CheckStatus,
    /// Document signature verdict
    pub sig: SignatureStatus,
    /// Distinct signer names joined with `, `, or `—`
    pub signer: String,
    /// Distinct authorization numbers joined with `, `, or `—`
    pub ckait: String,
    /// Document time evidence
    pub tsa: AggregateTimestamp,
    /// Number of signatures
    pub sig_count: usize,
    /// Per-signature entries in document order
    pub signatures: Vec<SignatureEntry>,
}

impl SignatureReport {
    /// Render an analysis result.
    pub fn from_analysis(result: &AnalysisResult) -> Self {
        let signer = join_distinct(result.signatures.iter().filter_map(|s| s.signer()));
        let ckait = join_distinct(
            result
                .signatures
                .iter()
                .filter_map(|s| s.authorization_number()),
        );

        Self {
            pdfa_version: result.conformance.version.map(|v| v.number()),
            pdfa_status: result.conformance.status,
            sig: result.aggregate_signature_status,
            signer,
            ckait,
            tsa: result.aggregate_timestamp,
            sig_count: result.signatures.len(),
            signatures: result.signatures.iter().map(SignatureEntry::from).collect(),
        }
    }

    /// Serialize as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&AnalysisResult> for SignatureReport {
    fn from(result: &AnalysisResult) -> Self {
        Self::from_analysis(result)
    }
}

/// Join distinct values in first-seen order, or `—` if there are none.
fn join_distinct<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }

    if seen.is_empty() {
        MISSING.to_string()
    } else {
        seen.join(", ")
    }
}
