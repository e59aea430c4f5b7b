//! PDF/A conformance types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// PDF/A part (version) declared in the document metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PdfAPart {
    /// PDF/A-1 (based on PDF 1.4)
    Part1,
    /// PDF/A-2 (based on PDF 1.7)
    Part2,
    /// PDF/A-3 (based on PDF 1.7, with embedded files)
    Part3,
}

impl PdfAPart {
    /// Parts in detection order, highest first.
    pub const DETECTION_ORDER: [PdfAPart; 3] = [PdfAPart::Part3, PdfAPart::Part2, PdfAPart::Part1];

    /// Numeric part, as written in `pdfaid:part`.
    pub fn number(&self) -> u8 {
        match self {
            PdfAPart::Part1 => 1,
            PdfAPart::Part2 => 2,
            PdfAPart::Part3 => 3,
        }
    }

    /// Parse the numeric part.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(PdfAPart::Part1),
            2 => Some(PdfAPart::Part2),
            3 => Some(PdfAPart::Part3),
            _ => None,
        }
    }
}

impl fmt::Display for PdfAPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PDF/A-{}", self.number())
    }
}

/// Pass/fail verdict used for conformance and signature status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    /// Requirement met
    Ok,
    /// Requirement not met
    Fail,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Ok => write!(f, "OK"),
            CheckStatus::Fail => write!(f, "FAIL"),
        }
    }
}

/// Declared PDF/A conformance of a document.
///
/// Only PDF/A-3 passes: archival submissions with embedded signatures and
/// attachments require part 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConformanceStatus {
    /// Declared part, if any marker was found.
    pub version: Option<PdfAPart>,
    /// `Ok` iff `version` is PDF/A-3.
    pub status: CheckStatus,
}

impl ConformanceStatus {
    /// Build the status for a detected part.
    pub fn from_version(version: Option<PdfAPart>) -> Self {
        let status = match version {
            Some(PdfAPart::Part3) => CheckStatus::Ok,
            _ => CheckStatus::Fail,
        };
        Self { version, status }
    }

    /// No marker found.
    pub fn undetected() -> Self {
        Self::from_version(None)
    }

    /// Whether the document passes.
    pub fn is_ok(&self) -> bool {
        self.status == CheckStatus::Ok
    }
}

impl Default for ConformanceStatus {
    fn default() -> Self {
        Self::undetected()
    }
}
