//! PDF/A marker detection.
//!
//! Looks for the XMP `pdfaid:part` assertion directly in the raw bytes,
//! without locating or inflating the metadata stream. Producers write the
//! assertion either as an attribute (`pdfaid:part="3"`) or as an element
//! (`<pdfaid:part>3</pdfaid:part>`); both are accepted. When neither form is
//! present a looser textual marker is tried.

use super::types::{ConformanceStatus, PdfAPart};
use lazy_static::lazy_static;
use regex::bytes::Regex;

lazy_static! {
    /// Attribute and element forms of `pdfaid:part`, indexed by part - 1.
    static ref STRUCTURED_MARKERS: [Regex; 3] = [
        structured_marker(1),
        structured_marker(2),
        structured_marker(3),
    ];

    /// Loose forms: `pdfaid:part` followed closely by the digit, or `PDF/A-N`.
    static ref LOOSE_MARKERS: [Regex; 3] = [
        loose_marker(1),
        loose_marker(2),
        loose_marker(3),
    ];
}

fn structured_marker(part: u8) -> Regex {
    Regex::new(&format!(
        r#"pdfaid:part\s*=\s*["']{part}["']|<pdfaid:part>\s*{part}\s*</pdfaid:part>"#
    ))
    .unwrap()
}

fn loose_marker(part: u8) -> Regex {
    Regex::new(&format!(
        r"(?i)pdfaid:part[^0-9<]{{0,16}}{part}(?-u:\b)|PDF/A-{part}[abu]?(?-u:\b)"
    ))
    .unwrap()
}

fn marker_index(part: PdfAPart) -> usize {
    part.number() as usize - 1
}

/// Detects the declared PDF/A part of a buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConformanceDetector;

impl ConformanceDetector {
    /// Create a new detector.
    pub fn new() -> Self {
        Self
    }

    /// Detect the declared part. Parts are tried 3, 2, 1; structured markers
    /// for every part are tried before any loose marker.
    pub fn detect(&self, data: &[u8]) -> ConformanceStatus {
        let version = Self::find_part(data, &STRUCTURED_MARKERS)
            .or_else(|| Self::find_part(data, &LOOSE_MARKERS));

        match version {
            Some(part) => log::debug!("Detected {} marker", part),
            None => log::debug!("No PDF/A marker found"),
        }

        ConformanceStatus::from_version(version)
    }

    fn find_part(data: &[u8], markers: &[Regex; 3]) -> Option<PdfAPart> {
        PdfAPart::DETECTION_ORDER
            .into_iter()
            .find(|part| markers[marker_index(*part)].is_match(data))
    }
}

/// Detect the declared PDF/A part with a default detector.
pub fn detect_conformance(data: &[u8]) -> ConformanceStatus {
    ConformanceDetector::new().detect(data)
}
