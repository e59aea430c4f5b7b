//! PDF/A conformance detection.
//!
//! Reports which PDF/A part a document declares in its XMP metadata. This
//! is a declaration check only: fonts, color spaces and the other ISO 19005
//! requirements are not validated.
//!
//! ## PDF/A Parts
//!
//! - **PDF/A-1**: Based on PDF 1.4
//! - **PDF/A-2**: Based on PDF 1.7, allows JPEG2000, transparency
//! - **PDF/A-3**: PDF/A-2 plus embedded files of any type
//!
//! Only PDF/A-3 counts as passing.
//!
//! ## Example
//!
//! ```
//! use pdf_sigscan::compliance::{detect_conformance, PdfAPart};
//!
//! let status = detect_conformance(br#"<x pdfaid:part="3"/>"#);
//! assert_eq!(status.version, Some(PdfAPart::Part3));
//! assert!(status.is_ok());
//! ```
//!
//! ## Standards Reference
//!
//! - ISO 19005-1:2005 (PDF/A-1)
//! - ISO 19005-2:2011 (PDF/A-2)
//! - ISO 19005-3:2012 (PDF/A-3)

mod detector;
mod types;

pub use detector::{detect_conformance, ConformanceDetector};
pub use types::{CheckStatus, ConformanceStatus, PdfAPart};
