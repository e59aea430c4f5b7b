// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::enum_variant_names)]
#![allow(clippy::manual_find)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # PDF SigScan
//!
//! Signature and archival-compliance metadata extraction for PDF files.
//!
//! ## Core Features
//!
//! - **PDF/A Detection**: Declared part (1-3) from XMP `pdfaid:part` markers
//! - **Signature Discovery**: One record per `/ByteRange` anchor, incremental
//!   updates included
//! - **Certificate Fields**: Signer common name and professional authorization
//!   number (ČKAIT/ČKA) recovered from the PKCS#7 blob by hex pattern search
//! - **Time Evidence**: RFC 3161 timestamp tokens versus signer-asserted `/M` dates
//! - **Name Fallback**: `/Name` entries decoded through UTF-16BE, UTF-8,
//!   Windows-1250 and Latin-1, filtered and scored
//! - **Bounded Sampling**: Large files are reduced to head and tail
//!
//! Signatures are never cryptographically verified. The crate reports what a
//! document claims, not whether the claim holds.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_sigscan::{analyze, FileSampler, SignatureReport};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let buffer = FileSampler::default().sample_path("signed.pdf")?;
//! let result = analyze(&buffer);
//!
//! for sig in &result.signatures {
//!     println!("#{} {:?} valid={}", sig.index(), sig.signer(), sig.is_valid());
//! }
//!
//! println!("{}", SignatureReport::from_analysis(&result).to_json()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! FileSampler -> DocumentBuffer
//!                    |
//!                    +-> ConformanceDetector
//!                    +-> SignatureLocator -> SignatureFieldExtractor
//!                                         -> FallbackNameExtractor
//!                    |
//!              SignatureAnalyzer -> AnalysisResult -> SignatureReport
//! ```

// Error handling
pub mod error;

// Configuration and I/O boundary
pub mod config;
pub mod sampler;

// Low-level decoding
pub mod encoding;
pub mod lexer;
pub mod patterns;

// Scanners
pub mod compliance;
pub mod signatures;

// Engine and output
pub mod analysis;
pub mod report;

// Re-exports
pub use analysis::{analyze, AggregateTimestamp, AnalysisResult, SignatureAnalyzer, SignatureStatus};
pub use compliance::{CheckStatus, ConformanceStatus, PdfAPart};
pub use config::AnalyzerConfig;
pub use error::{Error, Result};
pub use report::{SignatureEntry, SignatureReport};
pub use sampler::{DocumentBuffer, FileSampler};
pub use signatures::{AuthorizationClass, SignatureRecord, TimestampKind};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
