//! Embedded signature discovery and metadata extraction.
//!
//! Signatures are found structurally, by their `/ByteRange` anchor, and
//! their metadata is lifted from the surrounding bytes:
//!
//! - **Signing date** from the `/M` entry
//! - **Signer name** from the certificate subject common name, or from the
//!   `/Name` entry when the certificate yields nothing usable
//! - **Authorization number** from the certificate organizational unit
//! - **Time evidence** from the presence of a timestamp token attribute
//!
//! Nothing here verifies a signature. Digests, certificate chains and
//! revocation are out of reach; only structural presence and descriptive
//! metadata are reported.
//!
//! ## Example
//!
//! ```
//! use pdf_sigscan::signatures::{SignatureFieldExtractor, SignatureLocator, TimestampKind};
//!
//! let data = b"<< /Type /Sig /M (D:20250115120000) /ByteRange [0 10 20 30] >>";
//! let windows = SignatureLocator::default().locate(data);
//! assert_eq!(windows.len(), 1);
//!
//! let fields = SignatureFieldExtractor::default()
//!     .extract(windows[0].slice(data))
//!     .unwrap();
//! assert_eq!(fields.timestamp_kind, TimestampKind::Local);
//! ```
//!
//! ## PDF Specification Reference
//!
//! - ISO 32000-1:2008 Section 12.8 - Digital Signatures
//! - RFC 3161 - Time-Stamp Protocol
//! - RFC 5280 Section 4.1.2.4 - Subject name attributes

mod certificate;
mod fallback;
mod fields;
mod locator;
mod types;

pub use certificate::{CertificateBlob, NameCandidate};
pub use fallback::{FallbackCandidate, FallbackNameExtractor};
pub use fields::{find_certificate_blob, find_signing_date, SignatureFieldExtractor};
pub use locator::{has_signature_marker, SignatureLocator, SignatureWindow};
pub use types::{
    AuthorizationClass, AuthorizationNumber, SignatureRecord, SignerSource, TimestampKind,
    WindowFields,
};
