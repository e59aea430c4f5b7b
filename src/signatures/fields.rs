//! Per-window field extraction.

use super::certificate::CertificateBlob;
use super::types::{SignerSource, TimestampKind, WindowFields};
use crate::error::Result;
use crate::lexer::{string_value, PdfString};
use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use regex::bytes::Regex;
use std::ops::RangeInclusive;

lazy_static! {
    /// Signer-asserted signing time, `/M (D:YYYYMMDDHHmmSS...`
    static ref RE_SIGNING_DATE: Regex = Regex::new(r"/M\s*\(D:(\d{14})").unwrap();

    /// Start of the `/Contents` hex string
    static ref RE_CONTENTS: Regex = Regex::new(r"/Contents\s*<").unwrap();
}

/// Extracts date, certificate fields and time evidence from a window.
#[derive(Debug, Clone)]
pub struct SignatureFieldExtractor {
    cn_length: RangeInclusive<usize>,
}

impl Default for SignatureFieldExtractor {
    fn default() -> Self {
        Self::new(5..=80)
    }
}

impl SignatureFieldExtractor {
    /// Create an extractor accepting common names of `cn_length` bytes.
    pub fn new(cn_length: RangeInclusive<usize>) -> Self {
        Self { cn_length }
    }

    /// Extract every field the window yields.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Decode`] if the certificate blob is not valid
    /// hex. Callers treat that as "nothing recovered" for the window.
    pub fn extract(&self, window: &[u8]) -> Result<WindowFields> {
        let signed_at = find_signing_date(window);
        let mut fields = WindowFields {
            signed_at,
            timestamp_kind: if signed_at.is_some() {
                TimestampKind::Local
            } else {
                TimestampKind::None
            },
            ..Default::default()
        };

        let Some(blob) = find_certificate_blob(window)? else {
            return Ok(fields);
        };

        fields.timestamp_kind = blob.timestamp_kind(signed_at.is_some());
        fields.authorization = blob.authorization_number();
        fields.signer = blob.signer_name(&self.cn_length);
        if fields.signer.is_some() {
            fields.signer_source = Some(SignerSource::Certificate);
        }

        Ok(fields)
    }
}

/// First `/M (D:...)` date in the window.
///
/// The 14 digits must form a real date and time; `D:20251399...` yields
/// `None`.
pub fn find_signing_date(window: &[u8]) -> Option<NaiveDateTime> {
    let caps = RE_SIGNING_DATE.captures(window)?;
    let digits = std::str::from_utf8(caps.get(1)?.as_bytes()).ok()?;

    match NaiveDateTime::parse_from_str(digits, "%Y%m%d%H%M%S") {
        Ok(ts) => Some(ts),
        Err(e) => {
            log::debug!("Ignoring signing date '{}': {}", digits, e);
            None
        },
    }
}

/// First `/Contents <...>` blob in the window, hex-decoded.
///
/// # Errors
///
/// Returns [`crate::Error::Decode`] for non-hex content inside the brackets.
pub fn find_certificate_blob(window: &[u8]) -> Result<Option<CertificateBlob>> {
    let Some(m) = RE_CONTENTS.find(window) else {
        return Ok(None);
    };
    // Re-lex from the opening bracket
    let start = m.end() - 1;
    if window[start..].starts_with(b"<<") {
        return Ok(None);
    }

    match string_value(&window[start..]) {
        Ok((_, token @ PdfString::Hex(_))) => {
            let der = token.decode(start)?;
            Ok(Some(CertificateBlob::from_der(&der)))
        },
        Ok(_) => Ok(None),
        Err(_) => {
            // Unterminated or malformed hex; decode up to the next `>` or the window end
            let end = window[start..]
                .iter()
                .position(|&b| b == b'>')
                .map_or(window.len(), |p| start + p);
            let der = crate::lexer::decode_hex(&window[start + 1..end], start)?;
            Ok(Some(CertificateBlob::from_der(&der)))
        },
    }
}
