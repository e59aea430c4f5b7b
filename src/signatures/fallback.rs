//! Signer name from the signature dictionary's `/Name` entry.
//!
//! Used when the certificate blob yields no usable common name. The `/Name`
//! string is whatever the signing tool wrote, so it is decoded through an
//! encoding chain, filtered against known placeholders, and the survivors
//! are scored.

use crate::encoding::{chain_for, decode_with_chain};
use crate::lexer::string_value;
use crate::patterns::{has_honorific, is_internal_reference, is_placeholder};
use lazy_static::lazy_static;
use regex::bytes::Regex;

lazy_static! {
    /// `/Name` followed by a literal or hex string. `/Names` is not matched.
    static ref RE_NAME_ENTRY: Regex = Regex::new(r"/Name\s*[(<]").unwrap();
}

/// A `/Name` value that passed the filters.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackCandidate {
    /// Trimmed, decoded value
    pub value: String,
    /// Decoded as UTF-16BE
    pub wide: bool,
    /// Window offset of the `/Name` key
    pub offset: usize,
    /// Ranking score, higher wins
    pub score: f64,
}

impl FallbackCandidate {
    fn new(value: String, wide: bool, offset: usize) -> Self {
        let mut score = (value.chars().count().min(30) as f64) / 5.0;
        if wide {
            score += 20.0;
        }
        if value.contains(' ') {
            score += 15.0;
        }
        if has_honorific(&value) {
            score += 10.0;
        }
        score -= offset as f64 / 10_000.0;

        Self {
            value,
            wide,
            offset,
            score,
        }
    }
}

/// Scores `/Name` entries of a window.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackNameExtractor;

impl FallbackNameExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// All acceptable candidates, in window order.
    pub fn candidates(&self, window: &[u8]) -> Vec<FallbackCandidate> {
        RE_NAME_ENTRY
            .find_iter(window)
            .filter_map(|m| {
                let delimiter = m.end() - 1;
                let (_, token) = string_value(&window[delimiter..]).ok()?;
                let raw = token.decode(delimiter).ok()?;
                let (text, codec) = decode_with_chain(&raw, chain_for(&raw))?;
                let value = text.trim();
                if !is_acceptable(value) {
                    log::debug!("Rejected /Name value '{}'", value);
                    return None;
                }
                Some(FallbackCandidate::new(value.to_string(), codec.is_wide(), m.start()))
            })
            .collect()
    }

    /// Highest-scoring candidate. Ties keep the earliest.
    pub fn extract(&self, window: &[u8]) -> Option<String> {
        let mut best: Option<FallbackCandidate> = None;
        for candidate in self.candidates(window) {
            let better = best
                .as_ref()
                .map_or(true, |current| candidate.score > current.score);
            if better {
                best = Some(candidate);
            }
        }

        best.map(|c| {
            log::debug!("Fallback signer '{}' (score {:.2})", c.value, c.score);
            c.value
        })
    }
}

fn is_acceptable(value: &str) -> bool {
    value.chars().count() >= 4
        && !is_placeholder(value)
        && !value.contains('|')
        && !is_internal_reference(value)
        && !value.chars().all(|c| c.is_ascii_digit())
}
