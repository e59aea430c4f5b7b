//! Targeted field search over a PKCS#7 certificate blob.
//!
//! The blob is never parsed as ASN.1. It is re-encoded as lowercase hex and
//! searched for fixed `OID + tag + length` prefixes, so a tag/length/value
//! triple becomes a fixed-width substring. Malformed certificates that a
//! strict DER decoder would reject still yield their fields this way.
//!
//! Matches are only accepted at even hex offsets, i.e. on byte boundaries.

use super::types::{AuthorizationNumber, TimestampKind};
use crate::encoding::Codec;
use crate::patterns::{
    is_ca_term, AUTHORIZATION_LENGTHS, COMMON_NAME_TAGS, OID_COMMON_NAME_HEX, OID_ORG_UNIT_HEX,
    OID_TIMESTAMP_TOKEN_HEX, ORG_UNIT_TAGS, TAG_BMP_STRING,
};
use std::ops::RangeInclusive;

/// A common-name value found in the blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCandidate {
    /// Decoded value
    pub value: String,
    /// Whether the value names a CA or other infrastructure certificate
    pub excluded: bool,
    /// Whether the value contains a space
    pub has_space: bool,
    /// Byte offset of the OID inside the blob
    pub offset: usize,
}

/// Hex view of a decoded `/Contents` blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateBlob {
    hex: String,
}

impl CertificateBlob {
    /// Wrap raw DER bytes.
    pub fn from_der(der: &[u8]) -> Self {
        Self {
            hex: hex::encode(der),
        }
    }

    /// Lowercase hex encoding of the blob.
    pub fn as_hex(&self) -> &str {
        &self.hex
    }

    /// Whether the blob carries an RFC 3161 timestamp token attribute.
    pub fn has_timestamp_token(&self) -> bool {
        !aligned_matches(&self.hex, OID_TIMESTAMP_TOKEN_HEX).is_empty()
    }

    /// Time evidence given whether a `/M` date was found alongside.
    pub fn timestamp_kind(&self, has_signing_date: bool) -> TimestampKind {
        if self.has_timestamp_token() {
            TimestampKind::Tsa
        } else if has_signing_date {
            TimestampKind::Local
        } else {
            TimestampKind::None
        }
    }

    /// First all-digit organizational-unit value, trying 7, 6, 5 then 4
    /// digits.
    pub fn authorization_number(&self) -> Option<AuthorizationNumber> {
        for &len in AUTHORIZATION_LENGTHS {
            let mut hits: Vec<usize> = ORG_UNIT_TAGS
                .iter()
                .flat_map(|tag| {
                    let prefix = format!("{}{}{:02x}", OID_ORG_UNIT_HEX, tag, len);
                    aligned_matches(&self.hex, &prefix)
                        .into_iter()
                        .map(move |pos| pos + prefix.len())
                })
                .collect();
            hits.sort_unstable();

            for value_start in hits {
                let Some(bytes) = self.value_bytes(value_start, len) else {
                    continue;
                };
                if let Some(number) = std::str::from_utf8(&bytes)
                    .ok()
                    .and_then(AuthorizationNumber::new)
                {
                    log::debug!("Authorization number {} ({})", number.number, number.class);
                    return Some(number);
                }
            }
        }
        None
    }

    /// Every common-name value whose byte length falls in `lengths`, in
    /// blob order per tag.
    pub fn common_name_candidates(&self, lengths: &RangeInclusive<usize>) -> Vec<NameCandidate> {
        let mut candidates = Vec::new();

        for &tag in COMMON_NAME_TAGS {
            let prefix = format!("{}{}", OID_COMMON_NAME_HEX, tag);
            let codec = if tag == TAG_BMP_STRING {
                Codec::Utf16Be
            } else {
                Codec::Utf8
            };

            for pos in aligned_matches(&self.hex, &prefix) {
                let len_start = pos + prefix.len();
                let Some(len) = self
                    .value_bytes(len_start, 1)
                    .and_then(|b| b.first().copied())
                    .map(usize::from)
                else {
                    continue;
                };
                if !lengths.contains(&len) {
                    continue;
                }
                let Some(bytes) = self.value_bytes(len_start + 2, len) else {
                    continue;
                };
                let Some(value) = codec.decode(&bytes) else {
                    continue;
                };
                let value = value.trim().to_string();
                if value.chars().count() <= 3 {
                    continue;
                }

                candidates.push(NameCandidate {
                    excluded: is_ca_term(&value),
                    has_space: value.contains(' '),
                    offset: pos / 2,
                    value,
                });
            }
        }

        candidates
    }

    /// Pick the signer among the common names.
    ///
    /// Candidates are ordered by (excluded, no space, offset) and the first
    /// non-excluded one wins.
    pub fn signer_name(&self, lengths: &RangeInclusive<usize>) -> Option<String> {
        let mut candidates = self.common_name_candidates(lengths);
        candidates.sort_by_key(|c| (c.excluded, !c.has_space, c.offset));

        let chosen = candidates.into_iter().find(|c| !c.excluded)?;
        log::debug!("Certificate signer '{}' at blob offset {}", chosen.value, chosen.offset);
        Some(chosen.value)
    }

    fn value_bytes(&self, hex_start: usize, len: usize) -> Option<Vec<u8>> {
        let slice = self.hex.get(hex_start..hex_start + 2 * len)?;
        hex::decode(slice).ok()
    }
}

/// Even offsets at which `needle` occurs in `hex`, overlapping allowed.
fn aligned_matches(hex: &str, needle: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut from = 0;

    while let Some(found) = hex.get(from..).and_then(|rest| rest.find(needle)) {
        let pos = from + found;
        if pos % 2 == 0 {
            positions.push(pos);
        }
        from = pos + 1;
    }

    positions
}
