//! DER fragments and word lists used by the signature scanners.
//!
//! Certificate patterns are lowercase hex because the certificate blob is
//! searched as a hex string (see `signatures::certificate`).

/// DER `OBJECT IDENTIFIER` header plus 2.5.4.3 (id-at-commonName).
pub const OID_COMMON_NAME_HEX: &str = "0603550403";

/// DER `OBJECT IDENTIFIER` header plus 2.5.4.11 (id-at-organizationalUnitName).
pub const OID_ORG_UNIT_HEX: &str = "060355040b";

/// 1.2.840.113549.1.9.16.2.14 (id-aa-timeStampToken) content bytes.
pub const OID_TIMESTAMP_TOKEN_HEX: &str = "2a864886f70d010910020e";

/// DER string tag `UTF8String`.
pub const TAG_UTF8_STRING: &str = "0c";

/// DER string tag `PrintableString`.
pub const TAG_PRINTABLE_STRING: &str = "13";

/// DER string tag `BMPString` (UTF-16BE).
pub const TAG_BMP_STRING: &str = "1e";

/// String tags accepted for the organizational-unit value.
pub const ORG_UNIT_TAGS: &[&str] = &[TAG_UTF8_STRING, TAG_PRINTABLE_STRING];

/// String tags accepted for the common-name value.
pub const COMMON_NAME_TAGS: &[&str] = &[TAG_UTF8_STRING, TAG_PRINTABLE_STRING, TAG_BMP_STRING];

/// Authorization number lengths, longest first.
pub const AUTHORIZATION_LENGTHS: &[usize] = &[7, 6, 5, 4];

/// Common-name fragments that identify certificate authorities and
/// infrastructure certificates rather than people. Matched case-insensitively
/// as substrings.
pub const CA_EXCLUSION_TERMS: &[&str] = &[
    "root",
    "qualified",
    "postsignum",
    "i.ca",
    "eidentity",
    "certificate",
    "certifik",
    "authority",
    "autorita",
    "timestamp",
    "time stamp",
    "time-stamp",
    " tsa ",
    "ocsp",
    "crl",
    "issuing",
    "validation",
    "trust",
    "sub ca",
    " ca ",
];

/// `/Name` values written by signing tools when no real name is known.
/// Matched case-insensitively against the whole trimmed value.
pub const NAME_PLACEHOLDERS: &[&str] = &[
    "signature",
    "signer",
    "podpis",
    "podepsal",
    "podpisovatel",
    "unknown",
    "neznámý",
    "nezname",
    "anonymous",
    "user",
    "uživatel",
    "author",
    "autor",
    "name",
    "jméno",
    "null",
    "none",
    "test",
    "digitally signed",
    "digitálně podepsáno",
];

/// Prefixes of internal field identifiers that some tools put in `/Name`.
pub const INTERNAL_REFERENCE_PREFIXES: &[&str] =
    &["Signature", "Sig_", "SigField", "Podpis_", "Field_", "uuid:", "#"];

/// Academic and professional title prefixes.
pub const HONORIFIC_PREFIXES: &[&str] = &[
    "Ing.", "Mgr.", "Dr.", "MUDr.", "JUDr.", "RNDr.", "PhDr.", "Bc.", "Doc.", "doc.", "Prof.",
    "prof.",
];

/// Whether `value` contains any CA exclusion term.
pub fn is_ca_term(value: &str) -> bool {
    // Pad so that word-bounded terms also match at either end
    let lower = format!(" {} ", value.to_lowercase());
    CA_EXCLUSION_TERMS.iter().any(|term| lower.contains(term))
}

/// Whether `value` is a known placeholder name.
pub fn is_placeholder(value: &str) -> bool {
    let lower = value.to_lowercase();
    NAME_PLACEHOLDERS.iter().any(|p| *p == lower)
}

/// Whether `value` starts with an internal field-reference prefix.
pub fn is_internal_reference(value: &str) -> bool {
    INTERNAL_REFERENCE_PREFIXES
        .iter()
        .any(|prefix| value.starts_with(prefix))
}

/// Whether `value` starts with an honorific prefix.
pub fn has_honorific(value: &str) -> bool {
    HONORIFIC_PREFIXES.iter().any(|prefix| value.starts_with(prefix))
}
