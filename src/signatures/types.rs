//! Signature record types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time evidence attached to a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimestampKind {
    /// No signing time at all
    #[default]
    None,
    /// Only the signer-asserted `/M` date
    Local,
    /// RFC 3161 timestamp token from a timestamp authority
    Tsa,
}

impl fmt::Display for TimestampKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampKind::None => write!(f, "NONE"),
            TimestampKind::Local => write!(f, "LOCAL"),
            TimestampKind::Tsa => write!(f, "TSA"),
        }
    }
}

/// Professional chamber that issued an authorization number.
///
/// The chamber is inferred from the digit count: engineers and technicians
/// (ČKAIT) carry 6-7 digit numbers, architects (ČKA) 4-5 digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorizationClass {
    /// Chamber of Certified Engineers and Technicians (ČKAIT)
    Engineer,
    /// Chamber of Architects (ČKA)
    Architect,
}

impl AuthorizationClass {
    /// Class for a number of `digits` digits.
    pub fn from_digit_count(digits: usize) -> Option<Self> {
        match digits {
            6 | 7 => Some(AuthorizationClass::Engineer),
            4 | 5 => Some(AuthorizationClass::Architect),
            _ => None,
        }
    }

    /// Report label.
    pub fn label(&self) -> &'static str {
        match self {
            AuthorizationClass::Engineer => "ČKAIT",
            AuthorizationClass::Architect => "ČKA",
        }
    }
}

impl fmt::Display for AuthorizationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Authorization number recovered from a certificate OU field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorizationNumber {
    /// The digits, leading zeros kept
    pub number: String,
    /// Issuing chamber
    pub class: AuthorizationClass,
}

impl AuthorizationNumber {
    /// Build from an all-digit string of 4 to 7 digits.
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        if !number.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let class = AuthorizationClass::from_digit_count(number.len())?;
        Some(Self { number, class })
    }
}

/// Where a signer name was recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignerSource {
    /// Certificate subject common name inside `/Contents`
    Certificate,
    /// The signature dictionary's `/Name` entry
    NameField,
}

/// Fields extracted from one signature window, before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowFields {
    /// Signer display name
    pub signer: Option<String>,
    /// Origin of `signer`
    pub signer_source: Option<SignerSource>,
    /// Authorization number from the certificate OU
    pub authorization: Option<AuthorizationNumber>,
    /// Time evidence
    pub timestamp_kind: TimestampKind,
    /// Signer-asserted signing time (`/M`)
    pub signed_at: Option<NaiveDateTime>,
}

/// One classified signature. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureRecord {
    index: usize,
    fields: WindowFields,
    valid: bool,
}

impl SignatureRecord {
    /// Classify the fields of the `index`-th signature (1-based).
    ///
    /// A signature is valid iff both a signer and an authorization number
    /// were recovered.
    pub fn new(index: usize, fields: WindowFields) -> Self {
        let valid = fields.signer.is_some() && fields.authorization.is_some();
        Self {
            index,
            fields,
            valid,
        }
    }

    /// 1-based position in discovery order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Signer display name.
    pub fn signer(&self) -> Option<&str> {
        self.fields.signer.as_deref()
    }

    /// Origin of the signer name.
    pub fn signer_source(&self) -> Option<SignerSource> {
        self.fields.signer_source
    }

    /// Authorization number digits.
    pub fn authorization_number(&self) -> Option<&str> {
        self.fields.authorization.as_ref().map(|a| a.number.as_str())
    }

    /// Chamber that issued the authorization number.
    pub fn authorization_class(&self) -> Option<AuthorizationClass> {
        self.fields.authorization.as_ref().map(|a| a.class)
    }

    /// Time evidence.
    pub fn timestamp_kind(&self) -> TimestampKind {
        self.fields.timestamp_kind
    }

    /// Signer-asserted signing time.
    pub fn signed_at(&self) -> Option<NaiveDateTime> {
        self.fields.signed_at
    }

    /// Signing time as `YYYY-MM-DD HH:MM`.
    pub fn signed_at_display(&self) -> Option<String> {
        self.fields
            .signed_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
    }

    /// Whether signer and authorization number are both present.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}
