//! Document analysis: conformance, signatures and aggregate verdicts.
//!
//! [`SignatureAnalyzer`] is a pure function of one [`DocumentBuffer`]. It
//! holds no mutable state, performs no I/O and never fails, so a single
//! analyzer can be shared across threads.

use crate::compliance::{ConformanceDetector, ConformanceStatus};
use crate::config::AnalyzerConfig;
use crate::sampler::DocumentBuffer;
use crate::signatures::{
    has_signature_marker, FallbackNameExtractor, SignatureFieldExtractor, SignatureLocator,
    SignatureRecord, SignerSource, TimestampKind, WindowFields,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Document-level time evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AggregateTimestamp {
    /// No signatures
    None,
    /// Signatures present, none with a TSA token
    Local,
    /// TSA tokens on some signatures only
    Partial,
    /// Every signature carries a TSA token
    Tsa,
}

impl AggregateTimestamp {
    /// Fold per-signature time evidence.
    ///
    /// `None` is reserved for an empty list. Signatures without a TSA token
    /// aggregate to `Local` even when none of them carries a `/M` date.
    pub fn from_kinds<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = TimestampKind>,
    {
        let (mut total, mut tsa) = (0usize, 0usize);
        for kind in kinds {
            total += 1;
            if kind == TimestampKind::Tsa {
                tsa += 1;
            }
        }

        if total == 0 {
            AggregateTimestamp::None
        } else if tsa == total {
            AggregateTimestamp::Tsa
        } else if tsa > 0 {
            AggregateTimestamp::Partial
        } else {
            AggregateTimestamp::Local
        }
    }
}

impl fmt::Display for AggregateTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateTimestamp::None => write!(f, "NONE"),
            AggregateTimestamp::Local => write!(f, "LOCAL"),
            AggregateTimestamp::Partial => write!(f, "PARTIAL"),
            AggregateTimestamp::Tsa => write!(f, "TSA"),
        }
    }
}

/// Document-level signature verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignatureStatus {
    /// Every signature has a signer and an authorization number
    Ok,
    /// Some signatures are incomplete
    Partial,
    /// No signatures at all
    Fail,
}

impl SignatureStatus {
    /// Fold per-signature validity.
    pub fn from_validity<I>(valid: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut iter = valid.into_iter().peekable();
        if iter.peek().is_none() {
            return SignatureStatus::Fail;
        }
        if iter.all(|v| v) {
            SignatureStatus::Ok
        } else {
            SignatureStatus::Partial
        }
    }
}

impl fmt::Display for SignatureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureStatus::Ok => write!(f, "OK"),
            SignatureStatus::Partial => write!(f, "PARTIAL"),
            SignatureStatus::Fail => write!(f, "FAIL"),
        }
    }
}

/// Everything the engine determined about one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Declared PDF/A conformance
    pub conformance: ConformanceStatus,
    /// One record per `/ByteRange` anchor, in buffer order
    pub signatures: Vec<SignatureRecord>,
    /// Document-level time evidence
    pub aggregate_timestamp: AggregateTimestamp,
    /// Document-level signature verdict
    pub aggregate_signature_status: SignatureStatus,
    /// Whether any signature dictionary or anchor marker is present
    pub has_signature: bool,
    /// Whether the buffer is a head+tail sample
    pub is_partial_sample: bool,
}

impl AnalysisResult {
    /// Assemble a result and compute its aggregates.
    pub fn new(
        conformance: ConformanceStatus,
        signatures: Vec<SignatureRecord>,
        has_signature: bool,
        is_partial_sample: bool,
    ) -> Self {
        let aggregate_timestamp =
            AggregateTimestamp::from_kinds(signatures.iter().map(|s| s.timestamp_kind()));
        let aggregate_signature_status =
            SignatureStatus::from_validity(signatures.iter().map(|s| s.is_valid()));

        Self {
            conformance,
            signatures,
            aggregate_timestamp,
            aggregate_signature_status,
            has_signature,
            is_partial_sample,
        }
    }

    /// Number of signatures found.
    pub fn signature_count(&self) -> usize {
        self.signatures.len()
    }
}

/// The analysis engine.
#[derive(Debug, Clone)]
pub struct SignatureAnalyzer {
    detector: ConformanceDetector,
    locator: SignatureLocator,
    fields: SignatureFieldExtractor,
    fallback: FallbackNameExtractor,
}

impl Default for SignatureAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl SignatureAnalyzer {
    /// Create an analyzer. Only the window and common-name settings of
    /// `config` apply here; sampling happens before analysis.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            detector: ConformanceDetector::new(),
            locator: SignatureLocator::new(config.window),
            fields: SignatureFieldExtractor::new(config.cn_length),
            fallback: FallbackNameExtractor::new(),
        }
    }

    /// Analyze a sampled document.
    pub fn analyze(&self, buffer: &DocumentBuffer) -> AnalysisResult {
        self.run(buffer.as_bytes(), buffer.is_partial())
    }

    /// Analyze raw bytes, treated as a complete file.
    pub fn analyze_bytes(&self, data: &[u8]) -> AnalysisResult {
        self.run(data, false)
    }

    fn run(&self, data: &[u8], partial: bool) -> AnalysisResult {
        let conformance = self.detector.detect(data);

        let signatures: Vec<SignatureRecord> = self
            .locator
            .locate(data)
            .into_iter()
            .map(|window| {
                let fields = self.window_fields(window.slice(data), window.index);
                SignatureRecord::new(window.index, fields)
            })
            .collect();

        let result =
            AnalysisResult::new(conformance, signatures, has_signature_marker(data), partial);

        log::info!(
            "Analyzed {} bytes{}: {} signature(s), sig={}, tsa={}, pdfa={}",
            data.len(),
            if partial { " (sampled)" } else { "" },
            result.signature_count(),
            result.aggregate_signature_status,
            result.aggregate_timestamp,
            result
                .conformance
                .version
                .map_or_else(|| "none".to_string(), |v| v.to_string()),
        );

        result
    }

    fn window_fields(&self, window: &[u8], index: usize) -> WindowFields {
        let mut fields = match self.fields.extract(window) {
            Ok(fields) => fields,
            Err(e) => {
                log::warn!("Signature {}: {}; fields left empty", index, e);
                return WindowFields::default();
            },
        };

        if fields.signer.is_none() {
            if let Some(name) = self.fallback.extract(window) {
                fields.signer = Some(name);
                fields.signer_source = Some(SignerSource::NameField);
            }
        }

        fields
    }
}

/// Analyze a buffer with the default configuration.
pub fn analyze(buffer: &DocumentBuffer) -> AnalysisResult {
    SignatureAnalyzer::default().analyze(buffer)
}
