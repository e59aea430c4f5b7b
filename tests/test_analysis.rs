//! Integration tests for the analysis engine.

mod common;

use common::{document, SignatureFixture};
use pdf_sigscan::signatures::SignerSource;
use pdf_sigscan::{
    analyze, AggregateTimestamp, AnalyzerConfig, AuthorizationClass, CheckStatus, DocumentBuffer,
    PdfAPart, SignatureAnalyzer, SignatureReport, SignatureStatus, TimestampKind,
};

fn run(data: Vec<u8>) -> pdf_sigscan::AnalysisResult {
    analyze(&DocumentBuffer::from_bytes(data))
}

fn engineer_signature() -> SignatureFixture {
    SignatureFixture::new()
        .date("20250115120000")
        .org_unit("1203456")
        .common_name("Ing. Jan Novák")
}

// ============================================================================
// Document-level scenarios
// ============================================================================

#[test]
fn test_unsigned_document() {
    let result = run(document(None, &[]));

    assert!(!result.has_signature);
    assert!(result.signatures.is_empty());
    assert_eq!(result.aggregate_signature_status, SignatureStatus::Fail);
    assert_eq!(result.aggregate_timestamp, AggregateTimestamp::None);
    assert_eq!(result.conformance.version, None);
    assert_eq!(result.conformance.status, CheckStatus::Fail);
}

#[test]
fn test_conformance_part3_and_part1() {
    let part3 = run(document(Some(3), &[]));
    assert_eq!(part3.conformance.version, Some(PdfAPart::Part3));
    assert_eq!(part3.conformance.status, CheckStatus::Ok);

    let part1 = run(document(Some(1), &[]));
    assert_eq!(part1.conformance.version, Some(PdfAPart::Part1));
    assert_eq!(part1.conformance.status, CheckStatus::Fail);
}

#[test]
fn test_single_complete_signature() {
    let result = run(document(Some(3), &[engineer_signature()]));

    assert!(result.has_signature);
    assert_eq!(result.signatures.len(), 1);

    let sig = &result.signatures[0];
    assert_eq!(sig.index(), 1);
    assert_eq!(sig.signer(), Some("Ing. Jan Novák"));
    assert_eq!(sig.signer_source(), Some(SignerSource::Certificate));
    assert_eq!(sig.authorization_number(), Some("1203456"));
    assert_eq!(sig.authorization_class(), Some(AuthorizationClass::Engineer));
    assert_eq!(sig.timestamp_kind(), TimestampKind::Local);
    assert_eq!(sig.signed_at_display().as_deref(), Some("2025-01-15 12:00"));
    assert!(sig.is_valid());

    assert_eq!(result.aggregate_signature_status, SignatureStatus::Ok);
    assert_eq!(result.aggregate_timestamp, AggregateTimestamp::Local);
}

#[test]
fn test_one_signature_missing_common_name() {
    let incomplete = SignatureFixture::new()
        .date("20250116090000")
        .org_unit("1203456");
    let result = run(document(None, &[engineer_signature(), incomplete]));

    assert_eq!(result.signatures.len(), 2);
    assert!(result.signatures[0].is_valid());
    assert!(!result.signatures[1].is_valid());
    assert_eq!(result.signatures[1].signer(), None);
    assert_eq!(result.aggregate_signature_status, SignatureStatus::Partial);
}

#[test]
fn test_ca_common_name_is_skipped() {
    let sig = SignatureFixture::new()
        .org_unit("0123456")
        .printable_common_name("PostSignum Qualified CA")
        .common_name("Petr Svoboda");
    let result = run(document(None, &[sig]));

    assert_eq!(result.signatures[0].signer(), Some("Petr Svoboda"));
}

// ============================================================================
// Certificate field variants
// ============================================================================

#[test]
fn test_architect_number() {
    let sig = SignatureFixture::new()
        .org_unit("04512")
        .common_name("Ing. arch. Eva Malá");
    let result = run(document(None, &[sig]));

    let record = &result.signatures[0];
    assert_eq!(record.authorization_number(), Some("04512"));
    assert_eq!(record.authorization_class(), Some(AuthorizationClass::Architect));
    assert_eq!(record.timestamp_kind(), TimestampKind::None);
    assert!(record.is_valid());
}

#[test]
fn test_non_numeric_org_unit_ignored() {
    let sig = SignatureFixture::new()
        .org_unit("Projekt")
        .common_name("Petr Svoboda");
    let result = run(document(None, &[sig]));

    assert_eq!(result.signatures[0].authorization_number(), None);
    assert!(!result.signatures[0].is_valid());
    assert_eq!(result.aggregate_signature_status, SignatureStatus::Partial);
}

#[test]
fn test_bmp_common_name() {
    let sig = SignatureFixture::new()
        .org_unit("120345")
        .bmp_common_name("Jiří Dvořák");
    let result = run(document(None, &[sig]));

    assert_eq!(result.signatures[0].signer(), Some("Jiří Dvořák"));
    assert_eq!(
        result.signatures[0].authorization_class(),
        Some(AuthorizationClass::Engineer)
    );
}

#[test]
fn test_timestamp_authority() {
    let with_tsa = engineer_signature().tsa();
    let result = run(document(None, &[with_tsa.clone(), with_tsa]));
    assert!(result
        .signatures
        .iter()
        .all(|s| s.timestamp_kind() == TimestampKind::Tsa));
    assert_eq!(result.aggregate_timestamp, AggregateTimestamp::Tsa);

    let mixed = run(document(None, &[engineer_signature().tsa(), engineer_signature()]));
    assert_eq!(mixed.aggregate_timestamp, AggregateTimestamp::Partial);
}

#[test]
fn test_signatures_without_time_evidence() {
    let undated = || {
        SignatureFixture::new()
            .org_unit("1203456")
            .common_name("Petr Svoboda")
    };
    let result = run(document(None, &[undated(), undated()]));

    assert_eq!(result.signatures.len(), 2);
    assert!(result
        .signatures
        .iter()
        .all(|s| s.timestamp_kind() == TimestampKind::None));
    assert_eq!(result.aggregate_timestamp, AggregateTimestamp::Local);
    assert_ne!(result.aggregate_timestamp, AggregateTimestamp::None);
    assert_eq!(result.aggregate_signature_status, SignatureStatus::Ok);
}

#[test]
fn test_tsa_without_date() {
    let sig = SignatureFixture::new()
        .org_unit("1203456")
        .common_name("Petr Svoboda")
        .tsa();
    let result = run(document(None, &[sig]));
    assert_eq!(result.signatures[0].timestamp_kind(), TimestampKind::Tsa);
    assert_eq!(result.signatures[0].signed_at(), None);
}

// ============================================================================
// Fallback and degradation
// ============================================================================

#[test]
fn test_name_entry_fallback() {
    let sig = SignatureFixture::new()
        .org_unit("1203456")
        .common_name("I.CA Qualified 2 CA/RSA")
        .name_entry(b"<FEFF0049006E0067002E0020004A0061006E0020004E006F007600E1006B>");
    let result = run(document(None, &[sig]));

    let record = &result.signatures[0];
    assert_eq!(record.signer(), Some("Ing. Jan Novák"));
    assert_eq!(record.signer_source(), Some(SignerSource::NameField));
    assert!(record.is_valid());

    let report = SignatureReport::from_analysis(&result);
    assert!(!report.signatures[0].certificate_valid);
}

#[test]
fn test_placeholder_name_entry_rejected() {
    let sig = SignatureFixture::new()
        .org_unit("1203456")
        .name_entry(b"(Signature1)");
    let result = run(document(None, &[sig]));
    assert_eq!(result.signatures[0].signer(), None);
}

#[test]
fn test_corrupt_contents_only_affects_its_window() {
    let broken = SignatureFixture::new()
        .date("20250115120000")
        .raw_contents("3082XYZ");
    let result = run(document(None, &[broken, engineer_signature()]));

    assert_eq!(result.signatures.len(), 2);
    let first = &result.signatures[0];
    assert_eq!(first.signer(), None);
    assert_eq!(first.signed_at(), None);
    assert_eq!(first.timestamp_kind(), TimestampKind::None);

    assert!(result.signatures[1].is_valid());
    assert_eq!(result.aggregate_signature_status, SignatureStatus::Partial);
}

#[test]
fn test_truncated_buffer() {
    let mut data = document(None, &[engineer_signature()]);
    let cut = data.len() - 200;
    data.truncate(cut);
    // Must not panic, whatever survives
    let result = run(data);
    assert!(result.signatures.len() <= 1);
}

#[test]
fn test_contents_cut_at_buffer_end() {
    // Anchor survives, the hex blob runs into the end of the sample
    let hex = hex::encode_upper(engineer_signature().der());
    for tail in [hex.clone(), format!("{}0", hex)] {
        let mut data = b"%PDF-1.7\n<< /Type /Sig /ByteRange [0 1000 5000 2000]\n".to_vec();
        data.extend_from_slice(b"/M (D:20250115120000)\n/Contents <");
        data.extend_from_slice(tail.as_bytes());

        let result = run(data);
        assert_eq!(result.signatures.len(), 1);

        let record = &result.signatures[0];
        assert_eq!(record.signer(), Some("Ing. Jan Novák"));
        assert_eq!(record.signer_source(), Some(SignerSource::Certificate));
        assert_eq!(record.authorization_number(), Some("1203456"));
        assert_eq!(record.timestamp_kind(), TimestampKind::Local);
        assert!(record.is_valid());
        assert_eq!(result.aggregate_signature_status, SignatureStatus::Ok);
    }
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_narrow_window_misses_fields() {
    // The date sits before /ByteRange, outside a window that starts at the anchor
    let analyzer = SignatureAnalyzer::new(AnalyzerConfig::new().with_window(0, 100));
    let result = analyzer.analyze_bytes(&document(None, &[engineer_signature()]));

    assert_eq!(result.signatures.len(), 1);
    assert_eq!(result.signatures[0].signed_at(), None);
    assert!(!result.signatures[0].is_valid());
}

#[test]
fn test_common_name_length_limit() {
    let analyzer = SignatureAnalyzer::new(AnalyzerConfig::new().with_cn_length(5..=10));
    let result = analyzer.analyze_bytes(&document(None, &[engineer_signature()]));
    assert_eq!(result.signatures[0].signer(), None);
}

#[test]
fn test_idempotent() {
    let data = document(Some(2), &[engineer_signature(), engineer_signature().tsa()]);
    let analyzer = SignatureAnalyzer::default();
    assert_eq!(analyzer.analyze_bytes(&data), analyzer.analyze_bytes(&data));
}
