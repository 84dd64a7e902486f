//! Fixed byte fixtures as written by earlier releases.

use skiff_datagram::{CodecOptions, Datagram, DatagramError, DocumentDataDatagram};

// ============================================================================
// Fixtures
// ============================================================================

/// gzip (mtime 0, written by a different encoder) of `PDF_HEADER`.
const GZIP_PDF_HEADER_HEX: &str =
    "1f8b0800000000000203530d7071d335d433e1527df4f8fc652e43050385fca42c2e005b4f49c017000000";

/// base64 of `%PDF-1.4\n%\xe2\xe3\xcf\xd3\n1 0 obj\n`.
const PDF_HEADER_BASE64: &str = "JVBERi0xLjQKJeLjz9MKMSAwIG9iago=";

const RICH_TEXT_V1: &[u8] =
    br#"{"data":"{\"type\":\"doc\",\"content\":[{\"type\":\"paragraph\"}]}"}"#;

const HEX_PDF_V1: &[u8] = br#"{"data":"255044462d312e340a"}"#;

/// `data` is both valid hex and a valid JSON number.
const DIGITS_V1: &[u8] = br#"{"data":"1234"}"#;

// ============================================================================
// 0.1.0
// ============================================================================

#[test]
fn v1_rich_text_returns_inner_json_unchanged() {
    let dg = DocumentDataDatagram::new();
    assert_eq!(
        dg.deserialize(RICH_TEXT_V1, "0.1.0").unwrap(),
        r#"{"type":"doc","content":[{"type":"paragraph"}]}"#
    );
}

#[test]
fn v1_hex_pdf_returns_base64_of_bytes() {
    let dg = DocumentDataDatagram::new();
    assert_eq!(
        dg.deserialize(HEX_PDF_V1, "0.1.0").unwrap(),
        "JVBERi0xLjQK"
    );
}

#[test]
fn v1_data_that_parses_as_json_wins_over_hex() {
    let dg = DocumentDataDatagram::new();
    let decoded = dg.deserialize(DIGITS_V1, "0.1.0").unwrap();
    assert_eq!(decoded, "1234");
    assert_ne!(decoded, "EjQ=");
}

#[test]
fn v1_bytes_read_under_current_version_are_not_unwrapped() {
    // The same bytes tagged 0.2.0 are plain JSON text and come back verbatim
    let dg = DocumentDataDatagram::new();
    assert_eq!(
        dg.deserialize(RICH_TEXT_V1, "0.2.0").unwrap(),
        std::str::from_utf8(RICH_TEXT_V1).unwrap()
    );
}

// ============================================================================
// 0.2.0
// ============================================================================

#[test]
fn v2_gzip_fixture_from_foreign_encoder() {
    let dg = DocumentDataDatagram::new();
    let stored = hex::decode(GZIP_PDF_HEADER_HEX).unwrap();
    assert_eq!(dg.deserialize(&stored, "0.2.0").unwrap(), PDF_HEADER_BASE64);
}

#[test]
fn v2_json_fixture() {
    let dg = DocumentDataDatagram::new();
    assert_eq!(
        dg.deserialize(br#"{"ops":[{"insert":"hi\n"}]}"#, "0.2.0").unwrap(),
        r#"{"ops":[{"insert":"hi\n"}]}"#
    );
}

#[test]
fn v2_gzip_fixture_with_unbounded_inflate_limit() {
    let opts = CodecOptions::default().with_max_decompressed_len(usize::MAX);
    let dg = DocumentDataDatagram::with_options(opts);
    let stored = hex::decode(GZIP_PDF_HEADER_HEX).unwrap();
    assert_eq!(dg.deserialize(&stored, "0.2.0").unwrap(), PDF_HEADER_BASE64);
}

#[test]
fn rewriting_a_v2_fixture_reads_back_the_same() {
    let dg = DocumentDataDatagram::new();
    let stored = hex::decode(GZIP_PDF_HEADER_HEX).unwrap();
    let payload = dg.deserialize(&stored, "0.2.0").unwrap();
    let rewritten = dg.serialize(&payload).unwrap();
    assert_eq!(dg.deserialize(&rewritten, dg.version()).unwrap(), payload);
}

#[test]
fn truncated_gzip_fixture_is_corrupt() {
    let dg = DocumentDataDatagram::new();
    let stored = hex::decode(GZIP_PDF_HEADER_HEX).unwrap();
    assert!(matches!(
        dg.deserialize(&stored[..20], "0.2.0"),
        Err(DatagramError::CorruptPayload { .. })
    ));
}

#[test]
fn corrupt_errors_are_final() {
    let dg = DocumentDataDatagram::new();
    let err = dg.deserialize(b"\x00\x01\x02 not gzip", "0.2.0").unwrap_err();
    assert!(!err.is_retryable());
    assert!(err.to_string().contains("ddl://skiff/DocumentDataDatagram"));
}
