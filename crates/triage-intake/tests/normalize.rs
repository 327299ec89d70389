use std::io::Write;

use pretty_assertions::assert_eq;
use rstest::rstest;
use triage_core::limits::MAX_FILE_SIZE;
use triage_core::{Source, ValidationError};
use triage_intake::{FileUpload, IntakeError, RawInput, normalize};

fn file(name: &str, mime: Option<&str>, bytes: &[u8]) -> RawInput {
    RawInput::File(FileUpload {
        name: name.to_string(),
        mime: mime.map(str::to_string),
        bytes: bytes.to_vec(),
    })
}

#[test]
fn pasted_text_is_trimmed() {
    let submission =
        normalize(RawInput::Text("   Reunião amanhã às 10h\n\n".to_string())).unwrap();

    assert_eq!(submission.content(), "Reunião amanhã às 10h");
    assert_eq!(submission.source(), Source::Text);
    assert_eq!(submission.filename(), None);
}

#[rstest]
#[case("")]
#[case("         ")]
#[case("Oi, tudo?")]
fn short_text_is_rejected(#[case] text: &str) {
    let err = normalize(RawInput::Text(text.to_string())).unwrap_err();
    assert!(matches!(
        err,
        IntakeError::Validation(ValidationError::TooShort { .. })
    ));
}

#[test]
fn exactly_minimum_length_is_accepted() {
    let submission = normalize(RawInput::Text("  0123456789  ".to_string())).unwrap();
    assert_eq!(submission.content(), "0123456789");
}

#[test]
fn plain_text_file_keeps_its_name() {
    let submission = normalize(file(
        "pedido.txt",
        Some("text/plain"),
        "Segue o relatório do projeto.".as_bytes(),
    ))
    .unwrap();

    assert_eq!(submission.source(), Source::File);
    assert_eq!(submission.filename(), Some("pedido.txt"));
    assert_eq!(submission.content(), "Segue o relatório do projeto.");
}

#[test]
fn invalid_utf8_is_decoded_lossily() {
    let submission = normalize(file("legacy.txt", None, b"Relat\xF3rio anexo do projeto")).unwrap();
    assert!(submission.content().contains('\u{FFFD}'));
    assert!(submission.content().ends_with("anexo do projeto"));
}

#[rstest]
#[case("photo.png", None, "image/png")]
#[case("email.txt", Some("application/msword"), "application/msword")]
#[case("unknown", None, "application/octet-stream")]
fn unsupported_types_are_rejected(
    #[case] name: &str,
    #[case] mime: Option<&str>,
    #[case] expected: &str,
) {
    let err = normalize(file(name, mime, b"long enough content here")).unwrap_err();
    match err {
        IntakeError::Validation(ValidationError::UnsupportedType { mime }) => {
            assert_eq!(mime, expected);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn oversized_upload_is_rejected_before_decoding() {
    let size = usize::try_from(MAX_FILE_SIZE).unwrap() + 1;
    let bytes = vec![b'a'; size];
    let err = normalize(file("big.txt", Some("text/plain"), &bytes)).unwrap_err();

    assert!(matches!(
        err,
        IntakeError::Validation(ValidationError::TooLarge { size: s, .. }) if s == MAX_FILE_SIZE + 1
    ));
}

#[test]
fn garbage_pdf_is_an_extraction_error() {
    let err = normalize(file(
        "broken.pdf",
        Some("application/pdf"),
        b"this is not a pdf document at all",
    ))
    .unwrap_err();

    assert!(matches!(err, IntakeError::Extraction { .. }));
    assert!(!err.is_validation());
}

#[test]
fn whitespace_only_file_is_too_short() {
    let err = normalize(file("blank.txt", None, b"  \n\t \n ")).unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn read_loads_file_from_disk() {
    let mut tmp = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    write!(tmp, "Prazo de entrega do relatório: sexta-feira.").unwrap();

    let upload = FileUpload::read(tmp.path(), None).await.unwrap();
    assert_eq!(upload.effective_mime(), "text/plain");

    let submission = normalize(RawInput::File(upload)).unwrap();
    assert_eq!(
        submission.content(),
        "Prazo de entrega do relatório: sexta-feira."
    );
    assert!(submission.filename().unwrap().ends_with(".txt"));
}

#[tokio::test]
async fn read_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = FileUpload::read(&dir.path().join("missing.txt"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, IntakeError::Io { .. }));
}

#[tokio::test]
async fn read_rejects_oversized_file_from_metadata() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.as_file().set_len(MAX_FILE_SIZE + 1).unwrap();

    let err = FileUpload::read(tmp.path(), Some("text/plain".into()))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        IntakeError::Validation(ValidationError::TooLarge { .. })
    ));
}
