//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use health_report_ai::analyzer::load_report_file;
use health_report_ai::error::HealthReportError;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_load_nonexistent_file() {
    let result = load_report_file(Path::new("/nonexistent/path/report.pdf"));

    let err = result.unwrap_err();
    assert!(matches!(err, HealthReportError::FileNotFound(_)));
}

/// ディレクトリを指定した場合
#[test]
fn test_load_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = load_report_file(dir.path());

    assert!(matches!(result, Err(HealthReportError::FileNotFound(_))));
}

/// PDF以外のファイル
#[test]
fn test_load_non_pdf() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();

    let err = load_report_file(&path).unwrap_err();
    match err {
        HealthReportError::NotPdf(name) => assert_eq!(name, "notes.txt"),
        other => panic!("Expected NotPdf, got {:?}", other),
    }
}

/// PDFの読み込み
#[test]
fn test_load_pdf() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("Checkup.PDF");
    std::fs::write(&path, b"%PDF-1.4").unwrap();

    let file = load_report_file(&path).unwrap();
    assert_eq!(file.name, "Checkup.PDF");
    assert_eq!(file.mime_type, "application/pdf");
    assert_eq!(file.bytes, b"%PDF-1.4");
}

/// HealthReportErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        HealthReportError::Config("テスト設定エラー".to_string()),
        HealthReportError::FileNotFound("report.pdf".to_string()),
        HealthReportError::NotPdf("scan.png".to_string()),
        HealthReportError::ApiCall("API呼び出し失敗".to_string()),
        HealthReportError::ApiParse("Empty response".to_string()),
        HealthReportError::Server("Analysis failed".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingApiKeyエラーのメッセージ確認
#[test]
fn test_missing_api_key_message() {
    let display = format!("{}", HealthReportError::MissingApiKey);

    assert!(display.contains("APIキー"));
    assert!(display.contains("health-report config"));
    assert!(display.contains("GEMINI_API_KEY"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: HealthReportError = io_err.into();

    assert!(matches!(err, HealthReportError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: HealthReportError = json_err.into();

    assert!(matches!(err, HealthReportError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_transparent() {
    let common_err = health_report_common::Error::Parse("JSONが見つかりません".to_string());
    let err: HealthReportError = common_err.into();

    assert!(matches!(err, HealthReportError::Common(_)));
    assert_eq!(format!("{}", err), "Parse error: JSONが見つかりません");
}
