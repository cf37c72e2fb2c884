//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use pcb_inspect::config::Config;
use pcb_inspect::error::PcbInspectError;
use pcb_inspect::source::{parse_feedback_json, FeedbackSource, JsonFileSource};
use pcb_inspect_common::{detail_fixture, open_detail, DetailDefectKind, GradingPolicy};
use tempfile::tempdir;

/// 存在しない入力ファイル
#[tokio::test]
async fn test_load_nonexistent_file() {
    let source = JsonFileSource::new("/nonexistent/path/12345.json");
    let err = source.load().await.unwrap_err();
    assert!(matches!(err, PcbInspectError::FileNotFound(_)));
}

/// 壊れたJSON
#[tokio::test]
async fn test_load_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = JsonFileSource::new(&path).load().await.unwrap_err();
    assert!(matches!(err, PcbInspectError::JsonParse(_)));
}

/// 壊れた設定ファイル
#[test]
fn test_invalid_config_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"detail_grading": "#).unwrap();

    assert!(Config::load_from(&path).is_err());
}

/// 未知の欠陥キーは共通ライブラリのエラーがそのまま表示される
#[test]
fn test_unknown_kind_is_transparent() {
    let err: PcbInspectError =
        open_detail::<DetailDefectKind>("warp", &detail_fixture(), &GradingPolicy::detail_default())
            .unwrap_err()
            .into();

    assert_eq!(err.to_string(), "Unknown defect kind: warp");
}

#[test]
fn test_unknown_kind_in_input() {
    let err = parse_feedback_json(r#"[{"type": "warp", "count": 1}]"#).unwrap_err();
    assert!(err.to_string().contains("warp"));
}

/// PcbInspectErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        PcbInspectError::Config("テスト設定エラー".to_string()),
        PcbInspectError::FileNotFound("feedback.json".to_string()),
        PcbInspectError::InvalidInput("similarity".to_string()),
        PcbInspectError::PdfGeneration("PDF".to_string()),
        PcbInspectError::ExcelGeneration("Excel".to_string()),
        PcbInspectError::Prompt("tty".to_string()),
    ];

    for err in errors {
        let msg = err.to_string();
        assert!(!msg.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: PcbInspectError = io_err.into();
    assert!(matches!(err, PcbInspectError::Io(_)));
}
