//! レポート出力の統合テスト

use pcb_inspect::cli::ExportFormat;
use pcb_inspect::export::{self, excel, html, pdf};
use pcb_inspect_common::{
    summary_fixture, visible_occurrences, DefectKind, InspectionReport, ReportOptions, Theme,
};
use tempfile::tempdir;

fn create_test_report(selected: Option<DefectKind>) -> InspectionReport {
    let occurrences = summary_fixture();
    let visible = visible_occurrences(&occurrences, selected);
    let options = ReportOptions {
        generated_at: "2026-01-18 10:00".to_string(),
        similarity: Some(72.5),
        ..ReportOptions::default()
    };
    InspectionReport::build(&visible, &options)
}

#[test]
fn test_pdf_generation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("report.pdf");

    let result = pdf::generate_pdf(&create_test_report(None), &output_path);

    assert!(result.is_ok(), "PDF生成に失敗: {:?}", result.err());
    let bytes = std::fs::read(&output_path).expect("PDF読み込み失敗");
    assert!(bytes.starts_with(b"%PDF"), "PDFヘッダーがない");
}

#[test]
fn test_pdf_generation_empty_report() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("empty.pdf");

    let report = InspectionReport::build::<DefectKind>(&[], &ReportOptions::default());
    let result = pdf::generate_pdf(&report, &output_path);

    assert!(result.is_ok(), "空レポートのPDF生成に失敗: {:?}", result.err());
    assert!(output_path.exists());
}

#[test]
fn test_excel_generation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("report.xlsx");

    let result = excel::generate_excel(&create_test_report(None), &Theme::default(), &output_path);

    assert!(result.is_ok(), "Excel生成に失敗: {:?}", result.err());
    let bytes = std::fs::read(&output_path).expect("Excel読み込み失敗");
    assert!(bytes.starts_with(b"PK"), "xlsxはzip形式のはず");
}

#[test]
fn test_html_generation_filtered() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("report.html");

    let report = create_test_report(Some(DefectKind::Short));
    html::generate_html(&report, &Theme::default(), &output_path).expect("HTML生成に失敗");

    let content = std::fs::read_to_string(&output_path).expect("HTML読み込み失敗");
    assert!(content.contains("3 Short Circuit(s) detected"));
    assert!(!content.contains("Mousebite(s) detected"));
}

#[test]
fn test_export_all_formats_into_directory() {
    let dir = tempdir().expect("Failed to create temp dir");

    let written = export::export_report(
        &create_test_report(None),
        &Theme::default(),
        &ExportFormat::All,
        dir.path(),
    )
    .expect("出力に失敗");

    assert_eq!(written.len(), 4);
    for path in &written {
        assert!(path.exists(), "{} が作成されていない", path.display());
        assert!(path.starts_with(dir.path()));
    }

    let json_path = dir.path().join("PCB_Defect_Detection_Report.json");
    let json = std::fs::read_to_string(json_path).expect("JSON読み込み失敗");
    let parsed: InspectionReport = serde_json::from_str(&json).expect("JSON解析失敗");
    assert_eq!(parsed.total_defects, 6);
    assert_eq!(parsed.similarity, Some(72.5));
}
