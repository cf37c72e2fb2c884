//! Excel生成（共通ライブラリ）
//!
//! 検査レポートを「Summary」「Defects」の2シートに書き出す。

use crate::report::InspectionReport;
use crate::theme::Theme;
use rust_xlsxwriter::*;

const DEFECT_HEADERS: [&str; 7] = ["Type", "Label", "Count", "Score", "Grade", "Impact", "Solution"];
const DEFECT_COL_WIDTHS: [f64; 7] = [14.0, 18.0, 8.0, 8.0, 8.0, 40.0, 50.0];

/// "#rrggbb" → 0xRRGGBB
fn parse_hex_color(value: &str) -> Option<u32> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

fn grade_format(theme: &Theme, grade: crate::grading::Grade) -> Format {
    let format = Format::new().set_bold().set_align(FormatAlign::Center);
    match parse_hex_color(theme.grade_color(grade)) {
        Some(rgb) => format.set_font_color(Color::RGB(rgb)),
        None => format,
    }
}

/// Excelをバッファに生成
pub fn generate_report_excel_buffer(report: &InspectionReport, theme: &Theme) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let label_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x555555))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_align(FormatAlign::Left)
        .set_text_wrap()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let title_format = Format::new().set_bold().set_font_size(14.0);

    // Summaryシート
    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Summary")
            .map_err(|e| format!("シート名設定エラー: {}", e))?;
        worksheet.set_column_width(0, 18.0)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
        worksheet.set_column_width(1, 40.0)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;

        worksheet.write_string_with_format(0, 0, &report.title, &title_format)
            .map_err(|e| format!("タイトル書き込みエラー: {}", e))?;

        let mut rows: Vec<(&str, String)> = Vec::new();
        if !report.generated_at.is_empty() {
            rows.push(("Generated", report.generated_at.clone()));
        }
        if let (Some(similarity), Some(grade)) = (report.similarity, report.similarity_grade) {
            rows.push(("Similarity", format!("{:.2}% ({})", similarity, grade)));
        }
        rows.push(("Score", format!("{}%", report.board_grade.score)));
        rows.push(("Grade", report.board_grade.grade.to_string()));
        rows.push(("Defects", report.total_defects.to_string()));

        for (i, (label, value)) in rows.iter().enumerate() {
            let row = i as u32 + 2;
            worksheet.write_string_with_format(row, 0, *label, &label_format)
                .map_err(|e| format!("ラベル書き込みエラー: {}", e))?;
            worksheet.write_string_with_format(row, 1, value, &value_format)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
        }
    }

    // Defectsシート
    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Defects")
            .map_err(|e| format!("シート名設定エラー: {}", e))?;

        for (col, (header, width)) in DEFECT_HEADERS.iter().zip(DEFECT_COL_WIDTHS).enumerate() {
            let col = col as u16;
            worksheet.set_column_width(col, width)
                .map_err(|e| format!("列幅設定エラー: {}", e))?;
            worksheet.write_string_with_format(0, col, *header, &label_format)
                .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
        }

        for (i, line) in report.defects.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string_with_format(row, 0, &line.kind, &value_format)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
            worksheet.write_string_with_format(row, 1, &line.label, &value_format)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
            worksheet.write_number_with_format(row, 2, line.count as f64, &value_format)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
            worksheet.write_number_with_format(row, 3, line.grade.score as f64, &value_format)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
            worksheet.write_string_with_format(row, 4, line.grade.grade.as_str(), &grade_format(theme, line.grade.grade))
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
            worksheet.write_string_with_format(row, 5, &line.impact, &value_format)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
            worksheet.write_string_with_format(row, 6, &line.solution, &value_format)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
        }
    }

    // バッファに書き出し
    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DefectKind;
    use crate::occurrence::summary_fixture;
    use crate::report::ReportOptions;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#16a34a"), Some(0x16A34A));
        assert_eq!(parse_hex_color("16a34a"), None);
        assert_eq!(parse_hex_color("#fff"), None);
    }

    #[test]
    fn test_generate_buffer() {
        let fixture = summary_fixture();
        let refs: Vec<_> = fixture.iter().collect();
        let report = InspectionReport::build(&refs, &ReportOptions::default());

        let buffer = generate_report_excel_buffer(&report, &Theme::default()).expect("Excel生成失敗");
        // xlsxはZIP形式
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_generate_buffer_empty_report() {
        let report = InspectionReport::build::<DefectKind>(&[], &ReportOptions::default());
        assert!(generate_report_excel_buffer(&report, &Theme::default()).is_ok());
    }
}
