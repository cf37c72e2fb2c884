use crate::error::{PcbInspectError, Result};
use pcb_inspect_common::InspectionReport;
use printpdf::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const A4_WIDTH_MM: f32 = 210.0;
const A4_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 7.0;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 11.0;
/// Helvetica 11pt で本文幅に収まるおおよその文字数
const WRAP_CHARS: usize = 90;

/// 長い行を単語単位で折り返す
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let indent: String = line.chars().take_while(|c| c.is_whitespace()).collect();
    let mut wrapped = Vec::new();
    let mut current = indent.clone();

    for word in line.split_whitespace() {
        let has_content = !current.trim().is_empty();
        if has_content && current.chars().count() + 1 + word.chars().count() > width {
            wrapped.push(std::mem::replace(&mut current, format!("{}  ", indent)));
        } else if has_content {
            current.push(' ');
        }
        current.push_str(word);
    }
    wrapped.push(current);
    wrapped
}

pub fn generate_pdf(report: &InspectionReport, output_path: &Path) -> Result<()> {
    let (doc, page1, layer1) = PdfDocument::new(
        &report.title,
        Mm(A4_WIDTH_MM),
        Mm(A4_HEIGHT_MM),
        "Layer 1",
    );

    let font = doc.add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| PcbInspectError::PdfGeneration(format!("フォント追加エラー: {:?}", e)))?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| PcbInspectError::PdfGeneration(format!("フォント追加エラー: {:?}", e)))?;

    let mut layer = doc.get_page(page1).get_layer(layer1);
    let mut y = A4_HEIGHT_MM - MARGIN_MM;

    let lines = report.to_lines();
    let mut lines = lines.iter();

    // タイトル
    if let Some(title) = lines.next() {
        layer.use_text(title.as_str(), TITLE_SIZE, Mm(MARGIN_MM), Mm(y), &bold);
        y -= LINE_HEIGHT_MM * 1.5;
    }

    for line in lines {
        for segment in wrap_line(line, WRAP_CHARS) {
            if y < MARGIN_MM {
                let (page, new_layer) = doc.add_page(Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");
                layer = doc.get_page(page).get_layer(new_layer);
                y = A4_HEIGHT_MM - MARGIN_MM;
            }
            layer.use_text(segment, BODY_SIZE, Mm(MARGIN_MM), Mm(y), &font);
            y -= LINE_HEIGHT_MM;
        }
    }

    // 保存
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    doc.save(&mut writer)
        .map_err(|e| PcbInspectError::PdfGeneration(format!("PDF保存エラー: {:?}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_line() {
        assert_eq!(wrap_line("Grade: B", 90), vec!["Grade: B"]);
    }

    #[test]
    fn test_wrap_long_line_keeps_indent() {
        let line = format!("  Impact: {}", "word ".repeat(30));
        let wrapped = wrap_line(&line, 40);
        assert!(wrapped.len() > 1);
        assert!(wrapped.iter().all(|l| l.chars().count() <= 40));
        assert!(wrapped[0].starts_with("  Impact:"));
        assert!(wrapped[1].starts_with("    word"));
    }
}
