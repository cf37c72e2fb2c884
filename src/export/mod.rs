pub mod excel;
pub mod html;
pub mod pdf;

use crate::cli::ExportFormat;
use crate::error::Result;
use pcb_inspect_common::{InspectionReport, Theme};
use std::path::{Path, PathBuf};

/// 個別の出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pdf,
    Excel,
    Html,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Excel => "xlsx",
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "PDF",
            ReportFormat::Excel => "Excel",
            ReportFormat::Html => "HTML",
            ReportFormat::Json => "JSON",
        }
    }
}

/// 出力先がディレクトリ（または拡張子なし）なら `<dir>/<stem>.<ext>`
pub fn output_path_for_format(output: &Path, stem: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", stem, extension))
    } else if output.extension().and_then(|e| e.to_str()) == Some(extension) {
        output.to_path_buf()
    } else {
        output.with_extension(extension)
    }
}

/// ファイル名に使えない文字を置き換え
pub fn file_stem_for_title(title: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "report".to_string()
    } else {
        stem
    }
}

pub fn generate_json(report: &InspectionReport, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(output_path, json)?;
    Ok(())
}

/// レポートを出力し、書き出したパスを返す
pub fn export_report(
    report: &InspectionReport,
    theme: &Theme,
    format: &ExportFormat,
    output: &Path,
) -> Result<Vec<PathBuf>> {
    let stem = file_stem_for_title(&report.title);
    let mut written = Vec::new();

    for format in format.expand() {
        let path = output_path_for_format(output, &stem, format.extension());
        println!("- {}を生成中...", format.display_name());
        match format {
            ReportFormat::Pdf => pdf::generate_pdf(report, &path)?,
            ReportFormat::Excel => excel::generate_excel(report, theme, &path)?,
            ReportFormat::Html => html::generate_html(report, theme, &path)?,
            ReportFormat::Json => generate_json(report, &path)?,
        }
        log::info!("wrote {}", path.display());
        println!("✔ {}出力: {}", format.display_name(), path.display());
        written.push(path);
    }

    Ok(written)
}
