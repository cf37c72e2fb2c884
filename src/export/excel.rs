//! Excel生成（CLI版）
//!
//! 共通ライブラリの excel_core でバッファを作り、ファイルに書き出す。

use crate::error::{PcbInspectError, Result};
use pcb_inspect_common::export::excel_core::generate_report_excel_buffer;
use pcb_inspect_common::{InspectionReport, Theme};
use std::path::Path;

pub fn generate_excel(report: &InspectionReport, theme: &Theme, output_path: &Path) -> Result<()> {
    let buffer = generate_report_excel_buffer(report, theme)
        .map_err(PcbInspectError::ExcelGeneration)?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}
