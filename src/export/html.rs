use crate::error::Result;
use pcb_inspect_common::{render_report_html, InspectionReport, Theme};
use std::path::Path;

pub fn generate_html(report: &InspectionReport, theme: &Theme, output_path: &Path) -> Result<()> {
    std::fs::write(output_path, render_report_html(report, theme))?;
    Ok(())
}
