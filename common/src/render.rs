//! HTMLレンダリング
//!
//! 検出データ由来の文字列はすべて `html_escape` を通す。
//! 生のマークアップをそのまま埋め込む経路は持たない。

use crate::report::{InspectionReport, ReportLine};
use crate::theme::Theme;

/// HTML特殊文字をエスケープ
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// レポートを単体のHTML文書として出力
pub fn render_report_html(report: &InspectionReport, theme: &Theme) -> String {
    let defects: String = if report.defects.is_empty() {
        r#"<p class="empty">No defects detected.</p>"#.to_string()
    } else {
        report
            .defects
            .iter()
            .map(|line| render_defect_card(line, theme))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <h1>{title}</h1>
    {generated}
    <section class="summary">
        {similarity}
        <div class="row"><span class="label">SCORE:</span> <span style="color:{score_color}">{score}%</span></div>
        <div class="row"><span class="label">GRADE:</span> <span style="color:{grade_color}">{grade}</span></div>
        <div class="row"><span class="label">DEFECTS:</span> {total}</div>
    </section>
    <section class="defects">
{defects}
    </section>
</body>
</html>
"#,
        title = html_escape(&report.title),
        css = inline_css(theme),
        generated = if report.generated_at.is_empty() {
            String::new()
        } else {
            format!(r#"<p class="generated">{}</p>"#, html_escape(&report.generated_at))
        },
        similarity = match (report.similarity, report.similarity_grade) {
            (Some(value), Some(grade)) => format!(
                r#"<div class="row"><span class="label">SIMILARITY:</span> {:.2}% ({})</div>"#,
                value, grade
            ),
            _ => String::new(),
        },
        score_color = html_escape(theme.similarity_color(report.board_grade.score)),
        score = report.board_grade.score,
        grade_color = html_escape(theme.grade_color(report.board_grade.grade)),
        grade = report.board_grade.grade,
        total = report.total_defects,
        defects = defects,
    )
}

fn render_defect_card(line: &ReportLine, theme: &Theme) -> String {
    format!(
        r#"        <article class="defect" data-kind="{kind}">
            <h3 style="color:{headline_color}">{headline}</h3>
            <p><span style="color:{impact_color}">Impact:</span> {impact}</p>
            <p><span style="color:{solution_color}">Solution:</span> {solution}</p>
            <p class="grade">GRADE: <span style="color:{grade_color}">{grade}</span> ({score}%)</p>
        </article>"#,
        kind = html_escape(&line.kind),
        headline_color = html_escape(&theme.headline_color),
        headline = html_escape(&line.headline),
        impact_color = html_escape(&theme.impact_color),
        impact = html_escape(&line.impact),
        solution_color = html_escape(&theme.solution_color),
        solution = html_escape(&line.solution),
        grade_color = html_escape(theme.grade_color(line.grade.grade)),
        grade = line.grade.grade,
        score = line.grade.score,
    )
}

fn inline_css(theme: &Theme) -> String {
    format!(
        "body {{ font-family: Arial, sans-serif; margin: 2rem; }} \
         h1 {{ border-bottom: 4px solid {accent}; padding-bottom: .5rem; }} \
         .summary {{ background: #f0f0f0; padding: 1rem; border-radius: 8px; }} \
         .label {{ font-weight: bold; }} \
         .defect {{ border: 1px solid #ccc; border-radius: 8px; padding: .5rem 1rem; margin: 1rem 0; }}",
        accent = html_escape(&theme.accent_color),
    )
}
