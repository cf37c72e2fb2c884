//! 検査レポートのデータモデル
//!
//! PDF/Excel/HTML/テキスト出力の共通ソース。

use crate::catalog::DefectCatalog;
use crate::grading::{GradeResult, GradingPolicy, SimilarityGrade};
use crate::occurrence::{total_count, DefectOccurrence};
use serde::{Deserialize, Serialize};

pub const DEFAULT_REPORT_TITLE: &str = "PCB Defect Detection Report";

/// レポート1行（欠陥1種類）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLine {
    pub kind: String,
    pub label: String,
    pub count: u32,
    pub headline: String,
    pub impact: String,
    pub solution: String,
    pub grade: GradeResult,
}

/// レポート生成オプション
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub title: String,
    pub generated_at: String,
    /// 画像類似度（%）。未計測なら `None`
    pub similarity: Option<f64>,
    /// ボード全体の判定方式（合計件数に適用）
    pub board_policy: GradingPolicy,
    /// 欠陥ごとの判定方式
    pub line_policy: GradingPolicy,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_REPORT_TITLE.to_string(),
            generated_at: String::new(),
            similarity: None,
            board_policy: GradingPolicy::summary_default(),
            line_policy: GradingPolicy::detail_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionReport {
    pub title: String,
    #[serde(default)]
    pub generated_at: String,
    #[serde(default)]
    pub similarity: Option<f64>,
    #[serde(default)]
    pub similarity_grade: Option<SimilarityGrade>,
    pub board_grade: GradeResult,
    pub total_defects: u32,
    pub defects: Vec<ReportLine>,
}

impl InspectionReport {
    pub fn build<K: DefectCatalog>(occurrences: &[&DefectOccurrence<K>], options: &ReportOptions) -> Self {
        let total = total_count(occurrences);
        let similarity = options.similarity.map(|s| s.clamp(0.0, 100.0));

        let defects = occurrences
            .iter()
            .map(|o| ReportLine {
                kind: o.kind.key().to_string(),
                label: o.kind.label().to_string(),
                count: o.count,
                headline: o.headline(),
                impact: o.impact.clone(),
                solution: o.solution.clone(),
                grade: options.line_policy.evaluate(o.count),
            })
            .collect();

        Self {
            title: options.title.clone(),
            generated_at: options.generated_at.clone(),
            similarity,
            similarity_grade: similarity.map(SimilarityGrade::from_percentage),
            board_grade: options.board_policy.evaluate(total),
            total_defects: total,
            defects,
        }
    }

    /// テキスト行に展開（PDF・標準出力用）
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone()];
        if !self.generated_at.is_empty() {
            lines.push(format!("Generated: {}", self.generated_at));
        }
        if let (Some(similarity), Some(grade)) = (self.similarity, self.similarity_grade) {
            lines.push(format!("Similarity: {:.2}% (grade {})", similarity, grade));
        }
        lines.push(format!(
            "Score: {}%  Grade: {}",
            self.board_grade.score, self.board_grade.grade
        ));
        lines.push(format!("Defects Found: {}", self.total_defects));
        for line in &self.defects {
            lines.push(format!("- {}: {} (grade {})", line.label, line.count, line.grade.grade));
        }
        if !self.defects.is_empty() {
            lines.push("Feedback:".to_string());
            for line in &self.defects {
                lines.push(line.headline.clone());
                lines.push(format!("  Impact: {}", line.impact));
                lines.push(format!("  Solution: {}", line.solution));
            }
        }
        lines
    }

    pub fn to_plain_text(&self) -> String {
        let mut text = self.to_lines().join("\n");
        text.push('\n');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DefectKind;
    use crate::grading::Grade;
    use crate::occurrence::summary_fixture;

    fn build_fixture_report(similarity: Option<f64>) -> InspectionReport {
        let fixture = summary_fixture();
        let refs: Vec<&DefectOccurrence<DefectKind>> = fixture.iter().collect();
        let options = ReportOptions {
            generated_at: "2026-10-16 09:00".to_string(),
            similarity,
            ..Default::default()
        };
        InspectionReport::build(&refs, &options)
    }

    #[test]
    fn test_build_from_fixture() {
        let report = build_fixture_report(None);
        assert_eq!(report.title, DEFAULT_REPORT_TITLE);
        assert_eq!(report.total_defects, 6);
        assert_eq!(report.board_grade, GradeResult::new(85, Grade::B));
        assert_eq!(report.defects.len(), 3);
        assert_eq!(report.defects[0].kind, "mousebite");
        assert_eq!(report.defects[0].grade.grade, Grade::B);
        assert_eq!(report.defects[1].grade.grade, Grade::A);
        assert!(report.similarity_grade.is_none());
    }

    #[test]
    fn test_similarity_is_clamped_and_graded() {
        let report = build_fixture_report(Some(91.234));
        assert_eq!(report.similarity_grade, Some(SimilarityGrade::A));

        let report = build_fixture_report(Some(140.0));
        assert_eq!(report.similarity, Some(100.0));
    }

    #[test]
    fn test_plain_text() {
        let text = build_fixture_report(Some(85.0)).to_plain_text();
        assert!(text.starts_with("PCB Defect Detection Report\n"));
        assert!(text.contains("Similarity: 85.00% (grade B)"));
        assert!(text.contains("- Short Circuits: 3 (grade B)"));
        assert!(text.contains("2 Mousebite(s) detected"));
        assert!(text.contains("  Solution: Check for broken traces or disconnects."));
    }

    #[test]
    fn test_empty_report_has_no_feedback_section() {
        let options = ReportOptions::default();
        let report = InspectionReport::build::<DefectKind>(&[], &options);
        assert_eq!(report.total_defects, 0);
        assert!(!report.to_plain_text().contains("Feedback:"));
    }
}
