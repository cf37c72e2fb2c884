//! 端末への表示

use pcb_inspect_common::navigation::detail_path;
use pcb_inspect_common::{
    active_index, DefectCatalog, DefectKind, DefectOccurrence, DetailView, FeedbackPage, GradeResult,
    GradingPolicy, NAV_ITEMS,
};

/// ナビゲーションバー（現在のルートを [ ] で囲む）
pub fn format_nav_bar(path: &str) -> String {
    let active = active_index(path);
    NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if Some(i) == active {
                format!("[{}]", item.label)
            } else {
                item.label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn format_grade(result: &GradeResult) -> String {
    format!("SIMILARITY: {}%  GRADE: {}", result.score, result.grade)
}

/// 絞り込み表示の1件分
fn format_filtered_entry(occurrence: &DefectOccurrence<DefectKind>, policy: &GradingPolicy) -> Vec<String> {
    vec![
        occurrence.headline(),
        format!("  Impact:   {}", occurrence.impact),
        format!("  Solution: {}", occurrence.solution),
        format!("  {}", format_grade(&policy.evaluate(occurrence.count))),
    ]
}

/// 絞り込み後の一覧を表示
pub fn print_visible(page: &FeedbackPage<DefectKind>, policy: &GradingPolicy) {
    println!("ERRORS DETECTED  {}", page.menu_button_label());

    let Some(visible) = page.visible() else {
        println!("  (データ未読み込み)");
        return;
    };

    if visible.is_empty() {
        println!("  該当する欠陥はありません");
        return;
    }

    for occurrence in visible {
        if page.selection().is_filtered() {
            for line in format_filtered_entry(occurrence, policy) {
                println!("  {}", line);
            }
        } else {
            println!("  Defect: {:<16} Count: {}", occurrence.label(), occurrence.count);
        }
    }
}

/// 一覧ページ全体を表示
pub fn print_summary(
    page: &FeedbackPage<DefectKind>,
    similarity: Option<f64>,
    board_policy: &GradingPolicy,
    line_policy: &GradingPolicy,
) {
    println!("{}\n", format_nav_bar("/feedback"));
    println!("HIGHLIGHTED DIFFERENCES");
    if let Some(value) = similarity {
        println!("  Measured similarity: {:.2}%", value);
    }
    if let Some(grade) = page.board_grade(board_policy) {
        println!("  {}", format_grade(&grade));
    }
    println!();
    print_visible(page, line_policy);
}

/// 詳細ページを表示
pub fn print_detail<K: DefectCatalog>(view: &DetailView<K>) {
    println!("{}\n", format_nav_bar(&detail_path(view.occurrence.kind.key())));
    println!("← Back to All Defects (/feedback)\n");

    println!("HIGHLIGHTED DIFFERENCES");
    println!("  {}", format_grade(&view.grade));
    for band in &view.legend {
        println!("    {}", format_grade(band));
    }

    println!();
    println!("ERRORS DETECTED  [{}]", view.occurrence.kind.menu_label());
    println!("  {}", view.occurrence.headline());
    println!("  Impact:   {}", view.occurrence.impact);
    println!("  Solution: {}", view.occurrence.solution);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_bar_highlights_route() {
        assert_eq!(
            format_nav_bar("/feedback/mousebite"),
            "HOME | CAPTURE or UPLOAD PCB | [FEEDBACK] | SIMULATE CONTINUITY"
        );
        assert!(!format_nav_bar("/unknown").contains('['));
    }

    #[test]
    fn test_filtered_entry() {
        let occurrences = pcb_inspect_common::summary_fixture();
        let policy = GradingPolicy::detail_default();

        let lines = format_filtered_entry(&occurrences[2], &policy);
        assert_eq!(lines[0], "3 Short Circuit(s) detected");
        assert_eq!(lines[3], "  SIMILARITY: 50%  GRADE: B");

        // 一覧の種類は詳細ページのキーと一致しないのでルートは出さない
        for occurrence in &occurrences {
            let lines = format_filtered_entry(occurrence, &policy);
            assert!(lines.iter().all(|l| !l.contains("/feedback/")), "{:?}", lines);
        }
    }
}
