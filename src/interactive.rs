//! 対話式の欠陥メニュー
//!
//! 一覧ページのドロップダウンに相当。選択ごとに絞り込み結果を表示し、
//! 「終了」を選ぶまで繰り返す。

use crate::error::{PcbInspectError, Result};
use crate::output::print_visible;
use dialoguer::Select;
use pcb_inspect_common::{DefectKind, FeedbackPage, GradingPolicy, SelectTarget};

const QUIT_LABEL: &str = "終了";

/// 対話式で欠陥を選択
pub fn run_defect_menu(
    page: &mut FeedbackPage<DefectKind>,
    policy: &GradingPolicy,
) -> Result<()> {
    loop {
        page.toggle_menu();
        let entries = page.menu_entries();

        let mut items: Vec<String> = entries.iter().map(|(_, label)| label.to_string()).collect();
        items.push(QUIT_LABEL.to_string());

        let current = match page.selection().selected() {
            Some(kind) => entries
                .iter()
                .position(|(target, _)| *target == SelectTarget::Kind(kind))
                .unwrap_or(0),
            None => 0,
        };

        let choice = Select::new()
            .with_prompt(page.menu_button_label())
            .items(&items)
            .default(current)
            .interact()
            .map_err(|e| PcbInspectError::Prompt(e.to_string()))?;

        let Some((target, _)) = entries.get(choice).copied() else {
            page.toggle_menu();
            return Ok(());
        };

        page.choose(target);
        log::debug!("selected {:?}", target);
        print_visible(page, policy);
        println!();
    }
}
