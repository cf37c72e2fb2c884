//! 欠陥の検出記録
//!
//! 影響・対処はプレーンテキストの別フィールドで持つ。
//! マークアップを含めず、表示側でエスケープする。

use crate::catalog::{DefectCatalog, DefectKind, DetailDefectKind};
use serde::{Deserialize, Serialize};

/// 1種類の欠陥の検出結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefectOccurrence<K> {
    #[serde(rename = "type")]
    pub kind: K,
    pub count: u32,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub solution: String,
}

impl<K: DefectCatalog> DefectOccurrence<K> {
    pub fn new(kind: K, count: u32, impact: impl Into<String>, solution: impl Into<String>) -> Self {
        Self {
            kind,
            count,
            impact: impact.into(),
            solution: solution.into(),
        }
    }

    /// カタログの既定文で作成
    pub fn with_guidance(kind: K, count: u32) -> Self {
        let guidance = kind.guidance();
        Self::new(kind, count, guidance.impact, guidance.solution)
    }

    /// 見出し: "2 Mousebite(s) detected"
    pub fn headline(&self) -> String {
        format!("{} {}(s) detected", self.count, self.kind.singular())
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// 空欄の影響・対処をカタログの既定文で埋める
    pub fn fill_missing_guidance(mut self) -> Self {
        let guidance = self.kind.guidance();
        if self.impact.trim().is_empty() {
            self.impact = guidance.impact.to_string();
        }
        if self.solution.trim().is_empty() {
            self.solution = guidance.solution.to_string();
        }
        self
    }
}

/// 一覧ページのサンプルデータ（バックエンド接続までの代替）
pub fn summary_fixture() -> Vec<DefectOccurrence<DefectKind>> {
    vec![
        DefectOccurrence::new(
            DefectKind::Mousebite,
            2,
            "Possible leak paths.",
            "Verify that all vias are properly filled and sealed.",
        ),
        DefectOccurrence::new(
            DefectKind::Open,
            1,
            "Electrical connectivity issues.",
            "Check for broken traces or disconnects.",
        ),
        DefectOccurrence::new(
            DefectKind::Short,
            3,
            "Excessive current flow, potential overheating.",
            "Inspect for unintended connections between traces.",
        ),
    ]
}

/// 詳細ページのサンプルデータ
pub fn detail_fixture() -> Vec<DefectOccurrence<DetailDefectKind>> {
    [
        (DetailDefectKind::Mousebite, 2),
        (DetailDefectKind::Scratch, 3),
        (DetailDefectKind::ShortCircuit, 1),
        (DetailDefectKind::OpenCircuit, 4),
    ]
    .into_iter()
    .map(|(kind, count)| DefectOccurrence::with_guidance(kind, count))
    .collect()
}

/// 種類ごとの件数から検出記録を生成
///
/// 件数0の種類は含めない。順序はカタログ順で、同じ種類が複数回あれば合算する。
pub fn occurrences_from_counts<K: DefectCatalog>(counts: &[(K, u32)]) -> Vec<DefectOccurrence<K>> {
    K::ALL
        .iter()
        .filter_map(|&kind| {
            let count: u32 = counts
                .iter()
                .filter(|(k, _)| *k == kind)
                .fold(0u32, |acc, (_, c)| acc.saturating_add(*c));
            (count > 0).then(|| DefectOccurrence::with_guidance(kind, count))
        })
        .collect()
}

/// 検出数の合計
pub fn total_count<K>(occurrences: &[&DefectOccurrence<K>]) -> u32 {
    occurrences
        .iter()
        .fold(0u32, |acc, o| acc.saturating_add(o.count))
}
