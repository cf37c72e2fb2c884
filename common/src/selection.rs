//! 欠陥の選択状態と絞り込み
//!
//! 状態は `Unfiltered`（selected = None）と `Filtered(kind)` の2つ。
//! `select(All)` はどの状態からでも `Unfiltered` に戻る。

use crate::catalog::DefectCatalog;
use crate::error::Result;
use crate::occurrence::DefectOccurrence;

/// "all" を表すキー
pub const ALL_KEY: &str = "all";

/// 選択操作の対象
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectTarget<K> {
    All,
    Kind(K),
}

impl<K: DefectCatalog> SelectTarget<K> {
    /// "all" または欠陥キーを解釈。未知のキーはエラー
    pub fn parse(key: &str) -> Result<Self> {
        if key.trim().eq_ignore_ascii_case(ALL_KEY) {
            Ok(SelectTarget::All)
        } else {
            K::parse(key).map(SelectTarget::Kind)
        }
    }
}

impl<K> From<Option<K>> for SelectTarget<K> {
    fn from(kind: Option<K>) -> Self {
        match kind {
            Some(kind) => SelectTarget::Kind(kind),
            None => SelectTarget::All,
        }
    }
}

/// 選択状態（初期値は全件表示）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState<K> {
    selected: Option<K>,
}

impl<K> Default for SelectionState<K> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<K: DefectCatalog> SelectionState<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, target: SelectTarget<K>) {
        self.selected = match target {
            SelectTarget::All => None,
            SelectTarget::Kind(kind) => Some(kind),
        };
    }

    pub fn selected(&self) -> Option<K> {
        self.selected
    }

    pub fn is_filtered(&self) -> bool {
        self.selected.is_some()
    }

    pub fn visible<'a>(&self, all: &'a [DefectOccurrence<K>]) -> Vec<&'a DefectOccurrence<K>> {
        visible_occurrences(all, self.selected)
    }
}

/// 選択中の種類で絞り込む
///
/// `None` なら全件をそのまま返す。入力順を保ち、並べ替えはしない。
pub fn visible_occurrences<K: DefectCatalog>(
    all: &[DefectOccurrence<K>],
    selected: Option<K>,
) -> Vec<&DefectOccurrence<K>> {
    match selected {
        None => all.iter().collect(),
        Some(kind) => all.iter().filter(|o| o.kind == kind).collect(),
    }
}
