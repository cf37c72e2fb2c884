//! ページ単位の状態
//!
//! 一覧ページ: 読み込み状態・選択状態・欠陥メニューの開閉を1か所で持つ。
//! 詳細ページ: ルートパラメータから対象の欠陥と等級を引く。

use crate::catalog::DefectCatalog;
use crate::error::{Error, Result};
use crate::grading::{GradeResult, GradingPolicy};
use crate::occurrence::{total_count, DefectOccurrence};
use crate::selection::{SelectTarget, SelectionState};

/// 「全件」メニュー項目のラベル
pub const ALL_DEFECTS_LABEL: &str = "All Defects";

const SHOW_ALL_BUTTON: &str = "SHOW ALL DEFECTS";
const ARROW_OPEN: &str = "▲";
const ARROW_CLOSED: &str = "▼";

/// 読み込みの世代番号
///
/// 新しい `begin_load` が走ると、それ以前のチケットは無効になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// 読み込み状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    NotLoaded,
    Loading(LoadTicket),
    Loaded(Vec<T>),
}

/// 一覧ページの状態
#[derive(Debug, Clone)]
pub struct FeedbackPage<K> {
    occurrences: LoadState<DefectOccurrence<K>>,
    selection: SelectionState<K>,
    menu_open: bool,
    generation: u64,
}

impl<K: DefectCatalog> Default for FeedbackPage<K> {
    fn default() -> Self {
        Self {
            occurrences: LoadState::NotLoaded,
            selection: SelectionState::new(),
            menu_open: false,
            generation: 0,
        }
    }
}

impl<K: DefectCatalog> FeedbackPage<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 読み込み済みの状態で作成
    pub fn with_occurrences(occurrences: Vec<DefectOccurrence<K>>) -> Self {
        let mut page = Self::new();
        let ticket = page.begin_load();
        page.complete_load(ticket, occurrences);
        page
    }

    /// 読み込み開始。以前のチケットは無効化される
    ///
    /// 読み込み済みのデータは完了まで表示し続ける。
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        let ticket = LoadTicket(self.generation);
        if !matches!(self.occurrences, LoadState::Loaded(_)) {
            self.occurrences = LoadState::Loading(ticket);
        }
        ticket
    }

    /// 読み込み完了。古いチケットなら破棄して `false` を返す
    ///
    /// 選択状態には触れない。
    pub fn complete_load(&mut self, ticket: LoadTicket, occurrences: Vec<DefectOccurrence<K>>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.occurrences = LoadState::Loaded(occurrences);
        true
    }

    pub fn load_state(&self) -> &LoadState<DefectOccurrence<K>> {
        &self.occurrences
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.occurrences, LoadState::Loaded(_))
    }

    /// 読み込み済みの全件（未読み込みなら `None`）
    pub fn all(&self) -> Option<&[DefectOccurrence<K>]> {
        match &self.occurrences {
            LoadState::Loaded(items) => Some(items),
            _ => None,
        }
    }

    /// 表示対象。未読み込みなら `None`、絞り込み結果が空なら `Some(vec![])`
    pub fn visible(&self) -> Option<Vec<&DefectOccurrence<K>>> {
        self.all().map(|items| self.selection.visible(items))
    }

    pub fn selection(&self) -> &SelectionState<K> {
        &self.selection
    }

    pub fn select(&mut self, target: SelectTarget<K>) {
        self.selection.select(target);
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// メニューから選んだときの操作（メニューは閉じる）
    pub fn choose(&mut self, target: SelectTarget<K>) {
        self.menu_open = false;
        self.selection.select(target);
    }

    /// メニューボタンの表示文字列
    pub fn menu_button_label(&self) -> String {
        let arrow = if self.menu_open { ARROW_OPEN } else { ARROW_CLOSED };
        match self.selection.selected() {
            Some(kind) => format!("{} {}", kind.menu_label(), arrow),
            None => format!("{} {}", SHOW_ALL_BUTTON, arrow),
        }
    }

    /// メニュー項目（先頭は「全件」）
    pub fn menu_entries(&self) -> Vec<(SelectTarget<K>, &'static str)> {
        std::iter::once((SelectTarget::All, ALL_DEFECTS_LABEL))
            .chain(K::ALL.iter().map(|&kind| (SelectTarget::Kind(kind), kind.label())))
            .collect()
    }

    /// 表示対象の合計件数で等級を判定
    pub fn board_grade(&self, policy: &GradingPolicy) -> Option<GradeResult> {
        self.visible().map(|items| policy.evaluate(total_count(&items)))
    }
}

/// 詳細ページの表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView<K> {
    pub occurrence: DefectOccurrence<K>,
    pub grade: GradeResult,
    /// 凡例として並べる判定結果
    pub legend: Vec<GradeResult>,
}

/// ルートパラメータから詳細ページを開く
///
/// 未知のキーは `UnknownDefectKind`、データにない種類は `NoOccurrence`。
pub fn open_detail<K: DefectCatalog>(
    key: &str,
    occurrences: &[DefectOccurrence<K>],
    policy: &GradingPolicy,
) -> Result<DetailView<K>> {
    let kind = K::parse(key)?;
    let occurrence = occurrences
        .iter()
        .find(|o| o.kind == kind)
        .cloned()
        .ok_or_else(|| Error::NoOccurrence(kind.key().to_string()))?;

    let legend = match policy {
        GradingPolicy::Thresholds(t) => t.bands().to_vec(),
        GradingPolicy::Fixed(result) => vec![*result],
    };

    Ok(DetailView {
        grade: policy.evaluate(occurrence.count),
        occurrence,
        legend,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DefectKind, DetailDefectKind};
    use crate::grading::{Grade, GradeThresholds};
    use crate::navigation::{detail_path, Route};
    use crate::occurrence::{detail_fixture, summary_fixture};

    #[test]
    fn test_not_loaded_is_distinct_from_empty() {
        let page = FeedbackPage::<DefectKind>::new();
        assert!(page.visible().is_none());

        let mut loaded = FeedbackPage::with_occurrences(summary_fixture());
        loaded.select(SelectTarget::Kind(DefectKind::PinHole));
        assert_eq!(loaded.visible().map(|v| v.len()), Some(0));
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut page = FeedbackPage::<DefectKind>::new();
        let first = page.begin_load();
        let second = page.begin_load();

        assert!(page.complete_load(second, summary_fixture()));
        assert!(!page.complete_load(first, Vec::new()));
        assert_eq!(page.all().map(|a| a.len()), Some(3));
    }

    #[test]
    fn test_load_keeps_selection() {
        let mut page = FeedbackPage::<DefectKind>::new();
        let ticket = page.begin_load();
        page.select(SelectTarget::Kind(DefectKind::Short));
        page.complete_load(ticket, summary_fixture());

        assert_eq!(page.selection().selected(), Some(DefectKind::Short));
        let visible = page.visible().unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].count, 3);
    }

    #[test]
    fn test_reload_keeps_previous_data_visible() {
        let mut page = FeedbackPage::with_occurrences(summary_fixture());
        let _ticket = page.begin_load();
        assert!(page.is_loaded());
        assert_eq!(page.visible().map(|v| v.len()), Some(3));
    }

    #[test]
    fn test_menu_flow() {
        let mut page = FeedbackPage::with_occurrences(summary_fixture());
        assert_eq!(page.menu_button_label(), "SHOW ALL DEFECTS ▼");

        page.toggle_menu();
        assert!(page.menu_open());
        assert_eq!(page.menu_button_label(), "SHOW ALL DEFECTS ▲");

        page.choose(SelectTarget::Kind(DefectKind::PinHole));
        assert!(!page.menu_open());
        assert_eq!(page.menu_button_label(), "PIN HOLES ▼");

        page.toggle_menu();
        page.choose(SelectTarget::All);
        assert_eq!(page.selection().selected(), None);
    }

    #[test]
    fn test_menu_entries() {
        let page = FeedbackPage::<DefectKind>::new();
        let entries = page.menu_entries();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0], (SelectTarget::All, "All Defects"));
        assert_eq!(entries[6], (SelectTarget::Kind(DefectKind::PinHole), "Pin Holes"));
    }

    #[test]
    fn test_board_grade() {
        let mut page = FeedbackPage::with_occurrences(summary_fixture());
        let policy = GradingPolicy::Thresholds(GradeThresholds::default());
        // 合計6件 → C
        assert_eq!(page.board_grade(&policy).map(|g| g.grade), Some(Grade::C));

        page.select(SelectTarget::Kind(DefectKind::Open));
        assert_eq!(page.board_grade(&policy).map(|g| g.grade), Some(Grade::A));

        let fixed = GradingPolicy::summary_default();
        assert_eq!(page.board_grade(&fixed).map(|g| g.score), Some(85));
        assert_eq!(FeedbackPage::<DefectKind>::new().board_grade(&fixed), None);
    }

    #[test]
    fn test_open_detail() {
        let view = open_detail("opencircuit", &detail_fixture(), &GradingPolicy::detail_default()).unwrap();
        assert_eq!(view.occurrence.kind, DetailDefectKind::OpenCircuit);
        assert_eq!(view.grade, GradeResult::new(20, Grade::C));
        assert_eq!(view.legend.len(), 3);

        let view = open_detail("mousebite", &detail_fixture(), &GradingPolicy::detail_default()).unwrap();
        assert_eq!(view.grade, GradeResult::new(50, Grade::B));
    }

    #[test]
    fn test_open_detail_rejects_unknown() {
        let err = open_detail::<DetailDefectKind>("open", &detail_fixture(), &GradingPolicy::detail_default())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownDefectKind(_)));
    }

    #[test]
    fn test_open_detail_known_kind_without_data() {
        let err = open_detail::<DetailDefectKind>("scratch", &[], &GradingPolicy::detail_default()).unwrap_err();
        assert!(matches!(err, Error::NoOccurrence(ref key) if key == "scratch"));
        assert_eq!(err.to_string(), "No occurrence of defect kind: scratch");
    }

    #[test]
    fn test_detail_routes_open() {
        // 詳細ページのナビゲーションが指すルートはすべて開ける
        let occurrences = detail_fixture();
        for occurrence in &occurrences {
            let path = detail_path(occurrence.kind.key());
            let Route::FeedbackDetail(key) = Route::parse(&path) else {
                panic!("not a detail route: {}", path);
            };
            let view = open_detail(&key, &occurrences, &GradingPolicy::detail_default()).unwrap();
            assert_eq!(view.occurrence.kind, occurrence.kind);
        }
    }
}
