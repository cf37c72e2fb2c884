//! フィードバックデータの取得元
//!
//! - `FixtureSource`: 組み込みのサンプルデータ
//! - `JsonFileSource`: 検出バックエンドが出力したJSONファイル

use crate::error::{PcbInspectError, Result};
use crate::markup::parse_legacy_feedback;
use pcb_inspect_common::{summary_fixture, DefectCatalog, DefectKind, DefectOccurrence, FeedbackPage};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// 読み込み結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedFeedback {
    pub occurrences: Vec<DefectOccurrence<DefectKind>>,
    /// 画像類似度（%）。バックエンドが返した場合のみ
    pub similarity: Option<f64>,
}

/// フィードバックの取得元
#[allow(async_fn_in_trait)]
pub trait FeedbackSource {
    fn describe(&self) -> String;

    async fn load(&self) -> Result<LoadedFeedback>;
}

/// 組み込みサンプル
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

impl FeedbackSource for FixtureSource {
    fn describe(&self) -> String {
        "built-in sample data".to_string()
    }

    async fn load(&self) -> Result<LoadedFeedback> {
        Ok(LoadedFeedback {
            occurrences: summary_fixture(),
            similarity: None,
        })
    }
}

/// JSONファイル
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FeedbackSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<LoadedFeedback> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Err(PcbInspectError::FileNotFound(self.path.display().to_string()));
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        let loaded = parse_feedback_json(&content)?;
        log::debug!(
            "loaded {} occurrence(s) from {}",
            loaded.occurrences.len(),
            self.path.display()
        );
        Ok(loaded)
    }
}

/// 1件分のレコード（旧形式の `feedback` 文字列も受け付ける）
#[derive(Debug, Deserialize)]
struct FeedbackRecord {
    #[serde(rename = "type")]
    kind: String,
    count: u32,
    #[serde(default)]
    impact: Option<String>,
    #[serde(default)]
    solution: Option<String>,
    #[serde(default)]
    feedback: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedbackDocument {
    List(Vec<FeedbackRecord>),
    Wrapped {
        #[serde(alias = "feedbackDetails")]
        feedback_details: Vec<FeedbackRecord>,
        #[serde(default, alias = "similarityPercentage", alias = "similarity_percentage")]
        similarity: Option<f64>,
    },
}

impl FeedbackRecord {
    fn into_occurrence(self) -> Result<DefectOccurrence<DefectKind>> {
        // 未知の種類は境界で弾く
        let kind = DefectKind::parse(&self.kind)?;
        let legacy = self.feedback.as_deref().map(parse_legacy_feedback).unwrap_or_default();

        let impact = self.impact.or(legacy.impact).unwrap_or_default();
        let solution = self.solution.or(legacy.solution).unwrap_or_default();

        Ok(DefectOccurrence::new(kind, self.count, impact, solution).fill_missing_guidance())
    }
}

/// 検出結果JSONを解析
///
/// 配列、または `feedback_details` を持つオブジェクトを受け付ける。
pub fn parse_feedback_json(content: &str) -> Result<LoadedFeedback> {
    let document: FeedbackDocument = serde_json::from_str(content)?;
    let (records, similarity) = match document {
        FeedbackDocument::List(records) => (records, None),
        FeedbackDocument::Wrapped {
            feedback_details,
            similarity,
        } => (feedback_details, similarity),
    };

    if let Some(value) = similarity {
        if !(0.0..=100.0).contains(&value) {
            return Err(PcbInspectError::InvalidInput(format!(
                "similarity must be within 0-100: {}",
                value
            )));
        }
    }

    let occurrences = records
        .into_iter()
        .map(FeedbackRecord::into_occurrence)
        .collect::<Result<Vec<_>>>()?;

    Ok(LoadedFeedback {
        occurrences,
        similarity,
    })
}

/// 読み込み結果の反映状況
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadOutcome {
    Applied { similarity: Option<f64> },
    /// 後から始まった読み込みに追い越された
    Stale,
}

impl LoadOutcome {
    pub fn similarity(&self) -> Option<f64> {
        match self {
            LoadOutcome::Applied { similarity } => *similarity,
            LoadOutcome::Stale => None,
        }
    }
}

/// 一覧ページの共有ハンドル
pub type SharedPage = Mutex<FeedbackPage<DefectKind>>;

/// 取得元から一覧ページを読み込む
///
/// ページのロックはチケット発行と反映のときだけ取る。
/// 待機中に別の読み込みが始まっていた場合、結果は反映されない。
pub async fn load_page<S: FeedbackSource>(page: &SharedPage, source: &S) -> Result<LoadOutcome> {
    let ticket = page.lock().await.begin_load();
    log::info!("loading feedback from {}", source.describe());

    let loaded = source.load().await?;
    if !page.lock().await.complete_load(ticket, loaded.occurrences) {
        log::warn!("discarded stale feedback from {}", source.describe());
        return Ok(LoadOutcome::Stale);
    }
    Ok(LoadOutcome::Applied {
        similarity: loaded.similarity,
    })
}

/// 入力ファイルがあればJSON、なければサンプルから読み込む
pub async fn load_page_from(page: &SharedPage, input: Option<&Path>) -> Result<LoadOutcome> {
    match input {
        Some(path) => load_page(page, &JsonFileSource::new(path)).await,
        None => load_page(page, &FixtureSource).await,
    }
}
