use crate::error::{PcbInspectError, Result};
use pcb_inspect_common::report::DEFAULT_REPORT_TITLE;
use pcb_inspect_common::{GradingPolicy, Theme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 設定ファイルの場所を上書きする環境変数
pub const CONFIG_ENV: &str = "PCB_INSPECT_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 一覧ページ（ボード全体）の判定方式
    pub summary_grading: GradingPolicy,
    /// 詳細ページ（欠陥ごと）の判定方式
    pub detail_grading: GradingPolicy,
    pub theme: Theme,
    pub report_title: String,
    /// `--input` 省略時に読む検出結果JSON
    pub default_input: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summary_grading: GradingPolicy::summary_default(),
            detail_grading: GradingPolicy::detail_default(),
            theme: Theme::default(),
            report_title: DEFAULT_REPORT_TITLE.into(),
            default_input: None,
        }
    }
}

impl Config {
    /// 指定パスから読み込み（なければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("config not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        log::debug!("config loaded from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        // 環境変数を優先
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        let home = dirs::home_dir()
            .ok_or_else(|| PcbInspectError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("pcb-inspect").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        self.summary_grading.validate()?;
        self.detail_grading.validate()?;
        if self.theme.similarity_warning_min > self.theme.similarity_good_min {
            return Err(PcbInspectError::Config(format!(
                "similarity_warning_min ({}) > similarity_good_min ({})",
                self.theme.similarity_warning_min, self.theme.similarity_good_min
            )));
        }
        Ok(())
    }
}
