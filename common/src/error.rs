//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    /// カタログにない欠陥キー（呼び出し側の境界で弾く）
    #[error("Unknown defect kind: {0}")]
    UnknownDefectKind(String),

    /// カタログにはあるが、データに記録がない
    #[error("No occurrence of defect kind: {0}")]
    NoOccurrence(String),

    #[error("Invalid grade thresholds: {0}")]
    InvalidThresholds(String),

    #[error("Export error: {0}")]
    Export(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
