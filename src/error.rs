use thiserror::Error;

#[derive(Error, Debug)]
pub enum PcbInspectError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("入力データが不正: {0}")]
    InvalidInput(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF生成エラー: {0}")]
    PdfGeneration(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("対話入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] pcb_inspect_common::Error),
}

pub type Result<T> = std::result::Result<T, PcbInspectError>;
