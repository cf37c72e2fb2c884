use crate::export::ReportFormat;
use clap::{Parser, Subcommand};
use pcb_inspect_common::Grade;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pcb-inspect")]
#[command(about = "PCB欠陥検査フィードバック・等級判定ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 設定ファイル（省略時は ~/.config/pcb-inspect/config.json）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 欠陥フィードバック一覧を表示
    Summary {
        /// 検出結果JSON（省略時は設定の default_input、なければサンプル）
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 絞り込む欠陥（all / open / short / mousebite / protrusion / copper / pin-hole）
        #[arg(short, long, default_value = "all")]
        select: String,

        /// メニューから対話的に選択
        #[arg(long)]
        interactive: bool,
    },

    /// 欠陥の詳細を表示
    Detail {
        /// 欠陥キー（mousebite / scratch / shortcircuit / opencircuit）
        #[arg(required = true)]
        kind: String,
    },

    /// 欠陥数から等級を判定
    Grade {
        /// 欠陥数
        #[arg(required = true)]
        count: u32,

        /// 一覧ページの判定方式を使う
        #[arg(long)]
        summary: bool,
    },

    /// 欠陥の種類とラベルを一覧表示
    Labels,

    /// ルートに対応するナビゲーション項目を表示
    Nav {
        /// パス（例: /feedback/mousebite）
        #[arg(required = true)]
        path: String,
    },

    /// 種類ごとの件数から検出結果JSONを生成
    FromCounts {
        /// 件数（例: open=2 short=1）
        #[arg(required = true, num_args = 1..)]
        counts: Vec<String>,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 検査レポートを出力
    Export {
        /// 検出結果JSON（省略時は設定の default_input、なければサンプル）
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 絞り込む欠陥
        #[arg(short, long, default_value = "all")]
        select: String,

        /// 出力形式 (pdf/excel/html/json/all)
        #[arg(short, long, default_value = "pdf")]
        format: ExportFormat,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// レポートタイトル（省略時は設定値）
        #[arg(short, long)]
        title: Option<String>,

        /// 画像類似度（%）。入力JSONの値より優先
        #[arg(long)]
        similarity: Option<f64>,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 詳細ページの閾値（A上限 B上限）
        #[arg(long, num_args = 2, value_names = ["A_MAX", "B_MAX"])]
        set_thresholds: Option<Vec<u32>>,

        /// 一覧ページを固定スコアにする
        #[arg(long, requires = "fixed_grade")]
        fixed_score: Option<u8>,

        /// 一覧ページの固定等級 (A/B/C)
        #[arg(long, requires = "fixed_score")]
        fixed_grade: Option<Grade>,

        /// 一覧ページも欠陥数の閾値で判定する
        #[arg(long, conflicts_with = "fixed_score")]
        summary_by_count: bool,

        /// 既定値に戻す
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Clone, Debug, Default)]
pub enum ExportFormat {
    #[default]
    Pdf,
    Excel,
    Html,
    Json,
    All,
}

impl ExportFormat {
    /// 個別の出力形式に展開
    pub fn expand(&self) -> Vec<ReportFormat> {
        match self {
            ExportFormat::Pdf => vec![ReportFormat::Pdf],
            ExportFormat::Excel => vec![ReportFormat::Excel],
            ExportFormat::Html => vec![ReportFormat::Html],
            ExportFormat::Json => vec![ReportFormat::Json],
            ExportFormat::All => vec![
                ReportFormat::Pdf,
                ReportFormat::Excel,
                ReportFormat::Html,
                ReportFormat::Json,
            ],
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "html" | "htm" => Ok(ExportFormat::Html),
            "json" => Ok(ExportFormat::Json),
            "all" => Ok(ExportFormat::All),
            _ => Err(format!("Unknown format: {}. Use pdf, excel, html, json, or all", s)),
        }
    }
}

/// "open=2" 形式の件数指定を分解
pub fn parse_count_arg(arg: &str) -> Result<(String, u32), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("Invalid count: {}. Use KIND=COUNT", arg))?;
    let count = value
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("Invalid count for {}: {}", key, value))?;
    Ok((key.trim().to_string(), count))
}
