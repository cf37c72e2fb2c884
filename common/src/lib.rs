//! PCB Inspect Common Library
//!
//! 欠陥フィードバック画面のドメインロジック（I/Oなし）。
//! CLIの各コマンドとレポート出力で共有する。

pub mod catalog;
pub mod error;
pub mod export;
pub mod grading;
pub mod navigation;
pub mod occurrence;
pub mod page;
pub mod render;
pub mod report;
pub mod selection;
pub mod theme;

pub use catalog::{label_for, DefectCatalog, DefectKind, DetailDefectKind, Guidance};
pub use error::{Error, Result};
pub use grading::{grade_for, Grade, GradeResult, GradeThresholds, GradingPolicy, SimilarityGrade};
pub use navigation::{active_index, NavItem, Route, NAV_ITEMS};
pub use occurrence::{detail_fixture, occurrences_from_counts, summary_fixture, total_count, DefectOccurrence};
pub use page::{open_detail, DetailView, FeedbackPage, LoadState, LoadTicket};
pub use render::{html_escape, render_report_html};
pub use report::{InspectionReport, ReportLine, ReportOptions};
pub use selection::{visible_occurrences, SelectTarget, SelectionState};
pub use theme::Theme;
