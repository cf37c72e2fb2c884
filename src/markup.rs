//! 旧形式フィードバック文字列の取り込み
//!
//! 旧バックエンドは見出し・影響・対処を `<span>` と `<br>` で組んだ1本の文字列で返す。
//! タグを除去して影響・対処をプレーンテキストで取り出す。見出しは件数から作り直すので捨てる。
//! 取り込み後の文字列は表示時に改めてエスケープされる。

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BREAK_RE: Regex = Regex::new(r"(?i)<br\s*/?>").unwrap();
    static ref TAG_RE: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref IMPACT_RE: Regex = Regex::new(r"(?i)^impact\s*:\s*(.*)$").unwrap();
    static ref SOLUTION_RE: Regex = Regex::new(r"(?i)^solution\s*:\s*(.*)$").unwrap();
}

/// 分解したフィードバック
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyFeedback {
    pub impact: Option<String>,
    pub solution: Option<String>,
}

/// タグを除去してテキスト行に分ける
pub fn strip_markup(markup: &str) -> Vec<String> {
    let with_breaks = BREAK_RE.replace_all(markup, "\n");
    let text = TAG_RE.replace_all(&with_breaks, "");
    decode_entities(&text)
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

fn decode_entities(text: &str) -> String {
    // &amp; は最後に戻す
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// 旧形式のフィードバックを分解
///
/// "Impact:" / "Solution:" で始まらない行は無視する。
pub fn parse_legacy_feedback(markup: &str) -> LegacyFeedback {
    let mut feedback = LegacyFeedback::default();

    for line in strip_markup(markup) {
        if let Some(caps) = IMPACT_RE.captures(&line) {
            feedback.impact = Some(caps[1].trim().to_string()).filter(|s| !s.is_empty());
        } else if let Some(caps) = SOLUTION_RE.captures(&line) {
            feedback.solution = Some(caps[1].trim().to_string()).filter(|s| !s.is_empty());
        }
    }

    feedback
}
