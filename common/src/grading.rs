//! 等級判定
//!
//! 欠陥数 → 類似度スコアと等級（A/B/C）の段階関数。
//! 閾値は `GradeThresholds` として設定で上書きできる。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 欠陥数から決まる等級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Grade {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            other => Err(Error::Config(format!("Unknown grade: {}. Use A, B, or C", other))),
        }
    }
}

/// 判定結果（保存せず都度計算する）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeResult {
    /// 類似度スコア（0-100）
    pub score: u8,
    pub grade: Grade,
}

impl GradeResult {
    pub fn new(score: u8, grade: Grade) -> Self {
        Self { score, grade }
    }
}

/// 欠陥数の閾値テーブル
///
/// - `count <= a_max_count` → A
/// - `count <= b_max_count` → B
/// - それ以外 → C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeThresholds {
    pub a_max_count: u32,
    pub b_max_count: u32,
    pub a_score: u8,
    pub b_score: u8,
    pub c_score: u8,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            a_max_count: 1,
            b_max_count: 3,
            a_score: 100,
            b_score: 50,
            c_score: 20,
        }
    }
}

impl GradeThresholds {
    pub fn validate(&self) -> Result<()> {
        if self.a_max_count > self.b_max_count {
            return Err(Error::InvalidThresholds(format!(
                "a_max_count ({}) > b_max_count ({})",
                self.a_max_count, self.b_max_count
            )));
        }
        for (name, score) in [("a_score", self.a_score), ("b_score", self.b_score), ("c_score", self.c_score)] {
            if score > 100 {
                return Err(Error::InvalidThresholds(format!("{} ({}) exceeds 100", name, score)));
            }
        }
        if !(self.a_score >= self.b_score && self.b_score >= self.c_score) {
            return Err(Error::InvalidThresholds(format!(
                "scores must not increase with the grade: {}/{}/{}",
                self.a_score, self.b_score, self.c_score
            )));
        }
        Ok(())
    }

    pub fn grade_for(&self, count: u32) -> GradeResult {
        if count <= self.a_max_count {
            GradeResult::new(self.a_score, Grade::A)
        } else if count <= self.b_max_count {
            GradeResult::new(self.b_score, Grade::B)
        } else {
            GradeResult::new(self.c_score, Grade::C)
        }
    }

    /// 凡例の行（A, B, C の順）
    pub fn bands(&self) -> [GradeResult; 3] {
        [
            GradeResult::new(self.a_score, Grade::A),
            GradeResult::new(self.b_score, Grade::B),
            GradeResult::new(self.c_score, Grade::C),
        ]
    }
}

/// 既定の閾値で判定
pub fn grade_for(count: u32) -> GradeResult {
    GradeThresholds::default().grade_for(count)
}

/// ページごとの判定方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GradingPolicy {
    /// 欠陥数から閾値で判定
    Thresholds(GradeThresholds),
    /// 欠陥数によらず固定
    Fixed(GradeResult),
}

impl GradingPolicy {
    /// 一覧ページの既定値（85% / B 固定）
    pub fn summary_default() -> Self {
        GradingPolicy::Fixed(GradeResult::new(85, Grade::B))
    }

    /// 詳細ページの既定値（閾値判定）
    pub fn detail_default() -> Self {
        GradingPolicy::Thresholds(GradeThresholds::default())
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            GradingPolicy::Thresholds(t) => t.validate(),
            GradingPolicy::Fixed(result) if result.score > 100 => Err(Error::InvalidThresholds(
                format!("fixed score ({}) exceeds 100", result.score),
            )),
            GradingPolicy::Fixed(_) => Ok(()),
        }
    }

    pub fn evaluate(&self, count: u32) -> GradeResult {
        match self {
            GradingPolicy::Thresholds(t) => t.grade_for(count),
            GradingPolicy::Fixed(result) => *result,
        }
    }
}

/// 画像類似度（%）からの等級（A〜F）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SimilarityGrade {
    A,
    B,
    C,
    D,
    F,
}

impl SimilarityGrade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            SimilarityGrade::A
        } else if percentage >= 80.0 {
            SimilarityGrade::B
        } else if percentage >= 70.0 {
            SimilarityGrade::C
        } else if percentage >= 60.0 {
            SimilarityGrade::D
        } else {
            SimilarityGrade::F
        }
    }
}

impl fmt::Display for SimilarityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SimilarityGrade::A => "A",
            SimilarityGrade::B => "B",
            SimilarityGrade::C => "C",
            SimilarityGrade::D => "D",
            SimilarityGrade::F => "F",
        };
        f.write_str(s)
    }
}
