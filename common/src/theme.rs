//! 表示テーマ
//!
//! 色はモジュール定数ではなく `Theme` として呼び出し側から渡す。

use crate::grading::Grade;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub headline_color: String,
    pub impact_color: String,
    pub solution_color: String,
    pub grade_a_color: String,
    pub grade_b_color: String,
    pub grade_c_color: String,
    pub good_color: String,
    pub warning_color: String,
    pub bad_color: String,
    /// この値以上は good
    pub similarity_good_min: u8,
    /// この値以上は warning
    pub similarity_warning_min: u8,
    pub accent_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            headline_color: "#0066cc".into(),
            impact_color: "#ff0000".into(),
            solution_color: "#008000".into(),
            grade_a_color: "#16a34a".into(),
            grade_b_color: "#f97316".into(),
            grade_c_color: "#dc2626".into(),
            good_color: "#16a34a".into(),
            warning_color: "#f97316".into(),
            bad_color: "#dc2626".into(),
            similarity_good_min: 80,
            similarity_warning_min: 40,
            accent_color: "#eab308".into(),
        }
    }
}

impl Theme {
    pub fn grade_color(&self, grade: Grade) -> &str {
        match grade {
            Grade::A => &self.grade_a_color,
            Grade::B => &self.grade_b_color,
            Grade::C => &self.grade_c_color,
        }
    }

    pub fn similarity_color(&self, score: u8) -> &str {
        if score >= self.similarity_good_min {
            &self.good_color
        } else if score >= self.similarity_warning_min {
            &self.warning_color
        } else {
            &self.bad_color
        }
    }
}
