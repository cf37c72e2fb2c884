//! 欠陥カタログ
//!
//! 欠陥の種類は閉じた列挙型で表し、ラベル等への対応は網羅的な `match` で持つ。
//! 種類の追加・削除はコンパイル時に検出される。
//!
//! - `DefectKind`: 一覧ページ（検出バックエンドのクラス順）
//! - `DetailDefectKind`: 詳細ページ

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// 欠陥ごとの既定の影響・対処文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guidance {
    pub impact: &'static str,
    pub solution: &'static str,
}

/// 欠陥カタログ共通の振る舞い
pub trait DefectCatalog: Copy + Eq + Hash + fmt::Debug + 'static {
    /// カタログ順の全種類
    const ALL: &'static [Self];

    /// ワイヤ上のキー（`pin-hole` など）
    fn key(self) -> &'static str;

    /// 表示ラベル
    fn label(self) -> &'static str;

    /// 見出しで使う単数形の名詞
    fn singular(self) -> &'static str;

    fn guidance(self) -> Guidance;

    /// メニュー用の大文字ラベル
    fn menu_label(self) -> String {
        self.label().to_uppercase()
    }

    /// キーから種類を引く。未知のキーはエラー
    fn parse(key: &str) -> Result<Self> {
        let key = key.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| Error::UnknownDefectKind(key.to_string()))
    }
}

/// 表示ラベルを取得（全種類に対して定義済み）
pub fn label_for<K: DefectCatalog>(kind: K) -> &'static str {
    kind.label()
}

/// 一覧ページの欠陥種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefectKind {
    Open,
    Short,
    Mousebite,
    Protrusion,
    Copper,
    PinHole,
}

impl DefectCatalog for DefectKind {
    const ALL: &'static [Self] = &[
        DefectKind::Open,
        DefectKind::Short,
        DefectKind::Mousebite,
        DefectKind::Protrusion,
        DefectKind::Copper,
        DefectKind::PinHole,
    ];

    fn key(self) -> &'static str {
        match self {
            DefectKind::Open => "open",
            DefectKind::Short => "short",
            DefectKind::Mousebite => "mousebite",
            DefectKind::Protrusion => "protrusion",
            DefectKind::Copper => "copper",
            DefectKind::PinHole => "pin-hole",
        }
    }

    fn label(self) -> &'static str {
        match self {
            DefectKind::Open => "Open Circuits",
            DefectKind::Short => "Short Circuits",
            DefectKind::Mousebite => "Mousebites",
            DefectKind::Protrusion => "Protrusion",
            DefectKind::Copper => "Spurious Copper",
            DefectKind::PinHole => "Pin Holes",
        }
    }

    fn singular(self) -> &'static str {
        match self {
            DefectKind::Open => "Open Circuit",
            DefectKind::Short => "Short Circuit",
            DefectKind::Mousebite => "Mousebite",
            DefectKind::Protrusion => "Protrusion",
            DefectKind::Copper => "Spurious Copper",
            DefectKind::PinHole => "Pin Hole",
        }
    }

    /// open / short / mousebite は一覧ページの表示文言。
    /// protrusion / copper / pin-hole は表示例がないため、このクレートの既定文言。
    fn guidance(self) -> Guidance {
        match self {
            DefectKind::Open => Guidance {
                impact: "Electrical connectivity issues.",
                solution: "Check for broken traces or disconnects.",
            },
            DefectKind::Short => Guidance {
                impact: "Excessive current flow, potential overheating.",
                solution: "Inspect for unintended connections between traces.",
            },
            DefectKind::Mousebite => Guidance {
                impact: "Possible leak paths.",
                solution: "Verify that all vias are properly filled and sealed.",
            },
            DefectKind::Protrusion => Guidance {
                impact: "Reduced clearance between adjacent conductors.",
                solution: "Trim excess copper and re-check trace spacing.",
            },
            DefectKind::Copper => Guidance {
                impact: "Unintended conductive paths.",
                solution: "Remove residual copper and review the etching step.",
            },
            DefectKind::PinHole => Guidance {
                impact: "Weakened plating and intermittent contact.",
                solution: "Re-plate the affected holes and verify drilling quality.",
            },
        }
    }
}

/// 詳細ページの欠陥種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailDefectKind {
    Mousebite,
    Scratch,
    ShortCircuit,
    OpenCircuit,
}

impl DefectCatalog for DetailDefectKind {
    const ALL: &'static [Self] = &[
        DetailDefectKind::Mousebite,
        DetailDefectKind::Scratch,
        DetailDefectKind::ShortCircuit,
        DetailDefectKind::OpenCircuit,
    ];

    fn key(self) -> &'static str {
        match self {
            DetailDefectKind::Mousebite => "mousebite",
            DetailDefectKind::Scratch => "scratch",
            DetailDefectKind::ShortCircuit => "shortcircuit",
            DetailDefectKind::OpenCircuit => "opencircuit",
        }
    }

    fn label(self) -> &'static str {
        match self {
            DetailDefectKind::Mousebite => "Mousebite",
            DetailDefectKind::Scratch => "Scratch",
            DetailDefectKind::ShortCircuit => "Short Circuit",
            DetailDefectKind::OpenCircuit => "Open Circuit",
        }
    }

    fn singular(self) -> &'static str {
        self.label()
    }

    fn guidance(self) -> Guidance {
        match self {
            DetailDefectKind::Mousebite => Guidance {
                impact: "Possible Leak Paths.",
                solution: "Verify that all vias are properly filled and sealed.",
            },
            DetailDefectKind::Scratch => Guidance {
                impact: "Signal Integrity Issues.",
                solution: "Polish affected areas and apply protective coating.",
            },
            DetailDefectKind::ShortCircuit => Guidance {
                impact: "Component Failure Risk.",
                solution: "Remove conductive debris and reapply solder mask.",
            },
            DetailDefectKind::OpenCircuit => Guidance {
                impact: "Connection Failure.",
                solution: "Rework affected traces with conductive material.",
            },
        }
    }

    // 詳細ページのセレクトはキーをそのまま大文字で出す（SHORTCIRCUIT 等）
    fn menu_label(self) -> String {
        self.key().to_uppercase()
    }
}

impl fmt::Display for DefectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for DetailDefectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DefectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        <Self as DefectCatalog>::parse(s)
    }
}

impl FromStr for DetailDefectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        <Self as DefectCatalog>::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occurrence::summary_fixture;

    #[test]
    fn test_guidance_matches_summary_sample() {
        for occurrence in summary_fixture() {
            let guidance = occurrence.kind.guidance();
            assert_eq!(occurrence.impact, guidance.impact, "{}", occurrence.kind);
            assert_eq!(occurrence.solution, guidance.solution, "{}", occurrence.kind);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(label_for(DefectKind::PinHole), "Pin Holes");
        assert_eq!(label_for(DefectKind::Mousebite), "Mousebites");
        assert_eq!(label_for(DefectKind::Copper), "Spurious Copper");
        assert_eq!(label_for(DetailDefectKind::ShortCircuit), "Short Circuit");
    }

    #[test]
    fn test_backend_class_order() {
        let keys: Vec<&str> = DefectKind::ALL.iter().map(|k| k.key()).collect();
        assert_eq!(keys, vec!["open", "short", "mousebite", "protrusion", "copper", "pin-hole"]);
    }

    #[test]
    fn test_parse_known_keys() {
        for kind in DefectKind::ALL {
            assert_eq!(DefectKind::parse(kind.key()).unwrap(), *kind);
        }
        assert_eq!("opencircuit".parse::<DetailDefectKind>().unwrap(), DetailDefectKind::OpenCircuit);
        assert_eq!(" pin-hole ".parse::<DefectKind>().unwrap(), DefectKind::PinHole);
    }

    #[test]
    fn test_parse_unknown_key_is_rejected() {
        let err = DefectKind::parse("scratch").unwrap_err();
        assert!(matches!(err, Error::UnknownDefectKind(ref k) if k == "scratch"));

        // 一覧ページのキーは詳細ページでは無効
        assert!(DetailDefectKind::parse("short").is_err());
        assert!(DefectKind::parse("").is_err());
    }

    #[test]
    fn test_serde_uses_wire_keys() {
        let json = serde_json::to_string(&DefectKind::PinHole).unwrap();
        assert_eq!(json, "\"pin-hole\"");

        let kind: DetailDefectKind = serde_json::from_str("\"shortcircuit\"").unwrap();
        assert_eq!(kind, DetailDefectKind::ShortCircuit);

        assert!(serde_json::from_str::<DefectKind>("\"solder\"").is_err());
    }

    #[test]
    fn test_menu_labels() {
        assert_eq!(DefectKind::Short.menu_label(), "SHORT CIRCUITS");
        assert_eq!(DetailDefectKind::OpenCircuit.menu_label(), "OPENCIRCUIT");
    }

    #[test]
    fn test_display_is_key() {
        assert_eq!(DefectKind::PinHole.to_string(), "pin-hole");
        assert_eq!(DetailDefectKind::Scratch.to_string(), "scratch");
    }
}
