//! ナビゲーション
//!
//! ハイライト位置は現在のルートから導出する（DOM計測は行わない）。

/// ナビゲーション項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "HOME", route: "/" },
    NavItem { label: "CAPTURE or UPLOAD PCB", route: "/capture" },
    NavItem { label: "FEEDBACK", route: "/feedback" },
    NavItem { label: "SIMULATE CONTINUITY", route: "/simulate" },
];

/// 解釈済みのルート
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Capture,
    Feedback,
    /// `/feedback/<defectType>`（パラメータは未検証のまま保持）
    FeedbackDetail(String),
    Simulate,
    Unknown(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] if path.starts_with('/') => Route::Home,
            ["capture"] => Route::Capture,
            ["feedback"] => Route::Feedback,
            ["feedback", param] => Route::FeedbackDetail((*param).to_string()),
            ["simulate"] => Route::Simulate,
            _ => Route::Unknown(path.to_string()),
        }
    }

    /// このルートでハイライトするナビ項目
    pub fn nav_index(&self) -> Option<usize> {
        let route = match self {
            Route::Home => "/",
            Route::Capture => "/capture",
            Route::Feedback | Route::FeedbackDetail(_) => "/feedback",
            Route::Simulate => "/simulate",
            Route::Unknown(_) => return None,
        };
        NAV_ITEMS.iter().position(|item| item.route == route)
    }
}

/// パスからハイライト位置を求める
pub fn active_index(path: &str) -> Option<usize> {
    Route::parse(path).nav_index()
}

/// 詳細ページのパス
pub fn detail_path(key: &str) -> String {
    format!("/feedback/{}", key)
}
