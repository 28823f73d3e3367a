//! Dashboard body status: headline and empty states.

use serde::Serialize;

/// What the dashboard body should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewStatus {
    /// Nothing requested yet.
    Idle,
    Loading,
    /// The latest fetch failed; carries the user-facing message.
    Failed { message: String },
    /// A search term is active.
    Searching { matches: usize },
    /// A date filter is active, no search term.
    DateFiltered { matches: usize },
    All { total: usize },
}

impl ViewStatus {
    /// Whether the body shows an empty state instead of rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Searching { matches } | Self::DateFiltered { matches } => *matches == 0,
            Self::All { total } => *total == 0,
            Self::Idle | Self::Loading | Self::Failed { .. } => false,
        }
    }

    /// Heading above the table.
    #[must_use]
    pub fn headline(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Loading => "予約を読み込み中...".to_string(),
            Self::Failed { .. } => "データ読み込みエラー".to_string(),
            Self::Searching { matches } => format!("検索結果: {matches}件の予約"),
            Self::DateFiltered { matches } => format!("フィルター結果: {matches}件の予約"),
            Self::All { total } => format!("全予約: {total}件"),
        }
    }

    /// Title and hint for the empty state, `None` when rows are shown.
    #[must_use]
    pub fn empty_message(&self) -> Option<(&'static str, &'static str)> {
        if !self.is_empty() {
            return None;
        }
        Some(match self {
            Self::Searching { .. } => ("検索結果が見つかりません", "検索条件を変更してお試しください。"),
            Self::DateFiltered { .. } => ("予約が見つかりません", "選択された日付の予約が見つかりません。"),
            _ => ("予約が見つかりません", "利用可能な予約がありません。"),
        })
    }
}
