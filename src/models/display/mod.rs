// Display model
// Flip-card tokens produced by the display calculator

use serde::{Deserialize, Serialize};

/// Whether the birth day itself counts as day 0 or day 1 of the elapsed
/// count in the days and weeks views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCounting {
    /// The day after birth is `D+1`.
    #[default]
    ZeroBased,
    /// The day after birth is `D+2`; the birth day is the first day together.
    OneBased,
}

impl DayCounting {
    /// Offset added to the raw day difference once the baby is born.
    pub fn offset(&self) -> i64 {
        match self {
            DayCounting::ZeroBased => 0,
            DayCounting::OneBased => 1,
        }
    }
}

/// Cards and status label for one render. Recomputed every time, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DisplayResult {
    /// One short token per flip card, left to right.
    pub cards: Vec<String>,
    pub label: String,
}

impl DisplayResult {
    pub fn new<I, S>(cards: I, label: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cards: cards.into_iter().map(Into::into).collect(),
            label: label.into(),
        }
    }

    /// No cards and no label; rendered as nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.label.is_empty()
    }
}
