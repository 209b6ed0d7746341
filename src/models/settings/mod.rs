// Settings module
// Typed view of the widget's persisted key-value settings

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::appearance::{Decoration, FontStyle, Theme};
use crate::utils::date::to_iso_date;

pub const DEFAULT_BABY_NAME: &str = "사랑스런 아기";
pub const DEFAULT_FONT_SCALE: f64 = 1.0;
pub const MIN_FONT_SCALE: f64 = 0.5;
pub const MAX_FONT_SCALE: f64 = 2.0;
pub const FONT_SCALE_STEP: f64 = 0.1;

/// Literal storage keys, one per setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    BabyName,
    BirthDate,
    ViewMode,
    Theme,
    Decoration,
    FontStyle,
    QuoteIndex,
    CustomQuote,
    PhotoUrl,
    FontScale,
}

impl SettingKey {
    pub const ALL: [SettingKey; 10] = [
        SettingKey::BabyName,
        SettingKey::BirthDate,
        SettingKey::ViewMode,
        SettingKey::Theme,
        SettingKey::Decoration,
        SettingKey::FontStyle,
        SettingKey::QuoteIndex,
        SettingKey::CustomQuote,
        SettingKey::PhotoUrl,
        SettingKey::FontScale,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::BabyName => "babyName",
            SettingKey::BirthDate => "birthDate",
            SettingKey::ViewMode => "viewMode",
            SettingKey::Theme => "theme",
            SettingKey::Decoration => "decoration",
            SettingKey::FontStyle => "fontStyle",
            SettingKey::QuoteIndex => "quoteIndex",
            SettingKey::CustomQuote => "customQuote",
            SettingKey::PhotoUrl => "photoUrl",
            SettingKey::FontScale => "fontScale",
        }
    }
}

impl AsRef<str> for SettingKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit of elapsed time shown on the flip cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Days,
    Weeks,
    Months,
}

impl ViewMode {
    pub fn all() -> &'static [ViewMode] {
        &[ViewMode::Days, ViewMode::Weeks, ViewMode::Months]
    }

    pub fn id(&self) -> &'static str {
        match self {
            ViewMode::Days => "days",
            ViewMode::Weeks => "weeks",
            ViewMode::Months => "months",
        }
    }

    /// Label shown on the format picker.
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Days => "D-Day",
            ViewMode::Weeks => "Weeks",
            ViewMode::Months => "Months",
        }
    }

    /// Parses one of the stored literals. Anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|mode| mode.id() == value)
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown view mode: {}", s))
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Current value of every setting.
///
/// Owned by the app controller; mutations go through the settings cache so
/// the in-memory copy and the durable store never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub baby_name: String,
    /// ISO `YYYY-MM-DD`, kept as stored so a malformed value survives a
    /// round trip untouched.
    pub birth_date: String,
    pub view_mode: ViewMode,
    pub theme: Theme,
    pub decoration: Decoration,
    pub font_style: FontStyle,
    pub quote_index: usize,
    pub custom_quote: String,
    /// Self-contained `data:` URI of the compressed photo.
    pub photo_url: Option<String>,
    pub font_scale: f64,
}

impl Settings {
    /// First-run values. The birth date defaults to `today`.
    pub fn defaults(today: NaiveDate) -> Self {
        Self {
            baby_name: DEFAULT_BABY_NAME.to_string(),
            birth_date: to_iso_date(today),
            view_mode: ViewMode::default(),
            theme: Theme::default(),
            decoration: Decoration::default(),
            font_style: FontStyle::default(),
            quote_index: 0,
            custom_quote: String::new(),
            photo_url: None,
            font_scale: DEFAULT_FONT_SCALE,
        }
    }

    /// Birth date as written on the polaroid caption (`2024.01.31`).
    pub fn photo_caption(&self) -> String {
        self.birth_date.replace('-', ".")
    }

    pub fn font_scale_percent(&self) -> u32 {
        (clamp_font_scale(self.font_scale) * 100.0).round() as u32
    }
}

/// Keeps the scale inside the supported range, snapped to one decimal so
/// repeated steps do not accumulate float drift. Non-finite input resets
/// to the default.
pub fn clamp_font_scale(scale: f64) -> f64 {
    if !scale.is_finite() {
        return DEFAULT_FONT_SCALE;
    }
    let snapped = (scale * 10.0).round() / 10.0;
    snapped.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE)
}
