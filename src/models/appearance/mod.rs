// Appearance catalogues: colour themes, sticker decorations and font styles

use serde::{Deserialize, Serialize};

/// Paper colour theme for the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Warm,
    Cool,
    Pink,
    Mono,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[Theme::Warm, Theme::Cool, Theme::Pink, Theme::Mono]
    }

    /// Identifier stored under the `theme` key.
    pub fn id(&self) -> &'static str {
        match self {
            Theme::Warm => "warm",
            Theme::Cool => "cool",
            Theme::Pink => "pink",
            Theme::Mono => "mono",
        }
    }

    /// Background colour shown on the theme picker swatch.
    pub fn swatch(&self) -> &'static str {
        match self {
            Theme::Warm => "#fdf6e3",
            Theme::Cool => "#e0f7fa",
            Theme::Pink => "#fce4ec",
            Theme::Mono => "#f5f5f5",
        }
    }

    /// Primary text colour for the theme.
    pub fn text_color(&self) -> &'static str {
        match self {
            Theme::Warm => "#5c4b43",
            Theme::Cool => "#455a64",
            Theme::Pink => "#880e4f",
            Theme::Mono => "#212121",
        }
    }

    /// Accent colour used for the label and sticker.
    pub fn accent_color(&self) -> &'static str {
        match self {
            Theme::Warm => "#8d6e63",
            Theme::Cool => "#607d8b",
            Theme::Pink => "#ad1457",
            Theme::Mono => "#424242",
        }
    }
}

/// Sticker hanging off the corner of the calendar page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decoration {
    #[default]
    Bear,
    Star,
    Cloud,
    Crown,
    Cross,
    Dove,
}

impl Decoration {
    pub fn all() -> &'static [Decoration] {
        &[
            Decoration::Bear,
            Decoration::Star,
            Decoration::Cloud,
            Decoration::Crown,
            Decoration::Cross,
            Decoration::Dove,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Decoration::Bear => "bear",
            Decoration::Star => "star",
            Decoration::Cloud => "cloud",
            Decoration::Crown => "crown",
            Decoration::Cross => "cross",
            Decoration::Dove => "dove",
        }
    }
}

/// Font family used for the flip cards and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Rounded,
    Hand,
    Serif,
}

impl FontStyle {
    pub fn all() -> &'static [FontStyle] {
        &[FontStyle::Rounded, FontStyle::Hand, FontStyle::Serif]
    }

    pub fn id(&self) -> &'static str {
        match self {
            FontStyle::Rounded => "rounded",
            FontStyle::Hand => "hand",
            FontStyle::Serif => "serif",
        }
    }

    /// Label shown on the font picker button.
    pub fn label(&self) -> &'static str {
        match self {
            FontStyle::Rounded => "동글",
            FontStyle::Hand => "손글씨",
            FontStyle::Serif => "명조",
        }
    }

    pub fn font_family(&self) -> &'static str {
        match self {
            FontStyle::Rounded => "Jua",
            FontStyle::Hand => "Gamja Flower",
            FontStyle::Serif => "Gowun Batang",
        }
    }
}
