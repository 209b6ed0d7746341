//! Loading the typed [`Settings`] object out of the cache.

use chrono::NaiveDate;

use super::cache::SettingsCache;
use crate::models::settings::{clamp_font_scale, SettingKey, Settings};
use crate::services::storage::StorageBackend;

impl Settings {
    /// Reads every setting from the cache, materializing defaults for keys
    /// that were never stored or no longer decode.
    pub fn load<S: StorageBackend>(cache: &mut SettingsCache<S>, today: NaiveDate) -> Self {
        let defaults = Settings::defaults(today);

        let settings = Self {
            baby_name: cache.read(SettingKey::BabyName.as_str(), defaults.baby_name),
            birth_date: cache.read(SettingKey::BirthDate.as_str(), defaults.birth_date),
            view_mode: cache.read(SettingKey::ViewMode.as_str(), defaults.view_mode),
            theme: cache.read(SettingKey::Theme.as_str(), defaults.theme),
            decoration: cache.read(SettingKey::Decoration.as_str(), defaults.decoration),
            font_style: cache.read(SettingKey::FontStyle.as_str(), defaults.font_style),
            quote_index: cache.read(SettingKey::QuoteIndex.as_str(), defaults.quote_index),
            custom_quote: cache.read(SettingKey::CustomQuote.as_str(), defaults.custom_quote),
            photo_url: cache.read(SettingKey::PhotoUrl.as_str(), defaults.photo_url),
            font_scale: clamp_font_scale(
                cache.read(SettingKey::FontScale.as_str(), defaults.font_scale),
            ),
        };

        log::debug!(
            "Loaded settings: view_mode={}, theme={}, photo={}",
            settings.view_mode,
            settings.theme.id(),
            settings.photo_url.is_some()
        );
        settings
    }
}
