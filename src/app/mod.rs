//! Top-level controller owning the settings state.
//!
//! `BabyDdayApp` is the only owner of the [`Settings`] object. Renderers read
//! it through [`BabyDdayApp::settings`] and change it through the setters,
//! each of which writes through the settings cache before updating the
//! in-memory copy.

mod photo;

pub use photo::{PHOTO_FAILED_MESSAGE, PHOTO_NOT_SAVED_MESSAGE};

use chrono::NaiveDate;

use crate::config::AppConfig;
use crate::models::appearance::{Decoration, FontStyle, Theme};
use crate::models::display::DisplayResult;
use crate::models::quote::quote_text;
use crate::models::settings::{
    clamp_font_scale, SettingKey, Settings, ViewMode, DEFAULT_FONT_SCALE, FONT_SCALE_STEP,
};
use crate::services::display::DisplayCalculator;
use crate::services::intake::IntakeLimits;
use crate::services::notice::{NoticeId, NoticeQueue};
use crate::services::settings::{SettingsCache, WriteOutcome};
use crate::services::storage::{MemoryStorage, SqliteStorage, StorageBackend};
use crate::utils::date::{to_iso_date, today};

pub struct BabyDdayApp<S: StorageBackend> {
    cache: SettingsCache<S>,
    settings: Settings,
    notices: NoticeQueue,
    calculator: DisplayCalculator,
    intake_limits: IntakeLimits,
}

impl BabyDdayApp<Box<dyn StorageBackend>> {
    /// Opens the configured SQLite store and loads the settings from it.
    ///
    /// If the store cannot be opened the app still starts, backed by a
    /// disabled store: every value falls back to its default and edits live
    /// only for this session.
    pub fn launch(config: &AppConfig, today: NaiveDate) -> Self {
        let storage: Box<dyn StorageBackend> = match SqliteStorage::open(&config.storage_path) {
            Ok(storage) => Box::new(storage.with_quota(config.storage_quota_bytes)),
            Err(err) => {
                log::warn!("Failed to open settings storage: {err:?}; settings will not persist");
                Box::new(MemoryStorage::disabled())
            }
        };
        Self::open(storage, config, today)
    }

    /// [`BabyDdayApp::launch`] on the host clock's current date.
    pub fn launch_today(config: &AppConfig) -> Self {
        Self::launch(config, today())
    }
}

impl<S: StorageBackend> BabyDdayApp<S> {
    /// Loads every setting, then runs the cache's one synchronization pass.
    pub fn open(storage: S, config: &AppConfig, today: NaiveDate) -> Self {
        let mut cache = SettingsCache::new(storage);
        let mut settings = Settings::load(&mut cache, today);
        if cache.synchronize() > 0 {
            settings = Settings::load(&mut cache, today);
        }

        log::info!(
            "Opened D-day for birth date {} (view mode {})",
            settings.birth_date,
            settings.view_mode
        );

        Self {
            cache,
            settings,
            notices: NoticeQueue::new(),
            calculator: DisplayCalculator::new(config.day_counting),
            intake_limits: config.intake_limits(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn cache(&self) -> &SettingsCache<S> {
        &self.cache
    }

    pub fn notices(&self) -> &NoticeQueue {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeQueue {
        &mut self.notices
    }

    pub fn dismiss_notice(&mut self, id: NoticeId) -> bool {
        self.notices.dismiss(id)
    }

    /// Flip cards and label for `today`.
    pub fn display(&self, today: NaiveDate) -> DisplayResult {
        self.calculator
            .calculate_raw(&self.settings.birth_date, today, self.settings.view_mode.id())
    }

    /// [`BabyDdayApp::display`] for the host clock's current date.
    pub fn display_today(&self) -> DisplayResult {
        self.display(today())
    }

    pub fn quote_text(&self) -> Option<String> {
        quote_text(self.settings.quote_index, &self.settings.custom_quote)
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    pub fn photo_caption(&self) -> String {
        self.settings.photo_caption()
    }

    pub fn font_scale_percent(&self) -> u32 {
        self.settings.font_scale_percent()
    }

    pub fn set_baby_name(&mut self, name: impl Into<String>) -> WriteOutcome {
        let name = name.into();
        let outcome = self.cache.write(SettingKey::BabyName.as_str(), &name);
        self.settings.baby_name = name;
        outcome
    }

    pub fn set_birth_date(&mut self, date: NaiveDate) -> WriteOutcome {
        let iso = to_iso_date(date);
        let outcome = self.cache.write(SettingKey::BirthDate.as_str(), &iso);
        self.settings.birth_date = iso;
        outcome
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) -> WriteOutcome {
        let outcome = self.cache.write(SettingKey::ViewMode.as_str(), &mode);
        self.settings.view_mode = mode;
        outcome
    }

    pub fn set_theme(&mut self, theme: Theme) -> WriteOutcome {
        let outcome = self.cache.write(SettingKey::Theme.as_str(), &theme);
        self.settings.theme = theme;
        outcome
    }

    pub fn set_decoration(&mut self, decoration: Decoration) -> WriteOutcome {
        let outcome = self.cache.write(SettingKey::Decoration.as_str(), &decoration);
        self.settings.decoration = decoration;
        outcome
    }

    pub fn set_font_style(&mut self, style: FontStyle) -> WriteOutcome {
        let outcome = self.cache.write(SettingKey::FontStyle.as_str(), &style);
        self.settings.font_style = style;
        outcome
    }

    pub fn set_quote_index(&mut self, index: usize) -> WriteOutcome {
        let outcome = self.cache.write(SettingKey::QuoteIndex.as_str(), &index);
        self.settings.quote_index = index;
        outcome
    }

    pub fn set_custom_quote(&mut self, quote: impl Into<String>) -> WriteOutcome {
        let quote = quote.into();
        let outcome = self.cache.write(SettingKey::CustomQuote.as_str(), &quote);
        self.settings.custom_quote = quote;
        outcome
    }

    pub fn set_font_scale(&mut self, scale: f64) -> WriteOutcome {
        self.adjust_font_scale(|_| scale)
    }

    pub fn increase_font_scale(&mut self) -> WriteOutcome {
        self.adjust_font_scale(|scale| scale + FONT_SCALE_STEP)
    }

    pub fn decrease_font_scale(&mut self) -> WriteOutcome {
        self.adjust_font_scale(|scale| scale - FONT_SCALE_STEP)
    }

    fn adjust_font_scale(&mut self, f: impl FnOnce(f64) -> f64) -> WriteOutcome {
        let (scale, outcome) = self.cache.update(
            SettingKey::FontScale.as_str(),
            DEFAULT_FONT_SCALE,
            |scale| clamp_font_scale(f(clamp_font_scale(scale))),
        );
        self.settings.font_scale = scale;
        outcome
    }
}
