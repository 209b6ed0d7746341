use super::BabyDdayApp;
use crate::models::settings::SettingKey;
use crate::services::intake::{compress_photo, IntakeError, IntakeLimits};
use crate::services::settings::WriteOutcome;
use crate::services::storage::StorageBackend;

pub const PHOTO_FAILED_MESSAGE: &str = "이미지 처리 중 오류가 발생했습니다.";
pub const PHOTO_NOT_SAVED_MESSAGE: &str =
    "사진을 저장할 공간이 부족해요. 새로고침하면 사진이 사라질 수 있어요.";

impl<S: StorageBackend> BabyDdayApp<S> {
    /// Limits to hand to [`compress_photo`] when compressing outside the app.
    pub fn intake_limits(&self) -> IntakeLimits {
        self.intake_limits
    }

    /// Stores the outcome of a [`compress_photo`] call as the photo.
    ///
    /// On failure the previous photo is left untouched and an error notice
    /// is queued. A photo the store refuses is still shown for this session,
    /// with a warning notice.
    pub fn store_photo(
        &mut self,
        compressed: Result<String, IntakeError>,
    ) -> Result<WriteOutcome, IntakeError> {
        let uri = match compressed {
            Ok(uri) => uri,
            Err(err) => {
                log::error!("Image upload error: {}", err);
                self.notices.error(PHOTO_FAILED_MESSAGE);
                return Err(err);
            }
        };

        let photo = Some(uri);
        let outcome = self.cache.write(SettingKey::PhotoUrl.as_str(), &photo);
        if outcome == WriteOutcome::MemoryOnly {
            self.notices.warning(PHOTO_NOT_SAVED_MESSAGE);
        }
        self.settings.photo_url = photo;
        Ok(outcome)
    }

    /// Compresses and stores in one step. The app stays mutably borrowed
    /// until compression finishes; callers that keep editing meanwhile
    /// should await [`compress_photo`] themselves and call
    /// [`BabyDdayApp::store_photo`].
    pub async fn attach_photo(&mut self, bytes: Vec<u8>) -> Result<WriteOutcome, IntakeError> {
        let compressed = compress_photo(bytes, self.intake_limits).await;
        self.store_photo(compressed)
    }

    pub fn clear_photo(&mut self) -> WriteOutcome {
        let outcome = self.cache.write(SettingKey::PhotoUrl.as_str(), &None::<String>);
        self.settings.photo_url = None;
        outcome
    }
}
