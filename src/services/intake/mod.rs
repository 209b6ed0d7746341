//! Photo intake: shrink a user photo into a data URI small enough for the
//! settings store.
//!
//! The image is decoded, fitted within a maximum edge length and re-encoded
//! as JPEG. Quality steps down until the encoded URI fits the byte budget;
//! if the lowest quality is still too large the image is halved and the
//! ladder starts again.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use thiserror::Error;

pub const DEFAULT_MAX_BYTES: usize = 2 * 1024 * 1024;
pub const DEFAULT_MAX_DIMENSION: u32 = 1920;
pub const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

const INITIAL_QUALITY: u8 = 85;
const QUALITY_STEP: u8 = 10;
const MIN_QUALITY: u8 = 35;
const MIN_DIMENSION: u32 = 64;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("no image data was provided")]
    Empty,
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
    #[error("could not compress image below {budget} bytes")]
    OverBudget { budget: usize },
    #[error("photo intake task failed: {0}")]
    Task(String),
}

/// Size limits for the produced data URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakeLimits {
    /// Upper bound on the full data URI length in bytes.
    pub max_bytes: usize,
    /// Longest edge after the first downscale.
    pub max_dimension: u32,
}

impl Default for IntakeLimits {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

/// Compresses `bytes` on a blocking worker so the caller's task is only
/// suspended, never blocked.
pub async fn compress_photo(bytes: Vec<u8>, limits: IntakeLimits) -> Result<String, IntakeError> {
    tokio::task::spawn_blocking(move || compress_photo_blocking(&bytes, limits))
        .await
        .map_err(|err| IntakeError::Task(err.to_string()))?
}

/// Synchronous core of [`compress_photo`].
pub fn compress_photo_blocking(bytes: &[u8], limits: IntakeLimits) -> Result<String, IntakeError> {
    if bytes.is_empty() {
        return Err(IntakeError::Empty);
    }

    let decoded = image::load_from_memory(bytes).map_err(IntakeError::Decode)?;
    let (width, height) = decoded.dimensions();
    let mut image = fit_within(decoded, limits.max_dimension);

    loop {
        let mut quality = INITIAL_QUALITY;
        while quality >= MIN_QUALITY {
            let jpeg = encode_jpeg(&image, quality)?;
            let uri_len = DATA_URI_PREFIX.len() + base64_len(jpeg.len());
            if uri_len <= limits.max_bytes {
                log::debug!(
                    "Photo compressed: {}x{} -> {}x{} at quality {} ({} bytes)",
                    width,
                    height,
                    image.width(),
                    image.height(),
                    quality,
                    uri_len
                );
                return Ok(format!("{}{}", DATA_URI_PREFIX, B64.encode(&jpeg)));
            }
            quality -= QUALITY_STEP;
        }

        let (w, h) = image.dimensions();
        if w.max(h) / 2 < MIN_DIMENSION {
            log::warn!("Photo could not be compressed below {} bytes", limits.max_bytes);
            return Err(IntakeError::OverBudget {
                budget: limits.max_bytes,
            });
        }
        image = image.resize(w / 2, h / 2, FilterType::Triangle);
    }
}

/// Whether `value` looks like a URI produced by this module.
pub fn is_photo_data_uri(value: &str) -> bool {
    value
        .strip_prefix(DATA_URI_PREFIX)
        .map(|payload| !payload.is_empty() && B64.decode(payload).is_ok())
        .unwrap_or(false)
}

fn fit_within(image: DynamicImage, max_dimension: u32) -> DynamicImage {
    let (w, h) = image.dimensions();
    if max_dimension == 0 || w.max(h) <= max_dimension {
        return image;
    }
    image.resize(max_dimension, max_dimension, FilterType::Lanczos3)
}

fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>, IntakeError> {
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    rgb.write_with_encoder(encoder).map_err(IntakeError::Encode)?;
    Ok(buffer.into_inner())
}

fn base64_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}
