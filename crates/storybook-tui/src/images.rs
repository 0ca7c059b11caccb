//! Image cache and loaders for picture pages

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, RgbaImage};
use storybook_core::story::is_remote;

/// Image loading state
pub enum ImageState {
    Loading,
    Ready(Arc<DynamicImage>),
    Failed(String),
}

/// A decoded image resized for one cell size
struct Scaled {
    max_width: u32,
    max_height: u32,
    pixels: Arc<RgbaImage>,
}

/// Decoded images keyed by locator, shared by every page of the story
#[derive(Default)]
pub struct ImageStore {
    images: HashMap<String, ImageState>,
    /// Last resize per locator, reused while the cell size stays the same
    scaled: HashMap<String, Scaled>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self, locator: &str) -> bool {
        matches!(self.images.get(locator), Some(ImageState::Ready(_)))
    }

    pub fn is_loading(&self, locator: &str) -> bool {
        matches!(self.images.get(locator), Some(ImageState::Loading))
    }

    pub fn state(&self, locator: &str) -> Option<&ImageState> {
        self.images.get(locator)
    }

    pub fn get(&self, locator: &str) -> Option<Arc<DynamicImage>> {
        match self.images.get(locator) {
            Some(ImageState::Ready(image)) => Some(Arc::clone(image)),
            _ => None,
        }
    }

    /// Mark a locator as loading; false if it is already known
    pub fn start_loading(&mut self, locator: &str) -> bool {
        if self.images.contains_key(locator) {
            return false;
        }
        self.images.insert(locator.to_string(), ImageState::Loading);
        true
    }

    pub fn set_loaded(&mut self, locator: &str, image: DynamicImage) {
        self.images
            .insert(locator.to_string(), ImageState::Ready(Arc::new(image)));
    }

    pub fn set_failed(&mut self, locator: &str, error: String) {
        self.images
            .insert(locator.to_string(), ImageState::Failed(error));
    }

    /// The image resized to fit `max_width` x `max_height` pixels, aspect preserved
    pub fn scaled(&mut self, locator: &str, max_width: u32, max_height: u32) -> Option<Arc<RgbaImage>> {
        if max_width == 0 || max_height == 0 {
            return None;
        }
        if let Some(hit) = self.scaled.get(locator) {
            if hit.max_width == max_width && hit.max_height == max_height {
                return Some(Arc::clone(&hit.pixels));
            }
        }

        let image = self.get(locator)?;
        let (width, height) = fit_within(image.dimensions(), max_width, max_height);
        let pixels = Arc::new(
            image
                .resize_exact(width, height, FilterType::Triangle)
                .to_rgba8(),
        );
        self.scaled.insert(
            locator.to_string(),
            Scaled {
                max_width,
                max_height,
                pixels: Arc::clone(&pixels),
            },
        );
        Some(pixels)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Largest size with the image's aspect ratio that fits the box
pub fn fit_within((width, height): (u32, u32), max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (1, 1);
    }
    let scale_w = max_width as f32 / width as f32;
    let scale_h = max_height as f32 / height as f32;
    let scale = scale_w.min(scale_h);

    let new_width = ((width as f32 * scale) as u32).clamp(1, max_width.max(1));
    let new_height = ((height as f32 * scale) as u32).clamp(1, max_height.max(1));
    (new_width, new_height)
}

/// Fetch (remote) or read (local) an image and decode it
pub async fn load_image(locator: &str) -> Result<DynamicImage, String> {
    let bytes = if is_remote(locator) {
        download_with_reqwest(locator).await?
    } else {
        tokio::fs::read(Path::new(locator))
            .await
            .map_err(|e| format!("{}: {}", locator, e))?
    };

    tokio::task::spawn_blocking(move || decode_image_bytes(&bytes))
        .await
        .map_err(|e| format!("Task failed: {}", e))?
}

async fn download_with_reqwest(url: &str) -> Result<Vec<u8>, String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| format!("Client error: {}", e))?;

    let response = client
        .get(url)
        .header("Accept", "image/png,image/jpeg,image/gif,image/*;q=0.8")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| format!("Read error: {}", e))
}

/// Decode image bytes with format detection
pub fn decode_image_bytes(bytes: &[u8]) -> Result<DynamicImage, String> {
    if bytes.is_empty() {
        return Err("Empty data".to_string());
    }

    image::load_from_memory(bytes).map_err(|e| format!("Decode failed: {}", e))
}
