use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::classifier::classify_all;
use crate::error::{Error, Result};
use crate::page::{ImageRef, Page};

/// On-disk story manifest: two parallel arrays plus an optional title
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoryManifest {
    #[serde(default)]
    pub title: Option<String>,
    pub texts: Vec<String>,
    pub images: Vec<ImageRef>,
}

impl StoryManifest {
    /// Parse a manifest, picking the format from the file extension
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("toml") => Ok(toml::from_str(content)?),
            Some("json") => Ok(serde_json::from_str(content)?),
            other => Err(Error::UnsupportedFormat(format!(
                "{} (expected .toml or .json, got {:?})",
                path.display(),
                other
            ))),
        }
    }
}

/// The classified, immutable page list for one session
#[derive(Debug, Clone)]
pub struct Story {
    pub title: Option<String>,
    pages: Vec<Page>,
}

impl Story {
    /// Build a story from the parallel arrays
    pub fn from_parts(texts: &[String], images: &[ImageRef]) -> Result<Self> {
        Ok(Self {
            title: None,
            pages: classify_all(texts, images)?,
        })
    }

    /// Load a manifest from disk; relative image paths resolve against its directory
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let manifest = StoryManifest::parse(&content, path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

        let images: Vec<ImageRef> = manifest
            .images
            .iter()
            .map(|r| resolve_image_ref(base_dir, r))
            .collect();

        let mut story = Self::from_parts(&manifest.texts, &images)?;
        story.title = manifest.title;

        info!("Loaded story {} with {} pages", path.display(), story.len());
        Ok(story)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Index of the letter page (always the second-to-last)
    pub fn letter_index(&self) -> usize {
        self.pages.len().saturating_sub(2)
    }
}

fn resolve_image_ref(base_dir: &Path, image_ref: &ImageRef) -> ImageRef {
    match image_ref {
        ImageRef::Single(s) if s.is_empty() => image_ref.clone(),
        ImageRef::Single(s) => ImageRef::Single(resolve_locator(base_dir, s)),
        ImageRef::Many(v) => {
            ImageRef::Many(v.iter().map(|s| resolve_locator(base_dir, s)).collect())
        }
    }
}

/// Keep http(s) URLs, turn file URLs and relative paths into absolute paths
pub fn resolve_locator(base_dir: &Path, locator: &str) -> String {
    if let Ok(url) = Url::parse(locator) {
        match url.scheme() {
            "http" | "https" => return locator.to_string(),
            "file" => {
                if let Ok(path) = url.to_file_path() {
                    return path.to_string_lossy().into_owned();
                }
            }
            // Windows drive letters parse as a one-letter scheme
            _ => {}
        }
    }

    let path = PathBuf::from(locator);
    if path.is_absolute() {
        locator.to_string()
    } else {
        let resolved = base_dir.join(path);
        debug!("Resolved image {} -> {}", locator, resolved.display());
        resolved.to_string_lossy().into_owned()
    }
}

/// True when a locator has to be fetched over the network
pub fn is_remote(locator: &str) -> bool {
    Url::parse(locator)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}
