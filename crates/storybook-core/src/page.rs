use serde::{Deserialize, Serialize};

/// A picture grid has 2x2 cells; images past the fourth are not shown
pub const GRID_CELLS: usize = 4;

/// Raw per-page image reference as supplied by a story manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    /// One image locator (an empty string means "no image")
    Single(String),
    /// Ordered list of image locators (an empty list means "no image")
    Many(Vec<String>),
}

impl ImageRef {
    /// An empty string and an empty list both mark a page without images
    pub fn is_empty(&self) -> bool {
        match self {
            ImageRef::Single(s) => s.is_empty(),
            ImageRef::Many(v) => v.is_empty(),
        }
    }

    /// Every locator held by this reference, in order
    pub fn locators(&self) -> Vec<&str> {
        match self {
            ImageRef::Single(s) if s.is_empty() => Vec::new(),
            ImageRef::Single(s) => vec![s.as_str()],
            ImageRef::Many(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for ImageRef {
    fn default() -> Self {
        ImageRef::Single(String::new())
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        ImageRef::Single(s.to_string())
    }
}

impl From<Vec<&str>> for ImageRef {
    fn from(v: Vec<&str>) -> Self {
        ImageRef::Many(v.into_iter().map(str::to_string).collect())
    }
}

/// Emphasis hint for a text-only page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Soft,
    Dramatic,
}

/// Footer text weight hint for the pages just before the ending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Emphasis {
    Semibold,
    Bold,
    ExtraBold,
}

impl std::fmt::Display for Emphasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Emphasis::Semibold => write!(f, "semibold"),
            Emphasis::Bold => write!(f, "bold"),
            Emphasis::ExtraBold => write!(f, "extra-bold"),
        }
    }
}

/// Text template of a text-only page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    Note,
    Letter,
}

/// What a page shows; each variant carries only the data its layout needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageShape {
    /// Full-bleed, scrollable, left-aligned text
    Letter,
    /// Centered text card
    Note { tone: Tone },
    /// 2x2 image grid
    Grid { images: Vec<String> },
    /// One full-bleed image
    Single { image: String },
    /// Nothing in the content area (a one-image list)
    Blank,
}

impl std::fmt::Display for PageShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageShape::Letter => write!(f, "letter"),
            PageShape::Note { .. } => write!(f, "note"),
            PageShape::Grid { images } => write!(f, "grid({})", images.len()),
            PageShape::Single { .. } => write!(f, "image"),
            PageShape::Blank => write!(f, "blank"),
        }
    }
}

/// One classified, immutable page of a story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: usize,
    pub text: String,
    pub shape: PageShape,
    pub emphasis: Option<Emphasis>,
}

impl Page {
    /// True for pages without any image content (notes and the letter)
    pub fn is_text_only(&self) -> bool {
        matches!(self.shape, PageShape::Letter | PageShape::Note { .. })
    }

    /// Text template for text-only pages
    pub fn format(&self) -> Option<PageFormat> {
        match self.shape {
            PageShape::Letter => Some(PageFormat::Letter),
            PageShape::Note { .. } => Some(PageFormat::Note),
            _ => None,
        }
    }

    pub fn tone(&self) -> Option<Tone> {
        match self.shape {
            PageShape::Note { tone } => Some(tone),
            _ => None,
        }
    }

    /// Whether the caption footer is drawn under the content
    pub fn shows_footer(&self) -> bool {
        !self.is_text_only()
    }

    /// Image locators this page displays
    pub fn image_locators(&self) -> Vec<&str> {
        match &self.shape {
            PageShape::Grid { images } => images
                .iter()
                .take(GRID_CELLS)
                .map(String::as_str)
                .collect(),
            PageShape::Single { image } => vec![image.as_str()],
            _ => Vec::new(),
        }
    }

    /// First line of the text, cut to `max_len` characters
    pub fn text_preview(&self, max_len: usize) -> String {
        let first = self.text.lines().next().unwrap_or("");
        if first.chars().count() <= max_len {
            first.to_string()
        } else {
            let cut: String = first.chars().take(max_len.saturating_sub(3)).collect();
            format!("{}...", cut)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(shape: PageShape) -> Page {
        Page {
            id: 0,
            text: "hello\nworld".to_string(),
            shape,
            emphasis: None,
        }
    }

    #[test]
    fn test_image_ref_empty() {
        assert!(ImageRef::from("").is_empty());
        assert!(ImageRef::Many(Vec::new()).is_empty());
        assert!(!ImageRef::from("a.png").is_empty());
        assert!(!ImageRef::from(vec!["a.png"]).is_empty());
    }

    #[test]
    fn test_image_ref_untagged_json() {
        let refs: Vec<ImageRef> =
            serde_json::from_str(r#"["", "a.png", ["b.png", "c.png"]]"#).unwrap();
        assert_eq!(refs[0], ImageRef::from(""));
        assert_eq!(refs[1], ImageRef::from("a.png"));
        assert_eq!(refs[2], ImageRef::from(vec!["b.png", "c.png"]));
    }

    #[test]
    fn test_text_only_and_footer() {
        let letter = page(PageShape::Letter);
        assert!(letter.is_text_only());
        assert!(!letter.shows_footer());
        assert_eq!(letter.format(), Some(PageFormat::Letter));

        let note = page(PageShape::Note { tone: Tone::Soft });
        assert!(note.is_text_only());
        assert_eq!(note.format(), Some(PageFormat::Note));
        assert_eq!(note.tone(), Some(Tone::Soft));

        let blank = page(PageShape::Blank);
        assert!(!blank.is_text_only());
        assert!(blank.shows_footer());
        assert_eq!(blank.format(), None);
    }

    #[test]
    fn test_grid_locators_stop_at_four() {
        let images: Vec<String> = (1..=5).map(|i| format!("{}.png", i)).collect();
        let grid = page(PageShape::Grid { images });
        assert_eq!(
            grid.image_locators(),
            vec!["1.png", "2.png", "3.png", "4.png"]
        );

        let single = page(PageShape::Single {
            image: "a.png".to_string(),
        });
        assert_eq!(single.image_locators(), vec!["a.png"]);
        assert!(page(PageShape::Blank).image_locators().is_empty());
    }

    #[test]
    fn test_text_preview() {
        let mut p = page(PageShape::Blank);
        assert_eq!(p.text_preview(20), "hello");
        p.text = "abcdefghij".to_string();
        assert_eq!(p.text_preview(6), "abc...");
    }
}
