//! Turns the two parallel story arrays into classified pages.
//!
//! The second-to-last page is always the letter. Pages without images are
//! notes, list-valued references become grids and everything else is a
//! single picture. Three fixed offsets from the end get footer emphasis.

use tracing::debug;

use crate::error::{Error, Result};
use crate::page::{Emphasis, ImageRef, Page, PageShape, Tone};

/// Classify the page at index `i`.
///
/// Precondition: `texts.len() == image_refs.len()` and `i < texts.len()`.
/// Use [`classify_all`] for a checked conversion.
pub fn classify(i: usize, texts: &[String], image_refs: &[ImageRef]) -> Page {
    let n = texts.len();

    let shape = if n.checked_sub(2) == Some(i) {
        PageShape::Letter
    } else if image_refs[i].is_empty() {
        PageShape::Note { tone: Tone::Soft }
    } else {
        match &image_refs[i] {
            ImageRef::Many(images) if images.len() > 1 => PageShape::Grid {
                images: images.clone(),
            },
            // A one-item list draws nothing but keeps its caption
            ImageRef::Many(_) => PageShape::Blank,
            ImageRef::Single(image) => PageShape::Single {
                image: image.clone(),
            },
        }
    };

    // Applied regardless of shape, even where the footer is hidden
    let emphasis = if n.checked_sub(6) == Some(i) {
        Some(Emphasis::Semibold)
    } else if n.checked_sub(5) == Some(i) {
        Some(Emphasis::Bold)
    } else if n.checked_sub(4) == Some(i) {
        Some(Emphasis::ExtraBold)
    } else {
        None
    };

    Page {
        id: i,
        text: texts[i].clone(),
        shape,
        emphasis,
    }
}

/// Classify every page, validating the parallel arrays first
pub fn classify_all(texts: &[String], image_refs: &[ImageRef]) -> Result<Vec<Page>> {
    if texts.len() != image_refs.len() {
        return Err(Error::InvalidInput(format!(
            "{} page texts but {} image references",
            texts.len(),
            image_refs.len()
        )));
    }
    if texts.len() < 2 {
        return Err(Error::InvalidInput(format!(
            "a story needs at least 2 pages, got {}",
            texts.len()
        )));
    }

    let pages: Vec<Page> = (0..texts.len())
        .map(|i| classify(i, texts, image_refs))
        .collect();

    debug!("Classified {} pages", pages.len());
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageFormat;

    fn texts(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("page {}", i)).collect()
    }

    fn singles(n: usize) -> Vec<ImageRef> {
        (0..n).map(|i| ImageRef::from(format!("{}.png", i).as_str())).collect()
    }

    #[test]
    fn test_example_story() {
        let texts: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        let refs = vec![
            ImageRef::from(""),
            ImageRef::from("img1.png"),
            ImageRef::from(vec!["a.png", "b.png"]),
            ImageRef::from("img2.png"),
        ];
        let pages = classify_all(&texts, &refs).unwrap();

        assert_eq!(pages[0].shape, PageShape::Note { tone: Tone::Soft });
        assert_eq!(pages[0].text, "A");
        assert_eq!(
            pages[1].shape,
            PageShape::Single {
                image: "img1.png".to_string()
            }
        );
        assert_eq!(pages[1].text, "B");
        assert_eq!(pages[2].shape, PageShape::Letter);
        assert_eq!(pages[2].text, "C");
        assert_eq!(
            pages[3].shape,
            PageShape::Single {
                image: "img2.png".to_string()
            }
        );
        assert_eq!(pages[3].text, "D");
    }

    #[test]
    fn test_ids_are_source_order() {
        for n in 2..12 {
            let pages = classify_all(&texts(n), &singles(n)).unwrap();
            assert_eq!(pages.len(), n);
            for (i, page) in pages.iter().enumerate() {
                assert_eq!(page.id, i);
            }
        }
    }

    #[test]
    fn test_exactly_one_letter_at_penultimate() {
        for n in 2..12 {
            let mut refs = singles(n);
            // Letter wins over a list reference too
            refs[n - 2] = ImageRef::from(vec!["x.png", "y.png"]);
            let pages = classify_all(&texts(n), &refs).unwrap();
            let letters: Vec<usize> = pages
                .iter()
                .filter(|p| p.format() == Some(PageFormat::Letter))
                .map(|p| p.id)
                .collect();
            assert_eq!(letters, vec![n - 2]);
            assert!(pages[n - 2].is_text_only());
        }
    }

    #[test]
    fn test_text_only_iff_empty_or_letter() {
        let n = 7;
        let refs = vec![
            ImageRef::from(""),
            ImageRef::Many(Vec::new()),
            ImageRef::from("a.png"),
            ImageRef::from(vec!["b.png", "c.png", "d.png"]),
            ImageRef::from(vec!["e.png"]),
            ImageRef::from("f.png"),
            ImageRef::from(""),
        ];
        let pages = classify_all(&texts(n), &refs).unwrap();
        for (i, page) in pages.iter().enumerate() {
            let expected = refs[i].is_empty() || i == n - 2;
            assert_eq!(page.is_text_only(), expected, "page {}", i);
        }
        assert_eq!(pages[1].format(), Some(PageFormat::Note));
        assert!(matches!(pages[3].shape, PageShape::Grid { ref images } if images.len() == 3));
        assert_eq!(pages[4].shape, PageShape::Blank);
    }

    #[test]
    fn test_emphasis_offsets_n10() {
        let pages = classify_all(&texts(10), &singles(10)).unwrap();
        for page in &pages {
            let expected = match page.id {
                4 => Some(Emphasis::Semibold),
                5 => Some(Emphasis::Bold),
                6 => Some(Emphasis::ExtraBold),
                _ => None,
            };
            assert_eq!(page.emphasis, expected, "page {}", page.id);
        }
    }

    #[test]
    fn test_emphasis_kept_on_text_only_pages() {
        // n = 6: offsets 0, 1, 2 and letter at 4
        let mut refs = singles(6);
        refs[0] = ImageRef::from("");
        let pages = classify_all(&texts(6), &refs).unwrap();
        assert!(pages[0].is_text_only());
        assert_eq!(pages[0].emphasis, Some(Emphasis::Semibold));
        assert_eq!(pages[1].emphasis, Some(Emphasis::Bold));
        assert_eq!(pages[2].emphasis, Some(Emphasis::ExtraBold));
        assert_eq!(pages[4].shape, PageShape::Letter);

        // n = 2: the ExtraBold offset would be negative; only the letter applies
        let pages = classify_all(&texts(2), &singles(2)).unwrap();
        assert!(pages.iter().all(|p| p.emphasis.is_none()));
        assert_eq!(pages[0].shape, PageShape::Letter);
    }

    #[test]
    fn test_invalid_input() {
        let err = classify_all(&texts(3), &singles(2)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = classify_all(&texts(1), &singles(1)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = classify_all(&[], &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
