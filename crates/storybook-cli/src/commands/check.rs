use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use storybook_core::story::is_remote;
use storybook_core::Story;

const PREVIEW_LEN: usize = 40;

pub fn run(path: &Path) -> Result<()> {
    let story = Story::load(path).with_context(|| format!("invalid story {}", path.display()))?;
    debug!("Loaded {} pages from {}", story.len(), path.display());

    let title = story.title.as_deref().unwrap_or("(untitled)");
    println!("{} ({} pages)\n", title, story.len());

    let mut missing = 0;
    for page in story.pages() {
        let emphasis = page
            .emphasis
            .map(|e| e.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:>3}  {:<9} {:<11} {}",
            page.id,
            page.shape.to_string(),
            emphasis,
            page.text_preview(PREVIEW_LEN)
        );

        for locator in page.image_locators() {
            let marker = if is_remote(locator) || Path::new(locator).exists() {
                ""
            } else {
                missing += 1;
                warn!("Page {}: image not found: {}", page.id, locator);
                "  [MISSING]"
            };
            println!("         {}{}", locator, marker);
        }
    }

    if missing > 0 {
        println!("\n{} local image(s) not found; those cells will show an error.", missing);
    }

    Ok(())
}
