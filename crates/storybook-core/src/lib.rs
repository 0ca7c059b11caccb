pub mod classifier;
pub mod config;
pub mod error;
pub mod page;
pub mod story;

pub use classifier::{classify, classify_all};
pub use config::{AppConfig, EasingType, ScrollConfig, TransitionConfig};
pub use error::{Error, Result};
pub use page::{Emphasis, ImageRef, Page, PageFormat, PageShape, Tone};
pub use story::Story;
