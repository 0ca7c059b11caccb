use std::sync::Arc;

use ratatui::layout::Rect;
use storybook_core::{AppConfig, Page, PageShape, Story};
use tracing::{debug, warn};

use crate::event::ImageLoadResult;
use crate::images::ImageStore;
use crate::input::Action;
use crate::motion::{PageTransition, ScrollAnimator, ScrollStep, TransitionFrame};
use crate::theme::Theme;

/// How many pages around the cursor get their images loaded ahead of time
pub const PRELOAD_RANGE: usize = 1;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Reading the story
    Normal,
    /// Help overlay
    Help,
}

/// Screen areas of the navigation controls from the last frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavHitboxes {
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
}

/// Application state
pub struct App {
    /// Classified pages, built once at startup
    pub story: Arc<Story>,
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    /// Index of the page being shown
    cursor: usize,
    pub mode: Mode,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Exit/enter animation between pages
    pub transition: PageTransition,
    /// Scroll position inside the letter page
    pub letter_scroll: ScrollAnimator,
    /// Letter viewport height and scroll limit, measured while rendering
    pub letter_viewport: u16,
    pub letter_max_scroll: u16,
    pub images: ImageStore,
    pub controls: NavHitboxes,
}

impl App {
    pub fn new(story: Arc<Story>, config: Arc<AppConfig>, theme: Theme) -> Self {
        let transition = PageTransition::new(config.ui.transition.clone());
        let letter_scroll = ScrollAnimator::new(config.ui.scroll.clone());
        Self {
            story,
            config,
            theme,
            cursor: 0,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            transition,
            letter_scroll,
            letter_viewport: 0,
            letter_max_scroll: 0,
            images: ImageStore::new(),
            controls: NavHitboxes::default(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn page_count(&self) -> usize {
        self.story.len()
    }

    /// The page at the cursor
    pub fn current_page(&self) -> &Page {
        &self.story.pages()[self.cursor]
    }

    /// "Prev" is offered only after the first page
    pub fn has_prev(&self) -> bool {
        self.cursor > 0
    }

    /// "Next" is offered only before the last page
    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.page_count()
    }

    /// Move to the next page; no-op on the last one
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.page_count() {
            self.go_to(self.cursor + 1);
            true
        } else {
            false
        }
    }

    /// Move to the previous page; no-op on the first one
    pub fn retreat(&mut self) -> bool {
        if self.cursor >= 1 {
            self.go_to(self.cursor - 1);
            true
        } else {
            false
        }
    }

    fn go_to(&mut self, index: usize) {
        let from = self.cursor;
        self.cursor = index;
        self.transition.start(from, index);
        self.letter_scroll.reset();
        self.status_message = None;
        debug!("Page {} -> {}", from, index);
    }

    /// Page and animation state to draw this frame
    pub fn displayed_frame(&self) -> TransitionFrame {
        self.transition.frame(self.cursor)
    }

    /// The page that is mounted right now (the outgoing one while exiting)
    pub fn displayed_page(&self) -> &Page {
        let frame = self.displayed_frame();
        self.story
            .get(frame.page_id)
            .unwrap_or_else(|| self.current_page())
    }

    fn current_is_letter(&self) -> bool {
        self.current_page().shape == PageShape::Letter
    }

    /// Whether the loop should poll at animation speed
    pub fn needs_fast_update(&self) -> bool {
        self.transition.is_animating() || self.letter_scroll.needs_update()
    }

    /// Advance animations; call once per frame
    pub fn update_animations(&mut self) {
        self.transition.update();
        self.letter_scroll.update(self.letter_max_scroll);
    }

    /// Apply an input action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextPage => {
                self.advance();
            }
            Action::PrevPage => {
                self.retreat();
            }
            Action::ScrollDown => self.scroll_letter(ScrollStep::Line, true),
            Action::ScrollUp => self.scroll_letter(ScrollStep::Line, false),
            Action::ScrollHalfPageDown => self.scroll_letter(ScrollStep::HalfPage, true),
            Action::ScrollHalfPageUp => self.scroll_letter(ScrollStep::HalfPage, false),
            Action::ScrollPageDown => self.scroll_letter(ScrollStep::Page, true),
            Action::ScrollPageUp => self.scroll_letter(ScrollStep::Page, false),
            Action::ShowHelp => self.mode = Mode::Help,
            Action::ExitMode => self.mode = Mode::Normal,
            _ => {}
        }
    }

    /// Scroll keys only move the letter, and only while it is the current page
    fn scroll_letter(&mut self, step: ScrollStep, down: bool) {
        if !self.current_is_letter() {
            return;
        }
        let (viewport, max_scroll) = (self.letter_viewport, self.letter_max_scroll);
        if down {
            self.letter_scroll.scroll_down(step, viewport, max_scroll);
        } else {
            self.letter_scroll.scroll_up(step, viewport, max_scroll);
        }
    }

    /// Image locators near the cursor that have not been requested yet.
    /// Returned locators are marked as loading.
    pub fn take_pending_image_loads(&mut self) -> Vec<String> {
        let start = self.cursor.saturating_sub(PRELOAD_RANGE);
        let end = (self.cursor + PRELOAD_RANGE).min(self.page_count().saturating_sub(1));

        // Current page first so it is decoded before its neighbours
        let mut order: Vec<usize> = vec![self.cursor];
        order.extend((start..=end).filter(|&i| i != self.cursor));

        let mut pending = Vec::new();
        for index in order {
            let Some(page) = self.story.get(index) else {
                continue;
            };
            for locator in page.image_locators() {
                if self.images.start_loading(locator) {
                    pending.push(locator.to_string());
                }
            }
        }
        pending
    }

    /// Store the outcome of a background image load
    pub fn handle_image_result(&mut self, result: ImageLoadResult) {
        match result {
            ImageLoadResult::Success { locator, image } => {
                debug!("Loaded image {}", locator);
                self.images.set_loaded(&locator, image);
            }
            ImageLoadResult::Failure { locator, error } => {
                warn!("Failed to load image {}: {}", locator, error);
                self.set_status(format!("Could not load {}", locator));
                self.images.set_failed(&locator, error);
            }
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
