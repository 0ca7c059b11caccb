//! Smooth scrolling for the letter page
//!
//! Key presses only queue a movement. `update()` runs once per frame,
//! folds everything queued since the last frame into a new target row and
//! eases the visible row toward it. Holding a key therefore produces one
//! continuous glide that keeps extending, rather than a backlog of short
//! animations. With smooth scrolling off, movement is applied on the spot.

use std::time::Instant;

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::EasingTypeExt;
use super::timing::{lerp_u16, progress};

/// How far one scroll key moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStep {
    Line,
    HalfPage,
    Page,
}

impl ScrollStep {
    fn rows(self, viewport: u16, line_rows: u16) -> i32 {
        let rows = match self {
            ScrollStep::Line => line_rows,
            ScrollStep::HalfPage => viewport / 2,
            ScrollStep::Page => viewport,
        };
        rows.max(1) as i32
    }
}

/// An eased move between two rows
#[derive(Debug, Clone, Copy)]
struct Glide {
    start: Instant,
    from: u16,
    to: u16,
}

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    config: ScrollConfig,
    /// Row shown at the top of the viewport
    position: u16,
    glide: Option<Glide>,
    /// Rows queued since the last `update()`
    queued: i32,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            position: 0,
            glide: None,
            queued: 0,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.glide.is_some()
    }

    /// Whether the next frame has work to do
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.glide.is_some() || self.queued != 0
    }

    /// Row the current glide ends on
    pub fn target_scroll(&self) -> u16 {
        self.glide.map_or(self.position, |glide| glide.to)
    }

    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.position
    }

    pub fn scroll_down(&mut self, step: ScrollStep, viewport: u16, max_scroll: u16) {
        let rows = step.rows(viewport, self.line_rows());
        self.move_by(rows, max_scroll);
    }

    pub fn scroll_up(&mut self, step: ScrollStep, viewport: u16, max_scroll: u16) {
        let rows = step.rows(viewport, self.line_rows());
        self.move_by(-rows, max_scroll);
    }

    /// Rows per line step; smooth scrolling glides one row at a time
    fn line_rows(&self) -> u16 {
        if self.config.is_smooth() {
            1
        } else {
            self.config.scroll_lines
        }
    }

    fn move_by(&mut self, rows: i32, max_scroll: u16) {
        if self.config.is_smooth() {
            self.queued += rows;
        } else {
            self.position = clamp_row(self.position as i32 + rows, max_scroll);
            self.glide = None;
        }
    }

    /// Advance one frame and return the row to draw
    pub fn update(&mut self, max_scroll: u16) -> u16 {
        if self.queued != 0 {
            let to = clamp_row(self.target_scroll() as i32 + self.queued, max_scroll);
            self.queued = 0;
            self.glide = (to != self.position).then(|| Glide {
                start: Instant::now(),
                from: self.position,
                to,
            });
        }

        self.position = match self.glide {
            Some(glide) => {
                let t = progress(glide.start, self.config.animation_duration());
                if t >= 1.0 {
                    self.glide = None;
                    glide.to
                } else {
                    lerp_u16(glide.from, glide.to, self.config.easing.apply(t))
                }
            }
            None => self.position,
        }
        .min(max_scroll);

        self.position
    }

    /// Back to the top with nothing queued (used when the page changes)
    pub fn reset(&mut self) {
        self.position = 0;
        self.glide = None;
        self.queued = 0;
    }
}

fn clamp_row(row: i32, max_scroll: u16) -> u16 {
    row.clamp(0, max_scroll as i32) as u16
}
