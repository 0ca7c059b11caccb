//! Page change animation
//!
//! The outgoing page fades out while sliding left; only after it is gone
//! does the incoming page fade in from the right. Exactly one page is drawn
//! at any moment.

use std::time::{Duration, Instant};

use super::config::{TransitionConfig, TransitionConfigExt};
use super::easing::EasingTypeExt;
use super::timing::{lerp, progress_at};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Exiting,
    Entering,
}

#[derive(Debug, Clone)]
struct ActiveTransition {
    phase: Phase,
    start: Instant,
    outgoing: usize,
    incoming: usize,
    /// Where the exit starts from; a fully shown page unless interrupted mid-enter
    exit_from_opacity: f64,
    exit_from_offset: f64,
}

impl ActiveTransition {
    fn exit(outgoing: usize, incoming: usize, now: Instant) -> Self {
        Self {
            phase: Phase::Exiting,
            start: now,
            outgoing,
            incoming,
            exit_from_opacity: 1.0,
            exit_from_offset: 0.0,
        }
    }
}

/// What to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    /// Id of the page that is mounted right now
    pub page_id: usize,
    pub phase: Option<Phase>,
    /// 0.0 (invisible) to 1.0 (fully drawn)
    pub opacity: f64,
    /// Horizontal shift in columns (negative = left)
    pub offset: i16,
}

impl TransitionFrame {
    pub fn settled(page_id: usize) -> Self {
        Self {
            page_id,
            phase: None,
            opacity: 1.0,
            offset: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageTransition {
    config: TransitionConfig,
    active: Option<ActiveTransition>,
}

impl PageTransition {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Begin a change from `outgoing` to `incoming`
    pub fn start(&mut self, outgoing: usize, incoming: usize) {
        self.start_at(outgoing, incoming, Instant::now());
    }

    pub fn start_at(&mut self, outgoing: usize, incoming: usize, now: Instant) {
        if !self.config.is_animated() {
            self.active = None;
            return;
        }

        let current = self.frame_at(outgoing, now);
        self.active = match self.active.take() {
            // Still leaving: keep the exit going, just retarget
            Some(mut active) if active.phase == Phase::Exiting => {
                active.incoming = incoming;
                (active.outgoing != incoming).then_some(active)
            }
            // Mid-enter: the entering page leaves from where it is now
            Some(active) => Some(ActiveTransition {
                exit_from_opacity: current.opacity,
                exit_from_offset: current.offset as f64,
                ..ActiveTransition::exit(active.incoming, incoming, now)
            }),
            None if outgoing == incoming => None,
            None => Some(ActiveTransition::exit(outgoing, incoming, now)),
        };
    }

    /// Advance phases; call once per frame
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    pub fn update_at(&mut self, now: Instant) {
        let duration = self.config.phase_duration();
        let mut finished = false;

        if let Some(active) = self.active.as_mut() {
            if now.saturating_duration_since(active.start) >= duration {
                match active.phase {
                    Phase::Exiting => {
                        active.phase = Phase::Entering;
                        active.start = now;
                    }
                    Phase::Entering => finished = true,
                }
            }
        }

        if finished {
            self.active = None;
        }
    }

    /// Frame to draw now; `current` is the committed cursor
    pub fn frame(&self, current: usize) -> TransitionFrame {
        self.frame_at(current, Instant::now())
    }

    pub fn frame_at(&self, current: usize, now: Instant) -> TransitionFrame {
        let Some(active) = &self.active else {
            return TransitionFrame::settled(current);
        };

        let elapsed = now.saturating_duration_since(active.start);
        let t = self
            .config
            .easing
            .apply(progress_at(elapsed, self.config.phase_duration()));
        let slide = self.config.slide_columns as f64;

        match active.phase {
            Phase::Exiting => TransitionFrame {
                page_id: active.outgoing,
                phase: Some(Phase::Exiting),
                opacity: active.exit_from_opacity * (1.0 - t),
                offset: lerp(active.exit_from_offset, -slide, t).round() as i16,
            },
            Phase::Entering => TransitionFrame {
                page_id: active.incoming,
                phase: Some(Phase::Entering),
                opacity: t,
                offset: lerp(slide, 0.0, t).round() as i16,
            },
        }
    }

    pub fn tick_duration(&self) -> Duration {
        self.config.animation_tick_duration()
    }
}
