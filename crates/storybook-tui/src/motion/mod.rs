//! Animation for the storybook view
//!
//! Page changes play an exit then an enter transition (fade + slide), and
//! the letter page scrolls smoothly. Both share the same easing and timing
//! helpers.
//!
//! ```ignore
//! use storybook_tui::motion::PageTransition;
//!
//! let mut transition = PageTransition::new(config.ui.transition.clone());
//! transition.start(outgoing_id, incoming_id);
//!
//! // In the main loop, once per frame
//! transition.update();
//! let frame = transition.frame(cursor);
//! ```

pub mod config;
pub mod easing;
pub mod timing;

pub mod scroll;
pub mod transition;

pub use config::{ScrollConfigExt, TransitionConfigExt};
pub use easing::{EasingType, EasingTypeExt};
pub use scroll::{ScrollAnimator, ScrollStep};
pub use transition::{PageTransition, Phase, TransitionFrame};
