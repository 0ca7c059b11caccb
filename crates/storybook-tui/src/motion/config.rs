//! Duration helpers over the animation configuration in storybook-core

use std::time::Duration;

pub use storybook_core::{ScrollConfig, TransitionConfig};

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    fn animation_duration(&self) -> Duration;

    /// Check if smooth scrolling is effectively enabled
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}

/// Extension trait for TransitionConfig with utility methods
pub trait TransitionConfigExt {
    /// Duration of one phase (exit or enter)
    fn phase_duration(&self) -> Duration;

    /// Tick duration while animating
    fn animation_tick_duration(&self) -> Duration;

    /// Check if page transitions actually animate
    fn is_animated(&self) -> bool;
}

impl TransitionConfigExt for TransitionConfig {
    #[inline]
    fn phase_duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn is_animated(&self) -> bool {
        self.enabled && self.duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transition() {
        let config = TransitionConfig::default();
        assert!(config.is_animated());
        assert_eq!(config.phase_duration(), Duration::from_millis(500));
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
    }

    #[test]
    fn test_is_animated() {
        let mut config = TransitionConfig::default();
        config.enabled = false;
        assert!(!config.is_animated());

        config.enabled = true;
        config.duration_ms = 0;
        assert!(!config.is_animated());
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        assert!(config.is_smooth());
        config.smooth_enabled = false;
        assert!(!config.is_smooth());
    }
}
