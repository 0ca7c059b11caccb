//! Easing curves shared by page transitions and letter scrolling
//!
//! Each curve maps linear progress in [0, 1] to eased progress in [0, 1],
//! starting at 0 and ending at exactly 1. Apart from `None` and `Linear`
//! they all decelerate: motion starts quickly and settles gently.

pub use storybook_core::EasingType;

/// Evaluate an [`EasingType`] at a point in time
pub trait EasingTypeExt {
    /// Eased progress for linear progress `t` (clamped to [0, 1])
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let remaining = 1.0 - t;
        match self {
            // Holds the start value, then jumps when time is up
            EasingType::None if t < 1.0 => 0.0,
            EasingType::None => 1.0,
            EasingType::Linear => t,
            EasingType::Cubic => 1.0 - remaining.powi(3),
            EasingType::Quintic => 1.0 - remaining.powi(5),
            // 2^(-10t) never reaches zero, so pin the end point
            EasingType::EaseOut if t < 1.0 => 1.0 - (-10.0 * t).exp2(),
            EasingType::EaseOut => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [EasingType; 5] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_curves_end_at_one() {
        for curve in CURVES {
            assert!(close(curve.apply(1.0), 1.0), "{:?}", curve);
            assert!(close(curve.apply(7.0), 1.0), "{:?} past the end", curve);
        }
        for curve in &CURVES[1..] {
            assert!(close(curve.apply(0.0), 0.0), "{:?}", curve);
            assert!(close(curve.apply(-1.0), 0.0), "{:?} before the start", curve);
        }
    }

    #[test]
    fn test_midpoints() {
        assert!(close(EasingType::None.apply(0.5), 0.0));
        assert!(close(EasingType::Linear.apply(0.5), 0.5));
        assert!(close(EasingType::Cubic.apply(0.5), 0.875));
        assert!(close(EasingType::Quintic.apply(0.5), 0.96875));
        assert!(close(EasingType::EaseOut.apply(0.1), 0.5));
    }

    #[test]
    fn test_curves_never_move_backwards() {
        for curve in CURVES {
            let samples: Vec<f64> = (0..=20).map(|i| curve.apply(i as f64 / 20.0)).collect();
            assert!(
                samples.windows(2).all(|w| w[1] >= w[0]),
                "{:?} is not monotonic",
                curve
            );
        }
    }
}
