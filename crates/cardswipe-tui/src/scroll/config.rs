//! Scroll settings as the animator and event loop read them
//!
//! The settings live in cardswipe-core's `ui.scroll` config section; this
//! trait adds the `Duration` and behaviour views the TUI needs.

use std::time::Duration;

use cardswipe_core::carousel::ScrollBehavior;
pub use cardswipe_core::{EasingType, ScrollConfig};

/// Frame budget when `animation_fps` is 0
const FALLBACK_FRAME: Duration = Duration::from_millis(16);

pub trait ScrollConfigExt {
    /// Length of one smooth scroll
    fn animation_duration(&self) -> Duration;

    /// Poll interval while the strip is moving
    fn animation_tick_duration(&self) -> Duration;

    /// Smooth scrolling is on and takes a nonzero amount of time
    fn is_smooth(&self) -> bool;

    /// Behaviour actually applied to a carousel command. Smooth commands
    /// become instant jumps when smooth scrolling is off.
    fn effective_behavior(&self, requested: ScrollBehavior) -> ScrollBehavior;
}

impl ScrollConfigExt for ScrollConfig {
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    fn animation_tick_duration(&self) -> Duration {
        match self.animation_fps {
            0 => FALLBACK_FRAME,
            fps => Duration::from_millis(1000 / u64::from(fps)),
        }
    }

    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }

    fn effective_behavior(&self, requested: ScrollBehavior) -> ScrollBehavior {
        match requested {
            ScrollBehavior::Smooth if self.is_smooth() => ScrollBehavior::Smooth,
            _ => ScrollBehavior::Instant,
        }
    }
}
