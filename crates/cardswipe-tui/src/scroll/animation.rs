//! Scroll animation controller for the card strip
//!
//! Combines easing and timing to move the strip's horizontal offset. The
//! animator is the carousel's [`ScrollSurface`]: `scroll_left` reports the
//! offset currently on screen, exactly like a browser's `scrollLeft` in the
//! middle of a smooth scroll.

use std::time::{Duration, Instant};

use cardswipe_core::carousel::{ScrollBehavior, ScrollCommand, ScrollSurface};
use tracing::trace;

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete_at, lerp, progress_at};

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Horizontal scroll animator
///
/// Commands start (or retarget) an animation from the offset currently on
/// screen. Call `update()` each frame to advance it.
#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current: f64,
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current: 0.0,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Final offset once the running animation settles
    pub fn target(&self) -> f64 {
        self.animation.as_ref().map(|a| a.to).unwrap_or(self.current)
    }

    /// Offset currently on screen
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Jump immediately, dropping any running animation
    pub fn set(&mut self, offset: f64) {
        self.animation = None;
        self.current = offset.max(0.0);
    }

    /// Animate from the visible offset to `target` starting at `now`.
    /// A running animation is replaced, not queued.
    pub fn animate_to(&mut self, target: f64, now: Instant) {
        let target = target.max(0.0);

        if !self.config.is_smooth() {
            self.set(target);
            return;
        }
        if (self.current - target).abs() < f64::EPSILON {
            self.animation = None;
            return;
        }

        trace!(from = self.current, to = target, "Starting scroll animation");
        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Advance the animation and return the visible offset
    pub fn update(&mut self) -> f64 {
        self.update_at(Instant::now())
    }

    pub fn update_at(&mut self, now: Instant) -> f64 {
        if let Some(ref anim) = self.animation {
            if is_complete_at(anim.start, anim.duration, now) {
                self.current = anim.to;
                self.animation = None;
            } else {
                let t = anim.easing.apply(progress_at(anim.start, anim.duration, now));
                self.current = lerp(anim.from, anim.to, t);
            }
        }
        self.current
    }
}

impl ScrollSurface for ScrollAnimator {
    fn scroll_left(&self) -> f64 {
        self.current
    }

    fn scroll_to(&mut self, command: ScrollCommand) {
        match self.config.effective_behavior(command.behavior) {
            ScrollBehavior::Smooth => self.animate_to(command.left, Instant::now()),
            ScrollBehavior::Instant => self.set(command.left),
        }
    }
}
