//! Scroll commands and the host surface they are applied to.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the host applies a scroll command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Absolute horizontal scroll target handed to the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollCommand {
    pub left: f64,
    pub behavior: ScrollBehavior,
}

/// Scrollable viewport owned by the host.
///
/// Commands are fire-and-forget: the host may still be animating a previous
/// command when the next one arrives.
pub trait ScrollSurface {
    /// Current horizontal scroll offset
    fn scroll_left(&self) -> f64;

    /// Apply a scroll command
    fn scroll_to(&mut self, command: ScrollCommand);
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for Box<S> {
    fn scroll_left(&self) -> f64 {
        (**self).scroll_left()
    }

    fn scroll_to(&mut self, command: ScrollCommand) {
        (**self).scroll_to(command)
    }
}

/// Issues scroll commands with a fixed animation behavior.
/// Never touches the selected index.
#[derive(Debug, Clone, Copy)]
pub struct ScrollDriver {
    behavior: ScrollBehavior,
}

impl ScrollDriver {
    pub fn new(behavior: ScrollBehavior) -> Self {
        Self { behavior }
    }

    pub fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    /// Scroll by `delta` relative to the surface's current offset
    pub fn scroll_by<S: ScrollSurface + ?Sized>(&self, surface: &mut S, delta: f64) -> ScrollCommand {
        let command = ScrollCommand {
            left: surface.scroll_left() + delta,
            behavior: self.behavior,
        };
        debug!(delta, left = command.left, "Issuing scroll");
        surface.scroll_to(command);
        command
    }

    /// Scroll the distance between `current` and `target` card, returning the delta
    pub fn scroll_to_index<S: ScrollSurface + ?Sized>(
        &self,
        surface: &mut S,
        target: usize,
        current: usize,
        swipe_unit: f64,
    ) -> f64 {
        let delta = index_delta(target, current, swipe_unit);
        self.scroll_by(surface, delta);
        delta
    }

    /// Jump back to the start of the strip
    pub fn reset<S: ScrollSurface + ?Sized>(&self, surface: &mut S) {
        surface.scroll_to(ScrollCommand {
            left: 0.0,
            behavior: ScrollBehavior::Instant,
        });
    }
}

/// `swipe_unit * (target - current)`
#[inline]
pub fn index_delta(target: usize, current: usize, swipe_unit: f64) -> f64 {
    swipe_unit * (target as f64 - current as f64)
}

/// Surface without a renderer: applies every command immediately and keeps
/// a log of what it received. Used for headless replay.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    left: f64,
    commands: Vec<ScrollCommand>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[ScrollCommand] {
        &self.commands
    }

    pub fn last_command(&self) -> Option<&ScrollCommand> {
        self.commands.last()
    }
}

impl ScrollSurface for HeadlessSurface {
    fn scroll_left(&self) -> f64 {
        self.left
    }

    fn scroll_to(&mut self, command: ScrollCommand) {
        self.left = command.left;
        self.commands.push(command);
    }
}
