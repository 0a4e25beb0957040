use std::sync::Arc;

use cardswipe_core::carousel::{IgnoreReason, Outcome, ScrollSurface, ViewportSignals};
use cardswipe_core::{AppConfig, Carousel, Deck};
use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::input::Action;
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Carousel state machine, mounted on the scroll animator
    pub carousel: Carousel<ScrollAnimator>,
    /// Width/orientation tracker fed by terminal resizes
    pub signals: ViewportSignals,
    pub theme: Theme,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Shown in the status bar instead of the card counter until the next move
    pub status_message: Option<String>,
    /// Result of the most recent carousel event
    pub last_outcome: Option<Outcome>,
    /// Where the indicator row was last drawn (for mouse hit testing)
    pub indicator_area: Rect,
    /// Where the card strip was last drawn
    pub strip_area: Rect,
}

impl App {
    /// Build the app for a `width x height` terminal
    pub fn new(
        config: Arc<AppConfig>,
        deck: Deck,
        theme: Theme,
        width: u16,
        height: u16,
    ) -> cardswipe_core::Result<Self> {
        let mut carousel = Carousel::new(deck, config.carousel.clone(), f64::from(width))?;
        carousel.mount(ScrollAnimator::new(config.ui.scroll.clone()));
        info!(cards = carousel.len(), width, height, "Carousel mounted");

        Ok(Self {
            carousel,
            signals: ViewportSignals::new(width, height),
            theme,
            should_quit: false,
            status_message: None,
            last_outcome: None,
            indicator_area: Rect::default(),
            strip_area: Rect::default(),
            config,
        })
    }

    /// Visible strip offset (columns scrolled from the first card)
    pub fn scroll_offset(&self) -> f64 {
        self.carousel
            .surface()
            .map(|s| s.scroll_left())
            .unwrap_or_default()
    }

    pub fn is_animating(&self) -> bool {
        self.carousel
            .surface()
            .map(|s| s.is_animating())
            .unwrap_or(false)
    }

    /// Advance the scroll animation; call once per frame before drawing
    pub fn update_scroll_animation(&mut self) -> f64 {
        self.carousel
            .surface_mut()
            .map(|s| s.update())
            .unwrap_or_default()
    }

    /// Terminal resized: forward width/orientation signals to the carousel
    pub fn on_resize(&mut self, width: u16, height: u16) {
        for signal in self.signals.observe(width, height) {
            let outcome = self.carousel.on_viewport_signal(signal);
            self.record(outcome);
        }
    }

    /// Apply an input action
    pub fn apply(&mut self, action: Action) {
        let outcome = match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::None => return,
            // Hidden behind the fallback message; nothing on screen to move
            _ if !self.carousel.shows_carousel() => {
                debug!(?action, "Carousel hidden, input dropped");
                self.set_status("Narrow the terminal to use the carousel");
                return;
            }
            Action::TouchStart(x) => self.carousel.on_touch_start(x),
            Action::TouchEnd(x) => self.carousel.on_touch_end(x),
            Action::Indicator(index) => self.carousel.on_indicator_activated(index),
            Action::SwipeBackward => self.synthetic_swipe(1.0),
            Action::SwipeForward => self.synthetic_swipe(-1.0),
        };
        self.record(outcome);
    }

    /// Keyboard swipe: a touch pair centred on the strip, `sign` > 0 moving right
    fn synthetic_swipe(&mut self, sign: f64) -> Outcome {
        let center = f64::from(self.strip_area.x) + f64::from(self.strip_area.width) / 2.0;
        let step = self.config.carousel.swipe_step.max(f64::EPSILON);
        self.carousel.on_touch_start(center);
        self.carousel.on_touch_end(center + sign * step)
    }

    fn record(&mut self, outcome: Outcome) {
        debug!(%outcome, selected = self.carousel.selected(), "Carousel event");
        match outcome {
            Outcome::Anchored { .. } => return,
            Outcome::Moved { .. } | Outcome::Reset { .. } | Outcome::Recomputed { .. } => {
                self.clear_status()
            }
            Outcome::Ignored { reason } => {
                if let Some(message) = ignored_message(reason) {
                    self.set_status(message);
                }
            }
        }
        self.last_outcome = Some(outcome);
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

/// Status text for ignored events the user should notice
fn ignored_message(reason: IgnoreReason) -> Option<&'static str> {
    match reason {
        IgnoreReason::AtFirstCard => Some("Already at the first card"),
        IgnoreReason::AtLastCard => Some("Already at the last card"),
        IgnoreReason::OutOfRange => Some("No card for that indicator"),
        IgnoreReason::NoMovement | IgnoreReason::NoAnchor | IgnoreReason::Unmounted => None,
    }
}
