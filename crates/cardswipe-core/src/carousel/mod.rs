//! Swipeable card carousel state machine.
//!
//! A [`Carousel`] owns the selected index, the gesture interpreter and the
//! viewport geometry, and drives a host [`ScrollSurface`]. Every event that
//! moves the strip updates the index and issues the scroll inside the same
//! `&mut self` call, so state and visible position cannot be split by
//! another event.
//!
//! ```ignore
//! let mut carousel = Carousel::new(Deck::sample(), config.carousel.clone(), 400.0)?;
//! carousel.mount(HeadlessSurface::new());
//! carousel.on_touch_start(200.0);
//! carousel.on_touch_end(120.0); // Outcome::Moved { from: 0, to: 1, delta: 340.0 }
//! ```

mod gesture;
mod index;
mod indicator;
mod scroll;
mod viewport;

pub use gesture::{Direction, GestureInterpreter, TouchAnchor};
pub use index::IndexState;
pub use indicator::{indicator_states, IndicatorTarget};
pub use scroll::{index_delta, HeadlessSurface, ScrollBehavior, ScrollCommand, ScrollDriver, ScrollSurface};
pub use viewport::{Orientation, Viewport, ViewportSignal, ViewportSignals};

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::config::CarouselConfig;
use crate::deck::{CardItem, Deck};

/// Why an event left the carousel unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Gesture ended where it started
    NoMovement,
    /// Backward swipe on the first card
    AtFirstCard,
    /// Forward swipe on the last card
    AtLastCard,
    /// Touch-end without a preceding touch-start
    NoAnchor,
    /// No scroll surface mounted yet
    Unmounted,
    /// Indicator target outside the deck
    OutOfRange,
}

/// Result of feeding one event to the carousel
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Touch anchor captured
    Anchored { x: f64 },
    /// Selection moved and a scroll of `delta` was issued
    Moved { from: usize, to: usize, delta: f64 },
    /// Width change: selection and scroll back at the start
    Reset { width: f64 },
    /// Orientation change: swipe unit recomputed
    Recomputed { swipe_unit: f64 },
    Ignored { reason: IgnoreReason },
}

impl Outcome {
    fn ignored(reason: IgnoreReason) -> Self {
        debug!(?reason, "Carousel event ignored");
        Outcome::Ignored { reason }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Anchored { x } => write!(f, "anchored at x={}", x),
            Outcome::Moved { from, to, delta } => {
                write!(f, "moved {} -> {} (scroll {:+})", from, to, delta)
            }
            Outcome::Reset { width } => write!(f, "reset (width {})", width),
            Outcome::Recomputed { swipe_unit } => write!(f, "swipe unit {}", swipe_unit),
            Outcome::Ignored { reason } => write!(f, "ignored ({:?})", reason),
        }
    }
}

/// Carousel widget state, generic over the host scroll surface
#[derive(Debug)]
pub struct Carousel<S> {
    deck: Deck,
    config: CarouselConfig,
    index: IndexState,
    gesture: GestureInterpreter,
    driver: ScrollDriver,
    viewport: Viewport,
    surface: Option<S>,
}

impl<S: ScrollSurface> Carousel<S> {
    /// Create an unmounted carousel over `deck`
    pub fn new(deck: Deck, config: CarouselConfig, viewport_width: f64) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self {
            index: IndexState::new(deck.len()),
            gesture: GestureInterpreter::new(config.min_swipe_distance),
            driver: ScrollDriver::new(config.animation),
            viewport: Viewport::new(viewport_width),
            surface: None,
            deck,
            config,
        })
    }

    /// Attach the host surface. Scroll-issuing events are no-ops until then.
    pub fn mount(&mut self, surface: S) {
        self.surface = Some(surface);
    }

    /// Detach and return the host surface
    pub fn unmount(&mut self) -> Option<S> {
        self.gesture.cancel();
        self.surface.take()
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn cards(&self) -> &[CardItem] {
        self.deck.cards()
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Currently selected card index
    pub fn selected(&self) -> usize {
        self.index.current()
    }

    pub fn selected_card(&self) -> Option<&CardItem> {
        self.deck.get(self.index.current())
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Scroll distance of one card for the latest viewport width
    pub fn swipe_unit(&self) -> f64 {
        self.viewport.swipe_unit(self.config.swipe_fraction)
    }

    pub fn is_touching(&self) -> bool {
        self.gesture.is_touching()
    }

    /// Active flag for each indicator
    pub fn indicators(&self) -> Vec<bool> {
        indicator_states(self.index.current(), self.deck.len())
    }

    /// False when a mobile breakpoint is configured and the viewport exceeds it
    pub fn shows_carousel(&self) -> bool {
        self.viewport.is_mobile(self.config.mobile_breakpoint)
    }

    /// Idle -> Touching
    pub fn on_touch_start(&mut self, x: f64) -> Outcome {
        if self.surface.is_none() {
            return Outcome::ignored(IgnoreReason::Unmounted);
        }
        self.gesture.touch_start(x);
        Outcome::Anchored { x }
    }

    /// Touching -> Idle, applying the swipe if the bounds allow it
    pub fn on_touch_end(&mut self, x: f64) -> Outcome {
        let unit = self.swipe_unit();
        let Some(surface) = self.surface.as_mut() else {
            self.gesture.cancel();
            return Outcome::ignored(IgnoreReason::Unmounted);
        };
        let Some(direction) = self.gesture.touch_end(x) else {
            return Outcome::ignored(IgnoreReason::NoAnchor);
        };

        let from = self.index.current();
        let to = match direction {
            Direction::None => return Outcome::ignored(IgnoreReason::NoMovement),
            Direction::Backward if self.index.is_first() => {
                return Outcome::ignored(IgnoreReason::AtFirstCard)
            }
            Direction::Forward if self.index.is_last() => {
                return Outcome::ignored(IgnoreReason::AtLastCard)
            }
            Direction::Backward => from - 1,
            Direction::Forward => from + 1,
        };

        let delta = direction.step() as f64 * unit;
        self.driver.scroll_by(surface, delta);
        self.index.set(to);
        debug!(from, to, delta, "Swiped");
        Outcome::Moved { from, to, delta }
    }

    /// Jump to the card an indicator points at
    pub fn on_indicator_activated(&mut self, target: usize) -> Outcome {
        self.on_indicator_target(IndicatorTarget::Index(target))
    }

    /// Indicator activation carrying a raw, possibly malformed, target attribute
    pub fn on_indicator_attribute(&mut self, raw: Option<&str>) -> Outcome {
        self.on_indicator_target(IndicatorTarget::parse(raw))
    }

    pub fn on_indicator_target(&mut self, target: IndicatorTarget) -> Outcome {
        let unit = self.swipe_unit();
        let Some(surface) = self.surface.as_mut() else {
            return Outcome::ignored(IgnoreReason::Unmounted);
        };
        let to = target.index();
        if !self.index.contains(to) {
            return Outcome::ignored(IgnoreReason::OutOfRange);
        }

        let from = self.index.current();
        let delta = self.driver.scroll_to_index(surface, to, from, unit);
        self.index.set(to);
        debug!(from, to, delta, "Indicator activated");
        Outcome::Moved { from, to, delta }
    }

    /// Width changed: back to the first card and the start of the strip
    pub fn on_viewport_width_change(&mut self, width: f64) -> Outcome {
        self.viewport.set_width(width);
        self.index.reset();
        if let Some(surface) = self.surface.as_mut() {
            self.driver.reset(surface);
        }
        debug!(width, "Carousel reset after width change");
        Outcome::Reset { width }
    }

    /// Orientation changed: only the swipe unit follows the latest width
    pub fn on_orientation_change(&mut self, width: f64) -> Outcome {
        self.viewport.set_width(width);
        Outcome::Recomputed {
            swipe_unit: self.swipe_unit(),
        }
    }

    /// Dispatch a viewport signal to the matching handler
    pub fn on_viewport_signal(&mut self, signal: ViewportSignal) -> Outcome {
        match signal {
            ViewportSignal::WidthChanged(width) => self.on_viewport_width_change(width),
            ViewportSignal::OrientationChanged { width, .. } => self.on_orientation_change(width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(width: f64) -> Carousel<HeadlessSurface> {
        let mut carousel =
            Carousel::new(Deck::sample(), CarouselConfig::default(), width).unwrap();
        carousel.mount(HeadlessSurface::new());
        carousel
    }

    fn swipe<S: ScrollSurface>(carousel: &mut Carousel<S>, from_x: f64, to_x: f64) -> Outcome {
        carousel.on_touch_start(from_x);
        carousel.on_touch_end(to_x)
    }

    fn offset(carousel: &Carousel<HeadlessSurface>) -> f64 {
        carousel.surface().map(|s| s.scroll_left()).unwrap_or_default()
    }

    #[test]
    fn test_forward_backward_and_indicator_scenario() {
        let mut c = carousel(400.0);
        assert!((c.swipe_unit() - 340.0).abs() < 1e-9);
        c.on_indicator_activated(2);

        let moved = swipe(&mut c, 200.0, 100.0);
        assert_eq!(moved, Outcome::Moved { from: 2, to: 3, delta: 340.0 });

        let moved = swipe(&mut c, 100.0, 200.0);
        assert_eq!(moved, Outcome::Moved { from: 3, to: 2, delta: -340.0 });

        swipe(&mut c, 200.0, 100.0);
        assert_eq!(c.selected(), 3);
        let moved = c.on_indicator_activated(0);
        assert_eq!(moved, Outcome::Moved { from: 3, to: 0, delta: -1020.0 });
        assert_eq!(c.selected(), 0);
        assert!(offset(&c).abs() < 1e-9);
    }

    #[test]
    fn test_backward_on_first_card_is_noop() {
        let mut c = carousel(400.0);
        let outcome = swipe(&mut c, 10.0, 300.0);
        assert_eq!(outcome, Outcome::Ignored { reason: IgnoreReason::AtFirstCard });
        assert_eq!(c.selected(), 0);
        assert!(c.surface().unwrap().commands().is_empty());
    }

    #[test]
    fn test_forward_on_last_card_is_noop() {
        let mut c = carousel(400.0);
        c.on_indicator_activated(4);
        let before = offset(&c);
        let outcome = swipe(&mut c, 300.0, 10.0);
        assert_eq!(outcome, Outcome::Ignored { reason: IgnoreReason::AtLastCard });
        assert_eq!(c.selected(), 4);
        assert_eq!(offset(&c), before);
    }

    #[test]
    fn test_equal_coordinates_do_nothing() {
        let mut c = carousel(400.0);
        assert_eq!(
            swipe(&mut c, 50.0, 50.0),
            Outcome::Ignored { reason: IgnoreReason::NoMovement }
        );
    }

    #[test]
    fn test_touch_end_without_start() {
        let mut c = carousel(400.0);
        assert_eq!(
            c.on_touch_end(20.0),
            Outcome::Ignored { reason: IgnoreReason::NoAnchor }
        );
        assert!(!c.is_touching());
    }

    #[test]
    fn test_unmounted_events_are_noops() {
        let mut c: Carousel<HeadlessSurface> =
            Carousel::new(Deck::sample(), CarouselConfig::default(), 400.0).unwrap();
        let unmounted = Outcome::Ignored { reason: IgnoreReason::Unmounted };
        assert_eq!(c.on_touch_start(100.0), unmounted);
        assert_eq!(c.on_touch_end(10.0), unmounted);
        assert_eq!(c.on_indicator_activated(3), unmounted);
        assert_eq!(c.selected(), 0);
        assert!(!c.is_touching());
    }

    #[test]
    fn test_unmount_drops_live_anchor() {
        let mut c = carousel(400.0);
        c.on_touch_start(100.0);
        let surface = c.unmount();
        assert!(surface.is_some());
        c.mount(HeadlessSurface::new());
        assert_eq!(
            c.on_touch_end(10.0),
            Outcome::Ignored { reason: IgnoreReason::NoAnchor }
        );
    }

    #[test]
    fn test_out_of_range_indicator_rejected() {
        let mut c = carousel(400.0);
        c.on_indicator_activated(1);
        assert_eq!(
            c.on_indicator_activated(5),
            Outcome::Ignored { reason: IgnoreReason::OutOfRange }
        );
        assert_eq!(c.selected(), 1);
    }

    #[test]
    fn test_malformed_indicator_goes_to_first_card() {
        let mut c = carousel(400.0);
        c.on_indicator_activated(3);
        let outcome = c.on_indicator_attribute(Some("oops"));
        assert_eq!(outcome, Outcome::Moved { from: 3, to: 0, delta: -1020.0 });
    }

    #[test]
    fn test_indicator_on_current_card_scrolls_zero() {
        let mut c = carousel(400.0);
        assert_eq!(
            c.on_indicator_activated(0),
            Outcome::Moved { from: 0, to: 0, delta: 0.0 }
        );
    }

    #[test]
    fn test_width_change_resets_everything() {
        let mut c = carousel(400.0);
        c.on_indicator_activated(3);
        assert_eq!(c.on_viewport_width_change(600.0), Outcome::Reset { width: 600.0 });
        assert_eq!(c.selected(), 0);
        assert_eq!(offset(&c), 0.0);
        assert!((c.swipe_unit() - 510.0).abs() < 1e-9);
    }

    #[test]
    fn test_orientation_change_keeps_selection() {
        let mut c = carousel(400.0);
        c.on_indicator_activated(2);
        let before = offset(&c);
        let outcome = c.on_orientation_change(200.0);
        assert_eq!(outcome, Outcome::Recomputed { swipe_unit: 170.0 });
        assert_eq!(c.selected(), 2);
        assert_eq!(offset(&c), before);
    }

    #[test]
    fn test_rotation_signals_apply_in_order() {
        let mut c = carousel(40.0);
        c.on_indicator_activated(2);
        let mut signals = ViewportSignals::new(40, 50);
        let outcomes: Vec<Outcome> = signals
            .observe(100, 30)
            .into_iter()
            .map(|s| c.on_viewport_signal(s))
            .collect();
        assert!(matches!(outcomes[0], Outcome::Recomputed { .. }));
        assert_eq!(outcomes[1], Outcome::Reset { width: 100.0 });
        assert_eq!(c.selected(), 0);
    }

    #[test]
    fn test_mobile_gate() {
        let config = CarouselConfig {
            mobile_breakpoint: Some(60),
            ..Default::default()
        };
        let mut c: Carousel<HeadlessSurface> =
            Carousel::new(Deck::sample(), config, 50.0).unwrap();
        assert!(c.shows_carousel());
        c.on_viewport_width_change(61.0);
        assert!(!c.shows_carousel());
    }

    #[test]
    fn test_indicators_follow_selection() {
        let mut c = carousel(400.0);
        swipe(&mut c, 100.0, 0.0);
        assert_eq!(c.indicators(), vec![false, true, false, false, false]);
    }

    #[test]
    fn test_min_swipe_distance_filters_jitter() {
        let config = CarouselConfig {
            min_swipe_distance: 5.0,
            ..Default::default()
        };
        let mut c = Carousel::new(Deck::sample(), config, 400.0).unwrap();
        c.mount(HeadlessSurface::new());
        assert_eq!(
            swipe(&mut c, 100.0, 98.0),
            Outcome::Ignored { reason: IgnoreReason::NoMovement }
        );
        assert!(matches!(swipe(&mut c, 100.0, 90.0), Outcome::Moved { to: 1, .. }));
    }

    #[test]
    fn test_selection_never_leaves_deck() {
        // Deterministic pseudo-random event sequence over several deck sizes
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed
        };

        for len in 1..=6usize {
            let cards: Vec<CardItem> = Deck::sample().cards().iter().cycle().take(len).cloned().collect();
            let mut c = Carousel::new(Deck::new(cards).unwrap(), CarouselConfig::default(), 400.0)
                .unwrap();
            c.mount(HeadlessSurface::new());

            for _ in 0..500 {
                match next() % 5 {
                    0 => {
                        c.on_touch_start((next() % 400) as f64);
                    }
                    1 => {
                        c.on_touch_end((next() % 400) as f64);
                    }
                    2 => {
                        c.on_indicator_activated((next() % 8) as usize);
                    }
                    3 => {
                        c.on_viewport_width_change((next() % 800) as f64);
                    }
                    _ => {
                        c.on_orientation_change((next() % 800) as f64);
                    }
                }
                assert!(c.selected() < c.len(), "len {} selected {}", len, c.selected());
                assert_eq!(c.indicators().iter().filter(|a| **a).count(), 1);
            }
        }
    }

    /// Surface whose visible offset lags behind the commands it receives,
    /// like a host still animating the previous scroll.
    #[derive(Default)]
    struct LaggingSurface {
        visible: f64,
        commands: Vec<ScrollCommand>,
    }

    impl ScrollSurface for LaggingSurface {
        fn scroll_left(&self) -> f64 {
            self.visible
        }

        fn scroll_to(&mut self, command: ScrollCommand) {
            self.commands.push(command);
        }
    }

    #[test]
    fn test_in_flight_scroll_is_not_cancelled() {
        // Accepted race: the second swipe is issued immediately, relative to
        // the offset the host reports mid-animation.
        let mut c = Carousel::new(Deck::sample(), CarouselConfig::default(), 400.0).unwrap();
        c.mount(LaggingSurface::default());
        swipe(&mut c, 200.0, 100.0);
        swipe(&mut c, 200.0, 100.0);
        assert_eq!(c.selected(), 2);
        let lefts: Vec<f64> = c.surface().unwrap().commands.iter().map(|c| c.left).collect();
        assert_eq!(lefts, vec![340.0, 340.0]);
    }
}
