//! Horizontal swipe interpretation.
//!
//! A gesture is a touch-start/touch-end pair. Only the horizontal coordinate
//! is compared; vertical motion never influences the result.

use tracing::trace;

/// Direction a finished gesture asks the carousel to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Finger moved right: show the previous card
    Backward,
    /// Finger moved left: show the next card
    Forward,
    /// No horizontal movement
    None,
}

impl Direction {
    /// Compare start and end x. Any nonzero delta counts.
    pub fn between(start_x: f64, end_x: f64) -> Self {
        if end_x > start_x {
            Direction::Backward
        } else if end_x < start_x {
            Direction::Forward
        } else {
            Direction::None
        }
    }

    /// Index step this direction applies (-1, +1 or 0)
    pub fn step(self) -> isize {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
            Direction::None => 0,
        }
    }
}

/// x coordinate captured at touch-start
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchAnchor {
    pub x: f64,
}

/// Turns touch-start/touch-end coordinates into a [`Direction`]
#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    anchor: Option<TouchAnchor>,
    min_distance: f64,
}

impl GestureInterpreter {
    /// `min_distance` of 0 accepts any nonzero movement
    pub fn new(min_distance: f64) -> Self {
        Self {
            anchor: None,
            min_distance: min_distance.max(0.0),
        }
    }

    /// True between a touch-start and its touch-end
    #[inline]
    pub fn is_touching(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<TouchAnchor> {
        self.anchor
    }

    /// Capture the anchor, replacing any previous one
    pub fn touch_start(&mut self, x: f64) {
        trace!(x, "touch start");
        self.anchor = Some(TouchAnchor { x });
    }

    /// Consume the anchor and decide the direction.
    /// Returns `None` when no touch-start preceded this call.
    pub fn touch_end(&mut self, x: f64) -> Option<Direction> {
        let anchor = self.anchor.take()?;
        let delta = x - anchor.x;
        trace!(start = anchor.x, end = x, delta, "touch end");

        if self.min_distance > 0.0 && delta.abs() < self.min_distance {
            return Some(Direction::None);
        }
        Some(Direction::between(anchor.x, x))
    }

    /// Drop a live anchor without interpreting it
    pub fn cancel(&mut self) {
        self.anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_between() {
        assert_eq!(Direction::between(10.0, 20.0), Direction::Backward);
        assert_eq!(Direction::between(20.0, 10.0), Direction::Forward);
        assert_eq!(Direction::between(15.0, 15.0), Direction::None);
    }

    #[test]
    fn test_tiny_movement_counts_without_threshold() {
        assert_eq!(Direction::between(10.0, 10.001), Direction::Backward);
    }

    #[test]
    fn test_anchor_is_consumed() {
        let mut gesture = GestureInterpreter::new(0.0);
        gesture.touch_start(50.0);
        assert!(gesture.is_touching());
        assert_eq!(gesture.touch_end(10.0), Some(Direction::Forward));
        assert!(!gesture.is_touching());
        assert_eq!(gesture.touch_end(10.0), None);
    }

    #[test]
    fn test_new_touch_start_overwrites_anchor() {
        let mut gesture = GestureInterpreter::new(0.0);
        gesture.touch_start(50.0);
        gesture.touch_start(5.0);
        assert_eq!(gesture.anchor(), Some(TouchAnchor { x: 5.0 }));
        assert_eq!(gesture.touch_end(10.0), Some(Direction::Backward));
    }

    #[test]
    fn test_threshold_filters_jitter() {
        let mut gesture = GestureInterpreter::new(3.0);
        gesture.touch_start(10.0);
        assert_eq!(gesture.touch_end(12.0), Some(Direction::None));
        gesture.touch_start(10.0);
        assert_eq!(gesture.touch_end(13.0), Some(Direction::Backward));
    }

    #[test]
    fn test_cancel_clears_anchor() {
        let mut gesture = GestureInterpreter::new(0.0);
        gesture.touch_start(1.0);
        gesture.cancel();
        assert_eq!(gesture.touch_end(0.0), None);
    }
}
