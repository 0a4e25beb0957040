//! Viewport width and orientation signals.
//!
//! Orientation is reported on its own channel: some hosts change orientation
//! without a distinct resize, and a single host resize may produce both
//! signals.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Terminal cells are roughly twice as tall as wide, so a grid of
    /// `width x height` cells is landscape once `width >= 2 * height`.
    pub fn from_cells(width: u16, height: u16) -> Self {
        if u32::from(width) >= 2 * u32::from(height) {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Notification produced by [`ViewportSignals::observe`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportSignal {
    WidthChanged(f64),
    OrientationChanged { orientation: Orientation, width: f64 },
}

/// Tracks the last seen viewport size and turns host resizes into signals
#[derive(Debug, Clone)]
pub struct ViewportSignals {
    width: u16,
    height: u16,
    orientation: Orientation,
}

impl ViewportSignals {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            orientation: Orientation::from_cells(width, height),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Record a new size. Orientation is reported before the width change
    /// so the width reset is the last thing applied.
    pub fn observe(&mut self, width: u16, height: u16) -> Vec<ViewportSignal> {
        let mut signals = Vec::new();
        let orientation = Orientation::from_cells(width, height);

        if orientation != self.orientation {
            debug!(?orientation, width, height, "Orientation changed");
            self.orientation = orientation;
            signals.push(ViewportSignal::OrientationChanged {
                orientation,
                width: f64::from(width),
            });
        }
        if width != self.width {
            debug!(from = self.width, to = width, "Viewport width changed");
            signals.push(ViewportSignal::WidthChanged(f64::from(width)));
        }

        self.width = width;
        self.height = height;
        signals
    }
}

/// Current viewport width and the quantities derived from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
}

impl Viewport {
    pub fn new(width: f64) -> Self {
        Self {
            width: width.max(0.0),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width.max(0.0);
    }

    /// Scroll distance of one card. Positive whenever the width is.
    pub fn swipe_unit(&self, fraction: f64) -> f64 {
        self.width * fraction
    }

    /// Whether the carousel should be shown under the given breakpoint
    pub fn is_mobile(&self, breakpoint: Option<u16>) -> bool {
        match breakpoint {
            Some(max) => self.width <= f64::from(max),
            None => true,
        }
    }
}
