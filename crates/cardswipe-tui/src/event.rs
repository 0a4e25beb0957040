use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

use crate::scroll::{ScrollConfig, ScrollConfigExt};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    animation_tick: Duration,
}

impl EventHandler {
    /// Idle polling at `tick_rate_ms`, faster polling at the scroll
    /// animation frame rate while the strip is moving
    pub fn with_animation_fps(tick_rate_ms: u64, scroll: &ScrollConfig) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_tick: scroll.animation_tick_duration(),
        }
    }

    fn timeout(&self, animating: bool) -> Duration {
        if animating {
            self.animation_tick.min(self.tick_rate)
        } else {
            self.tick_rate
        }
    }

    /// Poll for the next event. `animating` selects the fast tick.
    pub fn next(&self, animating: bool) -> Result<Option<AppEvent>> {
        if event::poll(self.timeout(animating))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse press/release/drag; presses stand in for touches
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_tick_follows_scroll_fps() {
        let scroll = ScrollConfig {
            animation_fps: 50,
            ..Default::default()
        };
        let handler = EventHandler::with_animation_fps(100, &scroll);
        assert_eq!(handler.timeout(false), Duration::from_millis(100));
        assert_eq!(handler.timeout(true), Duration::from_millis(20));
    }

    #[test]
    fn test_slow_animation_never_slows_idle_tick() {
        let scroll = ScrollConfig {
            animation_fps: 5,
            ..Default::default()
        };
        let handler = EventHandler::with_animation_fps(100, &scroll);
        assert_eq!(handler.timeout(true), Duration::from_millis(100));

        let unset = ScrollConfig {
            animation_fps: 0,
            ..Default::default()
        };
        let handler = EventHandler::with_animation_fps(100, &unset);
        assert_eq!(handler.timeout(true), Duration::from_millis(16));
    }
}
