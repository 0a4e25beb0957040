use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::widgets::IndicatorsWidget;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    /// Finger down at column x
    TouchStart(f64),
    /// Finger up at column x
    TouchEnd(f64),
    /// Indicator for this card clicked
    Indicator(usize),
    SwipeBackward, // h / Left
    SwipeForward,  // l / Right
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Swipes
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::SwipeBackward,
        (KeyCode::Left, KeyModifiers::NONE) => Action::SwipeBackward,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::SwipeForward,
        (KeyCode::Right, KeyModifiers::NONE) => Action::SwipeForward,

        // Digits jump to an indicator (1-based)
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::Indicator(c as usize - '1' as usize)
        }

        _ => Action::None,
    }
}

/// Map a mouse event to an action.
///
/// A left press on the card strip starts a touch; the release ends it
/// wherever it lands. A release on the indicator row with no touch in
/// progress is an indicator click.
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    let x = f64::from(mouse.column);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if contains(app.strip_area, mouse.column, mouse.row) {
                Action::TouchStart(x)
            } else {
                Action::None
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if app.carousel.is_touching() {
                Action::TouchEnd(x)
            } else {
                IndicatorsWidget::hit_test(app.indicator_area, app.carousel.len(), mouse.column, mouse.row)
                    .map(Action::Indicator)
                    .unwrap_or(Action::None)
            }
        }
        _ => Action::None,
    }
}

fn contains(area: ratatui::layout::Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
