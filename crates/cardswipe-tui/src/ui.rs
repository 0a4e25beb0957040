use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use crate::widgets::{CardStripWidget, FallbackWidget, IndicatorsWidget, StatusBarWidget};

/// Draw one frame and remember where the interactive areas ended up
pub fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    // Main layout: content + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);

    if !app.carousel.shows_carousel() {
        app.indicator_area = Default::default();
        app.strip_area = Default::default();
        FallbackWidget::render(frame, main_layout[0], app);
        StatusBarWidget::render(frame, main_layout[1], app);
        return;
    }

    // Indicators above the cards, one blank row either side
    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1), // Indicators
            Constraint::Length(1),
            Constraint::Min(3), // Card strip
        ])
        .split(main_layout[0]);

    app.indicator_area = content[1];
    app.strip_area = content[3];

    IndicatorsWidget::render(frame, content[1], app);
    CardStripWidget::render(frame, content[3], app);
    StatusBarWidget::render(frame, main_layout[1], app);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cardswipe_core::{AppConfig, Deck};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;
    use crate::input::Action;
    use crate::theme::Theme;

    fn render(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    fn screen_text(buffer: &Buffer) -> String {
        (0..buffer.area.height)
            .map(|y| row_text(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app(config: AppConfig, width: u16, height: u16) -> App {
        App::new(Arc::new(config), Deck::sample(), Theme::default(), width, height).unwrap()
    }

    #[test]
    fn test_draws_first_card_and_indicators() {
        let mut app = app(AppConfig::default(), 60, 20);
        let buffer = render(&mut app, 60, 20);
        let text = screen_text(&buffer);
        assert!(text.contains("Sunrise"));
        assert!(text.contains("March 5, 2020"));
        assert_eq!(row_text(&buffer, 1).matches('▬').count(), 10);
        assert!(row_text(&buffer, 19).contains("Card 1/5"));
        assert_eq!(app.indicator_area.y, 1);
        assert_eq!(app.strip_area.y, 3);
    }

    #[test]
    fn test_draws_selected_card_after_jump() {
        let mut config = AppConfig::default();
        config.ui.scroll.smooth_enabled = false;
        let mut app = app(config, 60, 20);
        app.apply(Action::Indicator(2));
        let text = screen_text(&render(&mut app, 60, 20));
        assert!(text.contains("Desert"));
        assert!(text.contains("Card 3/5"));
    }

    #[test]
    fn test_fallback_when_wider_than_breakpoint() {
        let mut config = AppConfig::default();
        config.carousel.mobile_breakpoint = Some(40);
        let mut app = app(config, 60, 10);
        let text = screen_text(&render(&mut app, 60, 10));
        assert!(text.contains(FallbackWidget::MESSAGE));
        assert!(!text.contains("Sunrise"));
        assert_eq!(app.strip_area, Default::default());
    }

    #[test]
    fn test_status_bar_shows_ignored_swipe_message() {
        let mut app = app(AppConfig::default(), 60, 20);
        render(&mut app, 60, 20);
        app.apply(Action::SwipeBackward);
        let buffer = render(&mut app, 60, 20);
        let status = row_text(&buffer, 19);
        assert!(status.contains("Already at the first card"));
        assert!(!status.contains("Card 1/5"));
    }
}
