use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// Shown instead of the carousel when the viewport is wider than the
/// configured mobile breakpoint
pub struct FallbackWidget;

impl FallbackWidget {
    pub const MESSAGE: &'static str = "Please adjust screen size to be mobile size";

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if area.height == 0 {
            return;
        }
        let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        frame.render_widget(
            Paragraph::new("").style(Style::default().bg(app.theme.bg0)),
            area,
        );
        frame.render_widget(
            Paragraph::new(Self::MESSAGE)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(app.theme.warning).bg(app.theme.bg0)),
            row,
        );
    }
}
