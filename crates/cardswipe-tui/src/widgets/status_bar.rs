use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let (status_text, status_fg) = if let Some(msg) = &app.status_message {
            (format!(" {}", msg), app.theme.warning)
        } else {
            let last = app
                .last_outcome
                .map(|o| format!(" | {}", o))
                .unwrap_or_default();
            let text = format!(
                " Card {}/{} | unit {:.1}{}",
                app.carousel.selected() + 1,
                app.carousel.len(),
                app.carousel.swipe_unit(),
                last
            );
            (text, app.theme.fg0)
        };

        let help_hint = " q:quit h/l:swipe 1-9:jump ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let bar = Style::default().bg(app.theme.bg2);
        let line = Line::from(vec![
            Span::styled(status_text, bar.fg(status_fg)),
            Span::styled(" ".repeat(padding_len), bar),
            Span::styled(help_hint, bar.fg(app.theme.grey2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
