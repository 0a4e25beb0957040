use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use cardswipe_core::CardItem;

use crate::app::App;

/// Horizontal strip of cards, shifted by the current scroll offset
pub struct CardStripWidget;

impl CardStripWidget {
    /// Card width as a fraction of the strip
    const CARD_FRACTION: f64 = 0.80;
    /// Strip padding (7.5%) plus the first card's left margin (2.5%)
    const LEADING_INSET: f64 = 0.10;

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        frame.render_widget(
            Block::default().style(Style::default().bg(app.theme.bg0)),
            area,
        );

        let offset = app.scroll_offset();
        let unit = app.carousel.swipe_unit();
        let selected = app.carousel.selected();

        for (i, card) in app.carousel.cards().iter().enumerate() {
            if let Some(rect) = Self::card_rect(area, i, unit, offset) {
                Self::render_card(frame, rect, card, i == selected, app);
            }
        }
    }

    /// Visible part of card `index`, or None when it is scrolled out of view
    pub fn card_rect(area: Rect, index: usize, unit: f64, offset: f64) -> Option<Rect> {
        let width = f64::from(area.width);
        let left = f64::from(area.x) + width * Self::LEADING_INSET + index as f64 * unit - offset;
        let right = left + width * Self::CARD_FRACTION;

        let clip_left = left.round().max(f64::from(area.x));
        let clip_right = right.round().min(f64::from(area.x) + width);
        if clip_right <= clip_left {
            return None;
        }

        // Leave the last row for the shadow
        let height = area.height.saturating_sub(1);
        if height == 0 {
            return None;
        }
        Some(Rect::new(
            clip_left as u16,
            area.y,
            (clip_right - clip_left) as u16,
            height,
        ))
    }

    fn render_card(frame: &mut Frame, rect: Rect, card: &CardItem, selected: bool, app: &App) {
        let (bg, fg) = app
            .theme
            .card_colors(&card.colors.background, &card.colors.foreground);

        let border_style = if selected {
            Style::default().fg(app.theme.accent)
        } else {
            Style::default().fg(app.theme.card_shadow)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(bg).fg(fg));

        let inner_width = rect.width.saturating_sub(2) as usize;
        let lines = vec![
            Line::from(Span::styled(
                truncate_to_width(&format!("[ {} ]", card.image_source), inner_width),
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::default(),
            Line::from(Span::styled(
                card.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(card.description.clone()),
            Line::default(),
            Line::from(Span::styled(
                card.display_date(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, rect);
    }
}

/// Truncate to a display width with an ellipsis
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
