use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Row of position markers, one per card
pub struct IndicatorsWidget;

impl IndicatorsWidget {
    const CELL: &'static str = "▬▬";
    const CELL_WIDTH: u16 = 2;
    const GAP: u16 = 1;

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let states = app.carousel.indicators();
        let rects = Self::layout(area, states.len());
        let Some(first) = rects.first() else {
            return;
        };

        let mut spans = vec![Span::raw(" ".repeat((first.x - area.x) as usize))];
        for (i, active) in states.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(Self::GAP as usize)));
            }
            let color = if *active {
                app.theme.indicator_active
            } else {
                app.theme.indicator_inactive
            };
            spans.push(Span::styled(Self::CELL, Style::default().fg(color)));
        }

        let row = Rect::new(area.x, area.y, area.width, area.height.min(1));
        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(app.theme.bg0)),
            row,
        );
    }

    /// Cell of each indicator, centred on the first row of `area`.
    /// Indicators that do not fit are left out.
    pub fn layout(area: Rect, count: usize) -> Vec<Rect> {
        if count == 0 || area.height == 0 {
            return Vec::new();
        }
        let stride = Self::CELL_WIDTH + Self::GAP;
        let fitting = ((area.width + Self::GAP) / stride) as usize;
        let count = count.min(fitting);
        if count == 0 {
            return Vec::new();
        }

        let total = count as u16 * stride - Self::GAP;
        let start = area.x + (area.width - total) / 2;
        (0..count as u16)
            .map(|i| Rect::new(start + i * stride, area.y, Self::CELL_WIDTH, 1))
            .collect()
    }

    /// Index of the indicator under (`column`, `row`)
    pub fn hit_test(area: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
        Self::layout(area, count).iter().position(|r| {
            row == r.y && column >= r.x && column < r.x + r.width
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_centered() {
        let rects = IndicatorsWidget::layout(Rect::new(0, 0, 20, 1), 3);
        // 3 cells of 2 with 2 gaps = 8 wide, (20 - 8) / 2 = 6
        assert_eq!(rects[0], Rect::new(6, 0, 2, 1));
        assert_eq!(rects[2], Rect::new(12, 0, 2, 1));
    }

    #[test]
    fn test_layout_drops_what_does_not_fit() {
        assert_eq!(IndicatorsWidget::layout(Rect::new(0, 0, 5, 1), 10).len(), 2);
        assert!(IndicatorsWidget::layout(Rect::new(0, 0, 1, 1), 3).is_empty());
    }

    #[test]
    fn test_hit_test() {
        let area = Rect::new(0, 4, 20, 1);
        assert_eq!(IndicatorsWidget::hit_test(area, 3, 7, 4), Some(0));
        assert_eq!(IndicatorsWidget::hit_test(area, 3, 9, 4), Some(1));
        assert_eq!(IndicatorsWidget::hit_test(area, 3, 8, 4), None); // gap
        assert_eq!(IndicatorsWidget::hit_test(area, 3, 9, 5), None); // wrong row
    }
}
