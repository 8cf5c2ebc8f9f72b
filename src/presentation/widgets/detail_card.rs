use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use crate::{domain::catalog::DetailCard, presentation::text::wrap_words};

const CARD_TEXT: Color = Color::Rgb(0x16, 0x16, 0x16);

/// A titled blurb on its own tinted background
#[derive(Debug, Clone)]
pub struct DetailCardWidget<'a> {
    card: &'a DetailCard,
}

impl<'a> DetailCardWidget<'a> {
    pub fn new(card: &'a DetailCard) -> Self {
        Self { card }
    }

    /// Body lines once wrapped inside the card borders
    pub fn body_lines(&self, width: u16) -> Vec<String> {
        wrap_words(self.card.body, usize::from(width.saturating_sub(4)))
    }

    /// Rows needed to show the whole card at `width`
    pub fn height(&self, width: u16) -> u16 {
        self.body_lines(width).len() as u16 + 2
    }

    /// Cards one under the other; whatever does not fit is cut off
    pub fn render_stack(cards: &[DetailCard], area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        for card in cards {
            if y >= area.bottom() {
                break;
            }
            let widget = DetailCardWidget::new(card);
            let height = widget.height(area.width).min(area.bottom() - y);
            widget.render(Rect::new(area.x, y, area.width, height), buf);
            y += height;
        }
    }
}

impl Widget for DetailCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(CARD_TEXT).bg(self.card.background);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(Span::styled(self.card.title, style.bold()))
            .style(style);
        let lines: Vec<Line> = self
            .body_lines(area.width)
            .into_iter()
            .map(|line| Line::from(format!(" {line}")))
            .collect();
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::catalog::STEPS;

    #[test]
    fn test_height_grows_with_wrapping() {
        let card = &STEPS[0].details[0];
        let widget = DetailCardWidget::new(card);
        assert_eq!(widget.height(200), 3);
        assert!(widget.height(20) > 3);
    }

    #[test]
    fn test_render_shows_title_and_body() {
        let card = &STEPS[0].details[1];
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        DetailCardWidget::new(card).render(area, &mut buf);

        let top: String = (0..60).map(|x| buf[(x, 0)].symbol()).collect();
        let body: String = (0..60).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(top.contains("Profondeur"), "{top}");
        assert!(body.contains("Variable selon la zone"), "{body}");
        assert_eq!(buf[(5, 1)].bg, card.background);
    }

    #[test]
    fn test_render_stack_places_cards_in_order() {
        let cards = STEPS[4].details;
        let area = Rect::new(0, 0, 200, 20);
        let mut buf = Buffer::empty(area);
        DetailCardWidget::render_stack(cards, area, &mut buf);

        let row = |y: u16| -> String { (0..200).map(|x| buf[(x, y)].symbol()).collect() };
        assert!(row(0).contains(cards[0].title));
        assert!(row(3).contains(cards[1].title));
        assert!(row(6).contains(cards[2].title));
    }
}
