use ratatui::{prelude::*, widgets::Paragraph};

/// Bottom line: the pending status message if any, otherwise the key hints
/// of the mounted presenter
#[derive(Debug, Clone)]
pub struct StatusBarWidget<'a> {
    message: Option<&'a str>,
    hint: &'a str,
    message_style: Style,
    hint_style: Style,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<&'a str>, hint: &'a str) -> Self {
        Self {
            message,
            hint,
            message_style: Style::default(),
            hint_style: Style::default(),
        }
    }

    pub fn message_style(mut self, style: Style) -> Self {
        self.message_style = style;
        self
    }

    pub fn hint_style(mut self, style: Style) -> Self {
        self.hint_style = style;
        self
    }

    pub fn text(&self) -> &'a str {
        self.message.unwrap_or(self.hint)
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.message.is_some() {
            self.message_style
        } else {
            self.hint_style
        };
        Paragraph::new(Span::styled(self.text(), style)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_message_wins_over_hint() {
        let widget = StatusBarWidget::new(Some("Étape 9 introuvable"), "q quitter");
        assert_eq!(widget.text(), "Étape 9 introuvable");
        let widget = StatusBarWidget::new(None, "q quitter");
        assert_eq!(widget.text(), "q quitter");
    }
}
