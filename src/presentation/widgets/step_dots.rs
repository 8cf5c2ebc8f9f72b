use ratatui::prelude::*;

/// Numbered step markers joined by connectors: `(1)──(2)──[3]──(4)`
#[derive(Debug, Clone)]
pub struct StepDotsWidget {
    count: usize,
    current: usize,
    accent: Color,
}

impl StepDotsWidget {
    pub fn new(count: usize, current: usize) -> Self {
        debug_assert!(count == 0 || current < count, "step {current} out of {count}");
        Self {
            count,
            current,
            accent: Color::Magenta,
        }
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    pub fn spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::with_capacity(self.count * 2);
        for i in 0..self.count {
            if i > 0 {
                let connector = Style::default().fg(if i <= self.current {
                    self.accent
                } else {
                    Color::DarkGray
                });
                spans.push(Span::styled("──", connector));
            }
            let number = i + 1;
            let span = match i.cmp(&self.current) {
                std::cmp::Ordering::Less => {
                    Span::styled(format!("({number})"), Style::default().fg(self.accent))
                }
                std::cmp::Ordering::Equal => Span::styled(
                    format!("[{number}]"),
                    Style::default().fg(Color::White).bg(self.accent).bold(),
                ),
                std::cmp::Ordering::Greater => Span::styled(
                    format!("({number})"),
                    Style::default().fg(Color::DarkGray),
                ),
            };
            spans.push(span);
        }
        spans
    }
}

impl Widget for StepDotsWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from(self.spans())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_current_step_is_bracketed() {
        let text: String = StepDotsWidget::new(5, 2)
            .spans()
            .iter()
            .map(|span| span.content.to_string())
            .collect();
        assert_eq!(text, "(1)──(2)──[3]──(4)──(5)");
    }

    #[test]
    fn test_visited_and_upcoming_styles_differ() {
        let spans = StepDotsWidget::new(3, 1).spans();
        assert_ne!(spans[0].style, spans[4].style);
        assert_eq!(spans[2].style.add_modifier, Modifier::BOLD);
    }
}
