use ratatui::{prelude::*, widgets::Tabs};
use strum::IntoEnumIterator;

use crate::core::state::view::PresenterKind;

/// One tab per presenter, the mounted one highlighted
#[derive(Debug, Clone)]
pub struct TabBarWidget {
    selected: PresenterKind,
    style: Style,
    highlight_style: Style,
}

impl TabBarWidget {
    pub fn new(selected: PresenterKind) -> Self {
        Self {
            selected,
            style: Style::default(),
            highlight_style: Style::default().reversed(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    pub fn titles(&self) -> Vec<String> {
        PresenterKind::iter()
            .map(|kind| kind.title().to_string())
            .collect()
    }
}

impl Widget for TabBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Tabs::new(self.titles())
            .select(self.selected.index())
            .style(self.style)
            .highlight_style(self.highlight_style)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(
            TabBarWidget::new(PresenterKind::Radial).titles(),
            vec!["Étapes", "Cercle", "Guide", "Visuel"]
        );
    }
}
