use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::domain::catalog::{Catalog, StepId};

const IDLE_LAYER: Color = Color::Rgb(0xF8, 0xF8, 0xF8);
const ACTIVE_BORDER: Color = Color::Rgb(0xEC, 0x48, 0x99);
const LAYER_TEXT: Color = Color::Rgb(0x37, 0x41, 0x51);

/// Stacked skin layers, the one the active step acts on drawn in its tint
#[derive(Debug, Clone)]
pub struct SkinLayersWidget<'a> {
    catalog: &'a Catalog,
    active: StepId,
}

impl<'a> SkinLayersWidget<'a> {
    pub fn new(catalog: &'a Catalog, active: StepId) -> Self {
        Self { catalog, active }
    }

    /// `(step id, tint)` of every step that has a layer, top to bottom
    pub fn layers(&self) -> Vec<(StepId, Color)> {
        self.catalog
            .steps()
            .iter()
            .filter_map(|step| step.skin_tint.map(|tint| (step.id, tint)))
            .collect()
    }
}

impl Widget for SkinLayersWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layers = self.layers();
        if layers.is_empty() {
            return;
        }
        let rows = Layout::vertical(vec![Constraint::Ratio(1, layers.len() as u32); layers.len()])
            .split(area);

        for ((id, tint), row) in layers.into_iter().zip(rows.iter()) {
            let active = id == self.active;
            let (bg, border) = if active {
                (tint, Style::default().fg(ACTIVE_BORDER).bold())
            } else {
                (IDLE_LAYER, Style::default().fg(Color::Gray))
            };
            let marker = if active { "┃ ┃┃" } else { "" };
            Paragraph::new(marker)
                .alignment(Alignment::Center)
                .style(Style::default().fg(ACTIVE_BORDER).bg(bg))
                .block(
                    Block::bordered()
                        .border_style(border)
                        .title(Span::styled(format!("{id}"), Style::default().fg(LAYER_TEXT))),
                )
                .render(*row, buf);
        }
    }
}
