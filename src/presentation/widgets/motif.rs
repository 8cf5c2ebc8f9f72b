use ratatui::prelude::*;

use crate::{domain::motion::Motif, presentation::text::center_offset};

/// One frame of a step motif, centered in its area
#[derive(Debug, Clone)]
pub struct MotifWidget {
    motif: Motif,
    phase: u64,
    style: Style,
}

impl MotifWidget {
    pub fn new(motif: Motif, phase: u64) -> Self {
        Self {
            motif,
            phase,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for MotifWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.motif.frame(self.phase);
        let top = area.y + (area.height.saturating_sub(rows.len() as u16)) / 2;
        for (i, row) in rows.iter().enumerate() {
            let y = top + i as u16;
            if y >= area.bottom() {
                break;
            }
            let x = area.x + center_offset(row, usize::from(area.width)) as u16;
            buf.set_stringn(x, y, row, usize::from(area.right() - x), self.style);
        }
    }
}
