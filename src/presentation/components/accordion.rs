//! Accordion presenter: every step as a collapsible panel, stacked top to
//! bottom with arrow connectors between them

use std::ops::Range;

use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::{
    core::state::{accordion::AccordionState, AppState},
    domain::{
        catalog::{Catalog, Step},
        glyph::Icon,
    },
    presentation::{config::Styles, text::wrap_words},
};

const CARD_TEXT: Color = Color::Rgb(0x16, 0x16, 0x16);

#[derive(Debug, Clone, Default)]
pub struct AccordionComponent;

impl AccordionComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, accordion: &AccordionState, state: &AppState, frame: &mut Frame, area: Rect) {
        let (lines, panels) = self.lines(
            accordion,
            &state.catalog,
            &state.config.config.styles,
            area.width,
        );
        let focused = panels
            .get(accordion.focused())
            .cloned()
            .unwrap_or(0..0);
        let offset = Self::scroll_offset(focused, area.height);
        frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
    }

    /// First visible line so that the focused panel is on screen, preferring
    /// to show its bottom edge
    pub fn scroll_offset(focused: Range<usize>, height: u16) -> u16 {
        let height = usize::from(height);
        let offset = focused.end.saturating_sub(height).min(focused.start);
        u16::try_from(offset).unwrap_or(u16::MAX)
    }

    /// All panel lines plus the line range each panel occupies
    pub fn lines(
        &self,
        accordion: &AccordionState,
        catalog: &Catalog,
        styles: &Styles,
        width: u16,
    ) -> (Vec<Line<'static>>, Vec<Range<usize>>) {
        let width = usize::from(width);
        let mut lines = Vec::new();
        let mut panels = Vec::with_capacity(catalog.len());

        for (index, step) in catalog.steps().iter().enumerate() {
            let start = lines.len();
            let focused = index == accordion.focused();
            let expanded = accordion.is_expanded(step.id);
            lines.extend(Self::header(step, focused, expanded, styles, width));
            if expanded {
                lines.extend(Self::body(step, width));
            }
            panels.push(start..lines.len());

            if index + 1 < catalog.len() {
                lines.push(
                    Line::styled(Icon::ArrowDown.glyph(), Style::default().fg(Color::DarkGray))
                        .alignment(Alignment::Center),
                );
            }
        }
        (lines, panels)
    }

    fn header(
        step: &Step,
        focused: bool,
        expanded: bool,
        styles: &Styles,
        width: usize,
    ) -> Vec<Line<'static>> {
        let (start, end) = step.color_scheme.gradient();
        let text = step.color_scheme.text();
        let marker = if focused { "▶" } else { " " };
        let chevron = if expanded {
            Icon::ChevronUp
        } else {
            Icon::ChevronDown
        };

        let mut title_style = Style::default().fg(text).bg(start).bold();
        if focused {
            title_style = title_style.patch(styles.get_or_default("focus"));
        }
        let title = format!(
            "{marker} {} {}. {}",
            step.icon.glyph(),
            step.id,
            step.title
        );
        let subtitle = format!("     {}", step.subtitle);

        vec![
            Line::styled(fill(title, chevron.glyph(), width), title_style),
            Line::styled(
                fill(subtitle, "", width),
                Style::default().fg(text).bg(end),
            ),
        ]
    }

    fn body(step: &Step, width: usize) -> Vec<Line<'static>> {
        let inner = width.saturating_sub(6);
        let mut lines = Vec::new();
        for row in wrap_words(step.description, inner) {
            lines.push(Line::from(format!("   {row}")).italic());
        }
        for card in step.details {
            let style = Style::default().fg(CARD_TEXT).bg(card.background);
            lines.push(Line::styled(
                fill(format!("   ▌ {}", card.title), "", width),
                style.bold(),
            ));
            for row in wrap_words(card.body, inner) {
                lines.push(Line::styled(fill(format!("   ▌ {row}"), "", width), style));
            }
        }
        lines
    }
}

/// `left` padded with spaces so that `right` ends on the last column
fn fill(left: String, right: &str, width: usize) -> String {
    let used = left.width() + right.width() + 1;
    let padding = width.saturating_sub(used);
    format!("{left}{}{right} ", " ".repeat(padding))
}
