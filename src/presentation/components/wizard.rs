//! Wizard presenter: one step at a time with a progress indicator and
//! previous/next navigation

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Gauge, Paragraph, Wrap},
};

use crate::{
    core::state::{wizard::WizardState, AppState},
    domain::glyph::Icon,
    presentation::widgets::{detail_card::DetailCardWidget, step_dots::StepDotsWidget},
};

#[derive(Debug, Clone, Default)]
pub struct WizardComponent;

impl WizardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn caption(wizard: &WizardState) -> String {
        format!("Étape {} sur {}", wizard.cursor() + 1, wizard.len())
    }

    pub fn view(&self, wizard: &WizardState, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(step) = state.catalog.at(wizard.cursor()) else {
            return;
        };
        let accent = step.color_scheme.border();

        let [dots, gauge, caption, card, nav] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            StepDotsWidget::new(wizard.len(), wizard.cursor()).accent(accent),
            dots,
        );
        frame.render_widget(
            Gauge::default()
                .ratio(wizard.progress().clamp(0.0, 1.0))
                .gauge_style(Style::default().fg(accent))
                .label(format!("{:.0}%", wizard.progress() * 100.0)),
            gauge,
        );
        frame.render_widget(
            Paragraph::new(Self::caption(wizard))
                .alignment(Alignment::Center)
                .style(state.config.config.styles.get_or_default("status")),
            caption,
        );

        let (start, _) = step.color_scheme.gradient();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent))
            .title(
                Line::from(format!(" {} {} ", step.icon.glyph(), step.title))
                    .style(Style::default().fg(step.color_scheme.text()).bg(start).bold()),
            );
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let [subtitle, description, cards] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .areas(inner.inner(Margin::new(1, 0)));

        frame.render_widget(Paragraph::new(step.subtitle).bold(), subtitle);
        frame.render_widget(
            Paragraph::new(step.description).wrap(Wrap { trim: true }),
            description,
        );
        DetailCardWidget::render_stack(step.details, cards, frame.buffer_mut());

        self.nav(wizard, frame, nav);
    }

    fn nav(&self, wizard: &WizardState, frame: &mut Frame, area: Rect) {
        let enabled = Style::default().bold();
        let disabled = Style::default().fg(Color::DarkGray).dim();
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        let previous_style = if wizard.can_go_previous() {
            enabled
        } else {
            disabled
        };
        let next_style = if wizard.can_go_next() {
            enabled
        } else {
            disabled
        };
        frame.render_widget(
            Paragraph::new(format!("{} Précédent", Icon::ChevronLeft.glyph())).style(previous_style),
            left,
        );
        frame.render_widget(
            Paragraph::new(format!("Suivant {}", Icon::ChevronRight.glyph()))
                .alignment(Alignment::Right)
                .style(next_style),
            right,
        );
    }
}
