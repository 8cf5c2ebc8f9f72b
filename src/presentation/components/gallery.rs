//! Gallery presenter: skin cross-section, the active step's animation and
//! its details side by side, with a row of step buttons underneath

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Gauge, Paragraph},
};

use crate::{
    core::state::{gallery::GalleryState, AppState},
    presentation::widgets::{
        detail_card::DetailCardWidget, motif::MotifWidget, skin_layers::SkinLayersWidget,
    },
};

const ACCENT: Color = Color::Rgb(0xEC, 0x48, 0x99);
const PANEL_TEXT: Color = Color::Rgb(0x1F, 0x29, 0x37);

#[derive(Debug, Clone, Default)]
pub struct GalleryComponent;

impl GalleryComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, gallery: &GalleryState, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(step) = state.catalog.get(gallery.active()) else {
            return;
        };

        let [main, buttons, progress] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .areas(area);
        let [skin, action, details] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(main);

        let panel = |title: &'static str| {
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title(Line::from(title).bold().centered())
                .border_style(Style::default().fg(Color::Gray))
        };

        let skin_block = panel("PEAU");
        frame.render_widget(
            SkinLayersWidget::new(&state.catalog, gallery.active()),
            skin_block.inner(skin),
        );
        frame.render_widget(skin_block, skin);

        let action_block = panel("ACTION");
        let [animation, caption] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(3)])
                .areas(action_block.inner(action));
        frame.render_widget(action_block, action);
        frame.render_widget(
            MotifWidget::new(step.motif, state.system.tick)
                .style(Style::default().fg(step.color_scheme.border())),
            animation,
        );
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(step.title).bold(),
                Line::from(step.subtitle).fg(PANEL_TEXT),
            ])
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: true }),
            caption,
        );

        let details_block = panel("DÉTAILS");
        DetailCardWidget::render_stack(
            step.details,
            details_block.inner(details),
            frame.buffer_mut(),
        );
        frame.render_widget(details_block, details);

        self.buttons(gallery, state, frame, buttons);

        frame.render_widget(
            Gauge::default()
                .ratio(gallery.progress().clamp(0.0, 1.0))
                .gauge_style(Style::default().fg(ACCENT))
                .label(format!("{}/{}", gallery.active_index() + 1, state.catalog.len())),
            progress,
        );
    }

    fn buttons(&self, gallery: &GalleryState, state: &AppState, frame: &mut Frame, area: Rect) {
        let steps = state.catalog.steps();
        if steps.is_empty() {
            return;
        }
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, steps.len() as u32); steps.len()])
            .split(area);
        for (step, cell) in steps.iter().zip(cells.iter()) {
            let style = if gallery.is_active(step.id) {
                Style::default().fg(Color::White).bg(ACCENT).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from(step.id.to_string()).bold(),
                    Line::from(step.short_title()),
                ])
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::bordered().border_type(BorderType::Rounded)),
                *cell,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            msg::gallery::GalleryMsg,
            state::view::{PresenterKind, PresenterState},
        },
        domain::catalog::StepId,
        presentation::components::tests::render_to_string,
    };

    fn gallery_state(active: StepId, tick: u64) -> AppState {
        let mut state = AppState::new(PresenterKind::Gallery);
        state.system.tick = tick;
        if let PresenterState::Gallery(gallery) = &mut state.view.presenter {
            gallery.update(GalleryMsg::Activate(active));
        }
        state
    }

    #[test]
    fn test_render_active_step() {
        let screen = render_to_string(&gallery_state(StepId(3), 0), 150, 36);
        assert!(screen.contains("PEAU"));
        assert!(screen.contains("DÉTAILS"));
        assert!(screen.contains("ABSORPTION DES ACTIFS"));
        assert!(screen.contains("Actions ciblées selon le besoin"));
        assert!(screen.contains("3/5"));
        // step buttons carry the first word of each title
        assert!(screen.contains("LUMINOTHÉRAPIE"));
        assert!(screen.contains("RÉACTION"));
    }

    #[test]
    fn test_animation_advances_with_ticks() {
        let first = render_to_string(&gallery_state(StepId(1), 0), 150, 36);
        let second = render_to_string(&gallery_state(StepId(1), 1), 150, 36);
        assert_ne!(first, second);
    }
}
