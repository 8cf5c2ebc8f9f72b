//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.
//! Exactly one presenter component draws into the body at a time.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    core::state::{
        view::{PresenterKind, PresenterState},
        AppState,
    },
    presentation::widgets::{status_bar::StatusBarWidget, tab_bar::TabBarWidget},
};

pub mod accordion;
pub mod gallery;
pub mod radial;
pub mod wizard;

pub use accordion::AccordionComponent;
pub use gallery::GalleryComponent;
pub use radial::RadialComponent;
pub use wizard::WizardComponent;

pub const TITLE: &str = "MICRONEEDLING : LE PRINCIPE ET LES ÉTAPES";

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub accordion: AccordionComponent,
    pub radial: RadialComponent,
    pub wizard: WizardComponent,
    pub gallery: GalleryComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// `[title, tabs, body, status]`
    fn layout(area: Rect) -> [Rect; 4] {
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area)
    }

    /// Area handed to the mounted presenter
    pub fn body_area(area: Rect) -> Rect {
        Self::layout(area)[2]
    }

    pub fn hint(kind: PresenterKind) -> &'static str {
        match kind {
            PresenterKind::Accordion => {
                "↑/↓ parcourir · Entrée ouvrir/fermer · 1-5 étape · Tab vue suivante · q quitter"
            }
            PresenterKind::Radial => {
                "←/→ parcourir · Entrée ou clic sélectionner · Échap fermer · Tab vue suivante · q quitter"
            }
            PresenterKind::Wizard => {
                "← Précédent · → Suivant · 1-5 aller à l'étape · Tab vue suivante · q quitter"
            }
            PresenterKind::Gallery => {
                "←/→ changer d'étape · 1-5 étape · Tab vue suivante · q quitter"
            }
        }
    }

    /// Main rendering entry point
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let [title, tabs, body, status] = Self::layout(frame.area());
        let styles = &state.config.config.styles;

        frame.render_widget(
            Paragraph::new(TITLE)
                .alignment(Alignment::Center)
                .style(styles.get_or_default("title")),
            title,
        );
        frame.render_widget(
            TabBarWidget::new(state.presenter())
                .style(styles.get_or_default("tab"))
                .highlight_style(styles.get_or_default("tab_selected")),
            tabs,
        );

        match &state.view.presenter {
            PresenterState::Accordion(accordion) => {
                self.accordion.view(accordion, state, frame, body)
            }
            PresenterState::Radial(radial) => self.radial.view(radial, state, frame, body),
            PresenterState::Wizard(wizard) => self.wizard.view(wizard, state, frame, body),
            PresenterState::Gallery(gallery) => self.gallery.view(gallery, state, frame, body),
        }

        frame.render_widget(
            StatusBarWidget::new(
                state.system.status_message.as_deref(),
                Self::hint(state.presenter()),
            )
            .message_style(styles.get_or_default("status_message"))
            .hint_style(styles.get_or_default("hint")),
            status,
        );
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    /// Render the whole screen and return it as text rows
    pub(crate) fn render_to_string(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| Components::new().render(frame, state))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_chrome_is_always_drawn() {
        for kind in [
            PresenterKind::Accordion,
            PresenterKind::Radial,
            PresenterKind::Wizard,
            PresenterKind::Gallery,
        ] {
            let screen = render_to_string(&AppState::new(kind), 120, 40);
            assert!(screen.contains(TITLE), "{kind}");
            assert!(screen.contains(kind.title()), "{kind}");
            assert!(screen.contains("q quitter"), "{kind}");
        }
    }

    #[test]
    fn test_status_message_replaces_hint() {
        let mut state = AppState::default();
        state.system.status_message = Some("Étape 9 introuvable".to_string());
        let screen = render_to_string(&state, 120, 40);
        assert!(screen.contains("Étape 9 introuvable"));
        assert!(!screen.contains("q quitter"));
    }

    #[test]
    fn test_body_area() {
        assert_eq!(
            Components::body_area(Rect::new(0, 0, 120, 40)),
            Rect::new(0, 2, 120, 37)
        );
    }
}
