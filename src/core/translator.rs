use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::{
    core::{
        msg::{
            accordion::AccordionMsg, gallery::GalleryMsg, radial::RadialMsg, system::SystemMsg,
            view::ViewMsg, wizard::WizardMsg, Msg,
        },
        raw_msg::RawMsg,
        state::{
            view::{PresenterKind, PresenterState},
            AppState,
        },
    },
    domain::catalog::StepId,
    presentation::{components::radial::RadialComponent, config::Action},
};

/// Translates raw terminal events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Tick => vec![Msg::System(SystemMsg::Tick)],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::UpdateStatusMessage(error))],

        // User input - translate based on the mounted presenter and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),

        // Rendering is the runner's business
        RawMsg::Render => vec![],
    }
}

fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(*action, state);
    }

    match key {
        // Always available, even with an empty keymap
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => vec![Msg::System(SystemMsg::Suspend)],

        KeyEvent {
            code: KeyCode::Char(c @ '1'..='9'),
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            let digit = c as u8 - b'0';
            translate_step_shortcut(StepId(digit), state)
        }

        _ => vec![],
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    let presenter = &state.view.presenter;
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::NextPresenter => vec![Msg::View(ViewMsg::NextPresenter)],
        Action::PreviousPresenter => vec![Msg::View(ViewMsg::PreviousPresenter)],
        Action::ShowAccordion => vec![Msg::View(ViewMsg::Show(PresenterKind::Accordion))],
        Action::ShowRadial => vec![Msg::View(ViewMsg::Show(PresenterKind::Radial))],
        Action::ShowWizard => vec![Msg::View(ViewMsg::Show(PresenterKind::Wizard))],
        Action::ShowGallery => vec![Msg::View(ViewMsg::Show(PresenterKind::Gallery))],

        Action::Next => match presenter {
            PresenterState::Accordion(_) => vec![Msg::Accordion(AccordionMsg::FocusNext)],
            PresenterState::Radial(_) => vec![Msg::Radial(RadialMsg::HoverNext)],
            PresenterState::Wizard(_) => vec![Msg::Wizard(WizardMsg::Next)],
            PresenterState::Gallery(_) => vec![Msg::Gallery(GalleryMsg::Next)],
        },

        Action::Previous => match presenter {
            PresenterState::Accordion(_) => vec![Msg::Accordion(AccordionMsg::FocusPrevious)],
            PresenterState::Radial(_) => vec![Msg::Radial(RadialMsg::HoverPrevious)],
            PresenterState::Wizard(_) => vec![Msg::Wizard(WizardMsg::Previous)],
            PresenterState::Gallery(_) => vec![Msg::Gallery(GalleryMsg::Previous)],
        },

        Action::Activate => match presenter {
            PresenterState::Accordion(_) => vec![Msg::Accordion(AccordionMsg::ToggleFocused)],
            PresenterState::Radial(_) => vec![Msg::Radial(RadialMsg::SelectHovered)],
            PresenterState::Wizard(_) => vec![Msg::Wizard(WizardMsg::Next)],
            // Every gallery step is already reachable with Next/Previous
            PresenterState::Gallery(_) => vec![],
        },

        Action::Dismiss => match presenter {
            PresenterState::Radial(radial) if radial.selected().is_some() => {
                vec![Msg::Radial(RadialMsg::Dismiss)]
            }
            _ if state.system.status_message.is_some() => {
                vec![Msg::System(SystemMsg::ClearStatusMessage)]
            }
            _ => vec![],
        },
    }
}

/// Digit keys address a step by id in whichever presenter is mounted
fn translate_step_shortcut(id: StepId, state: &AppState) -> Vec<Msg> {
    let Some(index) = state.catalog.index_of(id) else {
        return vec![Msg::System(SystemMsg::UpdateStatusMessage(format!(
            "Étape {id} introuvable"
        )))];
    };

    match &state.view.presenter {
        PresenterState::Accordion(_) => vec![Msg::Accordion(AccordionMsg::Toggle(id))],
        PresenterState::Radial(_) => vec![Msg::Radial(RadialMsg::Select(id))],
        PresenterState::Wizard(_) => vec![Msg::Wizard(WizardMsg::JumpTo(index))],
        PresenterState::Gallery(_) => vec![Msg::Gallery(GalleryMsg::Activate(id))],
    }
}

/// Only the wheel reacts to the pointer
fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    let PresenterState::Radial(radial) = &state.view.presenter else {
        return vec![];
    };
    let node = RadialComponent::node_at(state.system.area, mouse.column, mouse.row, &state.catalog);

    match mouse.kind {
        MouseEventKind::Moved => match (node, radial.hovered()) {
            (Some(id), hovered) if hovered != Some(id) => {
                vec![Msg::Radial(RadialMsg::HoverEnter(id))]
            }
            (None, Some(_)) => vec![Msg::Radial(RadialMsg::HoverLeave)],
            _ => vec![],
        },
        MouseEventKind::Down(MouseButton::Left) => node
            .map(|id| vec![Msg::Radial(RadialMsg::Select(id))])
            .unwrap_or_default(),
        _ => vec![],
    }
}
