use crate::core::{
    cmd::Cmd,
    msg::Msg,
    state::{view::PresenterState, AppState},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    if !msg.is_frequent() {
        log::debug!("update: {msg:?}");
    }

    let commands = match msg {
        Msg::System(system_msg) => state.system.update(system_msg),

        Msg::View(view_msg) => {
            let catalog = state.catalog;
            state.view.update(view_msg, &catalog)
        }

        // Presenter messages only reach the mounted presenter
        Msg::Accordion(accordion_msg) => match &mut state.view.presenter {
            PresenterState::Accordion(accordion) => accordion.update(accordion_msg),
            other => ignored(other),
        },

        Msg::Radial(radial_msg) => match &mut state.view.presenter {
            PresenterState::Radial(radial) => radial.update(radial_msg),
            other => ignored(other),
        },

        Msg::Wizard(wizard_msg) => match &mut state.view.presenter {
            PresenterState::Wizard(wizard) => wizard.update(wizard_msg),
            other => ignored(other),
        },

        Msg::Gallery(gallery_msg) => match &mut state.view.presenter {
            PresenterState::Gallery(gallery) => gallery.update(gallery_msg),
            other => ignored(other),
        },
    };

    (state, commands)
}

fn ignored(mounted: &PresenterState) -> Vec<Cmd> {
    log::debug!("presenter message ignored while {} is mounted", mounted.kind());
    vec![]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::msg::{
        gallery::GalleryMsg, system::SystemMsg, view::ViewMsg, wizard::WizardMsg,
    };
    use crate::core::state::view::PresenterKind;
    use crate::domain::catalog::StepId;

    #[test]
    fn test_quit() {
        let (state, cmds) = update(Msg::System(SystemMsg::Quit), AppState::default());
        assert!(state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_presenter_message_reaches_mounted_presenter() {
        let state = AppState::new(PresenterKind::Wizard);
        let (state, cmds) = update(Msg::Wizard(WizardMsg::Next), state);
        assert_eq!(cmds, vec![Cmd::RequestRender]);
        match state.view.presenter {
            PresenterState::Wizard(wizard) => assert_eq!(wizard.cursor(), 1),
            other => panic!("unexpected presenter {:?}", other.kind()),
        }
    }

    #[test]
    fn test_message_for_unmounted_presenter_is_ignored() {
        let state = AppState::new(PresenterKind::Accordion);
        let before = state.view.clone();
        let (state, cmds) = update(Msg::Gallery(GalleryMsg::Activate(StepId(3))), state);
        assert!(cmds.is_empty());
        assert_eq!(state.view, before);
    }

    #[test]
    fn test_switching_presenter() {
        let (state, cmds) = update(
            Msg::View(ViewMsg::Show(PresenterKind::Gallery)),
            AppState::default(),
        );
        assert_eq!(state.presenter(), PresenterKind::Gallery);
        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }
}
