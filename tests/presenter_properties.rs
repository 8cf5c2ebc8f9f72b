use std::iter;

use pretty_assertions::assert_eq;
use rstest::rstest;

use needleguide::{
    core::{
        cmd::Cmd,
        msg::{
            accordion::AccordionMsg, gallery::GalleryMsg, radial::RadialMsg, view::ViewMsg,
            wizard::WizardMsg, Msg,
        },
        state::{
            view::{PresenterKind, PresenterState},
            AppState,
        },
        update::update,
    },
    domain::{
        catalog::{Catalog, StepId},
        geometry::{Point, RadialLayout},
    },
};

fn apply(state: AppState, msgs: impl IntoIterator<Item = Msg>) -> (AppState, Vec<Cmd>) {
    msgs.into_iter().fold((state, vec![]), |(state, mut all), msg| {
        let (state, cmds) = update(msg, state);
        all.extend(cmds);
        (state, all)
    })
}

fn wizard_cursor(state: &AppState) -> usize {
    match &state.view.presenter {
        PresenterState::Wizard(wizard) => wizard.cursor(),
        other => panic!("expected wizard, got {:?}", other.kind()),
    }
}

#[test]
fn catalog_steps_carry_two_or_three_complete_details() {
    let catalog = Catalog::default();
    assert_eq!(catalog.len(), 5);
    assert!(catalog.verify().is_ok());
    for (index, step) in catalog.steps().iter().enumerate() {
        assert_eq!(step.id, StepId(index as u8 + 1));
        assert!((2..=3).contains(&step.details.len()), "step {}", step.id);
        for card in step.details {
            assert!(!card.title.is_empty());
            assert!(!card.body.is_empty());
        }
    }
}

#[test]
fn wizard_cursor_stays_within_bounds() {
    let state = AppState::new(PresenterKind::Wizard);

    let (state, cmds) = update(Msg::Wizard(WizardMsg::Previous), state);
    assert!(cmds.is_empty());
    assert_eq!(wizard_cursor(&state), 0);

    let (state, cmds) = apply(state, iter::repeat(Msg::Wizard(WizardMsg::Next)).take(4));
    assert_eq!(cmds.len(), 4);
    assert_eq!(wizard_cursor(&state), 4);

    let (state, cmds) = update(Msg::Wizard(WizardMsg::Next), state);
    assert!(cmds.is_empty());
    assert_eq!(wizard_cursor(&state), 4);
}

#[test]
fn accordion_double_toggle_is_identity() {
    let initial = AppState::new(PresenterKind::Accordion);
    let toggle = Msg::Accordion(AccordionMsg::Toggle(StepId(3)));
    let (state, _) = apply(initial.clone(), [toggle.clone(), toggle]);
    assert_eq!(state.view, initial.view);
}

#[test]
fn accordion_panels_are_independent() {
    let (state, _) = apply(
        AppState::new(PresenterKind::Accordion),
        [
            Msg::Accordion(AccordionMsg::Toggle(StepId(1))),
            Msg::Accordion(AccordionMsg::Toggle(StepId(5))),
        ],
    );
    match &state.view.presenter {
        PresenterState::Accordion(accordion) => {
            let open: Vec<_> = state
                .catalog
                .ids()
                .filter(|id| accordion.is_expanded(*id))
                .collect();
            assert_eq!(open, vec![StepId(1), StepId(5)]);
        }
        other => panic!("expected accordion, got {:?}", other.kind()),
    }
}

#[test]
fn gallery_reselection_changes_nothing() {
    let (state, _) = update(
        Msg::Gallery(GalleryMsg::Activate(StepId(3))),
        AppState::new(PresenterKind::Gallery),
    );
    let (again, cmds) = update(Msg::Gallery(GalleryMsg::Activate(StepId(3))), state.clone());
    assert!(cmds.is_empty());
    assert_eq!(again.view, state.view);
}

#[test]
fn radial_dismiss_clears_selection() {
    let (state, _) = apply(
        AppState::new(PresenterKind::Radial),
        [
            Msg::Radial(RadialMsg::Select(StepId(2))),
            Msg::Radial(RadialMsg::Dismiss),
        ],
    );
    match &state.view.presenter {
        PresenterState::Radial(radial) => assert_eq!(radial.selected(), None),
        other => panic!("expected radial, got {:?}", other.kind()),
    }
}

#[rstest]
#[case(Msg::Wizard(WizardMsg::Next))]
#[case(Msg::Gallery(GalleryMsg::Next))]
#[case(Msg::Radial(RadialMsg::Select(StepId(1))))]
fn messages_for_other_presenters_are_ignored(#[case] msg: Msg) {
    let initial = AppState::new(PresenterKind::Accordion);
    let (state, cmds) = update(msg, initial.clone());
    assert!(cmds.is_empty());
    assert_eq!(state.view, initial.view);
}

#[test]
fn switching_presenter_mounts_fresh_state() {
    let (state, _) = apply(
        AppState::new(PresenterKind::Wizard),
        [
            Msg::Wizard(WizardMsg::Next),
            Msg::View(ViewMsg::Show(PresenterKind::Gallery)),
            Msg::View(ViewMsg::Show(PresenterKind::Wizard)),
        ],
    );
    assert_eq!(wizard_cursor(&state), 0);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(5)]
#[case(12)]
fn wheel_nodes_lie_on_the_circle(#[case] count: usize) {
    let layout = RadialLayout::new(Point::new(250.0, 250.0), 200.0);
    let positions = layout.positions(count);
    assert_eq!(positions.len(), count);
    for p in positions {
        assert!((p.distance(layout.center) - 200.0).abs() < 1e-9);
    }
}

#[test]
fn second_wheel_node_of_five() {
    let p = RadialLayout::new(Point::new(250.0, 250.0), 200.0).position(1, 5);
    assert!((p.x - 440.21).abs() < 0.01);
    assert!((p.y - 188.20).abs() < 0.01);
}
