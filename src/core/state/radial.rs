//! Radial wheel: one optional selection plus an independent hover

use crate::{
    core::{cmd::Cmd, msg::radial::RadialMsg},
    domain::catalog::{Catalog, StepId},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadialState {
    ids: Vec<StepId>,
    selected: Option<StepId>,
    hovered: Option<StepId>,
}

impl RadialState {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            ids: catalog.ids().collect(),
            selected: None,
            hovered: None,
        }
    }

    pub fn selected(&self) -> Option<StepId> {
        self.selected
    }

    pub fn hovered(&self) -> Option<StepId> {
        self.hovered
    }

    pub fn is_selected(&self, id: StepId) -> bool {
        self.selected == Some(id)
    }

    /// Hovered and selected nodes are both drawn enlarged
    pub fn is_emphasized(&self, id: StepId) -> bool {
        self.is_selected(id) || self.hovered == Some(id)
    }

    fn set<T: PartialEq>(slot: &mut T, value: T) -> Vec<Cmd> {
        if *slot == value {
            vec![]
        } else {
            *slot = value;
            vec![Cmd::RequestRender]
        }
    }

    /// Move the hover ring one node along the circle, wrapping around
    fn hover_step(&mut self, forward: bool) -> Vec<Cmd> {
        let count = self.ids.len();
        if count == 0 {
            return vec![];
        }
        let next = match self.hovered.and_then(|id| self.ids.iter().position(|i| *i == id)) {
            None if forward => 0,
            None => count - 1,
            Some(index) if forward => (index + 1) % count,
            Some(index) => (index + count - 1) % count,
        };
        Self::set(&mut self.hovered, Some(self.ids[next]))
    }

    pub fn update(&mut self, msg: RadialMsg) -> Vec<Cmd> {
        match msg {
            RadialMsg::Select(id) => {
                debug_assert!(self.ids.contains(&id), "no wheel node for step {id}");
                Self::set(&mut self.selected, Some(id))
            }
            RadialMsg::SelectHovered => match self.hovered {
                Some(id) => Self::set(&mut self.selected, Some(id)),
                None => vec![],
            },
            RadialMsg::Dismiss => Self::set(&mut self.selected, None),
            RadialMsg::HoverEnter(id) => {
                debug_assert!(self.ids.contains(&id), "no wheel node for step {id}");
                Self::set(&mut self.hovered, Some(id))
            }
            RadialMsg::HoverLeave => Self::set(&mut self.hovered, None),
            RadialMsg::HoverNext => self.hover_step(true),
            RadialMsg::HoverPrevious => self.hover_step(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn state() -> RadialState {
        RadialState::new(&Catalog::default())
    }

    #[test]
    fn test_nothing_selected_initially() {
        let wheel = state();
        assert_eq!(wheel.selected(), None);
        assert_eq!(wheel.hovered(), None);
    }

    #[test]
    fn test_select_replaces_previous_selection() {
        let mut wheel = state();
        wheel.update(RadialMsg::Select(StepId(2)));
        wheel.update(RadialMsg::Select(StepId(4)));
        assert_eq!(wheel.selected(), Some(StepId(4)));
        assert!(!wheel.is_selected(StepId(2)));
    }

    #[test]
    fn test_dismiss_clears_selection() {
        let mut wheel = state();
        wheel.update(RadialMsg::Select(StepId(1)));
        assert_eq!(wheel.update(RadialMsg::Dismiss), vec![Cmd::RequestRender]);
        assert_eq!(wheel.selected(), None);
        assert!(wheel.update(RadialMsg::Dismiss).is_empty());
    }

    #[test]
    fn test_hover_does_not_touch_selection() {
        let mut wheel = state();
        wheel.update(RadialMsg::Select(StepId(3)));
        wheel.update(RadialMsg::HoverEnter(StepId(5)));
        assert_eq!(wheel.selected(), Some(StepId(3)));
        assert!(wheel.is_emphasized(StepId(5)));
        assert!(wheel.is_emphasized(StepId(3)));
        assert!(!wheel.is_emphasized(StepId(1)));

        wheel.update(RadialMsg::HoverLeave);
        assert_eq!(wheel.hovered(), None);
        assert_eq!(wheel.selected(), Some(StepId(3)));
    }

    #[test]
    fn test_hover_cycles_around_the_wheel() {
        let mut wheel = state();
        wheel.update(RadialMsg::HoverPrevious);
        assert_eq!(wheel.hovered(), Some(StepId(5)));
        wheel.update(RadialMsg::HoverNext);
        assert_eq!(wheel.hovered(), Some(StepId(1)));
        wheel.update(RadialMsg::HoverPrevious);
        assert_eq!(wheel.hovered(), Some(StepId(5)));
    }

    #[test]
    fn test_select_hovered() {
        let mut wheel = state();
        assert!(wheel.update(RadialMsg::SelectHovered).is_empty());
        wheel.update(RadialMsg::HoverNext);
        wheel.update(RadialMsg::HoverNext);
        wheel.update(RadialMsg::SelectHovered);
        assert_eq!(wheel.selected(), Some(StepId(2)));
    }

    #[test]
    fn test_repeated_hover_enter_is_quiet() {
        let mut wheel = state();
        assert_eq!(
            wheel.update(RadialMsg::HoverEnter(StepId(1))),
            vec![Cmd::RequestRender]
        );
        assert!(wheel.update(RadialMsg::HoverEnter(StepId(1))).is_empty());
    }
}
