//! Accordion panels: a set of independent expand/collapse toggles

use std::collections::HashSet;

use crate::{
    core::{cmd::Cmd, msg::accordion::AccordionMsg},
    domain::catalog::{Catalog, StepId},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    ids: Vec<StepId>,
    /// Open panels; a collapsed panel has no entry
    expanded: HashSet<StepId>,
    /// Panel under the keyboard focus, an index into `ids`
    focused: usize,
}

impl AccordionState {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            ids: catalog.ids().collect(),
            expanded: HashSet::new(),
            focused: 0,
        }
    }

    pub fn is_expanded(&self, id: StepId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focused_id(&self) -> Option<StepId> {
        self.ids.get(self.focused).copied()
    }

    /// Flip one panel, leaving every other panel untouched
    pub fn toggle(&mut self, id: StepId) {
        debug_assert!(self.ids.contains(&id), "no accordion panel for step {id}");
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn update(&mut self, msg: AccordionMsg) -> Vec<Cmd> {
        match msg {
            AccordionMsg::Toggle(id) => {
                self.toggle(id);
                vec![Cmd::RequestRender]
            }
            AccordionMsg::ToggleFocused => match self.focused_id() {
                Some(id) => {
                    self.toggle(id);
                    vec![Cmd::RequestRender]
                }
                None => vec![],
            },
            AccordionMsg::FocusNext => {
                if self.focused + 1 < self.ids.len() {
                    self.focused += 1;
                    vec![Cmd::RequestRender]
                } else {
                    vec![]
                }
            }
            AccordionMsg::FocusPrevious => {
                if self.focused > 0 {
                    self.focused -= 1;
                    vec![Cmd::RequestRender]
                } else {
                    vec![]
                }
            }
        }
    }
}
