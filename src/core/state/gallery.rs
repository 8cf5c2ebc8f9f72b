//! Gallery: exactly one active step at any time

use crate::{
    core::{cmd::Cmd, msg::gallery::GalleryMsg},
    domain::catalog::{Catalog, StepId},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    ids: Vec<StepId>,
    active: StepId,
}

impl GalleryState {
    pub fn new(catalog: &Catalog) -> Self {
        let ids: Vec<StepId> = catalog.ids().collect();
        debug_assert!(!ids.is_empty(), "gallery needs at least one step");
        let active = ids.first().copied().unwrap_or_default();
        Self { ids, active }
    }

    pub fn active(&self) -> StepId {
        self.active
    }

    pub fn is_active(&self, id: StepId) -> bool {
        self.active == id
    }

    pub fn active_index(&self) -> usize {
        self.ids
            .iter()
            .position(|id| *id == self.active)
            .unwrap_or_default()
    }

    /// Fraction of the sequence reached by the active step
    pub fn progress(&self) -> f64 {
        if self.ids.is_empty() {
            return 0.0;
        }
        (self.active_index() + 1) as f64 / self.ids.len() as f64
    }

    fn activate(&mut self, id: StepId) -> Vec<Cmd> {
        debug_assert!(self.ids.contains(&id), "no gallery entry for step {id}");
        if self.active == id {
            vec![]
        } else {
            self.active = id;
            vec![Cmd::RequestRender]
        }
    }

    pub fn update(&mut self, msg: GalleryMsg) -> Vec<Cmd> {
        let index = self.active_index();
        match msg {
            GalleryMsg::Activate(id) => self.activate(id),
            GalleryMsg::Next => match self.ids.get(index + 1).copied() {
                Some(id) => self.activate(id),
                None => vec![],
            },
            GalleryMsg::Previous => match index.checked_sub(1).and_then(|i| self.ids.get(i).copied()) {
                Some(id) => self.activate(id),
                None => vec![],
            },
        }
    }
}
