//! Which presenter currently occupies the screen
//!
//! Exactly one presenter is mounted at a time. Mounting creates a fresh
//! presenter state from the catalog; the previous presenter's state is
//! dropped with it.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use super::{
    accordion::AccordionState, gallery::GalleryState, radial::RadialState, wizard::WizardState,
};
use crate::{
    core::{cmd::Cmd, msg::view::ViewMsg},
    domain::catalog::Catalog,
};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    ValueEnum,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PresenterKind {
    #[default]
    Accordion,
    Radial,
    Wizard,
    Gallery,
}

impl PresenterKind {
    /// Tab title shown in the header
    pub fn title(self) -> &'static str {
        match self {
            PresenterKind::Accordion => "Étapes",
            PresenterKind::Radial => "Cercle",
            PresenterKind::Wizard => "Guide",
            PresenterKind::Gallery => "Visuel",
        }
    }

    pub fn index(self) -> usize {
        PresenterKind::iter()
            .position(|kind| kind == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        let all: Vec<_> = PresenterKind::iter().collect();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all: Vec<_> = PresenterKind::iter().collect();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// Local state of the mounted presenter
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterState {
    Accordion(AccordionState),
    Radial(RadialState),
    Wizard(WizardState),
    Gallery(GalleryState),
}

impl PresenterState {
    pub fn mount(kind: PresenterKind, catalog: &Catalog) -> Self {
        match kind {
            PresenterKind::Accordion => PresenterState::Accordion(AccordionState::new(catalog)),
            PresenterKind::Radial => PresenterState::Radial(RadialState::new(catalog)),
            PresenterKind::Wizard => PresenterState::Wizard(WizardState::new(catalog.len())),
            PresenterKind::Gallery => PresenterState::Gallery(GalleryState::new(catalog)),
        }
    }

    pub fn kind(&self) -> PresenterKind {
        match self {
            PresenterState::Accordion(_) => PresenterKind::Accordion,
            PresenterState::Radial(_) => PresenterKind::Radial,
            PresenterState::Wizard(_) => PresenterKind::Wizard,
            PresenterState::Gallery(_) => PresenterKind::Gallery,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub presenter: PresenterState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(PresenterKind::default(), &Catalog::default())
    }
}

impl ViewState {
    pub fn new(kind: PresenterKind, catalog: &Catalog) -> Self {
        Self {
            presenter: PresenterState::mount(kind, catalog),
        }
    }

    pub fn kind(&self) -> PresenterKind {
        self.presenter.kind()
    }

    fn show(&mut self, kind: PresenterKind, catalog: &Catalog) -> Vec<Cmd> {
        if self.kind() == kind {
            return vec![];
        }
        log::debug!("unmounting {} presenter, mounting {kind}", self.kind());
        self.presenter = PresenterState::mount(kind, catalog);
        vec![Cmd::RequestRender]
    }

    pub fn update(&mut self, msg: ViewMsg, catalog: &Catalog) -> Vec<Cmd> {
        match msg {
            ViewMsg::Show(kind) => self.show(kind, catalog),
            ViewMsg::NextPresenter => self.show(self.kind().next(), catalog),
            ViewMsg::PreviousPresenter => self.show(self.kind().previous(), catalog),
        }
    }
}
