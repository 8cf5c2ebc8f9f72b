pub mod accordion;
pub mod gallery;
pub mod radial;
pub mod system;
pub mod view;
pub mod wizard;

use crate::{domain::catalog::Catalog, infrastructure::config::Config};

use system::SystemState;
use view::{PresenterKind, ViewState};

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub catalog: Catalog,
    pub view: ViewState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the given presenter mounted
    pub fn new(presenter: PresenterKind) -> Self {
        let catalog = Catalog::default();
        Self {
            view: ViewState::new(presenter, &catalog),
            catalog,
            ..Default::default()
        }
    }

    /// Initialize AppState from configuration; `presenter` overrides the
    /// configured initial presenter
    pub fn new_with_config(config: Config, presenter: Option<PresenterKind>) -> Self {
        let kind = presenter.unwrap_or(config.presenter);
        Self {
            config: ConfigState { config },
            ..Self::new(kind)
        }
    }

    pub fn presenter(&self) -> PresenterKind {
        self.view.kind()
    }
}
