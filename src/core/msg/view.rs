use serde::{Deserialize, Serialize};

use crate::core::state::view::PresenterKind;

/// Messages that change which presenter is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMsg {
    Show(PresenterKind),
    NextPresenter,
    PreviousPresenter,
}
