use serde::{Deserialize, Serialize};

use crate::domain::catalog::StepId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccordionMsg {
    Toggle(StepId),
    ToggleFocused,
    FocusNext,
    FocusPrevious,
}
