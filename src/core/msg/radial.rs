use serde::{Deserialize, Serialize};

use crate::domain::catalog::StepId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadialMsg {
    Select(StepId),
    SelectHovered,
    Dismiss,
    HoverEnter(StepId),
    HoverLeave,
    HoverNext,
    HoverPrevious,
}
