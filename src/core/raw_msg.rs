use crossterm::event::{KeyEvent, MouseEvent};
use serde::{Deserialize, Serialize};

/// Raw events coming from the terminal, before any interpretation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawMsg {
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Render,
    Error(String),
}

impl RawMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render | RawMsg::Mouse(_))
    }
}
