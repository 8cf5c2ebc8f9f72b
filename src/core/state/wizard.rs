//! Step wizard: a cursor that idles at either end

use crate::core::{cmd::Cmd, msg::wizard::WizardMsg};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WizardState {
    cursor: usize,
    len: usize,
}

impl WizardState {
    pub fn new(len: usize) -> Self {
        debug_assert!(len >= 1, "wizard needs at least one step");
        Self { cursor: 0, len }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn can_go_next(&self) -> bool {
        self.cursor + 1 < self.len
    }

    pub fn can_go_previous(&self) -> bool {
        self.cursor > 0
    }

    /// Completed fraction, counting the current step as done
    pub fn progress(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        (self.cursor + 1) as f64 / self.len as f64
    }

    pub fn update(&mut self, msg: WizardMsg) -> Vec<Cmd> {
        match msg {
            WizardMsg::Next if self.can_go_next() => {
                self.cursor += 1;
                vec![Cmd::RequestRender]
            }
            WizardMsg::Previous if self.can_go_previous() => {
                self.cursor -= 1;
                vec![Cmd::RequestRender]
            }
            WizardMsg::Next | WizardMsg::Previous => vec![],
            WizardMsg::JumpTo(index) => {
                debug_assert!(index < self.len, "wizard step {index} out of range");
                self.cursor = index;
                vec![Cmd::RequestRender]
            }
        }
    }
}
