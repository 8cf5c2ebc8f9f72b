use std::collections::VecDeque;

use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};

/// Owns the application state and feeds it messages one at a time
pub struct Runtime {
    state: AppState,
    raw_msg_queue: VecDeque<RawMsg>,
    msg_queue: VecDeque<Msg>,
    cmd_queue: VecDeque<Cmd>,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            raw_msg_queue: VecDeque::new(),
            msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send domain message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw terminal event
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        if !raw_msg.is_frequent() {
            log::trace!("raw: {raw_msg:?}");
        }
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Process a single message, queueing and returning its commands
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (new_state, commands) = update(msg, std::mem::take(&mut self.state));
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate every queued raw message, then process every domain message.
    /// Raw messages are translated one by one against the state left by the
    /// previous one.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(msgs);
            while let Some(msg) = self.msg_queue.pop_front() {
                all_commands.extend(self.process_message(msg));
            }
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Drain pending commands, batches flattened, highest priority first
    pub fn take_commands(&mut self) -> Vec<Cmd> {
        let mut commands: Vec<Cmd> = self.cmd_queue.drain(..).flat_map(Cmd::flatten).collect();
        commands.sort_by_key(Cmd::priority);
        commands
    }

    /// Process all messages and hand back the commands the host must run
    pub fn run_update_cycle(&mut self) -> Vec<Cmd> {
        self.process_all_messages();
        self.take_commands()
    }

    pub fn stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeStats {
    pub queued_raw_messages: usize,
    pub queued_messages: usize,
    pub queued_commands: usize,
}
