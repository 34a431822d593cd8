use std::{collections::VecDeque, sync::Arc};

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    domain::route::Route,
    infrastructure::{
        auth_handler::AuthHandler,
        notifier::{Notifier, ToastNotifier},
    },
};

/// Message loop of the Elm architecture: queues, update and command execution
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
    processed_messages: usize,
}

impl Runtime {
    /// Create a new Runtime without side effects; commands only queue up
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
            processed_messages: 0,
        }
    }

    /// Create a new Runtime whose commands reach `notifier` and `auth_handler`
    pub fn new_with_executor(
        initial_state: AppState,
        notifier: Arc<dyn Notifier>,
        auth_handler: Arc<dyn AuthHandler>,
    ) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.set_executor(notifier, auth_handler);
        runtime
    }

    /// Create a new Runtime whose notifications land in its own toast stack
    pub fn new_with_toasts(initial_state: AppState, auth_handler: Arc<dyn AuthHandler>) -> Self {
        let mut runtime = Self::new(initial_state);
        let notifier = Arc::new(ToastNotifier::new(runtime.msg_tx.clone()));
        runtime.set_executor(notifier, auth_handler);
        runtime
    }

    /// Set command executor
    pub fn set_executor(&mut self, notifier: Arc<dyn Notifier>, auth_handler: Arc<dyn AuthHandler>) {
        self.state.signin.forgot_password_enabled = auth_handler.handles_forgot_password();
        self.cmd_executor = Some(CmdExecutor::new(
            self.msg_tx.clone(),
            notifier,
            auth_handler,
        ));
    }

    /// Add TUI command sender support to existing executor (for TuiCommand execution)
    pub fn add_tui_sender(
        &mut self,
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        if let Some(executor) = &mut self.cmd_executor {
            executor.set_tui_sender(tui_sender);
            Ok(())
        } else {
            Err("No executor available. Use set_executor() first.".to_string())
        }
    }

    /// Get sender for message transmission
    pub fn sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get raw message sender
    pub fn raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let Some(executor) = self.cmd_executor.clone() else {
            return Err(
                "No command executor available. Use set_executor() to configure.".to_string(),
            );
        };

        let commands = self.pending_commands();
        if commands.is_empty() {
            return Ok(vec![]);
        }

        executor
            .execute_commands(&commands)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    /// Execute a single command immediately
    pub fn execute_command(&self, cmd: &Cmd) -> Result<(), String> {
        if let Some(executor) = &self.cmd_executor {
            executor
                .execute_command(cmd)
                .map_err(|e| format!("Command execution failed: {e}"))
        } else {
            Err("No command executor available. Use set_executor() to configure.".to_string())
        }
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update(msg, state);
        self.state = new_state;
        self.processed_messages += 1;

        self.cmd_queue.extend(commands.iter().cloned());

        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // First process raw messages and convert to domain messages
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        // Process raw messages from external sources
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        // Process domain messages in internal queue
        while let Some(msg) = self.msg_queue.pop_front() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        // Process domain messages from external sources (timers, notifier)
        while let Ok(msg) = self.msg_rx.try_recv() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        let _commands = self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            route: self.state.route,
            queued_messages: self.msg_queue.len() + self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            processed_messages: self.processed_messages,
            visible_toasts: self.state.toasts.len(),
            mounts: self.state.mounts(),
            is_loading: self.state.is_loading(),
            has_executor: self.cmd_executor.is_some(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeStats {
    pub route: Route,
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub processed_messages: usize,
    pub visible_toasts: usize,
    pub mounts: u64,
    pub is_loading: bool,
    pub has_executor: bool,
}
