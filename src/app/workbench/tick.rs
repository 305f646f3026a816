use super::Workbench;
use crate::kernel::Action as KernelAction;
use std::sync::mpsc;

impl Workbench {
    /// Pull pending shell output and log lines. Called by the main loop
    /// between input polls; returns whether a redraw is needed.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        changed |= self.poll_shell();
        changed |= self.poll_logs();
        changed
    }

    fn poll_shell(&mut self) -> bool {
        let Some(shell) = self.shell.as_ref() else {
            return false;
        };
        let output = shell.drain_output(super::MAX_SHELL_DRAIN_PER_TICK);

        let mut changed = false;
        if !output.bytes.is_empty() {
            changed |= self.dispatch_kernel(KernelAction::TerminalOutput(output.bytes));
        }
        if output.closed {
            if let Some(shell) = self.shell.take() {
                tracing::debug!(program = shell.program(), "shell output closed");
            }
            changed |= self.dispatch_kernel(KernelAction::TerminalExited);
        }
        changed
    }

    fn poll_logs(&mut self) -> bool {
        let Some(rx) = self.log_rx.take() else {
            return false;
        };

        let mut changed = false;
        let mut drained = 0usize;
        let mut disconnected = false;

        loop {
            match rx.try_recv() {
                Ok(line) => {
                    drained += 1;
                    if status_level(&line).is_some() {
                        self.last_status = Some(line);
                        changed = true;
                    }
                    if drained >= super::MAX_LOG_DRAIN_PER_TICK {
                        break;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if !disconnected {
            self.log_rx = Some(rx);
        }

        changed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum StatusLevel {
    Warn,
    Error,
}

/// Level of a formatted log line, read from its leading level field only.
pub(super) fn status_level(line: &str) -> Option<StatusLevel> {
    match line.split_whitespace().next()? {
        "WARN" => Some(StatusLevel::Warn),
        "ERROR" => Some(StatusLevel::Error),
        _ => None,
    }
}
