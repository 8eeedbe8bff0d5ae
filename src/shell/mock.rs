// src/shell/mock.rs

use crate::shell::actions::ShellAction;
use crate::shell::shell_trait::Shell;
use anyhow::{anyhow, Result};

/// Records everything the editor asks of its host.
///
/// `ReplaceLocation` updates the stored address, the way
/// `history.replaceState` updates `location.href`.
pub struct MockShell {
    href: Option<String>,
    confirm_answer: bool,
    prompts: Vec<String>,
    dispatched_actions: Vec<ShellAction>,
}

impl MockShell {
    pub fn new(href: &str) -> Self {
        Self {
            href: Some(href.to_string()),
            confirm_answer: true,
            prompts: Vec::new(),
            dispatched_actions: Vec::new(),
        }
    }

    /// A shell whose address cannot be read at all.
    pub fn without_location() -> Self {
        Self {
            href: None,
            ..Self::new("")
        }
    }

    pub fn answer_confirm(&mut self, answer: bool) {
        self.confirm_answer = answer;
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn dispatched_actions(&self) -> &[ShellAction] {
        &self.dispatched_actions
    }

    pub fn take_actions(&mut self) -> Vec<ShellAction> {
        std::mem::take(&mut self.dispatched_actions)
    }
}

impl Shell for MockShell {
    fn current_href(&self) -> Result<String> {
        self.href
            .clone()
            .ok_or_else(|| anyhow!("location is not available"))
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.confirm_answer
    }

    fn dispatch_actions(&mut self, actions: Vec<ShellAction>) -> Result<()> {
        for action in &actions {
            if let ShellAction::ReplaceLocation(url) = action {
                self.href = Some(url.clone());
            }
        }
        self.dispatched_actions.extend(actions);
        Ok(())
    }
}
