// src/shell/shell_trait.rs
//
// Defines the `Shell` trait, which abstracts over the host the editor runs in.

use anyhow::Result;

use super::actions::ShellAction;

/// A trait that defines the interface for a shell implementation.
///
/// The editor never touches the host directly: it reads the page address,
/// asks for confirmation and hands over a list of actions. The browser
/// implementation turns these into DOM calls; tests use a recording mock.
pub trait Shell {
    /// The full address of the current page.
    fn current_href(&self) -> Result<String>;

    /// Asks the user to confirm a destructive action.
    fn confirm(&mut self, message: &str) -> bool;

    /// Applies actions in order.
    fn dispatch_actions(&mut self, actions: Vec<ShellAction>) -> Result<()>;
}
