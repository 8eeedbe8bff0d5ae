// src/shell/mod.rs
//
// The host side of the editor: the `Shell` trait, the actions it accepts,
// and its implementations.

pub mod actions;
pub mod shell_trait;

#[cfg(target_arch = "wasm32")]
pub mod console_logger;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
mod tests;

pub use actions::{ShellAction, Swatch};
pub use shell_trait::Shell;
