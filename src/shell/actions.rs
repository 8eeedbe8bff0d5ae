// src/shell/actions.rs
//
// Defines actions the editor sends to the shell that hosts it.

use crate::color::Color;
use crate::palette::ColorIndex;

/// One selectable palette entry as the shell should render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub index: ColorIndex,
    pub color: Color,
    /// Accessible label, e.g. "Select red color".
    pub label: String,
}

/// Commands that can be sent to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    /// Create the palette swatches, replacing any existing ones.
    RenderPalette(Vec<Swatch>),
    /// Color every cell, in grid order. Creates the cells on first use.
    RenderGrid(Vec<Color>),
    /// Color a single cell.
    PaintCell { position: usize, color: Color },
    /// Mark one swatch as the selected pen.
    SelectSwatch(ColorIndex),
    /// Replace the visible address without navigating.
    ReplaceLocation(String),
    /// Copy text to the clipboard.
    CopyToClipboard(String),
    /// Show a short acknowledgment to the user.
    Notify(String),
}
