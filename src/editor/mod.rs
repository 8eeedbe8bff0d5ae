// src/editor/mod.rs

//! The editor: owns the grid and the selected pen color, and turns user
//! events into shell actions.
//!
//! The state half ([`EditorState`]) is plain data and has no notion of a
//! host; [`Editor`] couples it to a [`Shell`] for reading the address,
//! confirming and rendering.

use crate::color::{parse_css_color, Color, NamedColor};
use crate::config::Config;
use crate::error::PatternError;
use crate::location;
use crate::palette::{ColorIndex, Palette};
use crate::pattern::{self, Grid};
use crate::shell::{Shell, ShellAction, Swatch};
use anyhow::{Context, Result};
use log::{debug, error, info, warn};


/// User input the shell forwards to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// A swatch was clicked; carries its color as the host reports it.
    PickColor(String),
    /// A swatch was chosen by palette index.
    PickIndex(ColorIndex),
    /// A grid cell was clicked.
    PaintCell(usize),
    ClearRequested,
    ShareRequested,
}

/// The grid plus the currently selected color.
#[derive(Debug, Clone)]
pub struct EditorState {
    palette: Palette,
    grid: Grid,
    current: ColorIndex,
}

impl EditorState {
    pub fn new(palette: Palette, grid: Grid, current_color: NamedColor) -> Result<Self, PatternError> {
        let current = palette
            .index_of(&Color::Named(current_color))
            .ok_or_else(|| PatternError::UnknownColor(current_color.to_string()))?;
        Ok(Self {
            palette,
            grid,
            current,
        })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The active pen, as its palette color.
    pub fn current_color(&self) -> Color {
        self.palette.color(self.current)
    }

    pub fn current_index(&self) -> ColorIndex {
        self.current
    }

    /// Selects a new pen. Any representation of a palette color is accepted;
    /// colors outside the palette leave the selection unchanged.
    pub fn set_current_color(&mut self, color: &Color) -> Result<ColorIndex, PatternError> {
        let index = self
            .palette
            .index_of(color)
            .ok_or_else(|| PatternError::UnknownColor(color.to_css()))?;
        self.current = index;
        Ok(index)
    }

    pub fn set_current_index(&mut self, index: ColorIndex) {
        self.current = index;
    }

    /// Paints one cell with the current pen.
    pub fn paint(&mut self, position: usize) -> Result<ColorIndex, PatternError> {
        self.grid.set(position, self.current)?;
        Ok(self.current)
    }

    /// Resets every cell to white.
    pub fn clear(&mut self) {
        self.grid.fill(ColorIndex::WHITE);
    }

    /// The pattern string for the live grid.
    pub fn pattern(&self) -> String {
        pattern::encode(&self.grid)
    }

    fn swatches(&self) -> Vec<Swatch> {
        self.palette
            .iter()
            .map(|(index, named)| Swatch {
                index,
                color: Color::Named(named),
                label: format!("Select {} color", named),
            })
            .collect()
    }
}

/// Couples the editor state to the shell hosting it.
pub struct Editor<S: Shell> {
    shell: S,
    state: EditorState,
    config: Config,
}

impl<S: Shell> Editor<S> {
    /// Builds the editor from the page address and renders the initial view.
    ///
    /// A missing or unreadable address is not an error: the grid starts from
    /// the default pattern.
    pub fn start(mut shell: S, config: Config) -> Result<Self> {
        let param = &config.sharing.param_name;
        let grid = match shell.current_href() {
            Ok(href) => location::initial_grid(&href, param),
            Err(e) => {
                error!("Could not read page address, using default grid: {:#}", e);
                Grid::default()
            }
        };

        let state = EditorState::new(Palette::standard(), grid, config.palette.default_color)
            .context("Configured default color is not in the palette")?;
        info!(
            "Editor started with pattern {} and pen {}",
            state.pattern(),
            state.current_color()
        );

        shell
            .dispatch_actions(vec![
                ShellAction::RenderPalette(state.swatches()),
                ShellAction::RenderGrid(state.grid().colors(state.palette())),
                ShellAction::SelectSwatch(state.current_index()),
            ])
            .context("Failed to render initial view")?;

        Ok(Self {
            shell,
            state,
            config,
        })
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut S {
        &mut self.shell
    }

    /// Encodes the live grid.
    pub fn pattern(&self) -> String {
        self.state.pattern()
    }

    pub fn handle_event(&mut self, event: EditorEvent) -> Result<()> {
        debug!("Editor: handling {:?}", event);
        match event {
            EditorEvent::PickColor(css) => self.pick_color(&css),
            EditorEvent::PickIndex(index) => {
                self.state.set_current_index(index);
                self.shell
                    .dispatch_actions(vec![ShellAction::SelectSwatch(index)])
            }
            EditorEvent::PaintCell(position) => self.paint(position),
            EditorEvent::ClearRequested => self.clear(),
            EditorEvent::ShareRequested => self.share(),
        }
    }

    fn pick_color(&mut self, css: &str) -> Result<()> {
        let color = match parse_css_color(css) {
            Some(color) => color,
            None => {
                warn!("Ignoring unparsable color {:?}", css);
                return Ok(());
            }
        };
        match self.state.set_current_color(&color) {
            Ok(index) => self
                .shell
                .dispatch_actions(vec![ShellAction::SelectSwatch(index)]),
            Err(e) => {
                warn!("Ignoring color pick: {}", e);
                Ok(())
            }
        }
    }

    fn paint(&mut self, position: usize) -> Result<()> {
        match self.state.paint(position) {
            Ok(index) => self.shell.dispatch_actions(vec![ShellAction::PaintCell {
                position,
                color: self.state.palette().color(index),
            }]),
            Err(e) => {
                warn!("Ignoring paint: {}", e);
                Ok(())
            }
        }
    }

    fn clear(&mut self) -> Result<()> {
        let behavior = &self.config.behavior;
        if behavior.confirm_clear && !self.shell.confirm(&behavior.clear_prompt) {
            info!("Clear cancelled");
            return Ok(());
        }

        self.state.clear();
        let mut actions = vec![ShellAction::RenderGrid(
            self.state.grid().colors(self.state.palette()),
        )];

        let param = &self.config.sharing.param_name;
        match self
            .shell
            .current_href()
            .and_then(|href| location::cleared_url(&href, param).map_err(Into::into))
        {
            Ok(url) => actions.push(ShellAction::ReplaceLocation(url.into())),
            Err(e) => warn!("Grid cleared but address left as is: {:#}", e),
        }

        self.shell
            .dispatch_actions(actions)
            .context("Failed to apply clear")
    }

    fn share(&mut self) -> Result<()> {
        let pattern = self.state.pattern();
        let href = self.shell.current_href()?;
        let url = location::share_url(&href, &self.config.sharing.param_name, &pattern)
            .context("Failed to build share URL")?;
        info!("Sharing {}", url);

        // Address first: a failing clipboard must not lose the update.
        let url = String::from(url);
        self.shell
            .dispatch_actions(vec![
                ShellAction::ReplaceLocation(url.clone()),
                ShellAction::CopyToClipboard(url),
                ShellAction::Notify(self.config.sharing.copied_message.clone()),
            ])
            .context("Failed to apply share")
    }
}
