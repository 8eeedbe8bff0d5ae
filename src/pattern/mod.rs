// src/pattern/mod.rs

//! The pattern codec: conversion between a [`Grid`] and the digit string
//! carried in the share URL.
//!
//! A pattern string is exactly [`CELL_COUNT`] characters, one digit `0`-`8`
//! per cell, in row-major order. Decoding never fails: anything that is not
//! a valid pattern yields [`Grid::default`], an all-white grid.

use crate::color::Color;
use crate::error::PatternError;
use crate::palette::{ColorIndex, Palette};
use log::debug;

#[cfg(test)]
mod tests;

pub const ROWS: usize = 12;
pub const COLS: usize = 12;
pub const CELL_COUNT: usize = ROWS * COLS;

/// The fixed-size grid of palette indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [ColorIndex; CELL_COUNT],
}

impl Grid {
    /// A grid with every cell set to `index`.
    pub fn filled(index: ColorIndex) -> Self {
        Self {
            cells: [index; CELL_COUNT],
        }
    }

    pub fn get(&self, position: usize) -> Option<ColorIndex> {
        self.cells.get(position).copied()
    }

    /// Sets one cell, returning the previous value.
    pub fn set(&mut self, position: usize, index: ColorIndex) -> Result<ColorIndex, PatternError> {
        let cell = self
            .cells
            .get_mut(position)
            .ok_or(PatternError::CellOutOfRange {
                position,
                cells: CELL_COUNT,
            })?;
        Ok(std::mem::replace(cell, index))
    }

    /// Resets every cell to `index`.
    pub fn fill(&mut self, index: ColorIndex) {
        self.cells = [index; CELL_COUNT];
    }

    pub fn cells(&self) -> &[ColorIndex] {
        &self.cells
    }

    /// Resolves every cell to its palette color, in grid order.
    pub fn colors(&self, palette: &Palette) -> Vec<Color> {
        self.cells.iter().map(|idx| palette.color(*idx)).collect()
    }
}

impl Default for Grid {
    /// The fallback grid: every cell white (index 1).
    fn default() -> Self {
        Grid::filled(ColorIndex::WHITE)
    }
}

/// Checks that `candidate` is a well-formed pattern string.
pub fn validate(candidate: &str) -> Result<(), PatternError> {
    // Count chars, not bytes, so multi-byte input reports a sensible length.
    let actual = candidate.chars().count();
    if actual != CELL_COUNT {
        return Err(PatternError::WrongLength {
            expected: CELL_COUNT,
            actual,
        });
    }
    match candidate
        .chars()
        .enumerate()
        .find(|(_, c)| ColorIndex::from_digit(*c).is_none())
    {
        Some((position, found)) => Err(PatternError::InvalidCharacter { position, found }),
        None => Ok(()),
    }
}

/// Parses a pattern string, reporting why it was rejected.
pub fn try_decode(candidate: &str) -> Result<Grid, PatternError> {
    validate(candidate)?;
    let mut grid = Grid::default();
    for (position, c) in candidate.chars().enumerate() {
        let index = ColorIndex::from_digit(c).ok_or(PatternError::InvalidCharacter {
            position,
            found: c,
        })?;
        grid.cells[position] = index;
    }
    Ok(grid)
}

/// Decodes an untrusted, possibly absent pattern string.
///
/// Rejected or missing input yields the default all-white grid.
pub fn decode(candidate: Option<&str>) -> Grid {
    let Some(candidate) = candidate else {
        return Grid::default();
    };
    try_decode(candidate).unwrap_or_else(|e| {
        debug!("Rejected pattern, using default grid: {}", e);
        Grid::default()
    })
}

/// Encodes a grid as its pattern string.
pub fn encode(grid: &Grid) -> String {
    grid.cells.iter().map(|idx| idx.to_digit()).collect()
}

/// Encodes a sequence of raw color values, e.g. read back from a host in
/// whatever representation it normalized them to.
///
/// Each color is canonicalized before the palette lookup. The first color
/// with no palette entry fails the whole encode with `IndexNotFound`.
pub fn encode_colors(palette: &Palette, colors: &[Color]) -> Result<String, PatternError> {
    if colors.len() != CELL_COUNT {
        return Err(PatternError::WrongLength {
            expected: CELL_COUNT,
            actual: colors.len(),
        });
    }
    colors
        .iter()
        .enumerate()
        .map(|(position, color)| {
            palette
                .index_of(color)
                .map(ColorIndex::to_digit)
                .ok_or_else(|| PatternError::IndexNotFound {
                    position,
                    color: color.to_css(),
                })
        })
        .collect()
}
