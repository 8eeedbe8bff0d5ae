// src/palette.rs

//! The fixed editor palette and the color-to-index lookup.
//!
//! The lookup table is keyed by canonical RGB value and built once, so any
//! representation of a palette color (keyword, hex, `rgb()`) finds its index.

use crate::color::{Color, NamedColor, Rgb};
use crate::error::PatternError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Number of entries in the palette.
pub const PALETTE_SIZE: usize = NamedColor::ALL.len();

/// A validated index into the palette (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ColorIndex(u8);

impl ColorIndex {
    pub const BLACK: ColorIndex = ColorIndex(0);
    /// Used when clearing and as the fallback pattern.
    pub const WHITE: ColorIndex = ColorIndex(1);

    pub fn new(index: u8) -> Result<Self, PatternError> {
        if (index as usize) < PALETTE_SIZE {
            Ok(ColorIndex(index))
        } else {
            Err(PatternError::IndexOutOfRange(index))
        }
    }

    /// Parses a pattern digit. Only '0'-'8' are palette indices.
    pub fn from_digit(c: char) -> Option<Self> {
        let digit = c.to_digit(10)?;
        ColorIndex::new(digit as u8).ok()
    }

    /// The pattern digit for this index.
    pub fn to_digit(self) -> char {
        char::from(b'0' + self.0)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for ColorIndex {
    type Error = PatternError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ColorIndex::new(value)
    }
}

impl From<ColorIndex> for u8 {
    fn from(index: ColorIndex) -> Self {
        index.0
    }
}

impl fmt::Display for ColorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ordered set of selectable colors.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: [NamedColor; PALETTE_SIZE],
    lookup: HashMap<Rgb, ColorIndex>,
}

impl Palette {
    /// black, white, red, orange, blue, green, yellow, purple, pink.
    pub fn standard() -> Self {
        let colors = NamedColor::ALL;
        let lookup = colors
            .iter()
            .zip(0u8..)
            .map(|(named, idx)| (named.to_rgb(), ColorIndex(idx)))
            .collect();
        Self { colors, lookup }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color at `index`. Always present since `ColorIndex` is validated.
    pub fn color(&self, index: ColorIndex) -> Color {
        Color::Named(self.colors[index.as_usize()])
    }

    /// Finds the palette index of `color`, whatever its representation.
    pub fn index_of(&self, color: &Color) -> Option<ColorIndex> {
        self.lookup.get(&color.canonical()).copied()
    }

    /// Iterates entries in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorIndex, NamedColor)> + '_ {
        self.colors
            .iter()
            .zip(0u8..)
            .map(|(named, idx)| (ColorIndex(idx), *named))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::standard()
    }
}
