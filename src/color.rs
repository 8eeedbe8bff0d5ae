// src/color.rs

//! Defines color-related types (`NamedColor`, `Rgb`, `Color`) and the CSS
//! color parsing used to canonicalize whatever representation a host hands
//! back to us.
//!
//! Every comparison between colors goes through [`Color::canonical`], so a
//! swatch set as `"red"` and read back as `"rgb(255, 0, 0)"` still resolves
//! to the same palette entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The CSS named colors that make up the editor palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Black,
    White,
    Red,
    Orange,
    Blue,
    Green,
    Yellow,
    Purple,
    Pink,
}

impl NamedColor {
    /// All named colors, in palette order.
    pub const ALL: [NamedColor; 9] = [
        NamedColor::Black,
        NamedColor::White,
        NamedColor::Red,
        NamedColor::Orange,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Purple,
        NamedColor::Pink,
    ];

    /// The CSS keyword for this color.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::White => "white",
            NamedColor::Red => "red",
            NamedColor::Orange => "orange",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Purple => "purple",
            NamedColor::Pink => "pink",
        }
    }

    /// Looks up a named color by its CSS keyword (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        NamedColor::ALL
            .into_iter()
            .find(|named| named.name().eq_ignore_ascii_case(name))
    }

    /// Returns the sRGB value CSS assigns to this keyword.
    pub fn to_rgb(self) -> Rgb {
        match self {
            NamedColor::Black => Rgb::new(0, 0, 0),
            NamedColor::White => Rgb::new(255, 255, 255),
            NamedColor::Red => Rgb::new(255, 0, 0),
            NamedColor::Orange => Rgb::new(255, 165, 0),
            NamedColor::Blue => Rgb::new(0, 0, 255),
            NamedColor::Green => Rgb::new(0, 128, 0),
            NamedColor::Yellow => Rgb::new(255, 255, 0),
            NamedColor::Purple => Rgb::new(128, 0, 128),
            NamedColor::Pink => Rgb::new(255, 192, 203),
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An opaque RGB triple. This is the canonical form used for lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A color as it is stored or handed over by a host: either a CSS keyword
/// or an explicit RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Named(NamedColor),
    Rgb(Rgb),
}

impl Color {
    /// Resolves the color to its canonical RGB value.
    pub fn canonical(&self) -> Rgb {
        match self {
            Color::Named(named) => named.to_rgb(),
            Color::Rgb(rgb) => *rgb,
        }
    }

    /// The string written into an element's `background-color`.
    pub fn to_css(&self) -> String {
        match self {
            Color::Named(named) => named.name().to_string(),
            Color::Rgb(rgb) => rgb.to_string(),
        }
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Parses a CSS color string into a `Color`.
///
/// Supports:
/// - the palette keywords: `"red"`, `" Pink "`
/// - 6-digit hex: `"#FF5500"`
/// - 3-digit shorthand: `"#F50"` (expands to `#FF5500`)
/// - functional notation: `"rgb(255, 85, 0)"`, `"rgba(255, 85, 0, 1)"`
///
/// Translucent `rgba` values and anything else return `None`.
pub fn parse_css_color(input: &str) -> Option<Color> {
    let input = input.trim();

    if let Some(hex) = input.strip_prefix('#') {
        return parse_hex(hex).map(Color::Rgb);
    }
    if let Some(args) = functional_args(input, "rgba") {
        let (rgb, alpha) = match args.as_slice() {
            [r, g, b, a] => (parse_channels(r, g, b)?, a.parse::<f32>().ok()?),
            _ => return None,
        };
        // Only opaque colors can match a palette entry.
        return (alpha >= 1.0).then_some(Color::Rgb(rgb));
    }
    if let Some(args) = functional_args(input, "rgb") {
        return match args.as_slice() {
            [r, g, b] => parse_channels(r, g, b).map(Color::Rgb),
            _ => None,
        };
    }

    NamedColor::from_name(input).map(Color::Named)
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgb::new(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

/// Splits `name(a, b, c)` into its trimmed, comma-separated arguments.
fn functional_args<'a>(input: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let head = input.get(..name.len())?;
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }
    let inner = input[name.len()..]
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

fn parse_channels(r: &str, g: &str, b: &str) -> Option<Rgb> {
    Some(Rgb::new(r.parse().ok()?, g.parse().ok()?, b.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_css_color("red"), Some(Color::Named(NamedColor::Red)));
        assert_eq!(
            parse_css_color("  Purple "),
            Some(Color::Named(NamedColor::Purple))
        );
        assert_eq!(parse_css_color("cyan"), None);
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(
            parse_css_color("#FFA500"),
            Some(Color::Rgb(Rgb::new(255, 165, 0)))
        );
        assert_eq!(parse_css_color("#f00"), Some(Color::Rgb(Rgb::new(255, 0, 0))));
        assert_eq!(parse_css_color("#GG0000"), None);
        assert_eq!(parse_css_color("#12345"), None);
    }

    #[test]
    fn test_functional_colors() {
        assert_eq!(
            parse_css_color("rgb(255, 192, 203)"),
            Some(Color::Rgb(Rgb::new(255, 192, 203)))
        );
        assert_eq!(
            parse_css_color("RGBA(0,128,0,1)"),
            Some(Color::Rgb(Rgb::new(0, 128, 0)))
        );
        assert_eq!(parse_css_color("rgba(0, 128, 0, 0.5)"), None);
        assert_eq!(parse_css_color("rgb(256, 0, 0)"), None);
        assert_eq!(parse_css_color("rgb(1, 2)"), None);
    }

    #[test]
    fn test_representations_canonicalize_to_the_same_value() {
        let named = Color::Named(NamedColor::Green);
        let computed = parse_css_color("rgb(0, 128, 0)").unwrap();
        let hex = parse_css_color("#008000").unwrap();
        assert_ne!(named, computed);
        assert_eq!(named.canonical(), computed.canonical());
        assert_eq!(computed.canonical(), hex.canonical());
    }

    #[test]
    fn test_to_css_round_trips_through_the_parser() {
        for named in NamedColor::ALL {
            let color = Color::Named(named);
            assert_eq!(parse_css_color(&color.to_css()), Some(color));
            let rgb = Color::Rgb(named.to_rgb());
            assert_eq!(parse_css_color(&rgb.to_css()), Some(rgb));
        }
    }
}
