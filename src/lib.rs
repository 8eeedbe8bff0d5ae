// src/lib.rs

//! A pixel-art grid editor for the browser.
//!
//! Users pick a color from a fixed palette, paint cells of a 12x12 grid, clear
//! it, and share the drawing as a link. The drawing travels in the `pattern`
//! query parameter as 144 digits, one palette index per cell.
//!
//! The codec ([`pattern`]), palette and editor logic are host-independent and
//! tested natively. The DOM shell is only built for `wasm32`.

// Declare modules
pub mod color;
pub mod config;
pub mod editor;
pub mod error;
pub mod location;
pub mod palette;
pub mod pattern;
pub mod shell;

pub use color::{Color, NamedColor, Rgb};
pub use config::{Config, CONFIG};
pub use editor::{Editor, EditorEvent, EditorState};
pub use error::{LocationError, PatternError};
pub use palette::{ColorIndex, Palette};
pub use pattern::{decode, encode, encode_colors, validate, Grid, CELL_COUNT, COLS, ROWS};
pub use shell::{Shell, ShellAction, Swatch};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Page entry point. Call once the DOM is loaded, optionally passing a JSON
/// configuration object as a string.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(config_json: Option<String>) -> Result<(), JsValue> {
    shell::web::run(config_json).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}
