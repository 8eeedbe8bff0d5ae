// src/shell/web.rs

//! Browser shell: renders the palette and grid into the page and forwards
//! clicks to the editor.
//!
//! The page is expected to contain `#color-picker`, `#grid`, `#clear-btn`
//! and `#share-btn`. Listeners are delegated: one per container, resolving
//! the clicked swatch or cell from the event target.
//!
//! All handlers share the editor through an `Rc<RefCell<_>>`. Events are
//! dispatched one at a time on the page's thread, so a borrow never
//! outlives the handler that took it.

use crate::color::Color;
use crate::config::Config;
use crate::editor::{Editor, EditorEvent};
use crate::shell::actions::{ShellAction, Swatch};
use crate::shell::console_logger;
use crate::shell::shell_trait::Shell;
use anyhow::{anyhow, Context, Result};
use log::{error, info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

const PICKER_ID: &str = "color-picker";
const GRID_ID: &str = "grid";
const CLEAR_BUTTON_ID: &str = "clear-btn";
const SHARE_BUTTON_ID: &str = "share-btn";

const SWATCH_CLASS: &str = "color-box";
const CELL_CLASS: &str = "pixel";
const SELECTED_CLASS: &str = "selected";
const INDEX_ATTR: &str = "data-index";

type SharedEditor = Rc<RefCell<Editor<WebShell>>>;

fn js_err(context: &'static str) -> impl FnOnce(JsValue) -> anyhow::Error {
    move |e| anyhow!("{}: {:?}", context, e)
}

fn element_by_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .with_context(|| format!("Page has no element with id {:?}", id))
}

/// DOM-backed implementation of [`Shell`].
pub struct WebShell {
    window: Window,
    document: Document,
    picker: Element,
    grid: Element,
    swatches: Vec<HtmlElement>,
    cells: Vec<HtmlElement>,
}

impl WebShell {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().context("No global window")?;
        let document = window.document().context("Window has no document")?;
        let picker = element_by_id(&document, PICKER_ID)?;
        let grid = element_by_id(&document, GRID_ID)?;
        Ok(Self {
            window,
            document,
            picker,
            grid,
            swatches: Vec::new(),
            cells: Vec::new(),
        })
    }

    fn create_div(&self, class: &str, index: usize) -> Result<HtmlElement> {
        let element = self
            .document
            .create_element("div")
            .map_err(js_err("Failed to create element"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| anyhow!("Created element is not an HtmlElement"))?;
        element
            .class_list()
            .add_1(class)
            .map_err(js_err("Failed to set class"))?;
        element
            .set_attribute(INDEX_ATTR, &index.to_string())
            .map_err(js_err("Failed to set index"))?;
        Ok(element)
    }

    fn render_palette(&mut self, swatches: &[Swatch]) -> Result<()> {
        self.picker.set_inner_html("");
        self.swatches.clear();
        for swatch in swatches {
            let element = self.create_div(SWATCH_CLASS, swatch.index.as_usize())?;
            set_background(&element, &swatch.color)?;
            for (name, value) in [
                ("role", "button"),
                ("aria-label", swatch.label.as_str()),
                ("tabindex", "0"),
            ] {
                element
                    .set_attribute(name, value)
                    .map_err(js_err("Failed to set swatch attribute"))?;
            }
            self.picker
                .append_child(&element)
                .map_err(js_err("Failed to append swatch"))?;
            self.swatches.push(element);
        }
        Ok(())
    }

    fn render_grid(&mut self, colors: &[Color]) -> Result<()> {
        if self.cells.len() != colors.len() {
            self.grid.set_inner_html("");
            self.cells.clear();
            for position in 0..colors.len() {
                let cell = self.create_div(CELL_CLASS, position)?;
                self.grid
                    .append_child(&cell)
                    .map_err(js_err("Failed to append cell"))?;
                self.cells.push(cell);
            }
        }
        for (cell, color) in self.cells.iter().zip(colors) {
            set_background(cell, color)?;
        }
        Ok(())
    }

    fn select_swatch(&self, selected: usize) -> Result<()> {
        for (index, swatch) in self.swatches.iter().enumerate() {
            swatch
                .class_list()
                .toggle_with_force(SELECTED_CLASS, index == selected)
                .map_err(js_err("Failed to toggle selection"))?;
        }
        Ok(())
    }

    fn replace_location(&self, url: &str) -> Result<()> {
        self.window
            .history()
            .map_err(js_err("No history"))?
            .replace_state_with_url(&JsValue::NULL, &self.document.title(), Some(url))
            .map_err(js_err("Failed to replace address"))
    }

    /// Fire-and-forget: failures only reach the console.
    fn copy_to_clipboard(&self, text: &str) {
        // `navigator.clipboard` is undefined outside secure contexts, and
        // calling into it would throw past the editor borrow.
        let clipboard = self.window.navigator().clipboard();
        let clipboard_value: &JsValue = clipboard.as_ref();
        if clipboard_value.is_undefined() {
            warn!("Clipboard is not available on this page; link not copied");
            return;
        }
        let promise = clipboard.write_text(text);
        let on_error = Closure::<dyn FnMut(JsValue)>::new(|e: JsValue| {
            warn!("Clipboard write failed: {:?}", e);
        });
        let _ = promise.catch(&on_error);
        on_error.forget();
    }
}

fn set_background(element: &HtmlElement, color: &Color) -> Result<()> {
    element
        .style()
        .set_property("background-color", &color.to_css())
        .map_err(js_err("Failed to set background color"))
}

impl Shell for WebShell {
    fn current_href(&self) -> Result<String> {
        self.window
            .location()
            .href()
            .map_err(js_err("Failed to read location"))
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn dispatch_actions(&mut self, actions: Vec<ShellAction>) -> Result<()> {
        for action in actions {
            match action {
                ShellAction::RenderPalette(swatches) => self.render_palette(&swatches)?,
                ShellAction::RenderGrid(colors) => self.render_grid(&colors)?,
                ShellAction::PaintCell { position, color } => match self.cells.get(position) {
                    Some(cell) => set_background(cell, &color)?,
                    None => warn!("No cell at position {}", position),
                },
                ShellAction::SelectSwatch(index) => self.select_swatch(index.as_usize())?,
                ShellAction::ReplaceLocation(url) => self.replace_location(&url)?,
                ShellAction::CopyToClipboard(text) => self.copy_to_clipboard(&text),
                ShellAction::Notify(message) => self
                    .window
                    .alert_with_message(&message)
                    .map_err(js_err("Failed to show notification"))?,
            }
        }
        Ok(())
    }
}

// --- Event wiring ---

/// The clicked element, if it carries `class`.
fn clicked(event: &Event, class: &str) -> Option<HtmlElement> {
    let target = event.target()?.dyn_into::<HtmlElement>().ok()?;
    target.class_list().contains(class).then_some(target)
}

fn listen<F>(target: &EventTarget, editor: &SharedEditor, to_event: F) -> Result<()>
where
    F: Fn(&Event) -> Option<EditorEvent> + 'static,
{
    let editor = Rc::clone(editor);
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(editor_event) = to_event(&event) else {
            return;
        };
        match editor.try_borrow_mut() {
            Ok(mut editor) => {
                if let Err(e) = editor.handle_event(editor_event) {
                    error!("Event handling failed: {:#}", e);
                }
            }
            Err(_) => warn!("Editor busy, dropping {:?}", editor_event),
        }
    });
    target
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(js_err("Failed to add click listener"))?;
    // The listeners live as long as the page.
    on_click.forget();
    Ok(())
}

/// Builds the editor against the current page and wires its listeners.
pub fn run(config_json: Option<String>) -> Result<()> {
    console_logger::init(log::LevelFilter::Info);
    let config = Config::from_json_or_default(config_json.as_deref());
    log::set_max_level(config.logging.level);

    let shell = WebShell::new()?;
    let picker = shell.picker.clone();
    let grid = shell.grid.clone();
    let clear_button = element_by_id(&shell.document, CLEAR_BUTTON_ID)?;
    let share_button = element_by_id(&shell.document, SHARE_BUTTON_ID)?;

    let editor: SharedEditor = Rc::new(RefCell::new(Editor::start(shell, config)?));

    listen(&picker, &editor, |event| {
        let swatch = clicked(event, SWATCH_CLASS)?;
        let css = swatch.style().get_property_value("background-color").ok()?;
        Some(EditorEvent::PickColor(css))
    })?;
    listen(&grid, &editor, |event| {
        let cell = clicked(event, CELL_CLASS)?;
        let position = cell.get_attribute(INDEX_ATTR)?.parse().ok()?;
        Some(EditorEvent::PaintCell(position))
    })?;
    listen(&clear_button, &editor, |event| {
        event.prevent_default();
        Some(EditorEvent::ClearRequested)
    })?;
    listen(&share_button, &editor, |event| {
        event.prevent_default();
        Some(EditorEvent::ShareRequested)
    })?;

    info!("Pixel editor ready");
    Ok(())
}
