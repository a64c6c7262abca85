use std::cell::RefCell;
use std::rc::Rc;

use hx_widgets::tiles::{TileCommand, TileEffect, TileInput};
use hx_widgets::{Result, WidgetConfig};
use tracing::{debug, trace};
use wasm_bindgen::JsCast;

use super::dom::{detail_field, js_error, listen, query_all};
use crate::ui_model::tile_classes;

struct TileWidget {
    input: TileInput,
    doc: web_sys::Document,
    row_selector: String,
    guess_input_id: String,
}

impl TileWidget {
    /// Tile rows come and go with htmx swaps; input only counts while one is
    /// on the page.
    fn active(&self) -> bool {
        matches!(self.doc.query_selector(&self.row_selector), Ok(Some(_)))
    }

    fn apply(&mut self, cmd: TileCommand) {
        if !self.active() {
            return;
        }
        match self.input.handle(cmd) {
            TileEffect::Changed => self.render(),
            TileEffect::Submit => {
                self.sync_guess_input();
                trace!(guess = %self.input.combine(), "submit");
            }
            TileEffect::None => {}
        }
    }

    fn reset(&mut self) {
        self.input.clear();
        self.render();
    }

    fn render(&self) {
        let Ok(hosts) = query_all(&self.doc, &self.row_selector) else {
            return;
        };
        let tiles = self.input.tiles();
        for host in &hosts {
            host.set_inner_html("");
            for tile in tiles {
                if let Err(e) = self.append_tile(host, tile) {
                    debug!(error = %e, "tile render failed");
                    return;
                }
            }
        }
        self.sync_guess_input();
    }

    fn append_tile(&self, host: &web_sys::Element, tile: hx_widgets::tiles::Tile) -> Result<()> {
        let div = self
            .doc
            .create_element("div")
            .map_err(|e| js_error("create_element", e))?;
        div.set_class_name(tile_classes(tile));
        div.set_text_content(Some(&tile.glyph().to_string()));
        host.append_child(&div)
            .map_err(|e| js_error("append_child", e))?;
        Ok(())
    }

    fn sync_guess_input(&self) {
        let Some(el) = self.doc.get_element_by_id(&self.guess_input_id) else {
            return;
        };
        if let Ok(input) = el.dyn_into::<web_sys::HtmlInputElement>() {
            input.set_value(&self.input.combine());
        }
    }
}

pub(super) fn bind(doc: &web_sys::Document, cfg: &WidgetConfig) -> Result<bool> {
    let window = web_sys::window().ok_or_else(|| hx_widgets::Error::Js("no window".to_string()))?;

    let widget = Rc::new(RefCell::new(TileWidget {
        input: TileInput::new(),
        doc: doc.clone(),
        row_selector: cfg.tile_row_selector.clone(),
        guess_input_id: cfg.guess_input_id.clone(),
    }));

    listen(&window, "keydown", {
        let widget = Rc::clone(&widget);
        move |ev: web_sys::Event| {
            let Some(key) = ev.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            if key.ctrl_key() || key.meta_key() || key.alt_key() {
                return;
            }
            widget.borrow_mut().apply(TileCommand::Key(key.key()));
        }
    })?;

    listen(&window, "click-letter", {
        let widget = Rc::clone(&widget);
        move |ev: web_sys::Event| {
            if let Some(letter) = detail_field(&ev, "letter").and_then(|v| v.as_string()) {
                widget.borrow_mut().apply(TileCommand::Letter(letter));
            }
        }
    })?;

    listen(&window, "click-erase", {
        let widget = Rc::clone(&widget);
        move |_ev: web_sys::Event| widget.borrow_mut().apply(TileCommand::Erase)
    })?;

    listen(&window, "click-guess", {
        let widget = Rc::clone(&widget);
        move |_ev: web_sys::Event| widget.borrow_mut().apply(TileCommand::Submit)
    })?;

    // A fresh game fragment starts with an empty row.
    let swap_target = cfg.swap_target_id.clone();
    listen(doc, "htmx:afterSwap", {
        let widget = Rc::clone(&widget);
        move |ev: web_sys::Event| {
            let swapped = detail_field(&ev, "target")
                .and_then(|v| v.dyn_into::<web_sys::Element>().ok())
                .is_some_and(|el| el.id() == swap_target);
            if swapped {
                widget.borrow_mut().reset();
            }
        }
    })?;

    if widget.borrow().active() {
        widget.borrow().render();
    }
    Ok(true)
}
