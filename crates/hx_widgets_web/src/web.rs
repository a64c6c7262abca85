use std::cell::Cell;

use hx_widgets::{Result, Strictness, WidgetConfig};
use tracing::info;
use wasm_bindgen::prelude::*;

use crate::ui_model::{admit, resolve_config, Binding, Component};

mod confirm;
mod console;
mod dom;
mod page;
mod tiles;
mod upload;

const CONFIG_ELEMENT_ID: &str = "hx-widgets-config";

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    if STARTED.with(|s| s.replace(true)) {
        return Ok(());
    }
    bind_all().map_err(|e| JsValue::from_str(&e.to_string()))
}

fn load_config(doc: &web_sys::Document) -> Result<WidgetConfig> {
    match doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(raw) if !raw.trim().is_empty() => WidgetConfig::from_json(&raw),
        _ => Ok(WidgetConfig::default()),
    }
}

fn bind_all() -> Result<()> {
    let doc = dom::document()?;
    let loaded = load_config(&doc);
    console::init(
        loaded
            .as_ref()
            .map(WidgetConfig::level)
            .unwrap_or(tracing::Level::INFO),
    );
    // The block itself may be what failed, so the build default decides.
    let cfg = resolve_config(Strictness::default(), loaded)?;

    let mut bound = Vec::new();
    for &component in Component::all() {
        let res = match component {
            Component::PageGuards => page::bind(&doc, &cfg),
            Component::ConfirmationGate => confirm::bind(&doc, &cfg),
            Component::UploadProgress => upload::bind(&doc, &cfg),
            Component::TileInput => tiles::bind(&doc, &cfg),
        };
        if admit(cfg.strictness, component, res)? == Binding::Bound {
            bound.push(component.label());
        }
    }
    info!(components = ?bound, strictness = ?cfg.strictness, "hx_widgets started");
    Ok(())
}
