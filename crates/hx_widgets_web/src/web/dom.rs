use hx_widgets::{Error, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub(super) fn document() -> Result<web_sys::Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::Js("no document".to_string()))
}

pub(super) fn element_by_id(doc: &web_sys::Document, id: &str) -> Result<web_sys::Element> {
    doc.get_element_by_id(id).ok_or_else(|| Error::missing(id))
}

pub(super) fn html_element_by_id(
    doc: &web_sys::Document,
    id: &str,
) -> Result<web_sys::HtmlElement> {
    element_by_id(doc, id)?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| Error::unexpected(id, "HtmlElement"))
}

pub(super) fn input_by_id(doc: &web_sys::Document, id: &str) -> Result<web_sys::HtmlInputElement> {
    element_by_id(doc, id)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .map_err(|_| Error::unexpected(id, "HtmlInputElement"))
}

pub(super) fn query_all(doc: &web_sys::Document, selector: &str) -> Result<Vec<web_sys::Element>> {
    let list = doc
        .query_selector_all(selector)
        .map_err(|_| Error::InvalidConfig(format!("bad selector: {selector}")))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web_sys::Element>().ok())
        .collect())
}

/// Same as [`query_all`], scoped to the descendants of `root`.
pub(super) fn query_all_in(root: &web_sys::Element, selector: &str) -> Result<Vec<web_sys::Element>> {
    let list = root
        .query_selector_all(selector)
        .map_err(|_| Error::InvalidConfig(format!("bad selector: {selector}")))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web_sys::Element>().ok())
        .collect())
}

pub(super) fn js_error(context: &str, v: JsValue) -> Error {
    let detail = v
        .as_string()
        .or_else(|| v.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| "unknown".to_string());
    Error::Js(format!("{context}: {detail}"))
}

/// Registers `handler` for `event` on `target` for the lifetime of the page.
pub(super) fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|e| js_error(event, e))?;
    cb.forget();
    Ok(())
}

/// Same as [`listen`] but marks the listener non-passive so it may call
/// `preventDefault` on touch-driven events.
pub(super) fn listen_active<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_passive(false);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            cb.as_ref().unchecked_ref(),
            &opts,
        )
        .map_err(|e| js_error(event, e))?;
    cb.forget();
    Ok(())
}

/// `event.detail[key]` for htmx custom events.
pub(super) fn detail_field(event: &web_sys::Event, key: &str) -> Option<JsValue> {
    let detail = event.dyn_ref::<web_sys::CustomEvent>()?.detail();
    if detail.is_null() || detail.is_undefined() {
        return None;
    }
    js_sys::Reflect::get(&detail, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_null() && !v.is_undefined())
}

pub(super) fn event_target_element(event: &web_sys::Event) -> Option<web_sys::Element> {
    event.target()?.dyn_into::<web_sys::Element>().ok()
}
