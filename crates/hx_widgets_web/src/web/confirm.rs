use std::cell::RefCell;
use std::rc::Rc;

use hx_widgets::confirm::{ConfirmRequest, ConfirmationGate, ModalView};
use hx_widgets::{Error, Result, WidgetConfig};
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom::{
    detail_field, element_by_id, event_target_element, html_element_by_id, listen, query_all_in,
};

pub(super) struct DomModal {
    container: web_sys::HtmlElement,
    text: web_sys::HtmlElement,
}

impl DomModal {
    /// `bootstrap.Modal.getOrCreateInstance(container)[method]()`, when the
    /// page loads Bootstrap's JS.
    fn bootstrap(&self, method: &str) -> Option<()> {
        let window = web_sys::window()?;
        let bootstrap = js_sys::Reflect::get(&window, &JsValue::from_str("bootstrap")).ok()?;
        if bootstrap.is_undefined() {
            return None;
        }
        let modal = js_sys::Reflect::get(&bootstrap, &JsValue::from_str("Modal")).ok()?;
        let factory = js_sys::Reflect::get(&modal, &JsValue::from_str("getOrCreateInstance"))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()?;
        let instance = factory.call1(&modal, &self.container).ok()?;
        let f = js_sys::Reflect::get(&instance, &JsValue::from_str(method))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()?;
        f.call0(&instance).ok().map(|_| ())
    }

    fn toggle_fallback(&self, visible: bool) {
        let classes = self.container.class_list();
        let style = self.container.style();
        if visible {
            let _ = classes.add_1("show");
            let _ = style.set_property("display", "block");
            let _ = self.container.remove_attribute("aria-hidden");
        } else {
            let _ = classes.remove_1("show");
            let _ = style.set_property("display", "none");
            let _ = self.container.set_attribute("aria-hidden", "true");
        }
    }
}

impl ModalView for DomModal {
    fn show(&mut self, question: &str) {
        self.text.set_inner_text(question);
        if self.bootstrap("show").is_none() {
            self.toggle_fallback(true);
        }
    }

    fn hide(&mut self) {
        if self.bootstrap("hide").is_none() {
            self.toggle_fallback(false);
        }
    }
}

/// Wires the gate to `htmx:confirm`. Returns `Ok(false)` when the page has no
/// confirmation modal.
pub(super) fn bind(doc: &web_sys::Document, cfg: &WidgetConfig) -> Result<bool> {
    let Some(container) = doc.get_element_by_id(&cfg.modal_id) else {
        return Ok(false);
    };
    let container = container
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| Error::unexpected(cfg.modal_id.as_str(), "HtmlElement"))?;
    let text = html_element_by_id(doc, &cfg.modal_text_id)?;
    let proceed = element_by_id(doc, &cfg.proceed_id)?;
    let dismissers = query_all_in(&container, &cfg.dismiss_selector)?;

    let gate = Rc::new(RefCell::new(ConfirmationGate::new(DomModal {
        container: container.clone(),
        text,
    })));

    let selector = cfg.confirm_selector();
    listen(doc, "htmx:confirm", {
        let gate = Rc::clone(&gate);
        move |ev: web_sys::Event| {
            let requires = event_target_element(&ev)
                .map(|el| el.matches(&selector).unwrap_or(false))
                .unwrap_or(false);
            let question = detail_field(&ev, "question")
                .and_then(|v| v.as_string())
                .unwrap_or_default();
            let Some(issue) = detail_field(&ev, "issueRequest")
                .and_then(|v| v.dyn_into::<js_sys::Function>().ok())
            else {
                if requires {
                    warn!("htmx:confirm without issueRequest, letting htmx handle it");
                }
                return;
            };

            let req = ConfirmRequest::new(requires, question, move |skip_prompt| {
                if let Err(e) = issue.call1(&JsValue::NULL, &JsValue::from_bool(skip_prompt)) {
                    warn!(error = ?e, "issueRequest failed");
                }
            });
            let decision = gate.borrow_mut().on_confirm(req);
            if decision.prevents_default() {
                ev.prevent_default();
            }
        }
    })?;

    listen(&proceed, "click", {
        let gate = Rc::clone(&gate);
        move |_ev: web_sys::Event| {
            // Release the gate before htmx runs the request; it may fire
            // further events synchronously.
            let action = gate.borrow_mut().take_confirmed();
            if let Some(action) = action {
                action.resume();
            }
        }
    })?;

    for button in &dismissers {
        let gate = Rc::clone(&gate);
        listen(button, "click", move |_ev: web_sys::Event| {
            gate.borrow_mut().dismiss();
        })?;
    }

    // Closes that bypass the gate (Escape, backdrop). Bootstrap may fire this
    // synchronously inside our own `hide()`, while the gate is still borrowed.
    listen(&container, "hidden.bs.modal", {
        let gate = Rc::clone(&gate);
        move |_ev: web_sys::Event| {
            if let Ok(mut gate) = gate.try_borrow_mut() {
                gate.on_closed();
            }
        }
    })?;

    Ok(true)
}
