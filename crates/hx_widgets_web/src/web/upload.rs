use std::cell::RefCell;
use std::rc::Rc;

use hx_widgets::upload::{ProgressSink, UploadProgress, UploadProgressReporter};
use hx_widgets::{Result, WidgetConfig};
use tracing::debug;
use wasm_bindgen::JsCast;

use super::dom::{detail_field, event_target_element, html_element_by_id, input_by_id, listen};

/// Looks the bar and file input up on every write, so a form swapped in by
/// htmx after start-up is the one that moves.
struct DomProgressSink {
    doc: web_sys::Document,
    bar_id: String,
    file_input_id: String,
}

impl ProgressSink for DomProgressSink {
    fn set_bar_width(&mut self, width: &str) {
        match html_element_by_id(&self.doc, &self.bar_id) {
            Ok(bar) => {
                let _ = bar.style().set_property("width", width);
            }
            Err(e) => debug!(error = %e, "progress bar gone, width dropped"),
        }
    }

    fn clear_file_input(&mut self) {
        match input_by_id(&self.doc, &self.file_input_id) {
            Ok(input) => input.set_value(""),
            Err(e) => debug!(error = %e, "file input gone, nothing to clear"),
        }
    }
}

/// Wires the progress bar to the upload form's htmx events. Returns
/// `Ok(false)` when the page has no progress bar.
pub(super) fn bind(doc: &web_sys::Document, cfg: &WidgetConfig) -> Result<bool> {
    if doc.get_element_by_id(&cfg.progress_bar_id).is_none() {
        return Ok(false);
    }
    // Checked once here so a broken layout is reported at start-up.
    html_element_by_id(doc, &cfg.progress_bar_id)?;
    input_by_id(doc, &cfg.file_input_id)?;

    let sink = DomProgressSink {
        doc: doc.clone(),
        bar_id: cfg.progress_bar_id.clone(),
        file_input_id: cfg.file_input_id.clone(),
    };
    let reporter = Rc::new(RefCell::new(UploadProgressReporter::new(
        cfg.upload_form_id.clone(),
        sink,
    )));

    listen(doc, "htmx:xhr:progress", {
        let reporter = Rc::clone(&reporter);
        move |ev: web_sys::Event| {
            let Some(form) = event_target_element(&ev) else {
                return;
            };
            let field = |k: &str| detail_field(&ev, k).and_then(|v| v.as_f64()).unwrap_or(0.0);
            let progress = UploadProgress::new(field("loaded"), field("total"));
            reporter.borrow_mut().on_progress(&form.id(), progress);
        }
    })?;

    listen(doc, "htmx:afterRequest", {
        let reporter = Rc::clone(&reporter);
        move |ev: web_sys::Event| {
            let issuer = detail_field(&ev, "elt")
                .and_then(|v| v.dyn_into::<web_sys::Element>().ok())
                .map(|el| el.id());
            reporter.borrow_mut().on_after_request(issuer.as_deref());
        }
    })?;

    Ok(true)
}
