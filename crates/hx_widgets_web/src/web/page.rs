//! Page-wide guards: double-click suppression and history snapshot cleanup.

use hx_widgets::{Result, WidgetConfig};
use tracing::debug;

use super::dom::{listen, listen_active, query_all};

pub(super) fn bind(doc: &web_sys::Document, cfg: &WidgetConfig) -> Result<bool> {
    // Rapid taps on the on-screen keyboard must not select text or zoom.
    listen_active(doc, "dblclick", |ev: web_sys::Event| ev.prevent_default())?;

    let selector = cfg.template_selector();
    let snapshot_doc = doc.clone();
    listen(doc, "htmx:beforeHistorySave", move |_ev: web_sys::Event| {
        let Ok(nodes) = query_all(&snapshot_doc, &selector) else {
            return;
        };
        for node in &nodes {
            node.remove();
        }
        debug!(removed = nodes.len(), "stripped templated nodes before history save");
    })?;

    Ok(true)
}
