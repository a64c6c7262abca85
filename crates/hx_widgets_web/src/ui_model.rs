//! Binding policy and tile styling that should be available on both wasm and
//! native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test them
//! on the host.

use hx_widgets::tiles::Tile;
use hx_widgets::{Error, Result, Strictness, WidgetConfig};
use tracing::{debug, error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    PageGuards,
    ConfirmationGate,
    UploadProgress,
    TileInput,
}

impl Component {
    pub fn label(self) -> &'static str {
        match self {
            Component::PageGuards => "page_guards",
            Component::ConfirmationGate => "confirmation_gate",
            Component::UploadProgress => "upload_progress",
            Component::TileInput => "tile_input",
        }
    }

    pub fn all() -> &'static [Component] {
        &[
            Component::PageGuards,
            Component::ConfirmationGate,
            Component::UploadProgress,
            Component::TileInput,
        ]
    }
}

/// Outcome of trying to bind one component to the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    Bound,
    /// The component's anchor element is not on this page.
    Absent,
    Skipped(Error),
}

/// Applies `strictness` to a binding attempt. Absent components are never an
/// error; a page without an upload form simply has no progress bar.
pub fn admit(strictness: Strictness, component: Component, res: Result<bool>) -> Result<Binding> {
    match res {
        Ok(true) => {
            debug!(component = component.label(), "bound");
            Ok(Binding::Bound)
        }
        Ok(false) => {
            debug!(component = component.label(), "not on this page");
            Ok(Binding::Absent)
        }
        Err(e) => match strictness {
            Strictness::Strict => {
                error!(component = component.label(), error = %e, "binding failed");
                Err(e)
            }
            Strictness::Lenient => {
                warn!(component = component.label(), error = %e, "binding failed, skipping");
                Ok(Binding::Skipped(e))
            }
        },
    }
}

/// Applies `strictness` to the page's config block. A rejected block stops a
/// strict build; a lenient one carries on with the defaults.
pub fn resolve_config(strictness: Strictness, res: Result<WidgetConfig>) -> Result<WidgetConfig> {
    match res {
        Ok(cfg) => Ok(cfg),
        Err(e) => match strictness {
            Strictness::Strict => {
                error!(error = %e, "config rejected");
                Err(e)
            }
            Strictness::Lenient => {
                warn!(error = %e, "config rejected, using defaults");
                Ok(WidgetConfig::default())
            }
        },
    }
}

/// Classes for one tile of the live row. Empty slots get a highlighted border.
pub fn tile_classes(tile: Tile) -> &'static str {
    match tile {
        Tile::Filled(_) => "p-2 bg-light text-dark border",
        Tile::Empty => "p-2 bg-light text-dark border border-primary",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_inventory_is_stable() {
        let all = Component::all();
        assert_eq!(all.len(), 4);

        let mut labels: Vec<&'static str> = all.iter().copied().map(Component::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 4);
    }

    #[test]
    fn strict_mode_propagates_binding_errors() {
        let res = admit(
            Strictness::Strict,
            Component::ConfirmationGate,
            Err(Error::missing("confirm-modal-proceed")),
        );
        assert_eq!(res, Err(Error::missing("confirm-modal-proceed")));
    }

    #[test]
    fn lenient_mode_skips_the_component() {
        let res = admit(
            Strictness::Lenient,
            Component::UploadProgress,
            Err(Error::missing("form-file")),
        );
        assert_eq!(res, Ok(Binding::Skipped(Error::missing("form-file"))));
    }

    #[test]
    fn absent_component_is_fine_in_either_mode() {
        for s in [Strictness::Strict, Strictness::Lenient] {
            assert_eq!(admit(s, Component::UploadProgress, Ok(false)), Ok(Binding::Absent));
            assert_eq!(admit(s, Component::TileInput, Ok(true)), Ok(Binding::Bound));
        }
    }

    #[test]
    fn strict_mode_rejects_a_bad_config_block() {
        let bad = WidgetConfig::from_json("{ not json");
        let res = resolve_config(Strictness::Strict, bad);
        assert!(matches!(res, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn lenient_mode_falls_back_to_default_config() {
        let bad = WidgetConfig::from_json(r#"{ "modal_id": "" }"#);
        let cfg = resolve_config(Strictness::Lenient, bad).unwrap();
        assert_eq!(cfg.modal_id, WidgetConfig::default().modal_id);
    }

    #[test]
    fn valid_config_passes_in_either_mode() {
        for s in [Strictness::Strict, Strictness::Lenient] {
            let cfg = resolve_config(s, WidgetConfig::from_json(r#"{ "progress_bar_id": "bar" }"#))
                .unwrap();
            assert_eq!(cfg.progress_bar_id, "bar");
        }
    }

    #[test]
    fn empty_tiles_are_highlighted() {
        assert!(tile_classes(Tile::Empty).contains("border-primary"));
        assert!(!tile_classes(Tile::Filled('a')).contains("border-primary"));
    }
}
