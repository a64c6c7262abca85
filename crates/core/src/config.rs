//! Element ids and selectors the helpers bind to.
//!
//! Defaults match the markup the server renders. A page can override any of
//! them with a JSON block; missing fields keep their default.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How binding failures (missing elements, wrong element types) are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Fail on the first binding error.
    Strict,
    /// Log and skip the component that could not be bound.
    Lenient,
}

impl Default for Strictness {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Strictness::Strict
        } else {
            Strictness::Lenient
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default = "default_confirm_attr")]
    pub confirm_attr: String,
    #[serde(default = "default_modal_id")]
    pub modal_id: String,
    #[serde(default = "default_modal_text_id")]
    pub modal_text_id: String,
    #[serde(default = "default_dismiss_selector")]
    pub dismiss_selector: String,
    #[serde(default = "default_proceed_id")]
    pub proceed_id: String,

    #[serde(default = "default_upload_form_id")]
    pub upload_form_id: String,
    #[serde(default = "default_progress_bar_id")]
    pub progress_bar_id: String,
    #[serde(default = "default_file_input_id")]
    pub file_input_id: String,

    #[serde(default = "default_tile_row_selector")]
    pub tile_row_selector: String,
    #[serde(default = "default_guess_input_id")]
    pub guess_input_id: String,
    #[serde(default = "default_swap_target_id")]
    pub swap_target_id: String,
    #[serde(default = "default_template_marker_attr")]
    pub template_marker_attr: String,

    #[serde(default)]
    pub strictness: Strictness,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_confirm_attr() -> String {
    "hx-confirm".to_string()
}

fn default_modal_id() -> String {
    "confirm-modal".to_string()
}

fn default_modal_text_id() -> String {
    "confirm-modal-text".to_string()
}

// Bootstrap 5 markup uses `data-bs-dismiss`; older pages use `data-dismiss`.
fn default_dismiss_selector() -> String {
    "[data-bs-dismiss='modal'], [data-dismiss='modal']".to_string()
}

fn default_proceed_id() -> String {
    "confirm-modal-proceed".to_string()
}

fn default_upload_form_id() -> String {
    "img-upload-form".to_string()
}

fn default_progress_bar_id() -> String {
    "progress".to_string()
}

fn default_file_input_id() -> String {
    "form-file".to_string()
}

fn default_tile_row_selector() -> String {
    "[data-tile-row]".to_string()
}

fn default_guess_input_id() -> String {
    "guess".to_string()
}

fn default_swap_target_id() -> String {
    "wordle-content".to_string()
}

fn default_template_marker_attr() -> String {
    "data-from-template".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            confirm_attr: default_confirm_attr(),
            modal_id: default_modal_id(),
            modal_text_id: default_modal_text_id(),
            dismiss_selector: default_dismiss_selector(),
            proceed_id: default_proceed_id(),
            upload_form_id: default_upload_form_id(),
            progress_bar_id: default_progress_bar_id(),
            file_input_id: default_file_input_id(),
            tile_row_selector: default_tile_row_selector(),
            guess_input_id: default_guess_input_id(),
            swap_target_id: default_swap_target_id(),
            template_marker_attr: default_template_marker_attr(),
            strictness: Strictness::default(),
            log_level: default_log_level(),
        }
    }
}

impl WidgetConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let cfg: WidgetConfig =
            serde_json::from_str(raw).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("confirm_attr", &self.confirm_attr),
            ("modal_id", &self.modal_id),
            ("modal_text_id", &self.modal_text_id),
            ("dismiss_selector", &self.dismiss_selector),
            ("proceed_id", &self.proceed_id),
            ("upload_form_id", &self.upload_form_id),
            ("progress_bar_id", &self.progress_bar_id),
            ("file_input_id", &self.file_input_id),
            ("tile_row_selector", &self.tile_row_selector),
            ("guess_input_id", &self.guess_input_id),
            ("swap_target_id", &self.swap_target_id),
            ("template_marker_attr", &self.template_marker_attr),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }

    /// Selector for elements that require confirmation, e.g. `[hx-confirm]`.
    pub fn confirm_selector(&self) -> String {
        format!("[{}]", self.confirm_attr)
    }

    /// Selector for nodes stamped out by the client-side templating overlay.
    pub fn template_selector(&self) -> String {
        format!("[{}]", self.template_marker_attr)
    }

    /// `tracing` level filter; unknown names fall back to `info`.
    pub fn level(&self) -> tracing::Level {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "warn" | "warning" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => tracing::Level::INFO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_rendered_markup() {
        let cfg = WidgetConfig::default();
        assert_eq!(cfg.modal_id, "confirm-modal");
        assert_eq!(cfg.proceed_id, "confirm-modal-proceed");
        assert_eq!(cfg.upload_form_id, "img-upload-form");
        assert_eq!(cfg.confirm_selector(), "[hx-confirm]");
        assert_eq!(cfg.template_selector(), "[data-from-template]");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn default_dismiss_selector_covers_both_bootstrap_attributes() {
        let cfg = WidgetConfig::default();
        assert!(cfg.dismiss_selector.contains("[data-bs-dismiss='modal']"));
        assert!(cfg.dismiss_selector.contains("[data-dismiss='modal']"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = WidgetConfig::from_json(r#"{ "progress_bar_id": "bar", "strictness": "lenient" }"#)
            .unwrap();
        assert_eq!(cfg.progress_bar_id, "bar");
        assert_eq!(cfg.strictness, Strictness::Lenient);
        assert_eq!(cfg.file_input_id, "form-file");
    }

    #[test]
    fn empty_ids_are_rejected() {
        let err = WidgetConfig::from_json(r#"{ "modal_id": "  " }"#).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidConfig("modal_id must not be empty".to_string())
        );
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = WidgetConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn log_level_parsing_is_forgiving() {
        let mut cfg = WidgetConfig::default();
        cfg.log_level = "DEBUG".into();
        assert_eq!(cfg.level(), tracing::Level::DEBUG);
        cfg.log_level = "loud".into();
        assert_eq!(cfg.level(), tracing::Level::INFO);
    }
}
