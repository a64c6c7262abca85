//! # hx_widgets
//!
//! Host-side state for the small interaction helpers that sit on top of
//! server-rendered htmx fragments.
//!
//! Nothing in this crate touches the DOM. Each helper exposes a plain state
//! machine plus a narrow trait seam (`ModalView`, `ProgressSink`) that the
//! wasm bindings in `hx_widgets_web` implement against real elements and the
//! tests implement with in-memory doubles.
//!
//! ## Modules
//!
//! - [`confirm`]: confirmation gate in front of `hx-confirm` requests
//! - [`upload`]: progress bar updates for the upload form
//! - [`tiles`]: the five-letter tile input
//! - [`wordle`]: the word game the tile input feeds
//! - [`config`]: element ids/selectors and strictness

pub mod config;
pub mod confirm;
pub mod error;
pub mod tiles;
pub mod upload;
pub mod wordle;

pub use config::{Strictness, WidgetConfig};
pub use error::{Error, Result};

pub mod prelude {
    pub use crate::config::{Strictness, WidgetConfig};
    pub use crate::confirm::{ConfirmRequest, ConfirmationGate, GateDecision, ModalView};
    pub use crate::error::{Error, Result};
    pub use crate::tiles::{LetterSequence, Tile, TileCommand, TileEffect, TileInput};
    pub use crate::upload::{ProgressSink, UploadProgress, UploadProgressReporter};
    pub use crate::wordle::{Dictionary, Game, GuessOutcome, LetterState, WordState};
}
