//! Confirmation gate for `hx-confirm` requests.
//!
//! htmx fires its confirm event before every request. Requests from elements
//! without the confirm attribute pass straight through. Marked ones are held
//! as a [`PendingAction`] while the modal is open; proceeding resumes the
//! request with the native prompt skipped, dismissing drops it.
//!
//! Only one action is ever pending. The proceed and dismiss controls are wired
//! once and always act on whatever is pending at click time, so a page that
//! confirms many times still resumes each request at most once.

use std::fmt;

use tracing::debug;

/// Re-issues the intercepted request. The flag asks the caller to skip its
/// own (native) confirmation prompt.
pub type Resume = Box<dyn FnOnce(bool)>;

pub struct ConfirmRequest {
    pub requires_confirmation: bool,
    pub question: String,
    resume: Resume,
}

impl ConfirmRequest {
    pub fn new(
        requires_confirmation: bool,
        question: impl Into<String>,
        resume: impl FnOnce(bool) + 'static,
    ) -> Self {
        Self {
            requires_confirmation,
            question: question.into(),
            resume: Box::new(resume),
        }
    }
}

impl fmt::Debug for ConfirmRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmRequest")
            .field("requires_confirmation", &self.requires_confirmation)
            .field("question", &self.question)
            .finish_non_exhaustive()
    }
}

pub struct PendingAction {
    question: String,
    resume: Resume,
}

impl PendingAction {
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Re-issues the request with the native prompt skipped.
    pub fn resume(self) {
        (self.resume)(true);
    }
}

impl fmt::Debug for PendingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingAction")
            .field("question", &self.question)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Not a confirm-requiring element; the default behavior must run.
    Passthrough,
    /// The default behavior must be prevented; the modal is showing.
    Intercepted,
}

impl GateDecision {
    pub fn prevents_default(self) -> bool {
        matches!(self, GateDecision::Intercepted)
    }
}

pub trait ModalView {
    fn show(&mut self, question: &str);
    fn hide(&mut self);
}

pub struct ConfirmationGate<M> {
    modal: M,
    pending: Option<PendingAction>,
    open: bool,
}

impl<M: ModalView> ConfirmationGate<M> {
    pub fn new(modal: M) -> Self {
        Self {
            modal,
            pending: None,
            open: false,
        }
    }

    pub fn modal(&self) -> &M {
        &self.modal
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    pub fn on_confirm(&mut self, req: ConfirmRequest) -> GateDecision {
        if !req.requires_confirmation {
            return GateDecision::Passthrough;
        }

        if let Some(stale) = self.pending.take() {
            debug!(question = %stale.question, "dropping stale confirmation");
        }

        self.modal.show(&req.question);
        self.open = true;
        debug!(question = %req.question, "confirmation requested");
        self.pending = Some(PendingAction {
            question: req.question,
            resume: req.resume,
        });
        GateDecision::Intercepted
    }

    /// Hides the modal and hands back the pending action for the caller to
    /// resume once it no longer holds the gate.
    pub fn take_confirmed(&mut self) -> Option<PendingAction> {
        let action = self.pending.take()?;
        self.open = false;
        self.modal.hide();
        debug!(question = %action.question, "confirmed");
        Some(action)
    }

    /// Hides the modal and resumes the pending action. Returns `false` when
    /// nothing was pending.
    pub fn proceed(&mut self) -> bool {
        match self.take_confirmed() {
            Some(action) => {
                action.resume();
                true
            }
            None => false,
        }
    }

    /// Hides the modal and abandons the pending action, if any.
    pub fn dismiss(&mut self) -> bool {
        self.open = false;
        self.modal.hide();
        self.drop_pending("confirmation dismissed")
    }

    /// The modal was closed outside the gate (Escape, backdrop click, a
    /// close control handled by the modal library). Drops the pending action
    /// without touching the modal. Closes the gate itself started are ignored.
    pub fn on_closed(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.drop_pending("modal closed, confirmation abandoned")
    }

    fn drop_pending(&mut self, reason: &'static str) -> bool {
        match self.pending.take() {
            Some(action) => {
                debug!(question = %action.question, "{reason}");
                true
            }
            None => false,
        }
    }
}
