//! Modal dialog state machine — visibility flag plus ok/cancel wiring.
//!
//! Exactly one dialog exists at a time; opening while already visible is
//! idempotent. The state machine is Hidden → Visible on open, and back to
//! Hidden on any of confirm, cancel, or dismiss. Confirm and cancel fire a
//! caller-supplied callback before hiding; dismiss (backdrop tap / swipe)
//! only hides.

use std::fmt;

type Callback = Box<dyn FnMut()>;

/// Visibility flag and callback wiring for the single modal dialog.
///
/// Owned by the controller layer rather than any screen, so tests can
/// drive the full state machine without rendering.
#[derive(Default)]
pub struct DialogState {
    visible: bool,
    on_ok: Option<Callback>,
    on_cancel: Option<Callback>,
}

impl DialogState {
    /// Hidden dialog with no callbacks wired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire the confirm callback.
    pub fn set_on_ok(&mut self, callback: impl FnMut() + 'static) {
        self.on_ok = Some(Box::new(callback));
    }

    /// Wire the cancel callback.
    pub fn set_on_cancel(&mut self, callback: impl FnMut() + 'static) {
        self.on_cancel = Some(Box::new(callback));
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the dialog. Idempotent: opening while visible stays visible.
    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Confirm: fire the ok callback once, then hide. No-op while hidden.
    pub fn confirm(&mut self) {
        if !self.visible {
            return;
        }
        if let Some(callback) = &mut self.on_ok {
            callback();
        }
        self.visible = false;
    }

    /// Cancel: fire the cancel callback once, then hide. No-op while hidden.
    pub fn cancel(&mut self) {
        if !self.visible {
            return;
        }
        if let Some(callback) = &mut self.on_cancel {
            callback();
        }
        self.visible = false;
    }

    /// Dismiss (backdrop tap): hide without firing any callback.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

impl fmt::Debug for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogState")
            .field("visible", &self.visible)
            .field("on_ok", &self.on_ok.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}
