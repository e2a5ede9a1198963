//! Chat interaction state.
//!
//! `ChatSession` owns the three pieces of state behind the chat page:
//! the draft text, the pending flag, and the last response payload.
//! The UI layer keeps a session in a signal and drives it through the
//! three-phase lifecycle: `update_draft` on input, `begin_submission`
//! when the user sends, `complete_submission` when the request ends.

use serde_json::{Value, json};

/// Shown in place of a reply when the request itself fails.
pub const CONNECT_ERROR: &str = "Failed to connect to the Financial Advisor API";

/// The fixed payload stored when the API could not be reached or did
/// not return JSON.
pub fn connection_error() -> Value {
    json!({ "error": CONNECT_ERROR })
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ChatSession {
    draft: String,
    response: Option<Value>,
    pending: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn response(&self) -> Option<&Value> {
        self.response.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Replaces the draft. Last write wins; the draft is never cleared
    /// automatically, not even after a send.
    pub fn update_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Starts a request cycle and returns the message to send.
    ///
    /// Returns `None` when the draft is empty or whitespace-only, or
    /// when a request is already in flight. Both are silent no-ops
    /// that leave the session untouched. Otherwise the pending flag is
    /// raised and the previous response is cleared in the same step,
    /// so the UI never shows a stale reply next to a spinner.
    pub fn begin_submission(&mut self) -> Option<String> {
        if self.pending || self.draft.trim().is_empty() {
            return None;
        }
        self.pending = true;
        self.response = None;
        Some(self.draft.clone())
    }

    /// Ends the cycle started by [`begin_submission`](Self::begin_submission).
    ///
    /// The payload is stored verbatim; a synthesized error object on
    /// the failure path looks the same to the renderer as a real reply.
    /// The caller must invoke this on every exit path of the request so
    /// the pending flag cannot stay stuck.
    pub fn complete_submission(&mut self, payload: Value) {
        self.response = Some(payload);
        self.pending = false;
    }
}
