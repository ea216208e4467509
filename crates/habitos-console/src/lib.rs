//! Canned console responder: per-mode advisory tables behind the core's
//! responder seam.
//!
//! Replies are chosen from a fixed table per [`ConsoleMode`]; the user's text
//! is not inspected. Which entry is chosen is delegated to an injectable
//! picker so callers that need a deterministic console can pin it.

mod responses;

use std::time::{SystemTime, UNIX_EPOCH};

use habitos_core::{ConsoleMode, ConsoleResponder};

use responses::responses_for;

/// Picks an index into a response table of `len` entries. Results are taken
/// modulo `len`, so any value is safe to return.
pub type ResponsePicker = Box<dyn Fn(usize) -> usize + Send + Sync>;

/// [`ConsoleResponder`] backed by fixed per-mode tables.
pub struct CannedResponder {
    picker: ResponsePicker,
}

impl CannedResponder {
    /// Responder that varies its choice by the subsecond clock.
    pub fn new() -> Self {
        Self::with_picker(Box::new(|len| {
            let millis = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0);
            millis as usize % len.max(1)
        }))
    }

    /// Responder with a caller-supplied table picker.
    pub fn with_picker(picker: ResponsePicker) -> Self {
        Self { picker }
    }
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleResponder for CannedResponder {
    fn respond(&self, mode: ConsoleMode, _user_text: &str) -> String {
        let table = responses_for(mode);
        let index = (self.picker)(table.len()) % table.len();
        tracing::debug!(
            target: "habitos::console",
            mode = mode.as_str(),
            index,
            "canned reply selected"
        );
        table[index].to_string()
    }
}
