//! Clipboard operations on chips (cut, copy, paste).
//!
//! Copies carry the selected chips in the structured chip format; pastes accept
//! that format or comma-separated plain text.

use chip_input_core::{codec, controller, ChipAction};

use super::App;

impl App {
    /// Copies the selected chips to the clipboard. Returns false when nothing is selected.
    pub fn copy(&mut self) -> bool {
        let selected = controller::selected_tokens(&self.tokens);
        if selected.is_empty() {
            return false;
        }
        let payload = codec::encode(&selected);
        let stored = match self.clipboard.as_mut() {
            Some(clipboard) => clipboard.set_text(payload),
            None => false,
        };
        self.status = if stored {
            format!("Copied {} chip(s)", selected.len())
        } else {
            "Clipboard unavailable".to_string()
        };
        tracing::debug!("{}", self.status);
        stored
    }

    /// Copies the selected chips, then removes them.
    pub fn cut(&mut self) {
        if self.copy() {
            self.dispatch(ChipAction::RemoveSelectedOrLast {
                has_input_text: true,
            });
        }
    }

    /// Reads the clipboard and pastes its text.
    pub fn paste(&mut self) {
        let text = self.clipboard.as_mut().and_then(|c| c.get_text());
        match text {
            Some(text) => self.paste_text(&text),
            None => self.status = "Clipboard is empty".to_string(),
        }
    }

    /// Decodes clipboard text and appends the chips it contains.
    ///
    /// A rejected paste leaves the list and the typed text alone.
    pub fn paste_text(&mut self, text: &str) {
        let recognized = codec::is_recognized_format(text);
        match codec::decode(text, self.factory.ids_mut()) {
            Ok(pasted) => {
                let count = pasted.len();
                self.dispatch(ChipAction::AppendPasted(pasted));
                self.status = format!("Pasted {count} chip(s)");
            }
            Err(e) if recognized => {
                self.status = format!("Could not paste chips: {e}");
            }
            Err(_) => {
                self.status = "Nothing to paste".to_string();
            }
        }
    }

    /// Returns the current clipboard text, if any.
    pub fn clipboard_text(&mut self) -> Option<String> {
        self.clipboard.as_mut().and_then(|c| c.get_text())
    }
}
