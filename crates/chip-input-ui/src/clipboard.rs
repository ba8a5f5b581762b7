//! Plain-text clipboard access used for copying and pasting chips.

/// A read/write text clipboard.
pub trait ClipboardText {
    fn get_text(&mut self) -> Option<String>;
    /// Returns false when the text could not be stored.
    fn set_text(&mut self, text: String) -> bool;
}

/// The OS clipboard, through arboard.
pub struct SystemClipboard(arboard::Clipboard);

impl SystemClipboard {
    /// Opens the OS clipboard, or `None` when the platform has none (e.g. headless).
    pub fn open() -> Option<Self> {
        match arboard::Clipboard::new() {
            Ok(clipboard) => Some(Self(clipboard)),
            Err(e) => {
                tracing::warn!("System clipboard unavailable: {e}");
                None
            }
        }
    }
}

impl ClipboardText for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        match self.0.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!("Clipboard read failed: {e}");
                None
            }
        }
    }

    fn set_text(&mut self, text: String) -> bool {
        match self.0.set_text(text) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Clipboard write failed: {e}");
                false
            }
        }
    }
}

/// In-process clipboard for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl ClipboardText for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: String) -> bool {
        self.text = Some(text);
        true
    }
}
