//! Keyboard mapping for the chip input.
//!
//! Maps a key press plus the current input state to a chip command. Keys that
//! map to nothing belong to the text field.

use chip_input_core::ChipAction;
use egui::{Key, Modifiers};

/// State the mapping depends on.
#[derive(Debug, Clone, Copy)]
pub struct KeyContext<'a> {
    pub input_text: &'a str,
    pub has_selection: bool,
}

impl KeyContext<'_> {
    fn has_input_text(&self) -> bool {
        !self.input_text.is_empty()
    }
}

/// What a handled key press asks the host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCommand {
    Action(ChipAction),
    Copy,
    Cut,
    Paste,
}

/// Maps one key press. Returns `None` when the text field should get the key.
pub fn map_key(key: Key, modifiers: Modifiers, cx: KeyContext<'_>) -> Option<KeyCommand> {
    let ctrl = modifiers.ctrl || modifiers.command;
    if ctrl {
        return match key {
            Key::A if !cx.has_input_text() => Some(KeyCommand::Action(ChipAction::SelectAll)),
            Key::C if cx.has_selection => Some(KeyCommand::Copy),
            Key::X if cx.has_selection => Some(KeyCommand::Cut),
            Key::V => Some(KeyCommand::Paste),
            _ => None,
        };
    }
    let action = match key {
        Key::Enter => ChipAction::CreateFromText(cx.input_text.to_string()),
        Key::Backspace if cx.has_selection || !cx.has_input_text() => {
            ChipAction::RemoveSelectedOrLast {
                has_input_text: cx.has_input_text(),
            }
        }
        // Delete never falls back to the last chip.
        Key::Delete if cx.has_selection => ChipAction::RemoveSelectedOrLast {
            has_input_text: true,
        },
        Key::Escape if cx.has_selection => ChipAction::ClearSelection,
        _ => return None,
    };
    Some(KeyCommand::Action(action))
}
