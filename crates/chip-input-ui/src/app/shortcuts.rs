//! Keyboard and clipboard event handling.
//!
//! Runs before the chip input is drawn. Events turned into chip commands are
//! removed from the frame's input so the text field does not see them too.

use eframe::egui;

use chip_input_core::controller;

use super::App;
use crate::keymap::{map_key, KeyCommand, KeyContext};

impl App {
    /// Handles chip shortcuts and semantic clipboard events for this frame.
    pub(crate) fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|i| i.events.clone());

        // Integrations may report Ctrl+C/X/V both as a key press and as a
        // semantic event; each clipboard command runs at most once per frame.
        let semantic_copy = events.iter().any(|e| matches!(e, egui::Event::Copy));
        let semantic_cut = events.iter().any(|e| matches!(e, egui::Event::Cut));
        let semantic_paste = events.iter().any(|e| matches!(e, egui::Event::Paste(_)));

        let mut consumed = Vec::new();
        for (idx, event) in events.iter().enumerate() {
            let handled = match event {
                egui::Event::Copy => self.copy(),
                egui::Event::Cut => {
                    let had_selection = controller::has_selection(&self.tokens);
                    self.cut();
                    had_selection
                }
                egui::Event::Paste(text) => {
                    self.paste_text(text);
                    true
                }
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => {
                    let cx = KeyContext {
                        input_text: &self.input_text,
                        has_selection: controller::has_selection(&self.tokens),
                    };
                    match map_key(*key, *modifiers, cx) {
                        Some(KeyCommand::Copy) if !semantic_copy => self.copy(),
                        Some(KeyCommand::Cut) if !semantic_cut => {
                            self.cut();
                            true
                        }
                        Some(KeyCommand::Paste) if !semantic_paste => {
                            self.paste();
                            true
                        }
                        Some(KeyCommand::Action(action)) => {
                            self.dispatch(action);
                            true
                        }
                        _ => false,
                    }
                }
                _ => false,
            };
            if handled {
                consumed.push(idx);
            }
        }

        if !consumed.is_empty() {
            ctx.input_mut(|i| {
                let mut idx = 0;
                i.events.retain(|_| {
                    let keep = !consumed.contains(&idx);
                    idx += 1;
                    keep
                });
            });
        }
    }
}
