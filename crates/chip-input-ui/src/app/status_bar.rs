//! Status bar: chip count, selection count, plain-text view and last message.

use eframe::egui;

use chip_input_core::codec;

use super::App;

/// Formats a count with a singular or plural noun.
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

impl App {
    pub(crate) fn show_status_bar(&mut self, ui: &mut egui::Ui) {
        let selected = self.tokens.iter().filter(|t| t.selected).count();
        ui.horizontal(|ui| {
            ui.add(egui::Label::new(plural(self.tokens.len(), "chip")).selectable(false));
            ui.separator();
            ui.add(egui::Label::new(format!("{selected} selected")).selectable(false));
            if !self.tokens.is_empty() {
                ui.separator();
                ui.add(
                    egui::Label::new(codec::to_display_text(&self.tokens))
                        .truncate()
                        .selectable(false),
                );
            }
            if !self.status.is_empty() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(egui::Label::new(self.status.as_str()).selectable(false));
                });
            }
        });
    }
}
