/// Behavior of the chip input through the full demo app harness.
mod common;

use chip_input_core::{codec, ChipAction, TokenId};
use chip_input_ui::widget::REMOVE_LABEL;
use chip_input_ui::MemoryClipboard;
use egui::{Key, Modifiers};
use egui_kittest::kittest::Queryable;

use common::{create_harness, create_harness_with, labels, test_config};

fn ctrl() -> Modifiers {
    Modifiers {
        ctrl: true,
        ..Default::default()
    }
}

fn selection(harness: &egui_kittest::Harness<'static, chip_input_ui::App>) -> Vec<bool> {
    harness.state().tokens.iter().map(|t| t.selected).collect()
}

// ── Startup ────────────────────────────────────────────────────────────────

#[test]
fn test_starts_empty_without_chips() {
    let mut harness = create_harness_with(None, test_config(), MemoryClipboard::default());
    harness.run();
    assert!(harness.state().tokens.is_empty());
    harness.get_by_label("0 chips");
}

#[test]
fn test_startup_chips_are_rendered() {
    let mut harness = create_harness();
    harness.run();
    assert_eq!(labels(harness.state()), vec!["React", "TypeScript", "Vite"]);
    harness.get_by_label("React");
    harness.get_by_label("TypeScript");
    harness.get_by_label("Vite");
    harness.get_by_label("3 chips");
}

#[test]
fn test_startup_chips_from_payload() {
    let payload = r#"__CHIPINPUT__:{"version":1,"chips":[{"id":"9","label":"Rust","value":"rust-lang"}]}"#;
    let harness = create_harness_with(Some(payload), test_config(), MemoryClipboard::default());
    let app = harness.state();
    assert_eq!(labels(app), vec!["Rust"]);
    assert_eq!(app.tokens[0].value, "rust-lang");
    assert_eq!(app.tokens[0].id.as_str(), "t-1");
}

#[test]
fn test_invalid_startup_chips_are_ignored() {
    let harness = create_harness_with(Some(" , ,"), test_config(), MemoryClipboard::default());
    assert!(harness.state().tokens.is_empty());
}

// ── Mouse ──────────────────────────────────────────────────────────────────

#[test]
fn test_click_selects_single_chip() {
    let mut harness = create_harness();
    harness.run();
    harness.get_by_label("TypeScript").click();
    harness.run();
    assert_eq!(selection(&harness), vec![false, true, false]);
}

#[test]
fn test_click_replaces_selection() {
    let mut harness = create_harness();
    harness.state_mut().dispatch(ChipAction::SelectAll);
    harness.run();
    harness.get_by_label("Vite").click();
    harness.run();
    assert_eq!(selection(&harness), vec![false, false, true]);
}

#[test]
fn test_click_selected_chip_deselects() {
    let mut harness = create_harness();
    harness.run();
    harness.get_by_label("React").click();
    harness.run();
    harness.get_by_label("React").click();
    harness.run();
    assert_eq!(selection(&harness), vec![false, false, false]);
}

#[test]
fn test_click_returns_focus_to_input() {
    let mut harness = create_harness();
    harness.run();
    harness.get_by_label("React").click();
    harness.run();
    let input_id = harness.state().input_id();
    assert!(harness.ctx.memory(|m| m.has_focus(input_id)));
}

#[test]
fn test_disabled_chip_ignores_clicks() {
    let mut harness = create_harness();
    harness.state_mut().tokens[0].disabled = true;
    harness.run();
    harness.get_by_label("React").click();
    harness.run();
    assert_eq!(selection(&harness), vec![false, false, false]);
}

#[test]
fn test_remove_button_removes_its_chip() {
    let mut harness = create_harness();
    harness.run();
    harness
        .get_all_by_label(REMOVE_LABEL)
        .next()
        .expect("remove button")
        .click();
    harness.run();
    assert_eq!(labels(harness.state()), vec!["TypeScript", "Vite"]);
}

// ── Keyboard ───────────────────────────────────────────────────────────────

#[test]
fn test_backspace_with_empty_input_removes_last_chip() {
    let mut harness = create_harness();
    harness.run();
    harness.key_press(Key::Backspace);
    harness.run();
    assert_eq!(labels(harness.state()), vec!["React", "TypeScript"]);
}

#[test]
fn test_backspace_with_input_text_keeps_chips() {
    let mut harness = create_harness();
    harness.state_mut().input_text = "ab".to_string();
    harness.run();
    harness.key_press(Key::Backspace);
    harness.run();
    assert_eq!(harness.state().tokens.len(), 3);
}

#[test]
fn test_backspace_removes_selection() {
    let mut harness = create_harness();
    harness.state_mut().dispatch(ChipAction::ToggleSelection {
        id: TokenId::from("t-2"),
        multi_select: false,
    });
    harness.run();
    harness.key_press(Key::Backspace);
    harness.run();
    assert_eq!(labels(harness.state()), vec!["React", "Vite"]);
}

#[test]
fn test_delete_without_selection_keeps_chips() {
    let mut harness = create_harness();
    harness.run();
    harness.key_press(Key::Delete);
    harness.run();
    assert_eq!(harness.state().tokens.len(), 3);
}

#[test]
fn test_enter_creates_chip_and_clears_input() {
    let mut harness = create_harness();
    harness.state_mut().input_text = "  Rust ".to_string();
    harness.run();
    harness.key_press(Key::Enter);
    harness.run();
    let app = harness.state();
    assert_eq!(labels(app), vec!["React", "TypeScript", "Vite", "Rust"]);
    assert!(app.input_text.is_empty());
    harness.get_by_label("Rust");
}

#[test]
fn test_enter_rejected_keeps_input() {
    let config = chip_input_config::ChipInputConfig {
        max_label_len: 3,
        ..test_config()
    };
    let mut harness = create_harness_with(Some("Go"), config, MemoryClipboard::default());
    harness.state_mut().input_text = "Rust".to_string();
    harness.run();
    harness.key_press(Key::Enter);
    harness.run();
    let app = harness.state();
    assert_eq!(labels(app), vec!["Go"]);
    assert_eq!(app.input_text, "Rust");
    assert!(app.status.contains("rejected"));
}

#[test]
fn test_ctrl_a_then_escape() {
    let mut harness = create_harness();
    harness.run();
    harness.key_press_modifiers(ctrl(), Key::A);
    harness.run();
    assert_eq!(selection(&harness), vec![true, true, true]);

    harness.key_press(Key::Escape);
    harness.run();
    assert_eq!(selection(&harness), vec![false, false, false]);
}

// ── Clipboard ──────────────────────────────────────────────────────────────

#[test]
fn test_ctrl_c_copies_selection_as_payload() {
    let mut harness = create_harness();
    harness.state_mut().dispatch(ChipAction::ToggleSelection {
        id: TokenId::from("t-3"),
        multi_select: false,
    });
    harness.state_mut().dispatch(ChipAction::ToggleSelection {
        id: TokenId::from("t-1"),
        multi_select: true,
    });
    harness.run();
    harness.key_press_modifiers(ctrl(), Key::C);
    harness.run();

    let copied = harness.state_mut().clipboard_text().expect("clipboard text");
    assert_eq!(
        copied,
        r#"__CHIPINPUT__:{"version":1,"chips":[{"id":"t-1","label":"React","value":"React"},{"id":"t-3","label":"Vite","value":"Vite"}]}"#
    );
    assert_eq!(harness.state().tokens.len(), 3);
}

#[test]
fn test_ctrl_c_without_selection_leaves_clipboard() {
    let mut harness = create_harness_with(
        Some("React"),
        test_config(),
        MemoryClipboard::with_text("untouched"),
    );
    harness.run();
    harness.key_press_modifiers(ctrl(), Key::C);
    harness.run();
    assert_eq!(harness.state_mut().clipboard_text().as_deref(), Some("untouched"));
}

#[test]
fn test_ctrl_x_cuts_selection() {
    let mut harness = create_harness();
    harness.state_mut().dispatch(ChipAction::ToggleSelection {
        id: TokenId::from("t-2"),
        multi_select: false,
    });
    harness.run();
    harness.key_press_modifiers(ctrl(), Key::X);
    harness.run();

    assert_eq!(labels(harness.state()), vec!["React", "Vite"]);
    let copied = harness.state_mut().clipboard_text().expect("clipboard text");
    assert!(codec::is_recognized_format(&copied));
    assert!(copied.contains("TypeScript"));
}

#[test]
fn test_ctrl_v_pastes_plain_text() {
    let mut harness = create_harness_with(
        Some("React"),
        test_config(),
        MemoryClipboard::with_text("Deno, Bun"),
    );
    harness.state_mut().dispatch(ChipAction::SelectAll);
    harness.run();
    harness.key_press_modifiers(ctrl(), Key::V);
    harness.run();

    let app = harness.state();
    assert_eq!(labels(app), vec!["React", "Deno", "Bun"]);
    assert!(app.tokens.iter().all(|t| !t.selected));
    assert_eq!(app.status, "Pasted 2 chip(s)");
}

#[test]
fn test_copy_then_paste_assigns_new_ids() {
    let mut harness = create_harness();
    harness.state_mut().dispatch(ChipAction::SelectAll);
    harness.run();
    harness.key_press_modifiers(ctrl(), Key::C);
    harness.run();
    harness.key_press_modifiers(ctrl(), Key::V);
    harness.run();

    let app = harness.state();
    assert_eq!(
        labels(app),
        vec!["React", "TypeScript", "Vite", "React", "TypeScript", "Vite"]
    );
    let ids: Vec<&str> = app.tokens.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t-1", "t-2", "t-3", "t-4", "t-5", "t-6"]);
}

#[test]
fn test_paste_event_appends_chips() {
    let mut harness = create_harness();
    harness.run();
    harness.event(egui::Event::Paste("Node,  Bun ,".to_string()));
    harness.run();
    assert_eq!(
        labels(harness.state()),
        vec!["React", "TypeScript", "Vite", "Node", "Bun"]
    );
}

#[test]
fn test_paste_unsupported_version_is_rejected() {
    let mut harness = create_harness();
    harness.state_mut().input_text = "draft".to_string();
    harness.run();
    harness.event(egui::Event::Paste(
        r#"__CHIPINPUT__:{"version":999,"chips":[]}"#.to_string(),
    ));
    harness.run();

    let app = harness.state();
    assert_eq!(app.tokens.len(), 3);
    assert_eq!(app.input_text, "draft");
    assert!(app.status.contains("unsupported"));
}

#[test]
fn test_paste_degenerate_text_is_ignored() {
    let mut harness = create_harness();
    harness.run();
    harness.event(egui::Event::Paste(",,,".to_string()));
    harness.run();
    let app = harness.state();
    assert_eq!(app.tokens.len(), 3);
    assert_eq!(app.status, "Nothing to paste");
}
