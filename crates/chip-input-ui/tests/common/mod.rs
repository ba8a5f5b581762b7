use chip_input_config::ChipInputConfig;
use chip_input_core::SequentialIdGenerator;
use chip_input_ui::{App, ClipboardText, MemoryClipboard, StartupArgs};
use egui_kittest::Harness;

/// Test config: fixed dark theme so the OS preference is never consulted.
pub fn test_config() -> ChipInputConfig {
    ChipInputConfig {
        current_theme: "Dark".to_string(),
        ..Default::default()
    }
}

/// Creates a harness around an app seeded with `chips` and an in-memory clipboard.
pub fn create_harness_with(
    chips: Option<&str>,
    config: ChipInputConfig,
    clipboard: MemoryClipboard,
) -> Harness<'static, App> {
    let args = StartupArgs {
        chips: chips.map(str::to_string),
        config_path: None,
    };
    Harness::builder()
        .with_size(egui::Vec2::new(800.0, 400.0))
        .build_eframe(move |cc| {
            App::with_config(
                &cc.egui_ctx,
                config,
                &args,
                Some(Box::new(clipboard) as Box<dyn ClipboardText>),
                Box::new(SequentialIdGenerator::new("t")),
            )
        })
}

/// Creates a harness with the React/TypeScript/Vite chips.
pub fn create_harness() -> Harness<'static, App> {
    create_harness_with(
        Some("React, TypeScript, Vite"),
        test_config(),
        MemoryClipboard::default(),
    )
}

/// Labels of the app's chips, in order.
#[allow(dead_code)]
pub fn labels(app: &App) -> Vec<String> {
    app.tokens.iter().map(|t| t.label.clone()).collect()
}
