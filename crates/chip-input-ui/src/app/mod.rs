//! Demo host application owning a token list and driving one chip input.

mod clipboard;
mod shortcuts;
mod status_bar;

use std::path::PathBuf;

use eframe::egui;

use chip_input_config::ChipInputConfig;
use chip_input_core::{
    apply, codec, ChipAction, CreateStatus, IdGenerator, LabelFactory, Token, UuidIdGenerator,
};

use crate::clipboard::{ClipboardText, SystemClipboard};
use crate::theme::{ChipTheme, ThemeMode};
use crate::widget::ChipInput;

/// Id salt of the demo's chip input.
pub const CHIP_INPUT_ID: &str = "chip_input";

/// Arguments passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct StartupArgs {
    /// Initial chips, as clipboard text (comma-separated labels or a chip payload).
    pub chips: Option<String>,
    /// Config file to use instead of the default location.
    pub config_path: Option<PathBuf>,
}

/// The demo application state. It is the host: it owns the token list.
pub struct App {
    pub tokens: Vec<Token>,
    pub input_text: String,
    pub theme: ChipTheme,
    pub theme_mode: ThemeMode,
    pub placeholder: String,
    /// Last user-facing message (paste, copy, rejection).
    pub status: String,
    factory: LabelFactory<Box<dyn IdGenerator>>,
    clipboard: Option<Box<dyn ClipboardText>>,
    focus_requested: bool,
}

impl App {
    /// Creates the application with the config file and the OS clipboard.
    pub fn new(cc: &eframe::CreationContext<'_>, args: StartupArgs) -> Self {
        let config_path = args
            .config_path
            .clone()
            .unwrap_or_else(ChipInputConfig::config_path);
        let config = ChipInputConfig::load_or_create(&config_path);
        let clipboard = SystemClipboard::open().map(|c| Box::new(c) as Box<dyn ClipboardText>);
        Self::with_config(
            &cc.egui_ctx,
            config,
            &args,
            clipboard,
            Box::new(UuidIdGenerator),
        )
    }

    /// Creates the application from explicit parts.
    pub fn with_config(
        ctx: &egui::Context,
        config: ChipInputConfig,
        args: &StartupArgs,
        clipboard: Option<Box<dyn ClipboardText>>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        let mut theme_mode = ThemeMode(config.current_theme.clone());
        let resolved_name = theme_mode.resolve().to_string();

        // Resolve theme definition; fall back to System if the theme doesn't exist
        let theme_def = match config.find_theme(&resolved_name).cloned() {
            Some(def) => def,
            None => {
                tracing::warn!("Theme '{resolved_name}' not found, falling back to System");
                theme_mode = ThemeMode::default();
                let fallback_name = theme_mode.resolve().to_string();
                config
                    .find_theme(&fallback_name)
                    .cloned()
                    .unwrap_or_else(chip_input_config::theme::builtin_dark)
            }
        };
        let theme = ChipTheme::from_definition(&theme_def, config.font_size);
        Self::apply_visuals(ctx, &theme);

        let mut factory = LabelFactory::new(ids).with_max_label_len(config.max_label_len);
        let tokens = match args.chips.as_deref() {
            Some(text) => match codec::decode(text, factory.ids_mut()) {
                Ok(tokens) => tokens,
                Err(e) => {
                    tracing::warn!("Ignoring --chips: {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        tracing::info!("Starting with {} chip(s)", tokens.len());

        Self {
            tokens,
            input_text: String::new(),
            theme,
            theme_mode,
            placeholder: config.placeholder,
            status: String::new(),
            factory,
            clipboard,
            focus_requested: false,
        }
    }

    /// Applies one action to the token list and adopts the result.
    pub fn dispatch(&mut self, action: ChipAction) {
        let transition = apply(&self.tokens, action, &mut self.factory);
        match transition.created {
            Some(CreateStatus::Created) => self.input_text.clear(),
            Some(CreateStatus::Rejected) => {
                self.status = format!(
                    "Chip rejected: labels are limited to {} characters",
                    self.factory.max_label_len()
                );
            }
            Some(CreateStatus::Empty) | None => {}
        }
        // Enter makes a single-line field give up focus, so creation takes it back too.
        if transition.focus_input || transition.created.is_some() {
            self.focus_requested = true;
        }
        if transition.changed() {
            tracing::debug!("Chip list now has {} chip(s)", transition.tokens.len());
        }
        self.tokens = transition.tokens;
    }

    /// Id of the chip input's text field.
    pub fn input_id(&self) -> egui::Id {
        ChipInput::input_id(CHIP_INPUT_ID)
    }

    /// Sets light or dark visuals to match the chip theme.
    fn apply_visuals(ctx: &egui::Context, theme: &ChipTheme) {
        let mut visuals = if theme.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = theme.panel_bg;
        visuals.selection.stroke.color = theme.accent_color;
        ctx.set_visuals(visuals);
    }

    fn show_chip_input(&mut self, ui: &mut egui::Ui) {
        let output = ChipInput::new(CHIP_INPUT_ID, &self.tokens, &mut self.input_text)
            .theme(&self.theme)
            .placeholder(&self.placeholder)
            .show(ui);
        for action in output.actions {
            self.dispatch(action);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        egui::TopBottomPanel::bottom("status_bar")
            .max_height(24.0)
            .frame(
                egui::Frame::new()
                    .fill(ctx.style().visuals.extreme_bg_color)
                    .inner_margin(egui::Margin::symmetric(8, 3)),
            )
            .show(ctx, |ui| {
                self.show_status_bar(ui);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(self.theme.panel_bg)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                self.show_chip_input(ui);
            });

        if std::mem::take(&mut self.focus_requested) {
            let id = self.input_id();
            ctx.memory_mut(|m| m.request_focus(id));
        }
    }

    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}
