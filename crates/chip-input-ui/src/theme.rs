//! Chip input theme.
//!
//! Converts the configured chip colors into egui colors and resolves the
//! "System" theme mode against the OS preference.

use egui::{Color32, FontId};
use chip_input_config::{ChipColors, HexColor, ThemeDefinition};

/// Converts a `HexColor` to egui `Color32`.
fn hex_to_color32(c: HexColor) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Resolved appearance of the chip input.
#[derive(Debug, Clone, PartialEq)]
pub struct ChipTheme {
    pub font_size: f32,
    pub dark_mode: bool,
    pub chip_bg: Color32,
    pub chip_text: Color32,
    pub chip_border: Color32,
    pub selected_bg: Color32,
    pub selected_text: Color32,
    pub disabled_bg: Color32,
    pub disabled_text: Color32,
    pub remove_button: Color32,
    pub input_bg: Color32,
    pub panel_bg: Color32,
    pub accent_color: Color32,
}

impl Default for ChipTheme {
    fn default() -> Self {
        Self::from_definition(&chip_input_config::theme::builtin_dark(), 14.0)
    }
}

impl ChipTheme {
    /// Builds a `ChipTheme` from config colors and font size.
    pub fn from_config(chips: &ChipColors, dark_mode: bool, font_size: f32) -> Self {
        Self {
            font_size,
            dark_mode,
            chip_bg: hex_to_color32(chips.chip_bg),
            chip_text: hex_to_color32(chips.chip_text),
            chip_border: hex_to_color32(chips.chip_border),
            selected_bg: hex_to_color32(chips.selected_bg),
            selected_text: hex_to_color32(chips.selected_text),
            disabled_bg: hex_to_color32(chips.disabled_bg),
            disabled_text: hex_to_color32(chips.disabled_text),
            remove_button: hex_to_color32(chips.remove_button),
            input_bg: hex_to_color32(chips.input_bg),
            panel_bg: hex_to_color32(chips.panel_bg),
            accent_color: hex_to_color32(chips.accent_color),
        }
    }

    pub fn from_definition(def: &ThemeDefinition, font_size: f32) -> Self {
        Self::from_config(&def.chips, def.dark_mode, font_size)
    }

    pub fn font_id(&self) -> FontId {
        FontId::proportional(self.font_size)
    }

    /// Fill and text colors for a chip in the given state.
    pub fn chip_colors(&self, selected: bool, disabled: bool) -> (Color32, Color32) {
        if disabled {
            (self.disabled_bg, self.disabled_text)
        } else if selected {
            (self.selected_bg, self.selected_text)
        } else {
            (self.chip_bg, self.chip_text)
        }
    }
}

/// Which theme to use.
///
/// Wraps a theme name. `"System"` follows the OS dark/light preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeMode(pub String);

impl Default for ThemeMode {
    fn default() -> Self {
        Self("System".to_string())
    }
}

impl ThemeMode {
    pub fn is_system(&self) -> bool {
        self.0 == "System"
    }

    /// Resolves "System" to "Dark" or "Light"; other names are returned as is.
    pub fn resolve(&self) -> &str {
        if self.is_system() {
            match dark_light::detect() {
                Ok(dark_light::Mode::Light) => "Light",
                _ => "Dark",
            }
        } else {
            &self.0
        }
    }
}
