/// Theme definitions for the chip input and the built-in presets.
use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// Colors for chips and the adjoining text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChipColors {
    pub chip_bg: HexColor,
    pub chip_text: HexColor,
    pub chip_border: HexColor,
    pub selected_bg: HexColor,
    pub selected_text: HexColor,
    pub disabled_bg: HexColor,
    pub disabled_text: HexColor,
    pub remove_button: HexColor,
    pub input_bg: HexColor,
    pub panel_bg: HexColor,
    pub accent_color: HexColor,
}

impl Default for ChipColors {
    fn default() -> Self {
        Self {
            chip_bg: HexColor::rgb(55, 65, 81),
            chip_text: HexColor::rgb(229, 231, 235),
            chip_border: HexColor::rgb(75, 85, 99),
            selected_bg: HexColor::rgb(37, 99, 235),
            selected_text: HexColor::rgb(255, 255, 255),
            disabled_bg: HexColor::rgb(40, 44, 52),
            disabled_text: HexColor::rgb(120, 125, 135),
            remove_button: HexColor::rgb(156, 163, 175),
            input_bg: HexColor::rgb(24, 24, 27),
            panel_bg: HexColor::rgb(32, 33, 36),
            accent_color: HexColor::rgb(96, 165, 250),
        }
    }
}

/// A named, complete theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    pub name: String,
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
    #[serde(default)]
    pub chips: ChipColors,
}

fn default_dark_mode() -> bool {
    true
}

/// Built-in dark theme.
pub fn builtin_dark() -> ThemeDefinition {
    ThemeDefinition {
        name: "Dark".to_string(),
        dark_mode: true,
        chips: ChipColors::default(),
    }
}

/// Built-in light theme.
pub fn builtin_light() -> ThemeDefinition {
    ThemeDefinition {
        name: "Light".to_string(),
        dark_mode: false,
        chips: ChipColors {
            chip_bg: HexColor::rgb(229, 231, 235),
            chip_text: HexColor::rgb(31, 41, 55),
            chip_border: HexColor::rgb(209, 213, 219),
            selected_bg: HexColor::rgb(59, 130, 246),
            selected_text: HexColor::rgb(255, 255, 255),
            disabled_bg: HexColor::rgb(243, 244, 246),
            disabled_text: HexColor::rgb(156, 163, 175),
            remove_button: HexColor::rgb(107, 114, 128),
            input_bg: HexColor::rgb(255, 255, 255),
            panel_bg: HexColor::rgb(249, 250, 251),
            accent_color: HexColor::rgb(37, 99, 235),
        },
    }
}
