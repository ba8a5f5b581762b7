pub mod color;
pub mod config;
pub mod theme;

pub use color::HexColor;
pub use config::ChipInputConfig;
pub use theme::{ChipColors, ThemeDefinition};
