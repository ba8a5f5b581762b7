//! egui presentation of the chip input and a demo host application.

mod app;
pub mod clipboard;
pub mod keymap;
pub mod theme;
pub mod widget;

pub use app::{App, StartupArgs, CHIP_INPUT_ID};
pub use clipboard::{ClipboardText, MemoryClipboard, SystemClipboard};
pub use theme::{ChipTheme, ThemeMode};
pub use widget::{ChipInput, ChipInputOutput};
