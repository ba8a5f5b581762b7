//! The chip input widget: a wrapped row of chips followed by a text field.
//!
//! The widget is controlled. It only reads the token list it is given and
//! reports what the user asked for as [`ChipAction`]s; the host applies them
//! and passes the resulting list back on the next frame.

use chip_input_core::{ChipAction, Token};
use egui::{Button, CornerRadius, Id, Response, RichText, Stroke, TextEdit, Ui, Vec2};

use crate::theme::ChipTheme;

/// Width of the text field when the row has room for it.
const INPUT_MIN_WIDTH: f32 = 140.0;

/// Label of a chip's remove button.
pub const REMOVE_LABEL: &str = "×";

/// What happened during one frame of [`ChipInput::show`].
#[derive(Debug)]
pub struct ChipInputOutput {
    /// Requested changes, in the order the user made them.
    pub actions: Vec<ChipAction>,
    /// Id of the text field, for returning focus to it.
    pub input_id: Id,
    /// Response of the text field.
    pub input: Response,
}

/// Builder for a chip input over a caller-owned token list.
pub struct ChipInput<'a> {
    id_salt: Id,
    tokens: &'a [Token],
    text: &'a mut String,
    theme: Option<&'a ChipTheme>,
    placeholder: &'a str,
    enabled: bool,
}

impl<'a> ChipInput<'a> {
    pub fn new(id_salt: impl std::hash::Hash, tokens: &'a [Token], text: &'a mut String) -> Self {
        Self {
            id_salt: Id::new(id_salt),
            tokens,
            text,
            theme: None,
            placeholder: "",
            enabled: true,
        }
    }

    pub fn theme(mut self, theme: &'a ChipTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// A disabled chip input shows its chips but accepts no interaction.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Id of the text field of the chip input created with `id_salt`.
    pub fn input_id(id_salt: impl std::hash::Hash) -> Id {
        Id::new(id_salt).with("input")
    }

    /// Shows the widget and collects the actions requested this frame.
    pub fn show(self, ui: &mut Ui) -> ChipInputOutput {
        let default_theme;
        let theme = match self.theme {
            Some(theme) => theme,
            None => {
                default_theme = ChipTheme::default();
                &default_theme
            }
        };
        let input_id = self.id_salt.with("input");
        let mut actions = Vec::new();

        let input = ui
            .horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = Vec2::new(6.0, 6.0);
                for token in self.tokens {
                    show_chip(ui, token, theme, self.enabled, &mut actions);
                }

                let width = ui.available_width().max(INPUT_MIN_WIDTH);
                let field = TextEdit::singleline(self.text)
                    .id(input_id)
                    .hint_text(self.placeholder)
                    .font(theme.font_id())
                    .background_color(theme.input_bg)
                    .desired_width(width);
                ui.add_enabled(self.enabled, field)
            })
            .inner;

        ChipInputOutput {
            actions,
            input_id,
            input,
        }
    }
}

/// Renders one chip and its remove button, recording clicks as actions.
fn show_chip(
    ui: &mut Ui,
    token: &Token,
    theme: &ChipTheme,
    enabled: bool,
    actions: &mut Vec<ChipAction>,
) {
    let interactive = enabled && !token.disabled;
    let (fill, text_color) = theme.chip_colors(token.selected, token.disabled);
    let border = if token.selected {
        theme.accent_color
    } else {
        theme.chip_border
    };

    let chip = Button::new(
        RichText::new(&token.label)
            .font(theme.font_id())
            .color(text_color),
    )
    .fill(fill)
    .stroke(Stroke::new(1.0, border))
    .corner_radius(CornerRadius::same(12))
    .selected(token.selected);

    let mut response = ui.add_enabled(interactive, chip);
    if token.value != token.label {
        response = response.on_hover_text(token.value.as_str());
    }
    if response.clicked() {
        let multi_select = ui.input(|i| i.modifiers.ctrl || i.modifiers.command || i.modifiers.shift);
        actions.push(ChipAction::ToggleSelection {
            id: token.id.clone(),
            multi_select,
        });
    }

    if interactive {
        let remove = Button::new(RichText::new(REMOVE_LABEL).color(theme.remove_button)).frame(false);
        if ui.add(remove).on_hover_text("Remove").clicked() {
            actions.push(ChipAction::RemoveToken(token.id.clone()));
        }
    }
}
