//! Discriminated chip input actions and their dispatch onto the controller.
//!
//! The presentation layer turns raw keyboard, mouse and clipboard events into
//! [`ChipAction`] values; [`apply`] maps each one to the matching controller
//! operation and reports the side signals the host should honor.

use crate::controller::{self, CreateOutcome};
use crate::factory::TokenFactory;
use crate::token::{Token, TokenId};

/// A requested change to the token list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChipAction {
    SelectAll,
    ClearSelection,
    ToggleSelection { id: TokenId, multi_select: bool },
    RemoveSelectedOrLast { has_input_text: bool },
    /// Removal through a chip's own remove button.
    RemoveToken(TokenId),
    CreateFromText(String),
    AppendPasted(Vec<Token>),
}

/// How a `CreateFromText` action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateStatus {
    /// Blank text, nothing to do. The host may keep or clear the input.
    Empty,
    /// The factory refused the text. The host keeps the input for correction.
    Rejected,
    /// A chip was added. The host clears the input.
    Created,
}

/// The next state produced by [`apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub tokens: Vec<Token>,
    /// Focus should return to the text field.
    pub focus_input: bool,
    /// Set for `CreateFromText` only.
    pub created: Option<CreateStatus>,
    changed: bool,
}

impl Transition {
    /// Whether `tokens` differs from the list the action was applied to.
    pub fn changed(&self) -> bool {
        self.changed
    }
}

impl ChipAction {
    /// Selection-changing and deletion actions hand focus back to the input.
    pub fn returns_focus(&self) -> bool {
        matches!(
            self,
            Self::SelectAll
                | Self::ClearSelection
                | Self::ToggleSelection { .. }
                | Self::RemoveSelectedOrLast { .. }
                | Self::RemoveToken(_)
        )
    }
}

/// Applies one action to the current list.
pub fn apply(tokens: &[Token], action: ChipAction, factory: &mut dyn TokenFactory) -> Transition {
    let focus_input = action.returns_focus();
    let mut created = None;
    let next = match action {
        ChipAction::SelectAll => controller::select_all(tokens),
        ChipAction::ClearSelection => controller::clear_selection(tokens),
        ChipAction::ToggleSelection { id, multi_select } => {
            controller::toggle_selection(tokens, &id, multi_select)
        }
        ChipAction::RemoveSelectedOrLast { has_input_text } => {
            controller::remove_selected_or_last(tokens, has_input_text)
        }
        ChipAction::RemoveToken(id) => controller::remove_token(tokens, &id),
        ChipAction::CreateFromText(text) => {
            match controller::create_from_text(tokens, &text, factory) {
                CreateOutcome::Empty => {
                    created = Some(CreateStatus::Empty);
                    tokens.to_vec()
                }
                CreateOutcome::Rejected => {
                    created = Some(CreateStatus::Rejected);
                    tokens.to_vec()
                }
                CreateOutcome::Created(next) => {
                    created = Some(CreateStatus::Created);
                    next
                }
            }
        }
        ChipAction::AppendPasted(pasted) => controller::append_pasted(tokens, pasted),
    };
    let changed = next.as_slice() != tokens;
    Transition {
        tokens: next,
        focus_input,
        created,
        changed,
    }
}
