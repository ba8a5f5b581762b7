//! Token list state transitions.
//!
//! Every operation takes the current list by reference and returns the next
//! list as a new value. The caller owns the authoritative list and adopts the
//! result; nothing here mutates the input or keeps state between calls.

use crate::factory::{Creation, TokenFactory};
use crate::token::{Token, TokenId};

/// Result of [`create_from_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The text was blank after trimming; the factory was not consulted.
    Empty,
    /// The factory refused the text. The list is untouched.
    Rejected,
    /// A token was appended; holds the next list.
    Created(Vec<Token>),
}

/// Selects every token, including disabled ones.
pub fn select_all(tokens: &[Token]) -> Vec<Token> {
    with_selection(tokens, true)
}

/// Deselects every token.
pub fn clear_selection(tokens: &[Token]) -> Vec<Token> {
    with_selection(tokens, false)
}

/// Inverts the target's selection.
///
/// Without `multi_select` every other token is deselected, so an unknown
/// `target` leaves nothing selected.
pub fn toggle_selection(tokens: &[Token], target: &TokenId, multi_select: bool) -> Vec<Token> {
    tokens
        .iter()
        .map(|t| {
            let mut next = t.clone();
            if &t.id == target {
                next.selected = !t.selected;
            } else if !multi_select {
                next.selected = false;
            }
            next
        })
        .collect()
}

/// Removes the selection, or the last token when nothing is selected and the
/// input field is empty.
///
/// `has_input_text` distinguishes a plain character deletion in the text
/// field from a chip deletion.
pub fn remove_selected_or_last(tokens: &[Token], has_input_text: bool) -> Vec<Token> {
    if has_selection(tokens) {
        return tokens.iter().filter(|t| !t.selected).cloned().collect();
    }
    match tokens.split_last() {
        Some((_, rest)) if !has_input_text => rest.to_vec(),
        _ => tokens.to_vec(),
    }
}

/// Removes the token with `id` unless it is disabled.
pub fn remove_token(tokens: &[Token], id: &TokenId) -> Vec<Token> {
    tokens
        .iter()
        .filter(|t| &t.id != id || t.disabled)
        .cloned()
        .collect()
}

/// Creates a token from typed text and appends it.
///
/// Blank input short-circuits before `factory` is called. On success all
/// existing tokens are deselected.
pub fn create_from_text(
    tokens: &[Token],
    raw_text: &str,
    factory: &mut dyn TokenFactory,
) -> CreateOutcome {
    let text = raw_text.trim();
    if text.is_empty() {
        return CreateOutcome::Empty;
    }
    match factory.create(text) {
        Creation::Rejected => CreateOutcome::Rejected,
        Creation::Created(token) => {
            let mut next = clear_selection(tokens);
            next.push(token);
            CreateOutcome::Created(next)
        }
    }
}

/// Appends pasted tokens in order, deselecting the existing ones.
///
/// Nothing pasted means no change at all, not even the deselection.
pub fn append_pasted(tokens: &[Token], pasted: Vec<Token>) -> Vec<Token> {
    if pasted.is_empty() {
        return tokens.to_vec();
    }
    let mut next = clear_selection(tokens);
    next.extend(pasted);
    next
}

/// Returns the selected tokens in list order.
pub fn selected_tokens(tokens: &[Token]) -> Vec<Token> {
    tokens.iter().filter(|t| t.selected).cloned().collect()
}

pub fn has_selection(tokens: &[Token]) -> bool {
    tokens.iter().any(|t| t.selected)
}

fn with_selection(tokens: &[Token], selected: bool) -> Vec<Token> {
    tokens
        .iter()
        .map(|t| Token {
            selected,
            ..t.clone()
        })
        .collect()
}
